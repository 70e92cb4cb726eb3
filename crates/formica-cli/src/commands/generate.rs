//! Write a random distance matrix file.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use formica::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// Build a random instance.
///
/// Euclidean distances between points in the unit square, or uniform
/// `[0, 1)` symmetric weights when `uniform` is set.
pub fn random_instance(nodes: usize, uniform: bool, rng: &mut ChaCha8Rng) -> Result<DistanceMatrix> {
    if nodes < 2 {
        bail!("an instance needs at least 2 nodes, got {}", nodes);
    }
    let distances = if uniform {
        DistanceMatrix::random_symmetric(nodes, rng)?
    } else {
        DistanceMatrix::from_coords(&DistanceMatrix::random_points(nodes, rng))?
    };
    Ok(distances)
}

/// Seeded generator, or OS entropy when no seed is given.
pub fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn run(output: &str, nodes: usize, seed: Option<u64>, uniform: bool) -> Result<()> {
    let kind = if uniform { "uniform" } else { "euclidean" };
    println!(
        "{} Generating {} {} instance...",
        "→".blue(),
        nodes.to_string().cyan(),
        kind
    );

    let distances = random_instance(nodes, uniform, &mut rng_from(seed))?;
    let path = Path::new(output);
    distances
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("  {} Wrote {}", "✓".green(), path.display());
    println!(
        "  Greedy baseline: {}",
        format!("{:.4}", best_greedy_cost(&distances)).yellow()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist_mat");
        run(path.to_str().unwrap(), 6, Some(1), false).unwrap();

        let loaded = DistanceMatrix::load(&path).unwrap();
        assert_eq!(loaded.dim(), 6);
    }

    #[test]
    fn tiny_instances_are_rejected() {
        assert!(random_instance(1, true, &mut rng_from(Some(0))).is_err());
    }

    #[test]
    fn same_seed_same_instance() {
        let a = random_instance(5, true, &mut rng_from(Some(9))).unwrap();
        let b = random_instance(5, true, &mut rng_from(Some(9))).unwrap();
        assert_eq!(a, b);
    }
}
