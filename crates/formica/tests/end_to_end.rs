//! End-to-end runs through the facade prelude.

use formica::prelude::*;
use formica::runtime::metrics;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn twenty_random_points_converge() {
    let mut rng = ChaCha8Rng::seed_from_u64(1337);
    let points = DistanceMatrix::random_points(20, &mut rng);
    let tsp = TravelingSalesman::new(DistanceMatrix::from_coords(&points).unwrap());

    let mut colony = ColonyBuilder::new().num_agents(50).seed(1337).build(&tsp).unwrap();
    let before = metrics::compute(&colony);
    colony.run_simulation(30).unwrap();
    let after = metrics::compute(&colony);

    let best = colony.best_solution().cloned().unwrap();
    assert!(best.is_hamiltonian_cycle(20));
    for pair in colony.history().windows(2) {
        assert!(pair[1] <= pair[0]);
    }

    assert_eq!(before.branching_factor, 19.0);
    assert!(after.branching_factor < before.branching_factor);

    let convergence = after.convergence.unwrap();
    assert_eq!(convergence.iterations, 30);
    assert!(convergence.final_best <= convergence.initial_best);

    let stats = colony.stats();
    assert_eq!(stats.iteration, 30);
    assert_eq!(stats.nodes, 20);
    assert_eq!(stats.edges, 400);

    let tour = colony.get_solution().unwrap();
    assert!(tour.is_hamiltonian_cycle(20));
    println!("best {:.4}, read-out {:.4}", best.cost, tour.cost);
}

#[test]
fn loaded_matrix_solves_like_generated_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let distances = DistanceMatrix::random_symmetric(8, &mut rng).unwrap();
    let reparsed = DistanceMatrix::parse(&distances.to_text()).unwrap();

    let run = |d: DistanceMatrix| {
        let mut colony = ColonyBuilder::new()
            .num_agents(6)
            .seed(8)
            .build(&TravelingSalesman::new(d))
            .unwrap();
        colony.run_simulation(5).unwrap();
        colony.best_solution().cloned()
    };

    assert_eq!(run(distances), run(reparsed));
}

#[test]
fn bad_matrix_text_is_an_input_error() {
    let err = DistanceMatrix::parse("0 1\n1 zero\n").unwrap_err();
    assert!(matches!(err, FormicaError::Input(InputError::NonNumeric { line: 2, .. })));
    assert!(err.to_string().contains("zero"));
}
