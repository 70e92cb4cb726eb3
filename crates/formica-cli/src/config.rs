//! Configuration management for Formica CLI.

use anyhow::{Context, Result};
use formica::prelude::{AcoParams, ColonyConfig, EvaporationRule};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "formica.toml";

/// Formica project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub colony: ColonySection,
    #[serde(default)]
    pub problem: ProblemSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonySection {
    #[serde(default = "default_agents")]
    pub agents: usize,
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
    #[serde(default)]
    pub evaporation: EvaporationRule,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSection {
    /// Node count of generated instances.
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    /// Distance matrix file; a random instance is generated when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<PathBuf>,
    /// Start node of the greedy tour that seeds the trails.
    #[serde(default)]
    pub greedy_start: usize,
}

// Default value functions
fn default_agents() -> usize { 10 }
fn default_iterations() -> u64 { 100 }
fn default_alpha() -> f64 { 1.0 }
fn default_beta() -> f64 { 3.0 }
fn default_rho() -> f64 { 0.5 }
fn default_nodes() -> usize { 20 }

impl Default for ColonySection {
    fn default() -> Self {
        Self {
            agents: default_agents(),
            iterations: default_iterations(),
            alpha: default_alpha(),
            beta: default_beta(),
            rho: default_rho(),
            evaporation: EvaporationRule::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl Default for ProblemSection {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            matrix: None,
            greedy_start: 0,
        }
    }
}

impl ColonySection {
    /// The engine configuration described by this section.
    pub fn to_colony_config(&self) -> ColonyConfig {
        ColonyConfig {
            params: AcoParams {
                alpha: self.alpha,
                beta: self.beta,
                rho: self.rho,
                evaporation: self.evaporation,
            },
            num_agents: self.agents,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

impl Config {
    /// Load config from formica.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Render as a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Find formica.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.colony.agents, 10);
        assert_eq!(config.colony.iterations, 100);
        assert_eq!(config.colony.rho, 0.5);
        assert_eq!(config.colony.evaporation, EvaporationRule::Retain);
        assert_eq!(config.problem.nodes, 20);
        assert!(config.problem.matrix.is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = r#"
            [colony]
            agents = 200
            evaporation = "decay"
            seed = 7

            [problem]
            matrix = "dist_mat"
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.colony.agents, 200);
        assert_eq!(config.colony.beta, 3.0);
        assert_eq!(config.colony.evaporation, EvaporationRule::Decay);
        assert_eq!(config.colony.seed, Some(7));
        assert_eq!(config.problem.matrix, Some(PathBuf::from("dist_mat")));

        let colony = config.colony.to_colony_config();
        assert_eq!(colony.num_agents, 200);
        assert_eq!(colony.params.evaporation, EvaporationRule::Decay);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.colony.iterations = 42;
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.colony.iterations, 42);
        assert!(loaded.colony.seed.is_none());
    }
}
