//! ACO tuning parameters shared by agents and the colony.

use crate::error::{FormicaError, Result};
use serde::{Deserialize, Serialize};

/// How pheromone trails shrink at the end of every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaporationRule {
    /// `pheromone *= rho`: rho is the fraction retained (0.5 halves every trail).
    #[default]
    Retain,
    /// `pheromone *= 1 - rho`: rho is the fraction lost, as in the ACO literature.
    Decay,
}

impl EvaporationRule {
    /// The factor every trail is multiplied by for a given `rho`.
    pub fn factor(self, rho: f64) -> f64 {
        match self {
            EvaporationRule::Retain => rho,
            EvaporationRule::Decay => 1.0 - rho,
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "retain" | "literal" => Some(Self::Retain),
            "decay" | "classic" => Some(Self::Decay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Decay => "decay",
        }
    }
}

/// Pheromone-vs-heuristic trade-off and evaporation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcoParams {
    /// Pheromone exponent α (default: 1.0).
    pub alpha: f64,
    /// Heuristic exponent β (default: 3.0).
    pub beta: f64,
    /// Evaporation parameter ρ (default: 0.5).
    pub rho: f64,
    /// How ρ is applied (default: retain).
    #[serde(default)]
    pub evaporation: EvaporationRule,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 3.0,
            rho: 0.5,
            evaporation: EvaporationRule::Retain,
        }
    }
}

impl AcoParams {
    /// Score of moving along an edge: `τ^α · η^β`.
    pub fn score(&self, pheromone: f64, heuristic: f64) -> f64 {
        pheromone.powf(self.alpha) * heuristic.powf(self.beta)
    }

    /// Multiplier applied to every trail during evaporation.
    pub fn evaporation_factor(&self) -> f64 {
        self.evaporation.factor(self.rho)
    }

    /// Check every parameter is finite and in range.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(FormicaError::out_of_range("alpha", self.alpha, 0.0, f64::MAX));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(FormicaError::out_of_range("beta", self.beta, 0.0, f64::MAX));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(FormicaError::out_of_range("rho", self.rho, 0.0, 1.0));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_alpha_one_beta_three_rho_half() {
        let params = AcoParams::default();
        assert_eq!(params.alpha, 1.0);
        assert_eq!(params.beta, 3.0);
        assert_eq!(params.rho, 0.5);
        assert_eq!(params.evaporation, EvaporationRule::Retain);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn score_weights_pheromone_and_heuristic() {
        let params = AcoParams::default();
        assert!((params.score(2.0, 0.5) - 0.25).abs() < 1e-12);
        assert_eq!(params.score(0.0, 10.0), 0.0);
    }

    #[test]
    fn evaporation_rules_differ_in_factor() {
        let mut params = AcoParams { rho: 0.2, ..AcoParams::default() };
        assert!((params.evaporation_factor() - 0.2).abs() < 1e-12);
        params.evaporation = EvaporationRule::Decay;
        assert!((params.evaporation_factor() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let bad_rho = AcoParams { rho: 1.5, ..AcoParams::default() };
        assert!(bad_rho.validate().is_err());
        let bad_alpha = AcoParams { alpha: -1.0, ..AcoParams::default() };
        assert!(bad_alpha.validate().is_err());
        let bad_beta = AcoParams { beta: f64::NAN, ..AcoParams::default() };
        assert!(bad_beta.validate().is_err());
        let nan_rho = AcoParams { rho: f64::NAN, ..AcoParams::default() };
        assert!(nan_rho.validate().is_err());
    }

    #[test]
    fn evaporation_rule_parsing() {
        assert_eq!(EvaporationRule::parse("Retain"), Some(EvaporationRule::Retain));
        assert_eq!(EvaporationRule::parse("decay"), Some(EvaporationRule::Decay));
        assert_eq!(EvaporationRule::parse("other"), None);
        assert_eq!(EvaporationRule::Decay.as_str(), "decay");
    }
}
