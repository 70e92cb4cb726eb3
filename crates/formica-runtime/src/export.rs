//! JSON export of colony results.
//!
//! Writes snapshots, solutions and trail lists for downstream tooling.
//! Exports are one-way; nothing here loads a colony back.

use crate::colony::{Colony, ColonySnapshot};
use formica_core::error::Result;
use formica_core::types::{Edge, Solution};
use serde::Serialize;
use std::path::Path;

/// One directed edge with its trail strength.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedEdge {
    pub a: usize,
    pub b: usize,
    pub pheromone: f64,
    pub heuristic: f64,
}

/// All non-self-loop edges with their trails, strongest first.
pub fn export_trails(colony: &Colony) -> Vec<WeightedEdge> {
    let mut trails: Vec<WeightedEdge> = colony
        .graph()
        .nodes()
        .iter()
        .flat_map(|&node| colony.graph().edges_from(node).iter().copied())
        .filter(|e| !e.is_self_loop())
        .map(|e: Edge| WeightedEdge {
            a: e.a,
            b: e.b,
            pheromone: colony.pheromones().at(e),
            heuristic: colony.heuristics().at(e),
        })
        .collect();

    trails.sort_by(|x, y| y.pheromone.total_cmp(&x.pheromone));
    trails
}

/// Serialize a snapshot as pretty JSON.
pub fn snapshot_json(snapshot: &ColonySnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Serialize a solution as pretty JSON.
pub fn solution_json(solution: &Solution) -> Result<String> {
    Ok(serde_json::to_string_pretty(solution)?)
}

/// Write the colony's snapshot to `path`.
pub fn save_snapshot(colony: &Colony, path: &Path) -> Result<()> {
    std::fs::write(path, snapshot_json(&colony.snapshot())?)?;
    Ok(())
}

/// Write a solution to `path`.
pub fn save_solution(solution: &Solution, path: &Path) -> Result<()> {
    std::fs::write(path, solution_json(solution)?)?;
    Ok(())
}
