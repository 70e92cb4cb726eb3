//! Property-based tests for formica-tsp.
//!
//! Uses proptest to verify invariants across many random instances.

use formica_tsp::prelude::*;
use proptest::prelude::*;

/// Generate random coordinates for an instance with 2-20 cities.
fn random_coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
    (2usize..20).prop_flat_map(|n| prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_greedy_tour_is_hamiltonian(coords in random_coords(), start in 0usize..20) {
        let distances = DistanceMatrix::from_coords(&coords).unwrap();
        let start = start % distances.dim();
        let tour = nearest_neighbor_tour(&distances, start);

        prop_assert!(tour.is_hamiltonian_cycle(distances.dim()));
        prop_assert_eq!(tour.edges[0].a, start);
        prop_assert!((tour.cost - distances.tour_cost(&tour.edges)).abs() < 1e-9);
    }

    #[test]
    fn prop_best_greedy_beats_every_start(coords in random_coords()) {
        let distances = DistanceMatrix::from_coords(&coords).unwrap();
        let best = best_greedy_cost(&distances);
        for start in 0..distances.dim() {
            prop_assert!(best <= greedy_cost(&distances, start));
        }
    }

    #[test]
    fn prop_heuristic_recovers_distance(coords in random_coords()) {
        let tsp = TravelingSalesman::new(DistanceMatrix::from_coords(&coords).unwrap());
        let heuristics = tsp.init_heuristics();
        let n = tsp.node_count();
        for i in 0..n {
            for j in 0..n {
                let recovered = 1.0 / heuristics[(i, j)] - HEURISTIC_EPSILON;
                prop_assert!((recovered - tsp.distances().distance(i, j)).abs() < 1e-6);
            }
        }
    }
}
