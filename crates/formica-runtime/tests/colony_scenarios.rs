//! Colony integration tests — full runs on small TSP instances.

use formica_core::error::{FormicaError, TourError};
use formica_core::graph::Graph;
use formica_core::matrix::Matrix;
use formica_core::params::EvaporationRule;
use formica_core::problem::Problem;
use formica_core::types::{Edge, Solution};
use formica_runtime::colony::{Colony, ColonyConfig, ColonyEvent};
use formica_runtime::colony_builder::ColonyBuilder;
use formica_tsp::{best_greedy_cost, DistanceMatrix, TravelingSalesman};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn four_cities() -> TravelingSalesman {
    let distances = DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, 1.0, 2.0],
        vec![2.0, 1.0, 0.0, 1.0],
        vec![3.0, 2.0, 1.0, 0.0],
    ])
    .unwrap();
    TravelingSalesman::new(distances)
}

fn twenty_cities(seed: u64) -> TravelingSalesman {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = DistanceMatrix::random_points(20, &mut rng);
    TravelingSalesman::new(DistanceMatrix::from_coords(&points).unwrap())
}

#[test]
fn four_city_run_is_no_worse_than_greedy() {
    let tsp = four_cities();
    let greedy = best_greedy_cost(tsp.distances());

    let mut colony = ColonyBuilder::new().num_agents(10).seed(1337).build(&tsp).unwrap();
    colony.run_simulation(50).unwrap();

    let best = colony.best_solution().unwrap();
    assert!(best.is_hamiltonian_cycle(4));
    let true_cost = tsp.distances().tour_cost(&best.edges);
    println!("best tour cost {true_cost}, greedy {greedy}");
    assert!(true_cost <= greedy);

    let readout = colony.get_solution().unwrap();
    assert!(readout.is_hamiltonian_cycle(4));
    assert_eq!(readout.len(), 4);
    let readout_cost = tsp.distances().tour_cost(&readout.edges);
    println!("read-out tour cost {readout_cost}");
    assert!(readout_cost <= greedy);
}

#[test]
fn same_seed_same_tours() {
    let tsp = twenty_cities(5);
    let run = || {
        let mut colony = ColonyBuilder::new().num_agents(15).seed(99).build(&tsp).unwrap();
        colony.run_simulation(10).unwrap();
        let readout = colony.get_solution().unwrap();
        (colony.best_solution().cloned(), readout, colony.pheromones().clone())
    };

    let (best_a, readout_a, trails_a) = run();
    let (best_b, readout_b, trails_b) = run();
    assert_eq!(best_a, best_b);
    assert_eq!(readout_a, readout_b);
    assert_eq!(trails_a, trails_b);
}

#[test]
fn explicit_rng_matches_seeded_config() {
    let tsp = twenty_cities(6);

    let mut seeded = ColonyBuilder::new().num_agents(4).seed(21).build(&tsp).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut threaded = Colony::from_rng(
        &tsp,
        ColonyConfig {
            num_agents: 4,
            ..ColonyConfig::default()
        },
        &mut rng,
    )
    .unwrap();

    seeded.run_simulation(3).unwrap();
    threaded.run_simulation(3).unwrap();
    assert_eq!(seeded.best_solution(), threaded.best_solution());
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_cycle_matches_sequential() {
    let tsp = twenty_cities(8);
    let run = |parallel: bool| {
        let mut colony = ColonyBuilder::new()
            .num_agents(32)
            .seed(4)
            .parallel(parallel)
            .build(&tsp)
            .unwrap();
        colony.run_simulation(8).unwrap();
        (colony.history().to_vec(), colony.pheromones().clone())
    };

    assert_eq!(run(false), run(true));
}

#[test]
fn evaporation_alone_halves_every_entry() {
    let tsp = four_cities();
    let mut colony = Colony::new(&tsp, 10).unwrap();
    let initial = colony.pheromones().clone();

    for k in 1..=12 {
        colony.evaporate();
        let expected = 0.5f64.powi(k);
        for (after, before) in colony.pheromones().values().iter().zip(initial.values()) {
            assert_eq!(*after, before * expected);
        }
    }
}

#[test]
fn deposit_touches_only_tour_edges() {
    let tsp = four_cities();
    let mut colony = Colony::new(&tsp, 3).unwrap();
    let before = colony.pheromones().clone();

    let tour = Solution::new(
        vec![Edge::new(0, 2), Edge::new(2, 1), Edge::new(1, 3), Edge::new(3, 0)],
        8.0,
    );
    colony.deposit(&tour);

    for i in 0..4 {
        for j in 0..4 {
            let delta = colony.pheromones()[(i, j)] - before[(i, j)];
            if tour.edges.contains(&Edge::new(i, j)) {
                assert!((delta - 0.125).abs() < 1e-12);
            } else {
                assert_eq!(delta, 0.0);
            }
        }
    }
}

#[test]
fn classic_decay_rule_also_converges() {
    let tsp = twenty_cities(2);
    let mut colony = ColonyBuilder::new()
        .num_agents(20)
        .rho(0.1)
        .evaporation(EvaporationRule::Decay)
        .seed(3)
        .build(&tsp)
        .unwrap();
    colony.run_simulation(15).unwrap();

    let best = colony.best_solution().unwrap();
    assert!(best.is_hamiltonian_cycle(20));
    assert!(colony.pheromones().values().iter().all(|&v| v >= 0.0));
}

#[test]
fn disconnected_graph_fails_with_no_feasible_tour() {
    struct TwoIslands;

    impl Problem for TwoIslands {
        fn construct_graph(&self) -> Graph {
            let mut graph = Graph::with_nodes(4);
            graph.add_undirected_edge(0, 1);
            graph.add_undirected_edge(2, 3);
            graph
        }

        fn init_pheromones(&self, _: usize) -> Matrix {
            Matrix::filled(4, 1.0)
        }

        fn init_heuristics(&self) -> Matrix {
            Matrix::filled(4, 1.0)
        }
    }

    let mut colony = ColonyBuilder::new().num_agents(2).seed(0).build(&TwoIslands).unwrap();
    let err = colony.run_simulation(1).unwrap_err();
    assert!(matches!(err, FormicaError::Tour(TourError::NoFeasibleTour { .. })));
}

#[test]
fn events_report_progress() {
    let tsp = twenty_cities(12);
    let mut colony = ColonyBuilder::new().num_agents(10).seed(12).build(&tsp).unwrap();
    let events = colony.run_simulation(5).unwrap();

    assert_eq!(events.len(), 5);
    for (i, iteration_events) in events.iter().enumerate() {
        let complete = iteration_events
            .iter()
            .filter(|e| matches!(e, ColonyEvent::IterationComplete { iteration, .. } if *iteration == i as u64))
            .count();
        assert_eq!(complete, 1);
    }
    assert!(colony
        .event_history()
        .iter()
        .any(|(_, e)| matches!(e, ColonyEvent::NewBest { .. })));
}
