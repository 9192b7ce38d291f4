//! Integration tests for the full bee search.

use bee_path::graph::{Graph, RandomGraphParams};
use bee_path::{BeeAlgorithm, BeeError, Candidate, Config, SearchState, TerminationReason, NO_EDGE};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Direct edge 0 -> 3 costs 10, the detour 0 -> 1 -> 2 -> 3 costs 7.
fn create_detour_graph() -> Graph {
    Graph::from_edges(4, &[(0, 3, 10), (0, 1, 3), (1, 2, 2), (2, 3, 2)]).unwrap()
}

fn create_random_graph(n: usize, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Graph::random(n, &RandomGraphParams::default(), &mut rng).unwrap()
}

/// Exact shortest distance through petgraph, for comparison.
fn shortest_distance(graph: &Graph, start: usize, end: usize) -> Option<i64> {
    let mut pg = UnGraph::<(), i64>::new_undirected();
    let nodes: Vec<NodeIndex> = (0..graph.node_count()).map(|_| pg.add_node(())).collect();
    for i in 0..graph.node_count() {
        for &j in graph.neighbors(i) {
            if i < j {
                pg.add_edge(nodes[i], nodes[j], graph.weight(i, j));
            }
        }
    }

    let costs = dijkstra(&pg, nodes[start], Some(nodes[end]), |e| *e.weight());
    costs.get(&nodes[end]).copied()
}

#[test]
fn test_converges_to_detour() {
    let config = Config::new()
        .with_colony_size(10)
        .with_forage_intensity(45)
        .with_seed(42);

    let mut algorithm = BeeAlgorithm::new(create_detour_graph(), config);
    let best = algorithm.run(0, 3).unwrap().clone();

    assert_eq!(best.route, vec![0, 1, 2, 3]);
    assert_eq!(best.distance, 7);
    assert_eq!(algorithm.state, SearchState::Terminated);
    assert_eq!(algorithm.termination, Some(TerminationReason::Stagnation));
}

#[test]
fn test_disconnected_endpoints() {
    let graph = Graph::from_edges(4, &[(0, 1, 1), (2, 3, 1)]).unwrap();
    let config = Config::new().with_stagnation_threshold(100).with_seed(1);

    let mut algorithm = BeeAlgorithm::new(graph, config);
    let best = algorithm.run(0, 3).unwrap();

    assert_eq!(*best, Candidate::not_found());
    assert!(best.route.is_empty());
    assert_eq!(best.distance, NO_EDGE);
    assert!(!best.is_found());

    // Every iteration fails to improve, so the run lasts exactly the threshold
    assert_eq!(algorithm.iterations, 100);
    assert!(algorithm.improvements.is_empty());
}

#[test]
fn test_start_equals_end() {
    let config = Config::new().with_stagnation_threshold(5).with_seed(3);
    let mut algorithm = BeeAlgorithm::new(create_detour_graph(), config);

    let best = algorithm.run(2, 2).unwrap();

    assert_eq!(best.route, vec![2]);
    assert_eq!(best.distance, 0);
    assert!(best.is_found());
    assert_eq!(algorithm.iterations, 6);
}

#[test]
fn test_out_of_range_endpoints() {
    let mut algorithm = BeeAlgorithm::new(create_detour_graph(), Config::new().with_seed(1));

    assert_eq!(
        algorithm.run(0, 4).err(),
        Some(BeeError::NodeOutOfRange {
            node: 4,
            node_count: 4
        })
    );
    assert_eq!(
        algorithm.run(9, 0).err(),
        Some(BeeError::NodeOutOfRange {
            node: 9,
            node_count: 4
        })
    );
    assert_eq!(algorithm.iterations, 0);
}

#[test]
fn test_stagnation_termination() {
    let threshold = 30;
    let config = Config::new()
        .with_stagnation_threshold(threshold)
        .with_seed(8);

    let mut algorithm = BeeAlgorithm::new(create_random_graph(120, 8), config);
    algorithm.run(0, 119).unwrap();

    assert_eq!(algorithm.iterations_without_improvement, threshold);
    assert_eq!(algorithm.termination, Some(TerminationReason::Stagnation));

    // The last improvement happened exactly `threshold` iterations before the end
    if let Some(&(last, _)) = algorithm.improvements.last() {
        assert_eq!(algorithm.iterations - last, threshold);
    } else {
        assert_eq!(algorithm.iterations, threshold);
    }
}

#[test]
fn test_zero_stagnation_threshold() {
    let config = Config::new().with_stagnation_threshold(0).with_seed(8);
    let mut algorithm = BeeAlgorithm::new(create_detour_graph(), config);

    let best = algorithm.run(0, 3).unwrap();

    assert!(!best.is_found());
    assert_eq!(algorithm.iterations, 0);
}

#[test]
fn test_iteration_limit() {
    let config = Config::new()
        .with_stagnation_threshold(u32::MAX)
        .with_max_iterations(5)
        .with_seed(2);

    let mut algorithm = BeeAlgorithm::new(create_random_graph(100, 2), config);
    algorithm.run(0, 99).unwrap();

    assert_eq!(algorithm.iterations, 5);
    assert_eq!(algorithm.termination, Some(TerminationReason::IterationLimit));
}

#[test]
fn test_time_limit() {
    let time_limit = Duration::from_millis(100);
    let config = Config::new()
        .with_stagnation_threshold(u32::MAX)
        .with_time_limit(time_limit)
        .with_seed(4);

    let mut algorithm = BeeAlgorithm::new(create_random_graph(150, 4), config);
    algorithm.run(0, 149).unwrap();

    assert_eq!(algorithm.termination, Some(TerminationReason::TimeLimit));
    assert!(algorithm.run_time >= time_limit);
}

#[test]
fn test_deterministic_with_seed() {
    let graph = create_random_graph(150, 17);
    let config = Config::new().with_stagnation_threshold(40).with_seed(1234);

    let mut first = BeeAlgorithm::new(graph.clone(), config.clone());
    let mut second = BeeAlgorithm::new(graph, config);

    let a = first.run(0, 149).unwrap().clone();
    let b = second.run(0, 149).unwrap().clone();

    assert_eq!(a, b);
    assert_eq!(first.iterations, second.iterations);
    assert_eq!(first.improvements, second.improvements);

    // Rerunning the same search replays it
    let c = first.run(0, 149).unwrap().clone();
    assert_eq!(a, c);
}

#[test]
fn test_generated_seed_is_recorded() {
    let graph = create_random_graph(60, 5);

    let mut original = BeeAlgorithm::new(graph.clone(), Config::new().with_stagnation_threshold(20));
    let a = original.run(0, 59).unwrap().clone();

    let replay_config = Config::new()
        .with_stagnation_threshold(20)
        .with_seed(original.seed);
    let mut replay = BeeAlgorithm::new(graph, replay_config);
    let b = replay.run(0, 59).unwrap().clone();

    assert_eq!(a, b);
}

#[test]
fn test_never_beats_exact_shortest_path() {
    for seed in 0..5 {
        let graph = create_random_graph(100, seed);
        let config = Config::new().with_stagnation_threshold(30).with_seed(seed);

        let mut algorithm = BeeAlgorithm::new(graph.clone(), config);
        let best = algorithm.run(0, 99).unwrap();

        match shortest_distance(&graph, 0, 99) {
            Some(optimum) => {
                if best.is_found() {
                    assert!(best.distance >= optimum);
                    assert!(best.is_valid(&graph, 0, 99));
                }
            }
            None => assert!(!best.is_found()),
        }
    }
}

#[test]
fn test_improvements_strictly_decrease() {
    let config = Config::new().with_stagnation_threshold(50).with_seed(99);
    let mut algorithm = BeeAlgorithm::new(create_random_graph(200, 99), config);
    algorithm.run(0, 199).unwrap();

    for pair in algorithm.improvements.windows(2) {
        assert!(pair[0].0 < pair[1].0);
        assert!(pair[0].1 > pair[1].1);
    }
    if let Some(&(_, distance)) = algorithm.improvements.last() {
        assert_eq!(distance, algorithm.best.distance);
    }
}

#[test]
fn test_seed_change_applies_on_next_run() {
    let graph = create_random_graph(80, 6);
    let config = Config::new().with_stagnation_threshold(20).with_seed(1);

    let mut algorithm = BeeAlgorithm::new(graph.clone(), config.clone());
    algorithm.config.seed = Some(2);
    let changed = algorithm.run(0, 79).unwrap().clone();
    assert_eq!(algorithm.seed, 2);

    let mut fresh = BeeAlgorithm::new(graph, config.with_seed(2));
    let expected = fresh.run(0, 79).unwrap().clone();

    assert_eq!(changed, expected);
    assert_eq!(algorithm.improvements, fresh.improvements);
}
