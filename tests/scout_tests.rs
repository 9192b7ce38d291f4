//! Unit tests for the scout phase.

use bee_path::graph::{Graph, RandomGraphParams};
use bee_path::scout::Scout;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_scout_routes_are_valid() {
    let params = RandomGraphParams::default();

    for seed in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let graph = Graph::random(80, &params, &mut rng).unwrap();

        let candidates = Scout.generate(&graph, 0, 79, 50, &mut rng);
        assert!(candidates.len() <= 50);

        for candidate in &candidates {
            assert!(candidate.is_valid(&graph, 0, 79), "invalid {:?}", candidate);
            assert!(candidate.is_found());
            assert!(candidate.len() <= graph.node_count());
        }
    }
}

#[test]
fn test_scout_drops_dead_ends() {
    // 0 -> 2 is a dead end, 0 -> 1 -> 3 reaches the target
    let graph = Graph::from_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let candidates = Scout.generate(&graph, 0, 3, 200, &mut rng);

    assert!(!candidates.is_empty());
    assert!(candidates.len() < 200);
    for candidate in &candidates {
        assert_eq!(candidate.route, vec![0, 1, 3]);
        assert_eq!(candidate.distance, 2);
    }
}

#[test]
fn test_scout_disconnected_target() {
    let graph = Graph::from_edges(4, &[(0, 1, 1), (2, 3, 1)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let candidates = Scout.generate(&graph, 0, 3, 25, &mut rng);
    assert!(candidates.is_empty());
}

#[test]
fn test_scout_start_equals_end() {
    let graph = Graph::from_edges(3, &[(0, 1, 4), (1, 2, 4)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let candidates = Scout.generate(&graph, 1, 1, 3, &mut rng);
    assert_eq!(candidates.len(), 3);
    for candidate in &candidates {
        assert_eq!(candidate.route, vec![1]);
        assert_eq!(candidate.distance, 0);
    }
}

#[test]
fn test_scout_zero_count() {
    let graph = Graph::from_edges(2, &[(0, 1, 4)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert!(Scout.generate(&graph, 0, 1, 0, &mut rng).is_empty());
}

#[test]
fn test_scout_is_deterministic_for_seed() {
    let mut graph_rng = ChaCha8Rng::seed_from_u64(21);
    let graph = Graph::random(50, &RandomGraphParams::default(), &mut graph_rng).unwrap();

    let a = Scout.generate(&graph, 0, 49, 20, &mut ChaCha8Rng::seed_from_u64(9));
    let b = Scout.generate(&graph, 0, 49, 20, &mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(a, b);
}
