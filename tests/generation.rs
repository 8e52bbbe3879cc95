//! Generation tests: RNG, configuration, matrix pipeline.

use graphwalk::rng::Lcg;
use graphwalk::types::{GraphConfig, Matrix, WalkError};
use graphwalk::GraphGenerator;

use rand::Rng;

// ==================== RNG Tests ====================

#[test]
fn test_rng_known_sequence() {
    let mut rng = Lcg::new(3307);
    let expected = [
        0.6986871436238289,
        0.4744112202897668,
        1.988822465762496,
        0.5674163764342666,
        1.657883394509554,
        0.2736535342410207,
    ];
    for &value in &expected {
        assert!((rng.next() - value).abs() < 1e-15);
    }
}

#[test]
fn test_rng_reproducible() {
    let mut a = Lcg::new(42);
    let mut b = Lcg::new(42);
    for _ in 0..1000 {
        assert_eq!(a.next().to_bits(), b.next().to_bits());
    }
}

#[test]
fn test_rng_range() {
    let mut rng = Lcg::new(7);
    for _ in 0..10_000 {
        let value = rng.next();
        assert!((0.0..2.0).contains(&value));
    }
}

#[test]
fn test_rng_seed_reduced_mod_modulus() {
    let mut a = Lcg::new(5);
    let mut b = Lcg::new(5 + (1 << 31));
    assert_eq!(a.next().to_bits(), b.next().to_bits());
}

// ==================== Config Tests ====================

#[test]
fn test_default_config_derived_values() {
    let config = GraphConfig::default();
    assert_eq!(config.seed, 3307);
    assert_eq!(config.vertex_count(), 10);
    assert!((config.density_factor() - 0.915).abs() < 1e-12);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_nonpositive_vertex_count() {
    let config = GraphConfig {
        vertex_offset: -10,
        ..GraphConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(WalkError::InvalidConfig(_))
    ));
    assert!(GraphGenerator::new(config).is_err());
}

#[test]
fn test_config_rejects_degenerate_density() {
    let config = GraphConfig {
        density_a: 100,
        ..GraphConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(WalkError::InvalidConfig(_))
    ));
}

#[test]
fn test_config_single_vertex_is_valid() {
    let config = GraphConfig {
        vertex_offset: -9,
        ..GraphConfig::default()
    };
    assert!(config.validate().is_ok());
    let graph = GraphGenerator::new(config).unwrap().generate();
    assert_eq!(graph.vertex_count(), 1);
}

// ==================== Matrix Tests ====================

#[test]
fn test_matrix_from_rows_rejects_ragged_input() {
    let result = Matrix::from_rows(vec![vec![0, 1], vec![1]]);
    assert!(matches!(result, Err(WalkError::NotSquare { .. })));
}

#[test]
fn test_matrix_row_access() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(m.row(0), &[1, 2]);
    assert_eq!(m.row(1), &[3, 4]);
    assert_eq!(m.get(1, 0), 3);
}

#[test]
fn test_matrix_display_layout() {
    let m = Matrix::from_rows(vec![vec![0, 10], vec![10, 0]]).unwrap();
    assert_eq!(m.to_string(), "0 10\n10 0");
}

#[test]
fn test_matrix_symmetry_check() {
    let sym = Matrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
    assert!(sym.is_symmetric());
    let asym = Matrix::from_rows(vec![vec![0, 5], vec![6, 0]]).unwrap();
    assert!(!asym.is_symmetric());
}

// ==================== Generator Tests ====================

#[test]
fn test_matrices_symmetric_for_many_seeds() {
    let mut seeds = rand::thread_rng();
    for _ in 0..50 {
        let config = GraphConfig {
            seed: seeds.gen_range(0u64..1 << 31),
            ..GraphConfig::default()
        };
        let graph = GraphGenerator::new(config).unwrap().generate();
        assert!(graph.adjacency().is_symmetric());
        assert!(graph.weights().is_symmetric());
    }
}

#[test]
fn test_weight_implies_edge() {
    let mut seeds = rand::thread_rng();
    for _ in 0..50 {
        let config = GraphConfig {
            seed: seeds.gen_range(0u64..1 << 31),
            ..GraphConfig::default()
        };
        let graph = GraphGenerator::new(config).unwrap().generate();
        let n = graph.vertex_count();
        for i in 0..n {
            for j in 0..n {
                if graph.weight(i, j) > 0 {
                    assert!(graph.has_edge(i, j));
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_graph() {
    let config = GraphConfig::default();
    let a = GraphGenerator::new(config).unwrap().generate();
    let b = GraphGenerator::new(config).unwrap().generate();
    assert_eq!(a.adjacency().to_rows(), b.adjacency().to_rows());
    assert_eq!(a.weights().to_rows(), b.weights().to_rows());
}

#[test]
fn test_different_seed_different_graph() {
    let a = GraphGenerator::new(GraphConfig::default()).unwrap().generate();
    let b = GraphGenerator::new(GraphConfig {
        seed: 3308,
        ..GraphConfig::default()
    })
    .unwrap()
    .generate();
    assert_ne!(a.adjacency().to_rows(), b.adjacency().to_rows());
}

#[test]
fn test_golden_adjacency_matrix() {
    let graph = GraphGenerator::new(GraphConfig::default())
        .unwrap()
        .generate();
    let expected = vec![
        vec![0, 0, 1, 1, 1, 1, 0, 0, 1, 1],
        vec![0, 0, 1, 1, 1, 1, 0, 0, 0, 1],
        vec![1, 1, 0, 1, 1, 0, 0, 1, 1, 1],
        vec![1, 1, 1, 0, 1, 1, 1, 1, 1, 0],
        vec![1, 1, 1, 1, 0, 0, 1, 1, 1, 1],
        vec![1, 1, 0, 1, 0, 1, 1, 0, 1, 1],
        vec![0, 0, 0, 1, 1, 1, 0, 0, 1, 1],
        vec![0, 0, 1, 1, 1, 0, 0, 1, 0, 1],
        vec![1, 0, 1, 1, 1, 1, 1, 0, 1, 1],
        vec![1, 1, 1, 0, 1, 1, 1, 1, 1, 0],
    ];
    assert_eq!(graph.adjacency().to_rows(), expected);
}

#[test]
fn test_golden_weight_matrix() {
    let graph = GraphGenerator::new(GraphConfig::default())
        .unwrap()
        .generate();
    let expected = vec![
        vec![0, 0, 52, 69, 128, 79, 0, 0, 74, 33],
        vec![0, 0, 31, 150, 86, 31, 0, 0, 0, 100],
        vec![52, 31, 0, 77, 43, 0, 0, 90, 58, 177],
        vec![69, 150, 77, 0, 52, 13, 158, 164, 166, 0],
        vec![128, 86, 43, 52, 0, 0, 49, 170, 20, 9],
        vec![79, 31, 0, 13, 0, 55, 98, 0, 161, 184],
        vec![0, 0, 0, 158, 49, 98, 0, 0, 195, 62],
        vec![0, 0, 90, 164, 170, 0, 0, 115, 0, 77],
        vec![74, 0, 58, 166, 20, 161, 195, 0, 121, 53],
        vec![33, 100, 177, 0, 9, 184, 62, 77, 53, 0],
    ];
    assert_eq!(graph.weights().to_rows(), expected);
}

#[test]
fn test_golden_graph_self_loops() {
    let graph = GraphGenerator::new(GraphConfig::default())
        .unwrap()
        .generate();
    assert_eq!(graph.self_loop_count(), 3);
    assert!(graph.has_edge(5, 5));
    assert!(graph.has_edge(7, 7));
    assert!(graph.has_edge(8, 8));
}
