//! Catalog tests - shape matrices and the rotation law

use blockfall::core::{pick_random, spawn_shape, SimpleRng};
use blockfall::types::PieceKind;

#[test]
fn test_catalog_shapes_match_contract() {
    // (kind, expected filled cells in row-major order)
    let expectations: [(PieceKind, &[(i8, i8)]); 7] = [
        (PieceKind::I, &[(0, 0), (1, 0), (2, 0), (3, 0)]),
        (PieceKind::T, &[(0, 0), (1, 0), (2, 0), (1, 1)]),
        (PieceKind::L, &[(0, 0), (1, 0), (2, 0), (0, 1)]),
        (PieceKind::J, &[(0, 0), (1, 0), (2, 0), (2, 1)]),
        (PieceKind::O, &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        (PieceKind::Z, &[(0, 0), (1, 0), (1, 1), (2, 1)]),
        (PieceKind::S, &[(1, 0), (2, 0), (0, 1), (1, 1)]),
    ];

    for (kind, cells) in expectations {
        let shape = spawn_shape(kind);
        let filled: Vec<(i8, i8)> = shape.filled().collect();
        assert_eq!(filled, cells, "shape mismatch for {:?}", kind);
    }
}

#[test]
fn test_every_shape_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(spawn_shape(kind).filled().count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_rotation_four_cycle_for_all_shapes() {
    for kind in PieceKind::ALL {
        let original = spawn_shape(kind);
        let mut rotated = original.clone();
        for _ in 0..4 {
            rotated = rotated.rotate_cw();
        }
        assert_eq!(original, rotated, "4x rotation is identity for {:?}", kind);
    }
}

#[test]
fn test_rectangular_i_piece_cycles_through_two_states() {
    let flat = spawn_shape(PieceKind::I);
    let tall = flat.rotate_cw();

    assert_eq!((flat.width(), flat.height()), (4, 1));
    assert_eq!((tall.width(), tall.height()), (1, 4));
    assert_eq!(flat, tall.rotate_cw());
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let rotated = shape.rotate_cw();
        assert_eq!(rotated.width(), shape.height());
        assert_eq!(rotated.height(), shape.width());
    }
}

#[test]
fn test_pick_random_is_deterministic_per_seed() {
    let mut a = SimpleRng::new(777);
    let mut b = SimpleRng::new(777);
    for _ in 0..50 {
        assert_eq!(pick_random(&mut a), pick_random(&mut b));
    }
}

#[test]
fn test_pick_random_draws_every_kind() {
    let mut rng = SimpleRng::new(42);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let kind = pick_random(&mut rng);
        let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
