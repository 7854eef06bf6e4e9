//! Reference engine behaviour through the engine port.

use proptest::prelude::*;

use life_view::core::{SimulationEngine, Universe};
use life_view::types::Dimensions;

#[test]
fn glider_translates_diagonally_after_four_generations() {
    let mut u = Universe::from_rows(&[
        ".#......",
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
    ])
    .unwrap();
    for _ in 0..4 {
        u.step().unwrap();
    }

    let expected = Universe::from_rows(&[
        "........",
        "..#.....",
        "...#....",
        ".###....",
        "........",
        "........",
    ])
    .unwrap();
    assert_eq!(u.cells(), expected.cells());
}

#[test]
fn view_reflects_latest_state() {
    let mut u = Universe::empty(3, 3);
    assert_eq!(u.cell_state_view().alive_count(), 0);
    u.toggle(1, 1).unwrap();
    let view = u.cell_state_view();
    assert_eq!(view.dimensions(), Dimensions::new(3, 3));
    assert_eq!(view.as_bytes(), &[0, 0, 0, 0, 1, 0, 0, 0, 0]);
}

#[test]
fn lonely_cell_dies() {
    let mut u = Universe::empty(5, 5);
    u.toggle(2, 2).unwrap();
    u.step().unwrap();
    assert_eq!(u.cell_state_view().alive_count(), 0);
}

proptest! {
    #[test]
    fn toggle_has_hamming_distance_one(
        w in 1u32..40,
        h in 1u32..40,
        r in any::<u32>(),
        c in any::<u32>(),
        warmup in 0usize..3,
    ) {
        let mut u = Universe::with_size(w, h);
        for _ in 0..warmup {
            u.step().unwrap();
        }
        let (row, col) = (r % h, c % w);
        let before = u.cells().to_vec();
        u.toggle(row, col).unwrap();

        let changed: Vec<usize> = before
            .iter()
            .zip(u.cells())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect();
        prop_assert_eq!(changed, vec![(row * w + col) as usize]);
    }

    #[test]
    fn toggle_twice_restores_state(w in 1u32..30, h in 1u32..30, r in any::<u32>(), c in any::<u32>()) {
        let mut u = Universe::with_size(w, h);
        let before = u.cells().to_vec();
        u.toggle(r % h, c % w).unwrap();
        u.toggle(r % h, c % w).unwrap();
        prop_assert_eq!(u.cells(), &before[..]);
    }
}
