//! Integration tests for the board: palette and grid transitions.
//!
//! - Deleting styles remaps the grid in the same step
//! - Blending is symmetric and only applies to blending styles
//! - Evolve inherits every key and picks fairly between shared ones
//! - Resizing keeps the overlapping region
//! - JSON snapshots round-trip

use forge::{Board, ForgeConfig, ForgeError, Grid, RandomSource, XorShiftRng};
use tilecss::{ResolvedStyle, Side};

fn style(pairs: &[(&str, &str)]) -> ResolvedStyle {
    let mut style = ResolvedStyle::default();
    for (key, value) in pairs {
        style.set(*key, *value);
    }
    style
}

fn blending(pairs: &[(&str, &str)]) -> ResolvedStyle {
    let mut style = style(pairs);
    style.blend = true;
    style
}

fn small_board() -> Board {
    Board::new(ForgeConfig::default().with_dimensions(4, 4))
}

// ============================================================================
// DELETE REMAPPING
// ============================================================================

#[test]
fn test_delete_remaps_grid() {
    let mut board = small_board();
    for color in ["a", "b", "c", "d"] {
        board.save_style(style(&[("backgroundColor", color)]));
    }
    for index in 0..4 {
        board.paint(0, index, index).unwrap();
        board.paint(1, index, index).unwrap();
    }

    board.delete_styles(&[1, 3]).unwrap();

    let colors: Vec<_> = board
        .palette()
        .iter()
        .map(|s| s.get("backgroundColor").unwrap())
        .collect();
    assert_eq!(colors, vec!["a", "c"]);
    for row in 0..2 {
        assert_eq!(board.grid().get(row, 0), Some(0));
        assert_eq!(board.grid().get(row, 1), None);
        assert_eq!(board.grid().get(row, 2), Some(1));
        assert_eq!(board.grid().get(row, 3), None);
    }
    let len = board.palette().len();
    assert!(board.grid().cells().iter().flatten().all(|&i| i < len));
}

#[test]
fn test_delete_with_stale_index_is_a_no_op() {
    let mut board = small_board();
    board.save_style(style(&[]));
    board.paint(0, 0, 0).unwrap();
    let before = board.clone();

    let result = board.delete_styles(&[0, 4]);
    assert!(matches!(result, Err(ForgeError::IndexOutOfRange { index: 4, len: 1 })));
    assert_eq!(board, before);
}

#[test]
fn test_delete_everything_empties_grid() {
    let mut board = small_board();
    board.save_style(style(&[]));
    board.save_style(style(&[]));
    board.randomize_grid(&mut XorShiftRng::seeded(2)).unwrap();

    board.delete_styles(&[0, 1]).unwrap();
    assert!(board.palette().is_empty());
    assert!(board.grid().cells().iter().all(Option::is_none));
}

// ============================================================================
// BLENDING
// ============================================================================

#[test]
fn test_blend_is_symmetric() {
    let mut board = small_board();
    let index = board.save_style(blending(&[("borderRadius", "8px")]));
    board.paint(1, 1, index).unwrap();
    board.paint(1, 2, index).unwrap();
    board.paint(2, 1, index).unwrap();

    let left = board.cell_style(1, 1).unwrap();
    let right = board.cell_style(1, 2).unwrap();
    let below = board.cell_style(2, 1).unwrap();

    assert_eq!(left.get(Side::Right.border_property()), Some("none"));
    assert_eq!(right.get(Side::Left.border_property()), Some("none"));
    assert_eq!(left.get(Side::Bottom.border_property()), Some("none"));
    assert_eq!(below.get(Side::Top.border_property()), Some("none"));

    assert_eq!(left.get("borderTopLeftRadius"), None);
    assert_eq!(left.get("borderBottomRightRadius"), Some("0"));
    assert_eq!(right.get("borderRight"), None);
}

#[test]
fn test_blend_requires_same_index_not_same_style() {
    let mut board = small_board();
    let a = board.save_style(blending(&[("opacity", "1")]));
    let b = board.save_style(blending(&[("opacity", "1")]));
    board.paint(0, 0, a).unwrap();
    board.paint(0, 1, b).unwrap();

    let rendered = board.cell_style(0, 0).unwrap();
    assert_eq!(*rendered, board.palette().styles()[a]);
}

#[test]
fn test_non_blending_style_is_never_suppressed() {
    let mut board = small_board();
    let index = board.save_style(style(&[("borderTopWidth", "2px"), ("boxShadow", "1px 1px 0px 0px #000")]));
    for row in 0..4 {
        for col in 0..4 {
            board.paint(row, col, index).unwrap();
        }
    }
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(*board.cell_style(row, col).unwrap(), board.palette().styles()[index]);
        }
    }
}

#[test]
fn test_grid_edges_never_blend() {
    let mut board = Board::new(ForgeConfig::default().with_dimensions(1, 1));
    let index = board.save_style(blending(&[]));
    board.paint(0, 0, index).unwrap();
    assert_eq!(board.cell_style(0, 0).unwrap().get("boxShadow"), None);
}

#[test]
fn test_surrounded_tile_loses_every_edge_and_corner() {
    let mut board = Board::new(ForgeConfig::default().with_dimensions(3, 3));
    let index = board.save_style(blending(&[("borderRadius", "8px")]));
    for row in 0..3 {
        for col in 0..3 {
            board.paint(row, col, index).unwrap();
        }
    }
    let center = board.cell_style(1, 1).unwrap();
    for side in Side::ALL {
        assert_eq!(center.get(side.border_property()), Some("none"));
    }
    for corner in tilecss::Corner::ALL {
        assert_eq!(center.get(corner.radius_property()), Some("0"));
    }
}

// ============================================================================
// EVOLVE
// ============================================================================

#[test]
fn test_evolve_inherits_disjoint_keys() {
    let mut board = small_board();
    let a = board.save_style(style(&[("x", "1")]));
    let b = board.save_style(style(&[("y", "2")]));
    let mut rng = XorShiftRng::seeded(17);

    for _ in 0..20 {
        let child = board.evolve(a, b, &mut rng).unwrap();
        let child = board.palette().get(child).unwrap();
        assert_eq!(child.get("x"), Some("1"));
        assert_eq!(child.get("y"), Some("2"));
    }
}

#[test]
fn test_evolve_picks_fairly_between_shared_keys() {
    let mut board = small_board();
    let a = board.save_style(style(&[("x", "1")]));
    let b = board.save_style(style(&[("x", "2")]));
    let mut rng = XorShiftRng::seeded(23);

    let mut from_a = 0;
    let trials = 400;
    for _ in 0..trials {
        let child = board.evolve(a, b, &mut rng).unwrap();
        match board.palette().get(child).unwrap().get("x") {
            Some("1") => from_a += 1,
            Some("2") => {}
            other => panic!("unexpected value {other:?}"),
        }
    }
    assert!((140..260).contains(&from_a), "picked parent A {from_a} times");
}

#[test]
fn test_evolve_with_stale_index() {
    let mut board = small_board();
    board.save_style(style(&[]));
    let result = board.evolve(0, 3, &mut XorShiftRng::seeded(1));
    assert!(matches!(result, Err(ForgeError::IndexOutOfRange { index: 3, .. })));
    assert_eq!(board.palette().len(), 1);
}

// ============================================================================
// GRID OPERATIONS
// ============================================================================

#[test]
fn test_resize_preserves_overlap() {
    let mut board = Board::new(ForgeConfig::default().with_dimensions(16, 16));
    let index = board.save_style(style(&[]));
    for row in 0..16 {
        for col in 0..16 {
            board.paint(row, col, index).unwrap();
        }
    }

    assert_eq!(board.resize_grid(20, 20), (20, 20));
    for row in 0..20 {
        for col in 0..20 {
            let expected = (row < 16 && col < 16).then_some(index);
            assert_eq!(board.grid().get(row, col), expected, "({row}, {col})");
        }
    }
}

#[test]
fn test_shrink_truncates_to_top_left() {
    let mut grid = Grid::new(16, 16);
    let mut board = Board::new(ForgeConfig::default().with_dimensions(16, 16));
    board.save_style(style(&[]));
    board.paint(3, 4, 0).unwrap();
    board.paint(12, 12, 0).unwrap();
    grid.clone_from(board.grid());

    grid.resize(10, 10);
    assert_eq!(grid.dimensions(), (10, 10));
    assert_eq!(grid.get(3, 4), Some(0));
    assert_eq!(grid.count(0), 1);

    // The board clamps the same request to its minimum.
    assert_eq!(board.resize_grid(10, 10), (16, 16));
    assert_eq!(board.grid().get(12, 12), Some(0));
}

#[test]
fn test_randomize_requires_palette() {
    let mut board = small_board();
    let before = board.clone();
    assert!(matches!(
        board.randomize_grid(&mut XorShiftRng::seeded(9)),
        Err(ForgeError::EmptyPalette)
    ));
    assert_eq!(board, before);
}

#[test]
fn test_randomize_uses_valid_indices() {
    let mut board = Board::new(ForgeConfig::default());
    board.save_style(style(&[]));
    board.save_style(style(&[]));
    board.save_style(style(&[]));
    let mut rng = XorShiftRng::seeded(4);
    board.randomize_grid(&mut rng).unwrap();

    assert!(board.grid().cells().iter().flatten().all(|&i| i < 3));
    assert!(board.grid().cells().iter().any(Option::is_none));
    assert!((0..3).all(|i| board.grid().count(i) > 0));
    // the source is still usable afterwards
    let _ = rng.next_f64();
}

#[test]
fn test_clear_grid() {
    let mut board = small_board();
    board.save_style(style(&[]));
    board.paint(2, 2, 0).unwrap();
    board.clear_grid();
    assert_eq!(board.grid().dimensions(), (4, 4));
    assert_eq!(board.grid().count(0), 0);
    assert_eq!(board.palette().len(), 1);
}

// ============================================================================
// SNAPSHOTS
// ============================================================================

#[test]
fn test_json_round_trip() {
    let mut board = Board::new(ForgeConfig::default().with_dimensions(3, 5));
    board.save_style(blending(&[("backgroundColor", "#ff0000"), ("borderRadius", "4px")]));
    let mut rotated = style(&[("opacity", "0.5")]);
    rotated.transform = Some("rotate(45deg)".to_string());
    board.save_style(rotated);
    board.paint(0, 0, 0).unwrap();
    board.paint(2, 4, 1).unwrap();

    let json = board.to_json().unwrap();
    let restored = Board::from_json(&json, board.config().clone()).unwrap();

    assert_eq!(restored, board);
}

#[test]
fn test_snapshot_layout() {
    let mut board = Board::new(ForgeConfig::default().with_dimensions(1, 2));
    board.save_style(style(&[("backgroundColor", "#fff")]));
    board.paint(0, 1, 0).unwrap();

    let value: serde_json::Value = serde_json::from_str(&board.to_json().unwrap()).unwrap();
    assert_eq!(value["gridDimensions"]["rows"], 1);
    assert_eq!(value["gridDimensions"]["cols"], 2);
    assert_eq!(value["grid"], serde_json::json!([[null, 0]]));
    assert_eq!(value["palette"][0]["backgroundColor"], "#fff");
    assert_eq!(value["palette"][0]["blend"], false);
}

#[test]
fn test_import_reads_flat_styles() {
    let json = r##"{
        "palette": [{ "backgroundColor": "#abcdef", "opacity": 0.5, "blend": true }],
        "grid": [[0, null]],
        "gridDimensions": { "rows": 1, "cols": 2 }
    }"##;
    let board = Board::from_json(json, ForgeConfig::default()).unwrap();

    let style = board.palette().get(0).unwrap();
    assert!(style.blend);
    assert_eq!(style.get("backgroundColor"), Some("#abcdef"));
    assert_eq!(style.get("opacity"), Some("0.5"));
    assert_eq!(board.grid().get(0, 0), Some(0));
}

#[test]
fn test_json_round_trip_without_columns() {
    let board = Board::new(ForgeConfig::default().with_dimensions(5, 0));
    let restored = Board::from_json(&board.to_json().unwrap(), ForgeConfig::default()).unwrap();
    assert_eq!(restored.grid().dimensions(), (5, 0));
    assert_eq!(restored.grid(), board.grid());
}

#[test]
fn test_import_rejects_dangling_reference() {
    let json = r#"{
        "palette": [],
        "grid": [[0]],
        "gridDimensions": { "rows": 1, "cols": 1 }
    }"#;
    let result = Board::from_json(json, ForgeConfig::default());
    assert!(matches!(result, Err(ForgeError::InvalidSnapshot(_))));
}
