//! Integration tests for the editing session.

use forge::{EditorSession, ForgeConfig, ForgeError, XorShiftRng};
use tilecss::{ResolvedStyle, Value};

fn session() -> EditorSession<XorShiftRng> {
    EditorSession::with_rng(ForgeConfig::default(), XorShiftRng::seeded(2024))
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

#[test]
fn test_instance_ids_are_unique_per_addition() {
    let mut session = session();
    let first = session.add_attribute("borderTop").unwrap().instance_id.clone();
    let second = session.add_attribute("borderTop").unwrap().instance_id.clone();
    assert_eq!(first, "attr-0");
    assert_eq!(second, "attr-1");
}

#[test]
fn test_unique_attribute_cannot_be_added_twice() {
    let mut session = session();
    session.add_attribute("opacity").unwrap();
    assert!(matches!(
        session.add_attribute("opacity"),
        Err(ForgeError::DuplicateAttribute(id)) if id == "opacity"
    ));
    assert!(matches!(
        session.add_attribute("letterSpacing"),
        Err(ForgeError::Style(_))
    ));
    assert_eq!(session.attributes().len(), 1);
}

#[test]
fn test_update_value_is_validated() {
    let mut session = session();
    let id = session.add_attribute("opacity").unwrap().instance_id.clone();

    session.update_value(&id, Value::Number(0.25)).unwrap();
    assert_eq!(session.preview().get("opacity"), Some("0.25"));

    assert!(session.update_value(&id, Value::Number(4.0)).is_err());
    assert!(session.update_value(&id, Value::color("#fff")).is_err());
    assert_eq!(session.preview().get("opacity"), Some("0.25"));

    assert!(matches!(
        session.update_value("attr-99", Value::Number(0.5)),
        Err(ForgeError::UnknownInstance(_))
    ));
}

#[test]
fn test_remove_and_clear() {
    let mut session = session();
    let id = session.add_attribute("backgroundColor").unwrap().instance_id.clone();
    session.add_attribute("blend").unwrap();

    session.remove_attribute(&id).unwrap();
    assert_eq!(session.attributes().len(), 1);
    assert!(session.preview().blend);

    session.clear_attributes();
    assert_eq!(session.preview(), ResolvedStyle::canvas_default());
}

#[test]
fn test_randomized_values_stay_valid() {
    let mut session = session();
    for id in ["backgroundColor", "boxShadow", "filter", "transform", "borderLeft", "clipPath"] {
        session.add_attribute(id).unwrap();
    }
    for _ in 0..20 {
        session.randomize_all();
        for attribute in session.attributes() {
            attribute.definition.validate(&attribute.value).unwrap();
        }
    }

    let id = session.attributes()[0].instance_id.clone();
    session.randomize_value(&id).unwrap();
}

#[test]
fn test_random_attributes_respect_uniqueness() {
    let mut session = session();
    for _ in 0..100 {
        session.add_random_attribute();
    }
    let mut unique: Vec<_> = session
        .attributes()
        .iter()
        .filter(|a| !a.definition.repeatable())
        .map(|a| a.definition.id)
        .collect();
    let count = unique.len();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), count);
}

// ============================================================================
// PALETTE AND SELECTION
// ============================================================================

#[test]
fn test_save_selects_new_style() {
    let mut session = session();
    session.add_attribute("backgroundColor").unwrap();
    let index = session.save_to_palette();
    assert_eq!(index, 0);
    assert_eq!(session.selection(), &[0]);
    assert_eq!(session.board().palette().get(0), Some(&session.preview()));
}

#[test]
fn test_update_selected_needs_exactly_one() {
    let mut session = session();
    session.save_to_palette();
    session.save_to_palette();
    session.toggle_selection(0).unwrap();
    assert_eq!(session.selection(), &[1, 0]);

    let before = session.board().clone();
    assert!(matches!(
        session.update_selected(),
        Err(ForgeError::InvalidSelection { expected: 1, actual: 2 })
    ));
    assert_eq!(session.board(), &before);

    session.select(1).unwrap();
    session.add_attribute("opacity").unwrap();
    session.update_selected().unwrap();
    assert_eq!(session.board().palette().get(1).unwrap().get("opacity"), Some("1"));
}

#[test]
fn test_evolve_selected_needs_exactly_two() {
    let mut session = session();
    session.add_attribute("backgroundColor").unwrap();
    session.save_to_palette();
    assert!(matches!(
        session.evolve_selected(),
        Err(ForgeError::InvalidSelection { expected: 2, actual: 1 })
    ));

    session.clear_attributes();
    session.add_attribute("opacity").unwrap();
    session.save_to_palette();
    session.toggle_selection(0).unwrap();

    let child = session.evolve_selected().unwrap();
    assert_eq!(child, 2);
    assert_eq!(session.selection(), &[2]);
    let child = session.board().palette().get(child).unwrap();
    assert_eq!(child.get("backgroundColor"), Some("#FFFFFF"));
    assert_eq!(child.get("opacity"), Some("1"));
}

#[test]
fn test_select_stale_index() {
    let mut session = session();
    assert!(matches!(
        session.select(0),
        Err(ForgeError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_load_from_palette_round_trips() {
    let mut session = session();
    for id in ["backgroundColor", "borderRight", "boxShadow", "filter", "transform", "blend"] {
        session.add_attribute(id).unwrap();
    }
    session.randomize_all();
    let saved = session.preview();
    let index = session.save_to_palette();

    session.clear_attributes();
    session.load_from_palette(index).unwrap();
    assert!(!session.attributes().is_empty());
    assert_eq!(session.preview(), saved);
}

#[test]
fn test_load_canvas_default_keeps_its_border() {
    let mut session = session();
    let index = session.save_to_palette();
    assert_eq!(session.board().palette().get(index), Some(&ResolvedStyle::canvas_default()));

    session.load_from_palette(index).unwrap();
    assert_eq!(session.attributes().len(), 6);
    let preview = session.preview();
    assert_eq!(preview.get("borderLeftWidth"), Some("1px"));
    assert_eq!(preview.get("borderLeftStyle"), Some("solid"));
    assert_eq!(preview.get("borderLeftColor"), Some("#cccccc"));
    assert_eq!(preview.get("backgroundColor"), Some("#e0e0e0"));
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut session = session();
    session.save_to_palette();
    session.pointer_down(0, 0).unwrap();
    session.pointer_up();

    session.delete_selected().unwrap();
    assert!(session.selection().is_empty());
    assert!(session.board().palette().is_empty());
    assert_eq!(session.board().grid().get(0, 0), None);
    assert!(matches!(session.delete_selected(), Err(ForgeError::NoStyleSelected)));
}

// ============================================================================
// PAINTING
// ============================================================================

#[test]
fn test_paint_gesture() {
    let mut session = session();
    session.save_to_palette();

    assert!(!session.pointer_enter(0, 0).unwrap());
    assert_eq!(session.board().grid().get(0, 0), None);

    assert!(session.pointer_down(1, 1).unwrap());
    assert!(session.is_painting());
    assert!(session.pointer_enter(1, 2).unwrap());
    session.pointer_leave();
    assert!(!session.pointer_enter(1, 3).unwrap());

    assert_eq!(session.board().grid().get(1, 1), Some(0));
    assert_eq!(session.board().grid().get(1, 2), Some(0));
    assert_eq!(session.board().grid().get(1, 3), None);
}

#[test]
fn test_paint_uses_latest_selection() {
    let mut session = session();
    session.save_to_palette();
    session.save_to_palette();
    session.select(0).unwrap();
    session.toggle_selection(1).unwrap();

    session.pointer_down(0, 0).unwrap();
    assert_eq!(session.board().grid().get(0, 0), Some(1));
}

#[test]
fn test_paint_errors() {
    let mut session = session();
    assert!(matches!(session.pointer_down(0, 0), Err(ForgeError::EmptyPalette)));
    session.pointer_up();

    session.save_to_palette();
    session.clear_selection();
    assert!(matches!(session.pointer_down(0, 0), Err(ForgeError::NoStyleSelected)));
    assert_eq!(session.board().grid().get(0, 0), None);
}

#[test]
fn test_randomize_and_fit() {
    let mut session = session();
    assert!(matches!(session.randomize_grid(), Err(ForgeError::EmptyPalette)));

    session.save_to_palette();
    session.randomize_grid().unwrap();
    assert!(session.board().grid().count(0) > 0);

    assert_eq!(session.fit_to_container(400.0, 600.0), (30, 20));
    assert_eq!(session.resize_grid(100, 1), (64, 16));
    session.clear_grid();
    assert_eq!(session.board().grid().count(0), 0);
}

#[test]
fn test_cell_style_applies_blend() {
    let mut session = session();
    session.add_attribute("blend").unwrap();
    session.add_attribute("borderRadius").unwrap();
    session.save_to_palette();
    session.pointer_down(0, 0).unwrap();
    session.pointer_enter(1, 0).unwrap();
    session.pointer_up();

    let top = session.cell_style(0, 0).unwrap();
    assert_eq!(top.get("borderBottom"), Some("none"));
    assert_eq!(top.get("borderBottomLeftRadius"), Some("0"));
    assert_eq!(top.get("borderRadius"), Some("8px"));
    assert_eq!(session.cell_style(5, 5), None);
}
