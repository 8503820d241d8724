//! Integration tests for reading palette CSS and re-deriving attributes.

use tilecss::{ActiveAttribute, StyleError, compose, derive_attributes, parse_palette_css};

const EXPORTED: &str = r#"/* Palette Styles */
.tile-style-0 {
  background-color: #ff0000;
  opacity: 0.5;
}

.tile-style-1 {
  border-top-width: 2px;
  border-top-style: solid;
  border-top-color: #000000;
  box-shadow: 2px 2px 4px 0px #00000080;
  filter: blur(1.5px) sepia(0.3);
  transform: rotate(45deg) scaleX(2);
}

/* Grid Styles */
.grid-container {
  display: grid;
  grid-template-columns: repeat(32, 20px);
  width: 640px;
}

.grid-cell {
  width: 20px;
  height: 20px;
}
"#;

#[test]
fn test_reads_tile_rules_only() {
    let palette = parse_palette_css(EXPORTED).unwrap();
    assert_eq!(palette.len(), 2);

    assert_eq!(palette[0].get("backgroundColor"), Some("#ff0000"));
    assert_eq!(palette[0].get("opacity"), Some("0.5"));
    assert_eq!(palette[0].transform, None);

    assert_eq!(palette[1].get("borderTopWidth"), Some("2px"));
    assert_eq!(palette[1].get("boxShadow"), Some("2px 2px 4px 0px #00000080"));
    assert_eq!(palette[1].transform.as_deref(), Some("rotate(45deg) scaleX(2)"));
}

#[test]
fn test_out_of_order_rules_are_sorted() {
    let palette = parse_palette_css(
        ".tile-style-1 { opacity: 0.2; }\n.tile-style-0 { opacity: 0.1; }",
    )
    .unwrap();
    assert_eq!(palette[0].get("opacity"), Some("0.1"));
    assert_eq!(palette[1].get("opacity"), Some("0.2"));
}

#[test]
fn test_duplicate_index_is_rejected() {
    let result = parse_palette_css(".tile-style-0 { opacity: 1; }\n.tile-style-0 { opacity: 1; }");
    assert!(matches!(result, Err(StyleError::InvalidSyntax(_))));
}

#[test]
fn test_imported_styles_derive_back_to_the_same_style() {
    for style in parse_palette_css(EXPORTED).unwrap() {
        let attributes: Vec<ActiveAttribute> = derive_attributes(&style)
            .into_iter()
            .enumerate()
            .map(|(i, (def, value))| ActiveAttribute::new(format!("attr-{i}"), def).with_value(value))
            .collect();
        assert_eq!(compose(&attributes), style);
    }
}

#[test]
fn test_derived_attributes_for_bordered_tile() {
    let palette = parse_palette_css(EXPORTED).unwrap();
    let ids: Vec<_> = derive_attributes(&palette[1])
        .into_iter()
        .map(|(def, _)| def.id)
        .collect();
    assert_eq!(ids, vec!["borderTop", "boxShadow", "filter", "transform"]);
}
