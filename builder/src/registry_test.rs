use super::*;

// =============================================================
// Containment
// =============================================================

#[test]
fn containers_can_have_children() {
    assert!(ComponentKind::Div.can_have_children());
    assert!(ComponentKind::Row.can_have_children());
    assert!(ComponentKind::Column.can_have_children());
}

#[test]
fn leaves_cannot_have_children() {
    assert!(!ComponentKind::Button.can_have_children());
    assert!(!ComponentKind::Input.can_have_children());
    assert!(!ComponentKind::Text.can_have_children());
}

// =============================================================
// Editable-prop schema
// =============================================================

#[test]
fn button_edits_label_only() {
    let props = ComponentKind::Button.editable_props();
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].name, "label");
    assert_eq!(props[0].kind, PropKind::Text);
}

#[test]
fn input_edits_placeholder_and_value() {
    let names: Vec<&str> =
        ComponentKind::Input.editable_props().iter().map(|p| p.name).collect();
    assert_eq!(names, ["placeholder", "value"]);
}

#[test]
fn text_edits_content() {
    let names: Vec<&str> = ComponentKind::Text.editable_props().iter().map(|p| p.name).collect();
    assert_eq!(names, ["content"]);
}

#[test]
fn containers_expose_no_editable_props() {
    assert!(ComponentKind::Div.editable_props().is_empty());
    assert!(ComponentKind::Row.editable_props().is_empty());
    assert!(ComponentKind::Column.editable_props().is_empty());
}

#[test]
fn all_prop_kinds_are_text() {
    for kind in ComponentKind::ALL {
        for spec in kind.editable_props() {
            assert_eq!(spec.kind, PropKind::Text);
        }
    }
}

// =============================================================
// Tags, classes, palette order
// =============================================================

#[test]
fn tags_match_serialized_labels() {
    let tags: Vec<&str> = ComponentKind::ALL.iter().map(|k| k.tag()).collect();
    assert_eq!(tags, ["Button", "Input", "Text", "Div", "Row", "Column"]);
}

#[test]
fn css_classes_are_kind_specific() {
    let classes: Vec<&str> = ComponentKind::ALL.iter().map(|k| k.css_class()).collect();
    assert_eq!(classes, ["pf-button", "pf-input", "pf-text", "pf-div", "pf-row", "pf-column"]);
}

#[test]
fn palette_order_is_stable() {
    assert_eq!(ComponentKind::ALL.len(), 6);
    assert_eq!(ComponentKind::ALL[0], ComponentKind::Button);
    assert_eq!(ComponentKind::ALL[5], ComponentKind::Column);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn kind_serde_roundtrip() {
    let json = serde_json::to_string(&ComponentKind::Row).unwrap();
    assert_eq!(json, "\"row\"");
    let back: ComponentKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ComponentKind::Row);
}

#[test]
fn kind_serde_all_variants() {
    let cases = [
        (ComponentKind::Button, "\"button\""),
        (ComponentKind::Input, "\"input\""),
        (ComponentKind::Text, "\"text\""),
        (ComponentKind::Div, "\"div\""),
        (ComponentKind::Row, "\"row\""),
        (ComponentKind::Column, "\"column\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        let back: ComponentKind = serde_json::from_str(expected).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn kind_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<ComponentKind>("\"table\"").is_err());
}
