use super::*;
use crate::registry::ComponentKind;

const BOX: TargetBox = TargetBox { top: 100.0, height: 40.0 };
const LOWER: Point = Point { x: 10.0, y: 130.0 };
const UPPER: Point = Point { x: 10.0, y: 110.0 };

fn container(kind: ComponentKind, children: Vec<Node>) -> Node {
    let mut node = Node::new(kind);
    node.children = children;
    node
}

/// Tree: Row[Button, Column[Text]], plus a free-standing Div root.
struct Fixture {
    tree: Tree,
    row: Node,
    button: Node,
    column: Node,
    div: Node,
}

fn fixture() -> Fixture {
    let button = Node::new(ComponentKind::Button);
    let text = Node::new(ComponentKind::Text);
    let column = container(ComponentKind::Column, vec![text]);
    let row = container(ComponentKind::Row, vec![button.clone(), column.clone()]);
    let div = Node::new(ComponentKind::Div);
    let tree = Tree::from_roots(vec![row.clone(), div.clone()]);
    Fixture { tree, row, button, column, div }
}

// =============================================================
// Geometry rule
// =============================================================

#[test]
fn lower_half_of_container_reparents() {
    let f = fixture();
    let payload = DragPayload::from_palette(ComponentKind::Button);
    let intent = hover_intent(LOWER, &f.div, BOX, &payload, &f.tree);
    assert_eq!(intent, Some(DropIntent::Reparent { parent: f.div.id }));
}

#[test]
fn upper_half_does_nothing() {
    let f = fixture();
    let payload = DragPayload::from_palette(ComponentKind::Button);
    assert_eq!(hover_intent(UPPER, &f.div, BOX, &payload, &f.tree), None);
}

#[test]
fn exact_midpoint_counts_as_upper_half() {
    let f = fixture();
    let payload = DragPayload::from_palette(ComponentKind::Button);
    let midpoint = Point::new(0.0, BOX.midpoint());
    assert_eq!(hover_intent(midpoint, &f.div, BOX, &payload, &f.tree), None);
}

#[test]
fn leaf_target_never_reparents() {
    let f = fixture();
    let payload = DragPayload::from_palette(ComponentKind::Text);
    assert_eq!(hover_intent(LOWER, &f.button, BOX, &payload, &f.tree), None);
}

// =============================================================
// Gesture guards
// =============================================================

#[test]
fn hovering_the_dragged_node_itself_is_guarded() {
    let f = fixture();
    let payload = DragPayload::from_node(f.div.clone(), None);
    assert_eq!(hover_intent(LOWER, &f.div, BOX, &payload, &f.tree), None);
}

#[test]
fn hovering_a_descendant_of_the_dragged_node_is_guarded() {
    let f = fixture();
    let payload = DragPayload::from_node(f.row.clone(), None);
    assert_eq!(hover_intent(LOWER, &f.column, BOX, &payload, &f.tree), None);
}

#[test]
fn hovering_the_current_parent_is_guarded() {
    let f = fixture();
    let payload = DragPayload::from_node(f.button.clone(), Some(f.row.id));
    assert_eq!(hover_intent(LOWER, &f.row, BOX, &payload, &f.tree), None);
}

#[test]
fn hovering_a_different_container_reparents_an_existing_node() {
    let f = fixture();
    let payload = DragPayload::from_node(f.button.clone(), Some(f.row.id));
    let intent = hover_intent(LOWER, &f.column, BOX, &payload, &f.tree);
    assert_eq!(intent, Some(DropIntent::Reparent { parent: f.column.id }));
}

// =============================================================
// Malformed geometry: skip the tick, keep the gesture
// =============================================================

#[test]
fn non_finite_pointer_skips_the_tick() {
    let f = fixture();
    let payload = DragPayload::from_palette(ComponentKind::Button);
    let point = Point::new(0.0, f64::NAN);
    assert_eq!(hover_intent(point, &f.div, BOX, &payload, &f.tree), None);
}

#[test]
fn degenerate_target_box_skips_the_tick() {
    let f = fixture();
    let payload = DragPayload::from_palette(ComponentKind::Button);
    let flat = TargetBox::new(100.0, 0.0);
    assert_eq!(hover_intent(LOWER, &f.div, flat, &payload, &f.tree), None);
    let negative = TargetBox::new(100.0, -5.0);
    assert_eq!(hover_intent(LOWER, &f.div, negative, &payload, &f.tree), None);
    let nan_top = TargetBox::new(f64::NAN, 40.0);
    assert_eq!(hover_intent(LOWER, &f.div, nan_top, &payload, &f.tree), None);
}
