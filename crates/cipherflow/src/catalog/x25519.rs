//! Two-party X25519 key agreement flow.

use cipherflow_core::{
    geometry::Point,
    model::{AnchorSide::{Bottom, Left, Right, Top}, Edge, Node},
    style::StyleHelper,
};

use super::{amber, green, indigo, violet};
use crate::variant::{FlowDefinition, LayoutVariant};

pub(super) fn definition() -> FlowDefinition {
    FlowDefinition::new(LayoutVariant::new(wide, edges()))
        .with_narrow(LayoutVariant::new(narrow, edges()))
        .with_container_class("x25519-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("a1", Point::new(0.0, 0.0), "Generate Secret", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("a2", Point::new(200.0, 0.0), "Mask Key", s.solid(indigo(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("a3", Point::new(380.0, 0.0), "Get Public", s.solid(indigo(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("b1", Point::new(0.0, 140.0), "Generate Secret", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("b2", Point::new(200.0, 140.0), "Mask Key", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("b3", Point::new(380.0, 140.0), "Get Public", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("a4", Point::new(580.0, 0.0), "Exchange", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("b4", Point::new(580.0, 140.0), "Exchange", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("s", Point::new(780.0, 70.0), "Same Shared Secret", s.solid(amber(dark)))
            .target_anchor(Left),
    ]
}

fn narrow(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("a1", Point::new(0.0, 0.0), "Generate Secret", s.solid(indigo(dark)))
            .source_anchor(Bottom),
        Node::new("a2", Point::new(0.0, 80.0), "Mask Key", s.solid(indigo(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("a3", Point::new(0.0, 160.0), "Get Public", s.solid(indigo(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("b1", Point::new(160.0, 0.0), "Generate Secret", s.solid(green(dark)))
            .source_anchor(Bottom),
        Node::new("b2", Point::new(160.0, 80.0), "Mask Key", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("b3", Point::new(160.0, 160.0), "Get Public", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("a4", Point::new(0.0, 240.0), "Exchange", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("b4", Point::new(160.0, 240.0), "Exchange", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("s", Point::new(50.0, 320.0), "Same Shared Secret", s.solid(amber(dark)))
            .target_anchor(Top),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("a1-a2", "a1", "a2"),
        Edge::smooth("a2-a3", "a2", "a3"),
        Edge::smooth("b1-b2", "b1", "b2"),
        Edge::smooth("b2-b3", "b2", "b3"),
        Edge::smooth("a3-b4", "a3", "b4"),
        Edge::smooth("b3-a4", "b3", "a4"),
        Edge::smooth("a4-s", "a4", "s"),
        Edge::smooth("b4-s", "b4", "s"),
    ]
}
