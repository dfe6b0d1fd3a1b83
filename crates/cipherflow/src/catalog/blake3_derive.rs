//! BLAKE3 key derivation fan-out flow.
//!
//! Wide-only: the three derivation lanes already stack vertically, so the
//! narrow breakpoint reuses the same layout.

use cipherflow_core::{
    geometry::Point,
    model::{AnchorSide::{Left, Right}, Edge, Node},
    style::StyleHelper,
};

use super::{amber, green, indigo, violet};
use crate::variant::{FlowDefinition, LayoutVariant};

pub(super) fn definition() -> FlowDefinition {
    FlowDefinition::new(LayoutVariant::new(wide, edges())).with_container_class("blake-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("ms", Point::new(0.0, 100.0), "Master Secret", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("c1", Point::new(180.0, 0.0), "Context: encryption", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("c2", Point::new(180.0, 100.0), "Context: mac", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("c3", Point::new(180.0, 200.0), "Context: auth", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("d1", Point::new(400.0, 0.0), "DeriveKey", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("d2", Point::new(400.0, 100.0), "DeriveKey", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("d3", Point::new(400.0, 200.0), "DeriveKey", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("ek", Point::new(580.0, 0.0), "Encryption Key", s.solid(amber(dark)))
            .target_anchor(Left),
        Node::new("mk", Point::new(580.0, 100.0), "MAC Key", s.solid(amber(dark)))
            .target_anchor(Left),
        Node::new("ak", Point::new(580.0, 200.0), "Auth Key", s.solid(amber(dark)))
            .target_anchor(Left),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("ms-d1", "ms", "d1"),
        Edge::smooth("ms-d2", "ms", "d2"),
        Edge::smooth("ms-d3", "ms", "d3"),
        Edge::smooth("c1-d1", "c1", "d1"),
        Edge::smooth("c2-d2", "c2", "d2"),
        Edge::smooth("c3-d3", "c3", "d3"),
        Edge::smooth("d1-ek", "d1", "ek"),
        Edge::smooth("d2-mk", "d2", "mk"),
        Edge::smooth("d3-ak", "d3", "ak"),
    ]
}
