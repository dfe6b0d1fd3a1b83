//! Authenticated encryption flow.

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
        .with_container_class("aead-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("plaintext", Point::new(0.0, 0.0), "Plaintext", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("key", Point::new(0.0, 70.0), "Key", s.solid(green(dark))).source_anchor(Right),
        Node::new("nonce", Point::new(0.0, 140.0), "Nonce", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("encrypt", Point::new(220.0, 70.0), "AEAD.Encrypt", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("output", Point::new(440.0, 70.0), "Ciphertext + Tag", s.solid(amber(dark)))
            .target_anchor(Left),
    ]
}

fn narrow(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("plaintext", Point::new(0.0, 0.0), "Plaintext", s.solid(indigo(dark)))
            .source_anchor(Bottom),
        Node::new("key", Point::new(0.0, 70.0), "Key", s.solid(green(dark))).source_anchor(Bottom),
        Node::new("nonce", Point::new(0.0, 140.0), "Nonce", s.solid(green(dark)))
            .source_anchor(Bottom),
        Node::new("encrypt", Point::new(0.0, 230.0), "AEAD.Encrypt", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("output", Point::new(0.0, 320.0), "Ciphertext + Tag", s.solid(amber(dark)))
            .target_anchor(Top),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("e1", "plaintext", "encrypt"),
        Edge::smooth("e2", "key", "encrypt"),
        Edge::smooth("e3", "nonce", "encrypt"),
        Edge::smooth("e4", "encrypt", "output"),
    ]
}
