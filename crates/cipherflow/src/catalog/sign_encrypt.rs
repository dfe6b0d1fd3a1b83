//! Sign-then-encrypt round trip flow.

use cipherflow_core::{
    geometry::Point,
    model::{AnchorSide::{Left, Right}, Edge, Node},
    style::StyleHelper,
};

use super::{amber, green, indigo, violet};
use crate::variant::{FlowDefinition, LayoutVariant};

pub(super) fn definition() -> FlowDefinition {
    FlowDefinition::new(LayoutVariant::new(wide, edges()))
        .with_container_class("sign-encrypt-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("message", Point::new(0.0, 0.0), "Message", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("sign", Point::new(0.0, 70.0), "Sign", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("encrypt", Point::new(200.0, 35.0), "Encrypt", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("decrypt", Point::new(380.0, 35.0), "Decrypt", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("verify", Point::new(560.0, 35.0), "Verify", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("valid", Point::new(720.0, 35.0), "Valid", s.solid(amber(dark)))
            .target_anchor(Left),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("e1", "message", "encrypt"),
        Edge::smooth("e2", "sign", "encrypt"),
        Edge::smooth("e3", "encrypt", "decrypt"),
        Edge::smooth("e4", "decrypt", "verify"),
        Edge::smooth("e5", "verify", "valid"),
    ]
}
