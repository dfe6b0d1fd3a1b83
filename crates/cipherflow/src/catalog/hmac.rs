//! HMAC generation and verification flow.

use cipherflow_core::{
    geometry::Point,
    model::{AnchorSide::{Bottom, Left, Right, Top}, Edge, Node},
    style::StyleHelper,
};

use super::{amber, emerald, green, indigo, violet};
use crate::variant::{FlowDefinition, LayoutVariant};

pub(super) fn definition() -> FlowDefinition {
    FlowDefinition::new(LayoutVariant::new(wide, edges()))
        .with_narrow(LayoutVariant::new(narrow, edges()))
        .with_container_class("hmac-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("m", Point::new(0.0, 0.0), "Message", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("k", Point::new(0.0, 70.0), "Secret Key", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("h", Point::new(200.0, 35.0), "HMAC", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("mac", Point::new(380.0, 35.0), "MAC Tag", s.solid(amber(dark)))
            .target_anchor(Left)
            .source_anchor(Bottom),
        Node::new("m2", Point::new(0.0, 160.0), "Message", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("k2", Point::new(0.0, 230.0), "Secret Key", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("v", Point::new(200.0, 160.0), "Verify", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("valid", Point::new(380.0, 160.0), "Valid", s.solid(emerald(dark)))
            .target_anchor(Left),
    ]
}

fn narrow(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("m", Point::new(0.0, 0.0), "Message", s.solid(indigo(dark)))
            .source_anchor(Bottom),
        Node::new("k", Point::new(140.0, 0.0), "Secret Key", s.solid(green(dark)))
            .source_anchor(Bottom),
        Node::new("h", Point::new(50.0, 80.0), "HMAC", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("mac", Point::new(50.0, 160.0), "MAC Tag", s.solid(amber(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("m2", Point::new(0.0, 240.0), "Message", s.solid(indigo(dark)))
            .source_anchor(Bottom),
        Node::new("k2", Point::new(140.0, 240.0), "Secret Key", s.solid(green(dark)))
            .source_anchor(Bottom),
        Node::new("v", Point::new(50.0, 320.0), "Verify", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("valid", Point::new(50.0, 400.0), "Valid", s.solid(emerald(dark)))
            .target_anchor(Top),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("m-h", "m", "h"),
        Edge::smooth("k-h", "k", "h"),
        Edge::smooth("h-mac", "h", "mac"),
        Edge::smooth("mac-v", "mac", "v"),
        Edge::smooth("m2-v", "m2", "v"),
        Edge::smooth("k2-v", "k2", "v"),
        Edge::smooth("v-valid", "v", "valid"),
    ]
}
