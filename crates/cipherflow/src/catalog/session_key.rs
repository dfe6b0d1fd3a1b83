//! Session key derivation flow.
//!
//! Preserved as authored: the `gen-mask` edge references a `gen` node that
//! the node list never defines, so materialization drops it. The remaining
//! chain starts at `mask`.

use cipherflow_core::{
    geometry::Point,
    model::{AnchorSide::{Bottom, Left, Right, Top}, Edge, Node},
    style::StyleHelper,
};

use super::{amber, green, indigo, olive, violet};
use crate::variant::{FlowDefinition, LayoutVariant};

pub(super) fn definition() -> FlowDefinition {
    FlowDefinition::new(LayoutVariant::new(wide, edges()))
        .with_narrow(LayoutVariant::new(narrow, edges()))
        .with_container_class("x25519-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("mask", Point::new(200.0, 0.0), "Mask", s.solid(indigo(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("public", Point::new(380.0, 0.0), "Get Public Key", s.solid(indigo(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("peer", Point::new(380.0, 100.0), "PeerPublic", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("exchange", Point::new(580.0, 50.0), "Exchange", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("shared", Point::new(760.0, 0.0), "SharedSecret", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("context", Point::new(760.0, 100.0), "Context", s.solid(amber(dark)))
            .source_anchor(Right),
        Node::new("blake3", Point::new(940.0, 50.0), "Blake3.DeriveKey", s.solid(amber(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("key", Point::new(1140.0, 50.0), "SessionKey", s.solid(olive(dark)))
            .target_anchor(Left),
    ]
}

fn narrow(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("mask", Point::new(0.0, 0.0), "Mask", s.solid(indigo(dark)))
            .source_anchor(Bottom),
        Node::new("public", Point::new(160.0, 0.0), "Get Public Key", s.solid(indigo(dark)))
            .source_anchor(Bottom),
        Node::new("peer", Point::new(160.0, 100.0), "PeerPublic", s.solid(green(dark)))
            .source_anchor(Bottom),
        Node::new("exchange", Point::new(80.0, 200.0), "Exchange", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("shared", Point::new(0.0, 300.0), "SharedSecret", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("context", Point::new(160.0, 300.0), "Context", s.solid(amber(dark)))
            .source_anchor(Bottom),
        Node::new("blake3", Point::new(60.0, 400.0), "Blake3.DeriveKey", s.solid(amber(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("key", Point::new(70.0, 500.0), "SessionKey", s.solid(olive(dark)))
            .target_anchor(Top),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("gen-mask", "gen", "mask"),
        Edge::smooth("mask-public", "mask", "public"),
        Edge::smooth("public-exchange", "public", "exchange"),
        Edge::smooth("peer-exchange", "peer", "exchange"),
        Edge::smooth("exchange-shared", "exchange", "shared"),
        Edge::smooth("shared-blake3", "shared", "blake3"),
        Edge::smooth("context-blake3", "context", "blake3"),
        Edge::smooth("blake3-key", "blake3", "key"),
    ]
}
