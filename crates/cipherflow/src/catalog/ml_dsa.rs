//! ML-DSA signing and verification flow.

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
        .with_container_class("mldsa-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("gen", Point::new(0.0, 70.0), "GenerateKeys", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("sk", Point::new(200.0, 0.0), "SecretKey", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("pk", Point::new(200.0, 140.0), "PublicKey", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("msg", Point::new(200.0, 70.0), "Message", s.solid(indigo(dark)))
            .source_anchor(Right),
        Node::new("sign", Point::new(400.0, 35.0), "Sign", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("sig", Point::new(580.0, 35.0), "Signature", s.solid(amber(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("verify", Point::new(760.0, 70.0), "Verify", s.solid(violet(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("valid", Point::new(940.0, 70.0), "Valid", s.solid(emerald(dark)))
            .target_anchor(Left),
    ]
}

fn narrow(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("gen", Point::new(60.0, 0.0), "GenerateKeys", s.solid(green(dark)))
            .source_anchor(Bottom),
        Node::new("sk", Point::new(0.0, 80.0), "SecretKey", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("pk", Point::new(140.0, 80.0), "PublicKey", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("msg", Point::new(60.0, 160.0), "Message", s.solid(indigo(dark)))
            .source_anchor(Bottom),
        Node::new("sign", Point::new(60.0, 240.0), "Sign", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("sig", Point::new(60.0, 320.0), "Signature", s.solid(amber(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("verify", Point::new(60.0, 400.0), "Verify", s.solid(violet(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("valid", Point::new(60.0, 480.0), "Valid", s.solid(emerald(dark)))
            .target_anchor(Top),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("gen-sk", "gen", "sk"),
        Edge::smooth("gen-pk", "gen", "pk"),
        Edge::smooth("sk-sign", "sk", "sign"),
        Edge::smooth("msg-sign", "msg", "sign"),
        Edge::smooth("sign-sig", "sign", "sig"),
        Edge::smooth("sig-verify", "sig", "verify"),
        Edge::smooth("pk-verify", "pk", "verify"),
        Edge::smooth("msg-verify", "msg", "verify"),
        Edge::smooth("verify-valid", "verify", "valid"),
    ]
}
