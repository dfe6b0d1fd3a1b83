//! ML-KEM encapsulation and decapsulation flow.

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
        .with_container_class("mlkem-flow-wrapper")
}

fn wide(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("gen", Point::new(0.0, 70.0), "GenerateKeys", s.solid(green(dark)))
            .source_anchor(Right),
        Node::new("pk", Point::new(200.0, 0.0), "PublicKey", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("sk", Point::new(200.0, 140.0), "SecretKey", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("enc", Point::new(400.0, 0.0), "Encapsulate", s.solid(indigo(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("ss1", Point::new(600.0, 0.0), "SharedSecret", s.solid(indigo(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("ct", Point::new(600.0, 70.0), "Ciphertext", s.solid(amber(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("encrypt", Point::new(800.0, 0.0), "Encrypt", s.solid(violet(dark)))
            .target_anchor(Left),
        Node::new("dec", Point::new(400.0, 140.0), "Decapsulate", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("ss2", Point::new(600.0, 140.0), "SharedSecret", s.solid(green(dark)))
            .target_anchor(Left)
            .source_anchor(Right),
        Node::new("decrypt", Point::new(800.0, 140.0), "Decrypt", s.solid(emerald(dark)))
            .target_anchor(Left),
    ]
}

fn narrow(s: &StyleHelper, dark: bool) -> Vec<Node> {
    vec![
        Node::new("gen", Point::new(60.0, 0.0), "GenerateKeys", s.solid(green(dark)))
            .source_anchor(Bottom),
        Node::new("pk", Point::new(0.0, 80.0), "PublicKey", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("sk", Point::new(140.0, 80.0), "SecretKey", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("enc", Point::new(0.0, 160.0), "Encapsulate", s.solid(indigo(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("ss1", Point::new(0.0, 240.0), "SharedSecret", s.solid(indigo(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("ct", Point::new(140.0, 240.0), "Ciphertext", s.solid(amber(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("encrypt", Point::new(0.0, 320.0), "Encrypt", s.solid(violet(dark)))
            .target_anchor(Top),
        Node::new("dec", Point::new(140.0, 160.0), "Decapsulate", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("ss2", Point::new(140.0, 320.0), "SharedSecret", s.solid(green(dark)))
            .target_anchor(Top)
            .source_anchor(Bottom),
        Node::new("decrypt", Point::new(140.0, 400.0), "Decrypt", s.solid(emerald(dark)))
            .target_anchor(Top),
    ]
}

fn edges() -> Vec<Edge> {
    vec![
        Edge::smooth("gen-pk", "gen", "pk"),
        Edge::smooth("gen-sk", "gen", "sk"),
        Edge::smooth("pk-enc", "pk", "enc"),
        Edge::smooth("enc-ss1", "enc", "ss1"),
        Edge::smooth("enc-ct", "enc", "ct"),
        Edge::smooth("ss1-encrypt", "ss1", "encrypt"),
        Edge::smooth("ct-dec", "ct", "dec"),
        Edge::smooth("sk-dec", "sk", "dec"),
        Edge::smooth("dec-ss2", "dec", "ss2"),
        Edge::smooth("ss2-decrypt", "ss2", "decrypt"),
    ]
}
