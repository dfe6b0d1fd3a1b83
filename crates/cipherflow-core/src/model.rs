//! Flow diagram model: nodes and edges.
//!
//! Nodes and edges are produced by per-diagram call sites and treated as
//! immutable within a render pass. Node identity is the `id` string; an
//! edge references nodes purely by id.

use crate::{
    geometry::{Bounds, Point, Size},
    style::NodeStyle,
};

/// Side of a node rectangle where an edge attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Optional per-node overrides for where incoming and outgoing edges attach.
///
/// Absent sides fall back to the defaults of a top-to-bottom flow: edges
/// leave from the bottom and arrive at the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionAnchors {
    source: Option<AnchorSide>,
    target: Option<AnchorSide>,
}

impl ConnectionAnchors {
    /// Side where outgoing edges leave this node.
    pub fn source(self) -> AnchorSide {
        self.source.unwrap_or(AnchorSide::Bottom)
    }

    /// Side where incoming edges arrive at this node.
    pub fn target(self) -> AnchorSide {
        self.target.unwrap_or(AnchorSide::Top)
    }
}

/// A labeled, positioned vertex in a flow diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    position: Point,
    label: String,
    style: NodeStyle,
    anchors: ConnectionAnchors,
}

/// Approximate horizontal advance of one label character.
///
/// There is no text shaping in this pipeline; node extents are estimated
/// from the label length with fixed metrics matched to the 14px label font.
const CHAR_ADVANCE: f32 = 8.4;

/// Minimum label box width before padding.
const MIN_LABEL_WIDTH: f32 = 30.0;

impl Node {
    /// Creates a node at a layout position with a resolved style.
    pub fn new(
        id: impl Into<String>,
        position: Point,
        label: impl Into<String>,
        style: NodeStyle,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            label: label.into(),
            style,
            anchors: ConnectionAnchors::default(),
        }
    }

    /// Sets the side where outgoing edges leave this node.
    pub fn source_anchor(mut self, side: AnchorSide) -> Self {
        self.anchors.source = Some(side);
        self
    }

    /// Sets the side where incoming edges arrive at this node.
    pub fn target_anchor(mut self, side: AnchorSide) -> Self {
        self.anchors.target = Some(side);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    pub fn anchors(&self) -> ConnectionAnchors {
        self.anchors
    }

    /// Estimated extent of the node rectangle.
    pub fn size(&self) -> Size {
        let label_width = (self.label.chars().count() as f32 * CHAR_ADVANCE).max(MIN_LABEL_WIDTH);
        Size::new(
            label_width + 2.0 * NodeStyle::PADDING_HORIZONTAL,
            NodeStyle::FONT_SIZE + 2.0 * NodeStyle::PADDING_VERTICAL,
        )
    }

    /// Bounding box of the node in layout coordinates.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position, self.size())
    }

    /// Attachment point on the node boundary for the given side.
    pub fn anchor_point(&self, side: AnchorSide) -> Point {
        let bounds = self.bounds();
        let center = bounds.center();
        match side {
            AnchorSide::Left => Point::new(bounds.min_x(), center.y()),
            AnchorSide::Right => Point::new(bounds.max_x(), center.y()),
            AnchorSide::Top => Point::new(center.x(), bounds.min_y()),
            AnchorSide::Bottom => Point::new(center.x(), bounds.max_y()),
        }
    }
}

/// A directed connector between two node identifiers.
///
/// Every edge uses the smooth-step visual kind and is animated; neither is
/// configurable. An edge whose `source` or `target` id is absent from the
/// active node list is dropped at materialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: String,
    source: String,
    target: String,
}

impl Edge {
    /// Creates a smooth-step animated edge between two node ids.
    pub fn smooth(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleHelper;

    fn node(label: &str) -> Node {
        Node::new("n", Point::new(0.0, 0.0), label, StyleHelper::new().solid("#818cf8"))
    }

    #[test]
    fn node_size_grows_with_label() {
        assert!(node("Ciphertext + Tag").size().width() > node("Key").size().width());
    }

    #[test]
    fn node_height_is_label_independent() {
        assert_eq!(node("Key").size().height(), node("Same Shared Secret").size().height());
    }

    #[test]
    fn short_labels_keep_a_minimum_width() {
        let size = node("A").size();
        assert!(size.width() >= MIN_LABEL_WIDTH + 2.0 * NodeStyle::PADDING_HORIZONTAL);
    }

    #[test]
    fn default_anchors_flow_top_to_bottom() {
        let anchors = ConnectionAnchors::default();
        assert_eq!(anchors.source(), AnchorSide::Bottom);
        assert_eq!(anchors.target(), AnchorSide::Top);
    }

    #[test]
    fn anchor_overrides_apply() {
        let n = node("Plaintext")
            .source_anchor(AnchorSide::Right)
            .target_anchor(AnchorSide::Left);
        assert_eq!(n.anchors().source(), AnchorSide::Right);
        assert_eq!(n.anchors().target(), AnchorSide::Left);
    }

    #[test]
    fn anchor_points_sit_on_the_boundary() {
        let n = node("Plaintext");
        let bounds = n.bounds();

        let left = n.anchor_point(AnchorSide::Left);
        assert_eq!(left.x(), bounds.min_x());

        let bottom = n.anchor_point(AnchorSide::Bottom);
        assert_eq!(bottom.y(), bounds.max_y());
        assert_eq!(bottom.x(), bounds.center().x());
    }

    #[test]
    fn edge_accessors() {
        let edge = Edge::smooth("e1", "plaintext", "encrypt");
        assert_eq!(edge.id(), "e1");
        assert_eq!(edge.source(), "plaintext");
        assert_eq!(edge.target(), "encrypt");
    }
}
