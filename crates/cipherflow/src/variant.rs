//! Layout variants and the caller-supplied producer contract.
//!
//! A diagram call site supplies one [`LayoutVariant`] for the wide
//! breakpoint and optionally a second for the narrow breakpoint. Node
//! producers must be deterministic and side-effect free: the renderer may
//! invoke them any number of times per appearance or size change and
//! expects identical output for identical inputs.

use cipherflow_core::{
    model::{Edge, Node},
    style::StyleHelper,
};

/// Pure function producing the node list for one breakpoint.
///
/// Receives the style helper and the dark appearance flag; everything else
/// a producer needs must be baked into the function itself.
pub type NodeProducer = fn(&StyleHelper, bool) -> Vec<Node>;

/// A complete node/edge definition for one breakpoint.
#[derive(Debug, Clone)]
pub struct LayoutVariant {
    nodes: NodeProducer,
    edges: Vec<Edge>,
}

impl LayoutVariant {
    pub fn new(nodes: NodeProducer, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Invokes the node producer for the given appearance.
    pub fn produce_nodes(&self, helper: &StyleHelper, is_dark: bool) -> Vec<Node> {
        (self.nodes)(helper, is_dark)
    }

    /// Static edge list of this variant.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Identity of the node producer, used to detect definition swaps.
    pub(crate) fn producer_id(&self) -> usize {
        self.nodes as usize
    }
}

/// A full diagram definition: a mandatory wide variant, an optional narrow
/// variant, and an optional class token for container sizing.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    wide: LayoutVariant,
    narrow: Option<LayoutVariant>,
    container_class: Option<&'static str>,
}

impl FlowDefinition {
    pub fn new(wide: LayoutVariant) -> Self {
        Self {
            wide,
            narrow: None,
            container_class: None,
        }
    }

    /// Adds a variant used when the container is below the narrow breakpoint.
    pub fn with_narrow(mut self, narrow: LayoutVariant) -> Self {
        self.narrow = Some(narrow);
        self
    }

    /// Sets the class token emitted on the rendered container element.
    pub fn with_container_class(mut self, class: &'static str) -> Self {
        self.container_class = Some(class);
        self
    }

    /// Selects the variant for the given breakpoint state.
    ///
    /// Narrow is only ever active when a narrow variant was supplied;
    /// otherwise the wide variant covers every width.
    pub fn active_variant(&self, is_narrow: bool) -> &LayoutVariant {
        match (&self.narrow, is_narrow) {
            (Some(narrow), true) => narrow,
            _ => &self.wide,
        }
    }

    pub fn wide(&self) -> &LayoutVariant {
        &self.wide
    }

    pub fn narrow(&self) -> Option<&LayoutVariant> {
        self.narrow.as_ref()
    }

    pub fn container_class(&self) -> Option<&'static str> {
        self.container_class
    }

    /// True when the two definitions share the same producer functions.
    pub(crate) fn same_producers(&self, other: &Self) -> bool {
        self.wide.producer_id() == other.wide.producer_id()
            && self.narrow.as_ref().map(LayoutVariant::producer_id)
                == other.narrow.as_ref().map(LayoutVariant::producer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipherflow_core::geometry::Point;

    fn wide_nodes(helper: &StyleHelper, is_dark: bool) -> Vec<Node> {
        let fill = if is_dark { "#6366f1" } else { "#818cf8" };
        vec![Node::new("a", Point::new(0.0, 0.0), "A", helper.solid(fill))]
    }

    fn narrow_nodes(helper: &StyleHelper, _is_dark: bool) -> Vec<Node> {
        vec![
            Node::new("a", Point::new(0.0, 0.0), "A", helper.solid("#4ade80")),
            Node::new("b", Point::new(0.0, 80.0), "B", helper.solid("#4ade80")),
        ]
    }

    #[test]
    fn wide_variant_covers_narrow_widths_without_narrow_variant() {
        let definition = FlowDefinition::new(LayoutVariant::new(wide_nodes, vec![]));
        assert_eq!(definition.active_variant(true).producer_id(), wide_nodes as usize);
        assert_eq!(definition.active_variant(false).producer_id(), wide_nodes as usize);
    }

    #[test]
    fn narrow_variant_selected_only_when_narrow() {
        let definition = FlowDefinition::new(LayoutVariant::new(wide_nodes, vec![]))
            .with_narrow(LayoutVariant::new(narrow_nodes, vec![]));
        assert_eq!(definition.active_variant(true).producer_id(), narrow_nodes as usize);
        assert_eq!(definition.active_variant(false).producer_id(), wide_nodes as usize);
    }

    #[test]
    fn producer_idempotence() {
        let helper = StyleHelper::new();
        let variant = LayoutVariant::new(wide_nodes, vec![]);
        assert_eq!(
            variant.produce_nodes(&helper, true),
            variant.produce_nodes(&helper, true)
        );
    }

    #[test]
    fn producer_identity_comparison() {
        let a = FlowDefinition::new(LayoutVariant::new(wide_nodes, vec![]));
        let b = FlowDefinition::new(LayoutVariant::new(wide_nodes, vec![]));
        let c = FlowDefinition::new(LayoutVariant::new(narrow_nodes, vec![]));
        assert!(a.same_producers(&b));
        assert!(!a.same_producers(&c));
    }
}
