//! Scene materialization.
//!
//! A [`Scene`] is the resolved graph for one render pass: the node list a
//! producer returned, plus every edge whose endpoints both exist. Each
//! materialization fully replaces the previous scene; there is no
//! incremental diffing.

use std::collections::HashMap;

use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};

use cipherflow_core::{
    geometry::Bounds,
    model::{Edge, Node},
};

/// The materialized graph for one render pass.
#[derive(Debug)]
pub struct Scene {
    graph: DiGraph<Node, Edge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl Scene {
    /// Builds a scene from produced nodes and the variant's edge list.
    ///
    /// An edge referencing a node id that is absent from `nodes` is a
    /// caller error tolerated here: the edge is dropped and never drawn.
    /// Diagrams are static author-controlled data, so this is deliberately
    /// non-fatal and not surfaced beyond a debug log.
    pub fn materialize(nodes: Vec<Node>, edges: &[Edge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id().to_string();
            let idx = graph.add_node(node);
            node_indices.insert(id, idx);
        }

        for edge in edges {
            match (
                node_indices.get(edge.source()),
                node_indices.get(edge.target()),
            ) {
                (Some(&source), Some(&target)) => {
                    graph.add_edge(source, target, edge.clone());
                }
                _ => {
                    debug!(
                        edge_id = edge.id(),
                        source = edge.source(),
                        target = edge.target();
                        "Dropping edge with missing endpoint"
                    );
                }
            }
        }

        Self {
            graph,
            node_indices,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns an iterator over all nodes in production order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Looks up a node by its diagram-unique id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_indices.get(id).map(|&idx| &self.graph[idx])
    }

    /// Returns an iterator over drawn edges with resolved endpoints.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, &Edge)> {
        self.graph.edge_indices().map(|idx| {
            let (source, target) = self
                .graph
                .edge_endpoints(idx)
                .expect("edge index from edge_indices is valid");
            (&self.graph[source], &self.graph[target], &self.graph[idx])
        })
    }

    /// Bounding box of all node rectangles, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        self.nodes()
            .map(Node::bounds)
            .reduce(|acc, bounds| acc.merge(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipherflow_core::{geometry::Point, style::StyleHelper};

    fn node(id: &str, x: f32, y: f32) -> Node {
        Node::new(id, Point::new(x, y), id, StyleHelper::new().solid("#818cf8"))
    }

    #[test]
    fn materializes_nodes_and_edges() {
        let scene = Scene::materialize(
            vec![node("a", 0.0, 0.0), node("b", 200.0, 0.0)],
            &[Edge::smooth("e1", "a", "b")],
        );
        assert_eq!(scene.node_count(), 2);
        assert_eq!(scene.edge_count(), 1);

        let (source, target, edge) = scene.edges().next().unwrap();
        assert_eq!(source.id(), "a");
        assert_eq!(target.id(), "b");
        assert_eq!(edge.id(), "e1");
    }

    #[test]
    fn drops_edges_with_missing_endpoints() {
        let scene = Scene::materialize(
            vec![node("a", 0.0, 0.0), node("b", 200.0, 0.0)],
            &[
                Edge::smooth("ok", "a", "b"),
                Edge::smooth("no-source", "ghost", "b"),
                Edge::smooth("no-target", "a", "ghost"),
            ],
        );
        assert_eq!(scene.edge_count(), 1);
        assert_eq!(scene.edges().next().unwrap().2.id(), "ok");
    }

    #[test]
    fn empty_scene_has_no_bounds() {
        let scene = Scene::materialize(vec![], &[]);
        assert!(scene.bounds().is_none());
        assert_eq!(scene.node_count(), 0);
    }

    #[test]
    fn bounds_cover_all_nodes() {
        let scene = Scene::materialize(vec![node("a", 0.0, 0.0), node("b", 400.0, 140.0)], &[]);
        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert!(bounds.max_x() >= 400.0);
        assert!(bounds.max_y() >= 140.0);
    }

    #[test]
    fn node_lookup_by_id() {
        let scene = Scene::materialize(vec![node("a", 0.0, 0.0)], &[]);
        assert!(scene.node("a").is_some());
        assert!(scene.node("ghost").is_none());
    }
}
