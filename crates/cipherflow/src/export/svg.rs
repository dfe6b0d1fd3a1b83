//! SVG rendering of materialized scenes.
//!
//! Produces a static, non-interactive SVG: rounded-rect nodes with
//! centered labels and animated smooth-step edge paths, wrapped in a group
//! carrying the viewport fit transform.

use log::info;
use std::{fs::File, io::Write as _};

use svg::{
    Document,
    node::element::{Group, Path, Rectangle, Text},
};

use cipherflow_core::{
    color::Color,
    geometry::{Point, Size},
    model::{AnchorSide, Node},
    style::NodeStyle,
};

use crate::{export, scene::Scene, viewport::Viewport};

/// Stroke color of edge paths, identical in both appearance modes.
const EDGE_STROKE: &str = "#b1b1b7";

/// Dash length driving the edge animation.
const EDGE_DASH: f32 = 5.0;

/// Corner radius of smooth-step bends.
const BEND_RADIUS: f32 = 5.0;

/// SVG exporter for rendered scenes.
#[derive(Debug, Default)]
pub struct SvgExporter {
    background: Option<Color>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a background color painted behind the diagram.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Renders a scene into an SVG document sized to the container.
    pub fn render_document(
        &self,
        scene: &Scene,
        container: Size,
        viewport: Viewport,
        container_class: Option<&str>,
    ) -> Document {
        let mut document = Document::new()
            .set("width", container.width())
            .set("height", container.height())
            .set(
                "viewBox",
                (0.0, 0.0, container.width(), container.height()),
            );

        if let Some(class) = container_class {
            document = document.set("class", class);
        }

        if let Some(background) = &self.background {
            document = document.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background.to_string()),
            );
        }

        let mut group = Group::new().set(
            "transform",
            format!(
                "translate({}, {}) scale({})",
                viewport.offset().x(),
                viewport.offset().y(),
                viewport.zoom()
            ),
        );

        // Edges first so node rectangles paint over the path ends.
        for (source, target, _edge) in scene.edges() {
            group = group.add(edge_path(source, target));
        }
        for node in scene.nodes() {
            group = group.add(node_rect(node));
            group = group.add(node_label(node));
        }

        document.add(group)
    }

    /// Renders a scene to an SVG string.
    pub fn render_string(
        &self,
        scene: &Scene,
        container: Size,
        viewport: Viewport,
        container_class: Option<&str>,
    ) -> String {
        self.render_document(scene, container, viewport, container_class)
            .to_string()
    }

    /// Writes the rendered SVG to a file.
    pub fn write_file(
        &self,
        file_name: &str,
        scene: &Scene,
        container: Size,
        viewport: Viewport,
        container_class: Option<&str>,
    ) -> Result<(), export::Error> {
        info!(file_name; "Creating SVG file");
        let document = self.render_document(scene, container, viewport, container_class);
        let mut file = File::create(file_name)?;
        write!(file, "{document}")?;
        Ok(())
    }
}

fn node_rect(node: &Node) -> Rectangle {
    let size = node.size();
    Rectangle::new()
        .set("x", node.position().x())
        .set("y", node.position().y())
        .set("width", size.width())
        .set("height", size.height())
        .set("rx", NodeStyle::CORNER_RADIUS)
        .set("fill", node.style().fill())
}

fn node_label(node: &Node) -> Text {
    let center = node.bounds().center();
    Text::new(node.label())
        .set("x", center.x())
        .set("y", center.y())
        .set("fill", NodeStyle::TEXT_COLOR)
        .set("font-size", NodeStyle::FONT_SIZE)
        .set("font-family", "sans-serif")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
}

fn edge_path(source: &Node, target: &Node) -> Path {
    let start = source.anchor_point(source.anchors().source());
    let end = target.anchor_point(target.anchors().target());
    let waypoints = smooth_step_waypoints(start, end, source.anchors().source());

    Path::new()
        .set("d", rounded_path_data(&waypoints))
        .set("fill", "none")
        .set("stroke", EDGE_STROKE)
        .set("stroke-width", 1)
        .set("stroke-dasharray", EDGE_DASH)
        .add(
            svg::node::element::Animate::new()
                .set("attributeName", "stroke-dashoffset")
                .set("from", EDGE_DASH * 2.0)
                .set("to", 0)
                .set("dur", "0.5s")
                .set("repeatCount", "indefinite"),
        )
}

/// Orthogonal waypoints for a smooth-step edge.
///
/// The elbow orientation follows the source anchor: a horizontal exit
/// bends at the midpoint x, a vertical exit at the midpoint y. Collinear
/// waypoints are removed so straight edges stay a single segment.
fn smooth_step_waypoints(start: Point, end: Point, exit: AnchorSide) -> Vec<Point> {
    let horizontal_exit = matches!(exit, AnchorSide::Left | AnchorSide::Right);

    let raw = if horizontal_exit {
        let mid_x = (start.x() + end.x()) / 2.0;
        vec![
            start,
            Point::new(mid_x, start.y()),
            Point::new(mid_x, end.y()),
            end,
        ]
    } else {
        let mid_y = (start.y() + end.y()) / 2.0;
        vec![
            start,
            Point::new(start.x(), mid_y),
            Point::new(end.x(), mid_y),
            end,
        ]
    };

    let mut waypoints: Vec<Point> = Vec::with_capacity(raw.len());
    for point in raw {
        if waypoints.last() == Some(&point) {
            continue;
        }
        // Drop the middle of three collinear points.
        if waypoints.len() >= 2 {
            let a = waypoints[waypoints.len() - 2];
            let b = waypoints[waypoints.len() - 1];
            let collinear = (a.x() == b.x() && b.x() == point.x())
                || (a.y() == b.y() && b.y() == point.y());
            if collinear {
                waypoints.pop();
            }
        }
        waypoints.push(point);
    }
    waypoints
}

/// Path data for an orthogonal polyline with rounded bends.
///
/// Interior vertices are approached up to [`BEND_RADIUS`] early and left
/// via a quadratic bezier through the vertex, clamped so short segments
/// never overshoot.
fn rounded_path_data(waypoints: &[Point]) -> String {
    use std::fmt::Write as _;

    let mut data = String::new();
    let first = waypoints[0];
    let _ = write!(data, "M {} {}", first.x(), first.y());

    for i in 1..waypoints.len() {
        let current = waypoints[i];
        if i + 1 == waypoints.len() {
            let _ = write!(data, " L {} {}", current.x(), current.y());
            break;
        }

        let previous = waypoints[i - 1];
        let next = waypoints[i + 1];

        let len_in = segment_length(previous, current);
        let len_out = segment_length(current, next);
        let radius = BEND_RADIUS.min(len_in / 2.0).min(len_out / 2.0);

        let approach = point_towards(current, previous, radius);
        let depart = point_towards(current, next, radius);

        let _ = write!(
            data,
            " L {} {} Q {} {} {} {}",
            approach.x(),
            approach.y(),
            current.x(),
            current.y(),
            depart.x(),
            depart.y()
        );
    }
    data
}

fn segment_length(a: Point, b: Point) -> f32 {
    (b.x() - a.x()).hypot(b.y() - a.y())
}

/// A point `distance` away from `from` in the direction of `towards`.
fn point_towards(from: Point, towards: Point, distance: f32) -> Point {
    let length = segment_length(from, towards);
    if length == 0.0 {
        return from;
    }
    let t = distance / length;
    Point::new(
        from.x() + (towards.x() - from.x()) * t,
        from.y() + (towards.y() - from.y()) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipherflow_core::{model::Edge, style::StyleHelper};

    fn scene() -> Scene {
        let helper = StyleHelper::new();
        Scene::materialize(
            vec![
                Node::new("in", Point::new(0.0, 0.0), "Plaintext", helper.solid("#818cf8"))
                    .source_anchor(AnchorSide::Right),
                Node::new("out", Point::new(220.0, 70.0), "Ciphertext", helper.solid("#fbbf24"))
                    .target_anchor(AnchorSide::Left),
            ],
            &[Edge::smooth("e1", "in", "out")],
        )
    }

    #[test]
    fn renders_complete_svg() {
        let svg = SvgExporter::new().render_string(
            &scene(),
            Size::new(600.0, 400.0),
            Viewport::identity(),
            None,
        );
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("Plaintext"));
        assert!(svg.contains("Ciphertext"));
        assert!(svg.contains("#818cf8"));
    }

    #[test]
    fn edges_are_animated() {
        let svg = SvgExporter::new().render_string(
            &scene(),
            Size::new(600.0, 400.0),
            Viewport::identity(),
            None,
        );
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("stroke-dashoffset"));
        assert!(svg.contains("repeatCount"));
    }

    #[test]
    fn container_class_is_emitted() {
        let svg = SvgExporter::new().render_string(
            &scene(),
            Size::new(600.0, 400.0),
            Viewport::identity(),
            Some("aead-flow-wrapper"),
        );
        assert!(svg.contains("class=\"aead-flow-wrapper\""));
    }

    #[test]
    fn background_rect_is_optional() {
        let plain = SvgExporter::new().render_string(
            &scene(),
            Size::new(600.0, 400.0),
            Viewport::identity(),
            None,
        );
        assert!(!plain.contains("100%"));

        let painted = SvgExporter::new()
            .with_background(Color::new("#0d1117").unwrap())
            .render_string(&scene(), Size::new(600.0, 400.0), Viewport::identity(), None);
        assert!(painted.contains("100%"));
    }

    #[test]
    fn straight_edge_has_no_bend() {
        // Same y on both anchors with a horizontal exit: one straight line.
        let waypoints = smooth_step_waypoints(
            Point::new(0.0, 10.0),
            Point::new(100.0, 10.0),
            AnchorSide::Right,
        );
        assert_eq!(waypoints.len(), 2);
        let data = rounded_path_data(&waypoints);
        assert!(!data.contains('Q'));
    }

    #[test]
    fn elbow_edge_rounds_both_bends() {
        let waypoints = smooth_step_waypoints(
            Point::new(0.0, 0.0),
            Point::new(100.0, 80.0),
            AnchorSide::Right,
        );
        assert_eq!(waypoints.len(), 4);
        let data = rounded_path_data(&waypoints);
        assert_eq!(data.matches('Q').count(), 2);
    }

    #[test]
    fn bend_radius_clamps_on_short_segments() {
        let short = point_towards(Point::new(0.0, 0.0), Point::new(4.0, 0.0), 2.0);
        assert_eq!(short.x(), 2.0);

        let degenerate = point_towards(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 5.0);
        assert_eq!(degenerate, Point::new(1.0, 1.0));
    }

    #[test]
    fn viewport_transform_is_applied() {
        let viewport = Viewport::fit(
            scene().bounds().unwrap(),
            Size::new(600.0, 400.0),
        );
        let svg = SvgExporter::new().render_string(
            &scene(),
            Size::new(600.0, 400.0),
            viewport,
            None,
        );
        assert!(svg.contains("translate("));
        assert!(svg.contains("scale("));
    }
}
