//! The flow renderer engine.
//!
//! One [`FlowRenderer`] instance backs one diagram on one page. The host
//! environment drives it with explicit events: `attach` when the container
//! element appears, `resize` for every observed size change,
//! `set_appearance` when the ambient theme flips, and `run_frame` at the
//! next paint opportunity. Materialization is synchronous with its
//! triggering event; the fit-to-view is deferred and coalesced so that a
//! burst of resize events produces a single fit.
//!
//! The rendered graph is strictly read-only. Nodes are never draggable,
//! connectable, or selectable, and no caller-facing switch exists to change
//! that.

use log::{debug, trace};

use cipherflow_core::{
    geometry::Size,
    style::{Appearance, StyleHelper},
};

use crate::{
    export,
    export::svg::SvgExporter,
    scene::Scene,
    variant::FlowDefinition,
    viewport::{NARROW_BREAKPOINT, Viewport},
};

/// Lifecycle phase of a renderer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but the container never attached; all events are no-ops.
    Uninitialized,
    /// Size observation is active but nothing has been materialized yet.
    Observing,
    /// A producer is being invoked for the active variant.
    Materializing,
    /// A scene is materialized and fitted (or a fit is pending).
    Rendered,
    /// The container detached; terminal. Stale events are ignored.
    Destroyed,
}

/// Renders one flow diagram responsively into its container.
#[derive(Debug)]
pub struct FlowRenderer {
    definition: FlowDefinition,
    appearance: Appearance,
    helper: StyleHelper,
    phase: Phase,
    container: Size,
    is_narrow: bool,
    scene: Option<Scene>,
    viewport: Viewport,
    fit_pending: bool,
}

impl FlowRenderer {
    /// Creates a renderer in the `Uninitialized` phase.
    pub fn new(definition: FlowDefinition, appearance: Appearance) -> Self {
        Self {
            definition,
            appearance,
            helper: StyleHelper::new(),
            phase: Phase::Uninitialized,
            container: Size::default(),
            is_narrow: false,
            scene: None,
            viewport: Viewport::identity(),
            fit_pending: false,
        }
    }

    /// Starts size observation with the initial container size.
    ///
    /// Attaching materializes the active variant immediately and schedules
    /// the first fit. Attaching a destroyed renderer is ignored.
    pub fn attach(&mut self, container: Size) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.phase = Phase::Observing;
        self.observe_resize(container);
    }

    /// Handles an observed container resize.
    ///
    /// Ignored before `attach` and after `detach`; a renderer whose
    /// container never attached stays a silent no-op rather than an error.
    pub fn resize(&mut self, container: Size) {
        match self.phase {
            Phase::Uninitialized | Phase::Destroyed => {}
            _ => self.observe_resize(container),
        }
    }

    /// Switches the appearance mode, rematerializing when it changed.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.appearance == appearance {
            return;
        }
        self.appearance = appearance;
        match self.phase {
            Phase::Uninitialized | Phase::Destroyed => {}
            _ => self.materialize(),
        }
    }

    /// Replaces the diagram definition.
    ///
    /// Rematerializes only when the producer identity actually changed;
    /// swapping in an identical definition is a no-op.
    pub fn set_definition(&mut self, definition: FlowDefinition) {
        let changed = !self.definition.same_producers(&definition);
        self.definition = definition;
        if !changed {
            return;
        }
        match self.phase {
            Phase::Uninitialized | Phase::Destroyed => {}
            _ => self.materialize(),
        }
    }

    /// Drains the pending fit at the next paint opportunity.
    ///
    /// Any number of resize/appearance/definition events between two frames
    /// collapse into one fit here. Returns whether a fit ran.
    pub fn run_frame(&mut self) -> bool {
        if self.phase == Phase::Destroyed || !self.fit_pending {
            return false;
        }
        self.fit_pending = false;

        if let Some(bounds) = self.scene.as_ref().and_then(Scene::bounds) {
            self.viewport = Viewport::fit(bounds, self.container);
            trace!(
                zoom = self.viewport.zoom(),
                container_width = self.container.width(),
                container_height = self.container.height();
                "Fitted viewport"
            );
        }
        true
    }

    /// Releases the instance when the container detaches. Terminal.
    pub fn detach(&mut self) {
        self.phase = Phase::Destroyed;
        self.scene = None;
        self.fit_pending = false;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_narrow(&self) -> bool {
        self.is_narrow
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn definition(&self) -> &FlowDefinition {
        &self.definition
    }

    /// The scene of the last materialization, if any.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// The fit transform of the last drained fit.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Renders the current scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns a render error when nothing has been materialized yet,
    /// which includes the `Uninitialized` and `Destroyed` phases.
    pub fn render_svg(&self, exporter: &SvgExporter) -> Result<String, export::Error> {
        let scene = self
            .scene
            .as_ref()
            .ok_or_else(|| export::Error::Render("no materialized scene".to_string()))?;
        Ok(exporter.render_string(
            scene,
            self.container,
            self.viewport,
            self.definition.container_class(),
        ))
    }

    fn observe_resize(&mut self, container: Size) {
        self.container = container;
        self.is_narrow = container.width() < NARROW_BREAKPOINT;
        // No hysteresis band: a width oscillating exactly at the breakpoint
        // re-selects the variant on every event.
        self.materialize();
    }

    fn materialize(&mut self) {
        self.phase = Phase::Materializing;

        let variant = self.definition.active_variant(self.is_narrow);
        let nodes = variant.produce_nodes(&self.helper, self.appearance.is_dark());
        let scene = Scene::materialize(nodes, variant.edges());
        debug!(
            nodes_count = scene.node_count(),
            edges_count = scene.edge_count(),
            narrow = self.is_narrow,
            dark = self.appearance.is_dark();
            "Materialized scene"
        );

        self.scene = Some(scene);
        self.phase = Phase::Rendered;
        self.fit_pending = true;
    }
}
