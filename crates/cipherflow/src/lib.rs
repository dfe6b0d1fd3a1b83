//! Cipherflow - a responsive renderer for protocol flow diagrams.
//!
//! Renders labeled-node/edge graphs such as authenticated encryption, key
//! exchange, and signature verification flows. One [`FlowRenderer`] backs
//! one diagram: it observes container resizes, selects between a wide and
//! an optional narrow layout variant at a fixed breakpoint, resolves the
//! ambient appearance mode into node fills, and keeps the viewport fitted
//! to the graph with coalesced next-frame fits. The fitted scene exports
//! to SVG.
//!
//! # Examples
//!
//! ```rust
//! use cipherflow::{FlowRenderer, SvgExporter, catalog};
//! use cipherflow_core::{geometry::Size, style::Appearance};
//!
//! let mut renderer = FlowRenderer::new(catalog::aead(), Appearance::Dark);
//! renderer.attach(Size::new(800.0, 600.0));
//! renderer.run_frame();
//!
//! let svg = renderer
//!     .render_svg(&SvgExporter::new())
//!     .expect("attached renderer has a scene");
//! assert!(svg.contains("AEAD.Encrypt"));
//! ```

pub mod catalog;
pub mod config;
pub mod export;

mod error;
mod renderer;
mod scene;
mod variant;
mod viewport;

pub use cipherflow_core::{color, geometry, model, style};

pub use error::CipherflowError;
pub use export::svg::SvgExporter;
pub use renderer::{FlowRenderer, Phase};
pub use scene::Scene;
pub use variant::{FlowDefinition, LayoutVariant, NodeProducer};
pub use viewport::{FIT_PADDING, MAX_ZOOM, MIN_ZOOM, NARROW_BREAKPOINT, Viewport};
