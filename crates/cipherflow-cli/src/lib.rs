//! CLI logic for the Cipherflow diagram tool.
//!
//! Renders a named catalog diagram at a simulated container size and
//! appearance mode, and writes the fitted SVG to the output file.

mod args;
mod config;

pub use args::Args;

use log::info;

use cipherflow::{CipherflowError, FlowRenderer, SvgExporter, catalog, export};
use cipherflow_core::{geometry::Size, style::Appearance};

/// Run the Cipherflow CLI application
///
/// # Errors
///
/// Returns `CipherflowError` for:
/// - Unknown diagram names
/// - Configuration loading errors
/// - File I/O errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CipherflowError> {
    if args.list {
        for name in catalog::NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(diagram_name) = args.diagram.as_deref() else {
        return Err(CipherflowError::Config(
            "No diagram name given; use --list to see the catalog".to_string(),
        ));
    };

    info!(
        diagram = diagram_name,
        output_path = args.output;
        "Rendering diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let definition = catalog::by_name(diagram_name)
        .ok_or_else(|| CipherflowError::UnknownDiagram(diagram_name.to_string()))?;

    // CLI flag wins over the config file; the default is light.
    let appearance = match args.theme.as_deref() {
        Some("dark") => Appearance::Dark,
        Some(_) => Appearance::Light,
        None => app_config.theme().unwrap_or_default(),
    };

    let mut renderer = FlowRenderer::new(definition, appearance);
    renderer.attach(Size::new(args.width, args.height));
    renderer.run_frame();

    let mut exporter = SvgExporter::new();
    if let Some(background) = app_config
        .style()
        .background_color()
        .map_err(CipherflowError::Config)?
    {
        exporter = exporter.with_background(background);
    }

    let scene = renderer
        .scene()
        .ok_or_else(|| export::Error::Render("no materialized scene".to_string()))?;
    exporter.write_file(
        &args.output,
        scene,
        renderer.container(),
        renderer.viewport(),
        renderer.definition().container_class(),
    )?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
