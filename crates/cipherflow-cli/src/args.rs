//! Command-line argument definitions for the Cipherflow CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select a catalog diagram, the simulated
//! container size and theme, and the output path.

use clap::Parser;

/// Command-line arguments for the Cipherflow diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the catalog diagram to render
    #[arg(help = "Name of the diagram (see --list)")]
    pub diagram: Option<String>,

    /// List the available diagram names and exit
    #[arg(long)]
    pub list: bool,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Container width in pixels; widths below 468 select the narrow variant
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Container height in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Appearance mode (light, dark); overrides the config file
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
