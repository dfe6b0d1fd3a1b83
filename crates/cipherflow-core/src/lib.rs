//! Cipherflow Core Types and Definitions
//!
//! This crate provides the foundational types for the Cipherflow diagram
//! renderer. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Style**: Appearance modes and node visual styles ([`style`] module)
//! - **Model**: Flow diagram nodes and edges ([`model`] module)

pub mod color;
pub mod geometry;
pub mod model;
pub mod style;
