//! # box_core - Cargo-Box Structural Decomposition Engine
//!
//! `box_core` turns cargo-box dimensions into a manufacturable side-wall
//! layout: evenly spaced posts, a skin sheet count, a bill of materials and
//! DXF cutting geometry with drill-hole marks.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every stage is a pure function of its inputs
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: structured error types naming the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use box_core::{decompose, export_artifacts, BoxSpec, DesignSettings};
//!
//! let spec = BoxSpec::new(4200, 2100, 2100, 600, 1200);
//! let result = decompose(&spec, &DesignSettings::default()).unwrap();
//! assert_eq!(result.layout.post_count, 8);
//!
//! let artifacts = export_artifacts(&result).unwrap();
//! let csv = String::from_utf8(artifacts.bom_csv).unwrap();
//! assert!(csv.contains("Side skin"));
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Box dimensions and range validation
//! - [`solver`] - Post count, spacing and skin count
//! - [`bom`] - Bill of materials
//! - [`catalog`] - Static part catalog used by the BOM
//! - [`geometry`] - 2D panel drawing and 3D wireframe preview
//! - [`export`] - CSV and DXF encoders
//! - [`pipeline`] - End-to-end decomposition and artifacts
//! - [`settings`] - Limits, drill pattern and catalog configuration
//! - [`project`] - Multi-design project container
//! - [`file_io`] - Atomic saves for projects and artifacts
//! - [`errors`] - Structured error types

pub mod bom;
pub mod catalog;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod geometry;
pub mod input;
pub mod pipeline;
pub mod project;
pub mod settings;
pub mod solver;

// Re-export commonly used types at crate root for convenience
pub use errors::{BoxError, BoxResult};
pub use input::BoxSpec;
pub use pipeline::{decompose, export_artifacts, Artifacts, Decomposition, Summary};
pub use project::{BoxDesign, BoxProject};
pub use settings::DesignSettings;
pub use solver::{solve, StructuralLayout};
