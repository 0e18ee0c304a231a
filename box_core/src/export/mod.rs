//! # Export Encoders
//!
//! Serialize pipeline output into downloadable byte streams:
//!
//! - [`bom_table`] - BOM as UTF-8 CSV with a header row
//! - [`dxf`] - side-panel cutting geometry as an ASCII DXF drawing
//!
//! Encoders are deterministic: identical inputs give byte-identical output.

pub mod bom_table;
pub mod dxf;

pub use bom_table::{encode_bom_csv, parse_bom_csv, BOM_CSV_HEADER};
pub use dxf::{encode_panel_dxf, MARKING_LAYER, OUTLINE_LAYER};
