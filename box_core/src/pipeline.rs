//! # Decomposition Pipeline
//!
//! One call runs the whole chain for a single box:
//!
//! ```text
//! BoxSpec --validate--> solve --> StructuralLayout --+--> build_bom --> Bom
//!                                                    +--> emit_panel --> PanelGeometry
//!                                                    +--> emit_wireframe --> Wireframe
//! ```
//!
//! Validation failures abort before the solver runs, so no partial BOM or
//! geometry is ever produced. Every stage is a pure function of its inputs;
//! nothing is cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use box_core::input::BoxSpec;
//! use box_core::pipeline::{decompose, export_artifacts};
//! use box_core::settings::DesignSettings;
//!
//! let result = decompose(&BoxSpec::default(), &DesignSettings::default()).unwrap();
//! let summary = result.summary();
//! assert_eq!(summary.post_count, 8);
//! assert_eq!(summary.spacing_label(), "600.0 mm");
//!
//! let artifacts = export_artifacts(&result).unwrap();
//! assert!(!artifacts.drawing_dxf.is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bom::{build_bom, Bom};
use crate::errors::BoxResult;
use crate::export::{encode_bom_csv, encode_panel_dxf};
use crate::geometry::{emit_panel, emit_wireframe, PanelGeometry, Wireframe};
use crate::input::BoxSpec;
use crate::settings::DesignSettings;
use crate::solver::{solve, StructuralLayout};

/// File name used for the BOM artifact
pub const BOM_FILE_NAME: &str = "production_bom.csv";
/// File name used for the drawing artifact
pub const DRAWING_FILE_NAME: &str = "side_panel.dxf";

/// Everything derived from one [`BoxSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub spec: BoxSpec,
    pub layout: StructuralLayout,
    pub bom: Bom,
    pub panel: PanelGeometry,
    pub wireframe: Wireframe,
}

impl Decomposition {
    pub fn summary(&self) -> Summary {
        Summary::from_layout(&self.layout)
    }
}

/// Headline metrics for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Posts on one side wall
    pub post_count: u32,
    /// Actual spacing rounded to one decimal place (mm)
    pub actual_spacing_mm: f64,
    /// Skin sheets on one side wall
    pub skin_panel_count: u32,
    /// Post x positions truncated to whole millimetres, as labelled on the preview
    pub post_positions_mm: Vec<u32>,
}

impl Summary {
    pub fn from_layout(layout: &StructuralLayout) -> Self {
        Summary {
            post_count: layout.post_count,
            actual_spacing_mm: (layout.actual_post_spacing_mm * 10.0).round() / 10.0,
            skin_panel_count: layout.skin_panel_count,
            post_positions_mm: layout
                .post_positions()
                .into_iter()
                .map(|x| x.trunc() as u32)
                .collect(),
        }
    }

    /// Spacing formatted with one decimal, e.g. `"555.6 mm"`
    pub fn spacing_label(&self) -> String {
        format!("{:.1} mm", self.actual_spacing_mm)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Posts (one side):   {}", self.post_count)?;
        writeln!(f, "Actual spacing:     {}", self.spacing_label())?;
        write!(f, "Skin panels (side): {}", self.skin_panel_count)
    }
}

/// Downloadable byte streams for one decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub summary: Summary,
    pub bom_csv: Vec<u8>,
    pub drawing_dxf: Vec<u8>,
}

impl Artifacts {
    /// `(file name, bytes)` pairs ready to be written or offered for download
    pub fn files(&self) -> [(&'static str, &[u8]); 2] {
        [
            (BOM_FILE_NAME, self.bom_csv.as_slice()),
            (DRAWING_FILE_NAME, self.drawing_dxf.as_slice()),
        ]
    }
}

/// Validate `spec` against `settings` and derive layout, BOM and geometry.
pub fn decompose(spec: &BoxSpec, settings: &DesignSettings) -> BoxResult<Decomposition> {
    spec.validate(&settings.limits)?;
    debug!(?spec, "validated box dimensions");

    let layout = solve(spec)?;
    let bom = build_bom(spec, &layout, &settings.catalog);
    let panel = emit_panel(spec, &layout, &settings.drilling);
    let wireframe = emit_wireframe(spec, &layout);

    Ok(Decomposition {
        spec: *spec,
        layout,
        bom,
        panel,
        wireframe,
    })
}

/// Encode the BOM table and the DXF drawing.
pub fn export_artifacts(decomposition: &Decomposition) -> BoxResult<Artifacts> {
    let bom_csv = encode_bom_csv(&decomposition.bom)?;
    let drawing_dxf = encode_panel_dxf(&decomposition.panel)?;
    debug!(
        bom_bytes = bom_csv.len(),
        dxf_bytes = drawing_dxf.len(),
        "encoded artifacts"
    );

    Ok(Artifacts {
        summary: decomposition.summary(),
        bom_csv,
        drawing_dxf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PartKind;
    use crate::errors::BoxError;

    #[test]
    fn test_reference_scenario() {
        let spec = BoxSpec::new(4200, 2100, 2100, 600, 1200);
        let result = decompose(&spec, &DesignSettings::default()).unwrap();

        assert_eq!(result.layout.post_count, 8);
        assert_eq!(result.layout.actual_post_spacing_mm, 600.0);
        assert_eq!(result.layout.skin_panel_count, 4);
        assert_eq!(result.bom.line(PartKind::SidePost).unwrap().quantity, 16);
        assert_eq!(result.bom.line(PartKind::SideSkin).unwrap().quantity, 8);
        assert_eq!(result.panel.post_lines.len(), 8);
        assert_eq!(result.wireframe.post_edges.len(), 8);
    }

    #[test]
    fn test_invalid_input_stops_pipeline() {
        let spec = BoxSpec {
            width_mm: 3000,
            ..BoxSpec::default()
        };
        match decompose(&spec, &DesignSettings::default()) {
            Err(BoxError::InvalidDimension { field, .. }) => assert_eq!(field, "width_mm"),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_rounds_spacing() {
        let spec = BoxSpec::new(5000, 2100, 2100, 600, 1000);
        let summary = decompose(&spec, &DesignSettings::default())
            .unwrap()
            .summary();
        assert_eq!(summary.actual_spacing_mm, 555.6);
        assert_eq!(summary.spacing_label(), "555.6 mm");
        assert_eq!(summary.post_positions_mm[1], 555);
        assert_eq!(summary.post_positions_mm.last(), Some(&5000));
    }

    #[test]
    fn test_summary_display() {
        let summary = decompose(&BoxSpec::default(), &DesignSettings::default())
            .unwrap()
            .summary();
        let text = summary.to_string();
        assert!(text.contains("Posts (one side):   8"));
        assert!(text.contains("600.0 mm"));
    }

    #[test]
    fn test_exports_are_byte_identical_across_runs() {
        let spec = BoxSpec::new(8123, 2333, 2777, 455, 1500);
        let settings = DesignSettings::default();
        let first = export_artifacts(&decompose(&spec, &settings).unwrap()).unwrap();
        let second = export_artifacts(&decompose(&spec, &settings).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_artifact_file_names() {
        let artifacts =
            export_artifacts(&decompose(&BoxSpec::default(), &DesignSettings::default()).unwrap())
                .unwrap();
        let names: Vec<&str> = artifacts.files().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, [BOM_FILE_NAME, DRAWING_FILE_NAME]);
    }

    #[test]
    fn test_decomposition_json() {
        let result = decompose(&BoxSpec::default(), &DesignSettings::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: Decomposition = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }
}
