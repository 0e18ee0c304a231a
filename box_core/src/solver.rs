//! # Structural Solver
//!
//! Turns box dimensions into a post layout and a skin sheet count.
//!
//! ## Method
//!
//! - Segments: `ceil(length / max_spacing)`, the fewest spans that each stay
//!   within the spacing limit
//! - Posts: segments + 1, so both panel edges carry a post
//! - Actual spacing: `length / segments`, spreading the span evenly
//! - Skin sheets: `ceil(length / skin_width)`; sheets are not aligned to post
//!   lines
//!
//! ## Example
//!
//! ```rust
//! use box_core::input::BoxSpec;
//! use box_core::solver::solve;
//!
//! let layout = solve(&BoxSpec::new(4200, 2100, 2100, 600, 1200)).unwrap();
//! assert_eq!(layout.post_count, 8);
//! assert_eq!(layout.actual_post_spacing_mm, 600.0);
//! assert_eq!(layout.skin_panel_count, 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{BoxError, BoxResult};
use crate::input::BoxSpec;

/// Post and skin quantities derived from a [`BoxSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralLayout {
    /// Posts along one side wall, including both end posts (>= 2)
    pub post_count: u32,
    /// Uniform distance between adjacent posts (mm)
    pub actual_post_spacing_mm: f64,
    /// Skin sheets along one side wall (>= 1)
    pub skin_panel_count: u32,
    /// Side wall length the layout was solved for (mm)
    pub length_mm: u32,
}

impl StructuralLayout {
    /// Number of spans between posts
    pub fn segment_count(&self) -> u32 {
        self.post_count - 1
    }

    /// X position of post `index`, measured from the front edge.
    ///
    /// Computed as `length * i / segments` so the last post lands exactly on
    /// `length` with no rounding drift.
    pub fn post_x(&self, index: u32) -> f64 {
        f64::from(self.length_mm) * f64::from(index) / f64::from(self.segment_count())
    }

    /// X positions of every post in order
    pub fn post_positions(&self) -> Vec<f64> {
        (0..self.post_count).map(|i| self.post_x(i)).collect()
    }
}

/// Solve the post layout and skin count for `spec`.
///
/// `spec` is expected to be validated already; zero length or zero
/// spacing still returns [`BoxError::DegenerateGeometry`] rather than
/// dividing by zero.
pub fn solve(spec: &BoxSpec) -> BoxResult<StructuralLayout> {
    if spec.length_mm == 0 {
        return Err(BoxError::degenerate_geometry(
            "side wall length is zero; no span to divide",
        ));
    }
    if spec.max_post_spacing_mm == 0 {
        return Err(BoxError::degenerate_geometry(
            "maximum post spacing is zero",
        ));
    }
    if spec.skin_panel_width_mm == 0 {
        return Err(BoxError::degenerate_geometry("skin panel width is zero"));
    }

    let segments = spec.length_mm.div_ceil(spec.max_post_spacing_mm);
    if segments == 0 {
        return Err(BoxError::degenerate_geometry("span produced no segments"));
    }
    let post_count = segments + 1;
    let actual_post_spacing_mm = f64::from(spec.length_mm) / f64::from(segments);
    let skin_panel_count = spec.length_mm.div_ceil(spec.skin_panel_width_mm);

    debug!(
        post_count,
        actual_post_spacing_mm,
        skin_panel_count,
        "solved structural layout"
    );

    Ok(StructuralLayout {
        post_count,
        actual_post_spacing_mm,
        skin_panel_count,
        length_mm: spec.length_mm,
    })
}
