//! # Box Dimensions
//!
//! [`BoxSpec`] is the only input to the pipeline. All values are whole
//! millimetres, matching what a shop floor measures and orders.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length_mm": 4200,
//!   "width_mm": 2100,
//!   "height_mm": 2100,
//!   "max_post_spacing_mm": 600,
//!   "skin_panel_width_mm": 1200
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BoxError, BoxResult};
use crate::settings::{DesignLimits, DimensionRange};

/// Cargo-box dimensions plus the two layout constraints.
///
/// `max_post_spacing_mm` may exceed `length_mm`; the solver then produces a
/// single span with one post at each end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Box length along the side wall (mm)
    pub length_mm: u32,
    /// Box width, i.e. cross-beam length (mm)
    pub width_mm: u32,
    /// Side wall height (mm)
    pub height_mm: u32,
    /// Largest permitted distance between adjacent posts (mm)
    pub max_post_spacing_mm: u32,
    /// Standard skin sheet width (mm)
    pub skin_panel_width_mm: u32,
}

impl Default for BoxSpec {
    fn default() -> Self {
        BoxSpec {
            length_mm: 4200,
            width_mm: 2100,
            height_mm: 2100,
            max_post_spacing_mm: 600,
            skin_panel_width_mm: 1200,
        }
    }
}

impl BoxSpec {
    pub fn new(
        length_mm: u32,
        width_mm: u32,
        height_mm: u32,
        max_post_spacing_mm: u32,
        skin_panel_width_mm: u32,
    ) -> Self {
        BoxSpec {
            length_mm,
            width_mm,
            height_mm,
            max_post_spacing_mm,
            skin_panel_width_mm,
        }
    }

    /// Check every field against `limits`.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// returned as [`BoxError::InvalidDimension`].
    ///
    /// ```rust
    /// use box_core::input::BoxSpec;
    /// use box_core::settings::DesignLimits;
    ///
    /// let mut spec = BoxSpec::default();
    /// spec.skin_panel_width_mm = 1100;
    /// let err = spec.validate(&DesignLimits::default()).unwrap_err();
    /// assert_eq!(err.field(), Some("skin_panel_width_mm"));
    /// ```
    pub fn validate(&self, limits: &DesignLimits) -> BoxResult<()> {
        check_range("length_mm", self.length_mm, &limits.length_mm)?;
        check_range("width_mm", self.width_mm, &limits.width_mm)?;
        check_range("height_mm", self.height_mm, &limits.height_mm)?;
        check_range(
            "max_post_spacing_mm",
            self.max_post_spacing_mm,
            &limits.max_post_spacing_mm,
        )?;

        if !limits.skin_panel_widths_mm.contains(&self.skin_panel_width_mm) {
            let allowed: Vec<String> = limits
                .skin_panel_widths_mm
                .iter()
                .map(|w| w.to_string())
                .collect();
            return Err(BoxError::invalid_dimension(
                "skin_panel_width_mm",
                self.skin_panel_width_mm.to_string(),
                format!("must be one of {{{}}}", allowed.join(", ")),
            ));
        }
        Ok(())
    }
}

fn check_range(field: &str, value_mm: u32, range: &DimensionRange) -> BoxResult<()> {
    if value_mm == 0 {
        return Err(BoxError::invalid_dimension(
            field,
            value_mm.to_string(),
            "must be positive",
        ));
    }
    if !range.contains(value_mm) {
        return Err(BoxError::invalid_dimension(
            field,
            value_mm.to_string(),
            format!("must be between {} and {} mm", range.min_mm, range.max_mm),
        ));
    }
    Ok(())
}
