//! # Design Settings
//!
//! Application-level configuration: allowed input ranges, the standard skin
//! widths on offer, the drilling pattern and the part catalog. Settings are
//! plain JSON so a shop can ship its own table next to the binary.
//!
//! ```rust
//! use box_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::default();
//! assert_eq!(settings.limits.length_mm.min_mm, 2000);
//! assert_eq!(settings.drilling.interval_mm, 200.0);
//! settings.validate().unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::PartCatalog;
use crate::errors::{BoxError, BoxResult};

/// Inclusive millimetre range for one input dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min_mm: u32,
    pub max_mm: u32,
}

impl DimensionRange {
    pub const fn new(min_mm: u32, max_mm: u32) -> Self {
        DimensionRange { min_mm, max_mm }
    }

    /// Whether `value_mm` lies inside the range (bounds included)
    pub fn contains(&self, value_mm: u32) -> bool {
        (self.min_mm..=self.max_mm).contains(&value_mm)
    }

    fn validate(&self, field: &str) -> BoxResult<()> {
        if self.min_mm == 0 {
            return Err(BoxError::invalid_settings(
                format!("limits.{}.min_mm", field),
                "lower bound must be positive",
            ));
        }
        if self.min_mm > self.max_mm {
            return Err(BoxError::invalid_settings(
                format!("limits.{}", field),
                format!("min {} exceeds max {}", self.min_mm, self.max_mm),
            ));
        }
        Ok(())
    }
}

/// Allowed input ranges for a [`BoxSpec`](crate::input::BoxSpec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignLimits {
    pub length_mm: DimensionRange,
    pub width_mm: DimensionRange,
    pub height_mm: DimensionRange,
    pub max_post_spacing_mm: DimensionRange,
    /// Standard skin sheet widths stocked by the shop
    pub skin_panel_widths_mm: Vec<u32>,
}

impl Default for DesignLimits {
    fn default() -> Self {
        DesignLimits {
            length_mm: DimensionRange::new(2000, 9600),
            width_mm: DimensionRange::new(1800, 2600),
            height_mm: DimensionRange::new(1500, 3000),
            max_post_spacing_mm: DimensionRange::new(400, 800),
            skin_panel_widths_mm: vec![1000, 1200, 1500],
        }
    }
}

impl DesignLimits {
    pub fn validate(&self) -> BoxResult<()> {
        self.length_mm.validate("length_mm")?;
        self.width_mm.validate("width_mm")?;
        self.height_mm.validate("height_mm")?;
        self.max_post_spacing_mm.validate("max_post_spacing_mm")?;

        if self.skin_panel_widths_mm.is_empty() {
            return Err(BoxError::invalid_settings(
                "limits.skin_panel_widths_mm",
                "at least one standard width is required",
            ));
        }
        if self.skin_panel_widths_mm.contains(&0) {
            return Err(BoxError::invalid_settings(
                "limits.skin_panel_widths_mm",
                "widths must be positive",
            ));
        }
        Ok(())
    }
}

/// Drill-hole marking pattern along each post line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillPattern {
    /// Vertical pitch between holes; the first hole sits one pitch above the floor
    pub interval_mm: f64,
    /// Marker circle radius, independent of box size
    pub radius_mm: f64,
}

impl Default for DrillPattern {
    fn default() -> Self {
        DrillPattern {
            interval_mm: 200.0,
            radius_mm: 5.0,
        }
    }
}

impl DrillPattern {
    pub fn validate(&self) -> BoxResult<()> {
        if !(self.interval_mm.is_finite() && self.interval_mm > 0.0) {
            return Err(BoxError::invalid_settings(
                "drilling.interval_mm",
                "interval must be a positive number",
            ));
        }
        if !(self.radius_mm.is_finite() && self.radius_mm > 0.0) {
            return Err(BoxError::invalid_settings(
                "drilling.radius_mm",
                "radius must be a positive number",
            ));
        }
        Ok(())
    }
}

/// Everything the pipeline needs besides the box dimensions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    pub limits: DesignLimits,
    pub catalog: PartCatalog,
    pub drilling: DrillPattern,
}

impl DesignSettings {
    /// Check every table. Called when settings are loaded from disk.
    pub fn validate(&self) -> BoxResult<()> {
        self.limits.validate()?;
        self.catalog.validate()?;
        self.drilling.validate()
    }
}
