//! # Geometry
//!
//! Vector geometry derived from a [`StructuralLayout`](crate::solver::StructuralLayout):
//!
//! - [`panel`] - 2D side-panel drawing (outline, post lines, drill holes),
//!   the only geometry that is exported to CAD
//! - [`wireframe`] - 3D box preview (twelve prism edges plus posts on one wall)
//!
//! Coordinates are millimetres. The panel's x axis runs along the box length
//! and y runs up the wall; the wireframe adds z for height and uses y for
//! box width.

pub mod panel;
pub mod wireframe;

use serde::{Deserialize, Serialize};

pub use panel::{emit_panel, DrillHole, PanelGeometry};
pub use wireframe::{emit_wireframe, Wireframe};

/// 2D point (mm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

/// 3D point (mm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }
}

/// Straight 2D segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Straight 3D segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment3 {
    pub start: Point3,
    pub end: Point3,
}

impl Segment3 {
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let dz = self.end.z - self.start.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
