//! 2D side-panel geometry.
//!
//! The outline is the closed rectangle `(0,0) (L,0) (L,H) (0,H)`. Every post
//! becomes a vertical line from `y = 0` to `y = H`, and each post line gets
//! drill markers at `interval, 2*interval, ...` strictly below `H`, so the
//! top edge never receives a hole.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Point2, Segment2};
use crate::input::BoxSpec;
use crate::settings::DrillPattern;
use crate::solver::StructuralLayout;

/// Drill-hole marker on a post line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillHole {
    /// Index of the post this hole belongs to
    pub post_index: u32,
    pub center: Point2,
    pub radius_mm: f64,
}

/// Cutting geometry for one side wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Outline corners, counter-clockwise from the origin. Implicitly closed.
    pub outline: [Point2; 4],
    /// One vertical line per post, in post order
    pub post_lines: Vec<Segment2>,
    /// Drill markers grouped by post, bottom to top
    pub drill_holes: Vec<DrillHole>,
}

impl PanelGeometry {
    pub fn width_mm(&self) -> f64 {
        self.outline[2].x
    }

    pub fn height_mm(&self) -> f64 {
        self.outline[2].y
    }

    /// Outline as an explicitly closed path (first vertex repeated)
    pub fn outline_path(&self) -> Vec<Point2> {
        let mut path = self.outline.to_vec();
        path.push(self.outline[0]);
        path
    }

    /// Holes on a single post line
    pub fn holes_on_post(&self, post_index: u32) -> impl Iterator<Item = &DrillHole> {
        self.drill_holes
            .iter()
            .filter(move |h| h.post_index == post_index)
    }
}

/// Heights of the drill holes on one post line.
///
/// An interval that is not positive yields no holes.
pub fn drill_heights(height_mm: f64, interval_mm: f64) -> Vec<f64> {
    if !(interval_mm > 0.0) {
        return Vec::new();
    }
    let mut heights = Vec::new();
    let mut step: u32 = 1;
    loop {
        // multiply instead of accumulate so 200-unit steps stay exact
        let y = interval_mm * f64::from(step);
        if y >= height_mm {
            break;
        }
        heights.push(y);
        step += 1;
    }
    heights
}

/// Emit the side-panel geometry for a solved layout.
pub fn emit_panel(spec: &BoxSpec, layout: &StructuralLayout, drilling: &DrillPattern) -> PanelGeometry {
    let length = f64::from(spec.length_mm);
    let height = f64::from(spec.height_mm);

    let outline = [
        Point2::new(0.0, 0.0),
        Point2::new(length, 0.0),
        Point2::new(length, height),
        Point2::new(0.0, height),
    ];

    let hole_heights = drill_heights(height, drilling.interval_mm);
    let mut post_lines = Vec::with_capacity(layout.post_count as usize);
    let mut drill_holes = Vec::with_capacity(layout.post_count as usize * hole_heights.len());

    for index in 0..layout.post_count {
        let x = layout.post_x(index);
        post_lines.push(Segment2 {
            start: Point2::new(x, 0.0),
            end: Point2::new(x, height),
        });
        drill_holes.extend(hole_heights.iter().map(|&y| DrillHole {
            post_index: index,
            center: Point2::new(x, y),
            radius_mm: drilling.radius_mm,
        }));
    }

    debug!(
        posts = post_lines.len(),
        holes = drill_holes.len(),
        "emitted panel geometry"
    );

    PanelGeometry {
        outline,
        post_lines,
        drill_holes,
    }
}
