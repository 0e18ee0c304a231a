//! 3D wireframe preview.
//!
//! Twelve edges of the bounding prism plus one vertical per post along the
//! `y = 0` wall. Posts are not mirrored onto the opposite wall; this is a
//! preview for display, not an export.

use serde::{Deserialize, Serialize};

use super::{Point3, Segment3};
use crate::input::BoxSpec;
use crate::solver::StructuralLayout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wireframe {
    /// Bottom rectangle, top rectangle, then the four corner verticals
    pub box_edges: Vec<Segment3>,
    /// Post verticals from `(x, 0, 0)` to `(x, 0, H)`
    pub post_edges: Vec<Segment3>,
}

impl Wireframe {
    /// All segments, box edges first
    pub fn segments(&self) -> impl Iterator<Item = &Segment3> {
        self.box_edges.iter().chain(self.post_edges.iter())
    }
}

pub fn emit_wireframe(spec: &BoxSpec, layout: &StructuralLayout) -> Wireframe {
    let l = f64::from(spec.length_mm);
    let w = f64::from(spec.width_mm);
    let h = f64::from(spec.height_mm);

    let bottom = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(l, 0.0, 0.0),
        Point3::new(l, w, 0.0),
        Point3::new(0.0, w, 0.0),
    ];
    let top = bottom.map(|p| Point3::new(p.x, p.y, h));

    let mut box_edges = Vec::with_capacity(12);
    for ring in [&bottom, &top] {
        for i in 0..4 {
            box_edges.push(Segment3 {
                start: ring[i],
                end: ring[(i + 1) % 4],
            });
        }
    }
    for (b, t) in bottom.iter().zip(top.iter()) {
        box_edges.push(Segment3 { start: *b, end: *t });
    }

    let post_edges = layout
        .post_positions()
        .into_iter()
        .map(|x| Segment3 {
            start: Point3::new(x, 0.0, 0.0),
            end: Point3::new(x, 0.0, h),
        })
        .collect();

    Wireframe {
        box_edges,
        post_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn reference() -> Wireframe {
        let spec = BoxSpec::new(4200, 2100, 2300, 600, 1200);
        let layout = solve(&spec).unwrap();
        emit_wireframe(&spec, &layout)
    }

    #[test]
    fn test_twelve_box_edges() {
        let frame = reference();
        assert_eq!(frame.box_edges.len(), 12);

        let lengths: Vec<f64> = frame.box_edges.iter().map(|e| e.length()).collect();
        assert_eq!(lengths.iter().filter(|&&l| l == 4200.0).count(), 4);
        assert_eq!(lengths.iter().filter(|&&l| l == 2100.0).count(), 4);
        assert_eq!(lengths.iter().filter(|&&l| l == 2300.0).count(), 4);
    }

    #[test]
    fn test_posts_on_one_wall_only() {
        let frame = reference();
        assert_eq!(frame.post_edges.len(), 8);
        for edge in &frame.post_edges {
            assert_eq!(edge.start.y, 0.0);
            assert_eq!(edge.end.y, 0.0);
            assert_eq!(edge.start.z, 0.0);
            assert_eq!(edge.end.z, 2300.0);
        }
        assert_eq!(frame.segments().count(), 20);
    }
}
