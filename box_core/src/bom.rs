//! # Bill of Materials
//!
//! Derives the cut list for one box from its [`StructuralLayout`]. The BOM
//! always has four lines in catalog order: main rails, cross beams, side
//! posts, side skins. Post and skin quantities are doubled because the box
//! has two side walls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{PartCatalog, PartKind};
use crate::input::BoxSpec;
use crate::solver::StructuralLayout;

/// One BOM row.
///
/// Linear members carry `length_mm`; sheet parts carry `width_mm` and
/// `height_mm`. Inapplicable dimensions are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub part: String,
    pub specification: String,
    pub length_mm: Option<u32>,
    pub width_mm: Option<u32>,
    pub height_mm: Option<u32>,
    pub quantity: u32,
}

impl BomLine {
    fn linear(kind: PartKind, catalog: &PartCatalog, length_mm: u32, quantity: u32) -> Self {
        let entry = catalog.entry(kind);
        BomLine {
            part: entry.name.clone(),
            specification: entry.specification.clone(),
            length_mm: Some(length_mm),
            width_mm: None,
            height_mm: None,
            quantity,
        }
    }

    fn sheet(
        kind: PartKind,
        catalog: &PartCatalog,
        width_mm: u32,
        height_mm: u32,
        quantity: u32,
    ) -> Self {
        let entry = catalog.entry(kind);
        BomLine {
            part: entry.name.clone(),
            specification: entry.specification.clone(),
            length_mm: None,
            width_mm: Some(width_mm),
            height_mm: Some(height_mm),
            quantity,
        }
    }
}

/// Ordered parts list for one box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bom {
    pub lines: Vec<BomLine>,
}

impl Bom {
    /// Line for a given part kind; lines follow [`PartKind::ALL`] order.
    pub fn line(&self, kind: PartKind) -> Option<&BomLine> {
        let index = PartKind::ALL.iter().position(|k| *k == kind)?;
        self.lines.get(index)
    }

    /// Total piece count across all lines
    pub fn total_pieces(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Build the BOM for `spec` solved into `layout`.
///
/// ```rust
/// use box_core::bom::build_bom;
/// use box_core::catalog::{PartCatalog, PartKind};
/// use box_core::input::BoxSpec;
/// use box_core::solver::solve;
///
/// let spec = BoxSpec::default();
/// let layout = solve(&spec).unwrap();
/// let bom = build_bom(&spec, &layout, &PartCatalog::default());
/// assert_eq!(bom.line(PartKind::SidePost).unwrap().quantity, 16);
/// ```
pub fn build_bom(spec: &BoxSpec, layout: &StructuralLayout, catalog: &PartCatalog) -> Bom {
    let lines = vec![
        BomLine::linear(PartKind::MainRail, catalog, spec.length_mm, 2),
        BomLine::linear(PartKind::CrossBeam, catalog, spec.width_mm, layout.post_count),
        BomLine::linear(
            PartKind::SidePost,
            catalog,
            spec.height_mm,
            layout.post_count * 2,
        ),
        BomLine::sheet(
            PartKind::SideSkin,
            catalog,
            spec.skin_panel_width_mm,
            spec.height_mm,
            layout.skin_panel_count * 2,
        ),
    ];

    debug!(lines = lines.len(), "built bill of materials");
    Bom { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn reference_bom() -> Bom {
        let spec = BoxSpec::new(4200, 2100, 2100, 600, 1200);
        let layout = solve(&spec).unwrap();
        build_bom(&spec, &layout, &PartCatalog::default())
    }

    #[test]
    fn test_four_lines_in_catalog_order() {
        let bom = reference_bom();
        let names: Vec<&str> = bom.lines.iter().map(|l| l.part.as_str()).collect();
        assert_eq!(names, ["Main rail", "Cross beam", "Side post", "Side skin"]);
    }

    #[test]
    fn test_reference_quantities() {
        let bom = reference_bom();
        assert_eq!(bom.line(PartKind::MainRail).unwrap().quantity, 2);
        assert_eq!(bom.line(PartKind::CrossBeam).unwrap().quantity, 8);
        assert_eq!(bom.line(PartKind::SidePost).unwrap().quantity, 16);
        assert_eq!(bom.line(PartKind::SideSkin).unwrap().quantity, 8);
        assert_eq!(bom.total_pieces(), 34);
    }

    #[test]
    fn test_dimensions_follow_spec() {
        let spec = BoxSpec::new(6100, 2450, 2700, 550, 1500);
        let layout = solve(&spec).unwrap();
        let bom = build_bom(&spec, &layout, &PartCatalog::default());

        let rail = bom.line(PartKind::MainRail).unwrap();
        assert_eq!(rail.length_mm, Some(6100));
        assert_eq!(rail.width_mm, None);

        assert_eq!(bom.line(PartKind::CrossBeam).unwrap().length_mm, Some(2450));
        assert_eq!(bom.line(PartKind::SidePost).unwrap().length_mm, Some(2700));

        let skin = bom.line(PartKind::SideSkin).unwrap();
        assert_eq!(skin.length_mm, None);
        assert_eq!(skin.width_mm, Some(1500));
        assert_eq!(skin.height_mm, Some(2700));
        assert_eq!(skin.quantity, layout.skin_panel_count * 2);
    }

    #[test]
    fn test_catalog_substitution() {
        let spec = BoxSpec::default();
        let layout = solve(&spec).unwrap();
        let mut catalog = PartCatalog::default();
        catalog.side_skin.specification = "2.0mm galvanised steel".to_string();

        let bom = build_bom(&spec, &layout, &catalog);
        assert_eq!(
            bom.line(PartKind::SideSkin).unwrap().specification,
            "2.0mm galvanised steel"
        );
    }

    #[test]
    fn test_serialization_is_a_plain_list() {
        let json = serde_json::to_string(&reference_bom()).unwrap();
        assert!(json.starts_with('['));
        let roundtrip: Bom = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, reference_bom());
    }
}
