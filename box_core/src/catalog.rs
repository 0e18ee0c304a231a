//! # Part Catalog
//!
//! Static part definitions used by the BOM builder. Specification strings
//! (profile, gauge, material) never depend on the box dimensions, so they
//! live in a small table that can be swapped without touching the solver.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "main_rail":  { "name": "Main rail",  "specification": "100x50x4.0 channel steel" },
//!   "cross_beam": { "name": "Cross beam", "specification": "80x40x3.0 C-section steel" },
//!   "side_post":  { "name": "Side post",  "specification": "40x40x2.0 square tube" },
//!   "side_skin":  { "name": "Side skin",  "specification": "1.2mm aluminium sheet" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BoxError, BoxResult};

/// The four part kinds a side-wall decomposition produces, in BOM order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// Longitudinal chassis rail
    MainRail,
    /// Transverse beam under each post station
    CrossBeam,
    /// Vertical side post
    SidePost,
    /// Side-wall skin sheet
    SideSkin,
}

impl PartKind {
    /// All kinds in the fixed BOM order
    pub const ALL: [PartKind; 4] = [
        PartKind::MainRail,
        PartKind::CrossBeam,
        PartKind::SidePost,
        PartKind::SideSkin,
    ];

    /// Stable key used in settings files and logs
    pub fn key(&self) -> &'static str {
        match self {
            PartKind::MainRail => "main_rail",
            PartKind::CrossBeam => "cross_beam",
            PartKind::SidePost => "side_post",
            PartKind::SideSkin => "side_skin",
        }
    }
}

/// One catalog row: display name plus its fixed specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Part name as printed on the cut list
    pub name: String,
    /// Material / gauge / profile string
    pub specification: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, specification: impl Into<String>) -> Self {
        CatalogEntry {
            name: name.into(),
            specification: specification.into(),
        }
    }
}

/// Catalog entries for every [`PartKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartCatalog {
    pub main_rail: CatalogEntry,
    pub cross_beam: CatalogEntry,
    pub side_post: CatalogEntry,
    pub side_skin: CatalogEntry,
}

impl PartCatalog {
    /// Look up the entry for a part kind
    pub fn entry(&self, kind: PartKind) -> &CatalogEntry {
        match kind {
            PartKind::MainRail => &self.main_rail,
            PartKind::CrossBeam => &self.cross_beam,
            PartKind::SidePost => &self.side_post,
            PartKind::SideSkin => &self.side_skin,
        }
    }

    /// Reject entries with blank names; the BOM needs something to print.
    pub fn validate(&self) -> BoxResult<()> {
        for kind in PartKind::ALL {
            if self.entry(kind).name.trim().is_empty() {
                return Err(BoxError::invalid_settings(
                    format!("catalog.{}.name", kind.key()),
                    "part name must not be empty",
                ));
            }
        }
        Ok(())
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        PartCatalog {
            main_rail: CatalogEntry::new("Main rail", "100x50x4.0 channel steel"),
            cross_beam: CatalogEntry::new("Cross beam", "80x40x3.0 C-section steel"),
            side_post: CatalogEntry::new("Side post", "40x40x2.0 square tube"),
            side_skin: CatalogEntry::new("Side skin", "1.2mm aluminium sheet"),
        }
    }
}
