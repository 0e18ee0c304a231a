//! # Project Data Structures
//!
//! A [`BoxProject`] groups several box designs for one job together with the
//! settings they are solved under. Projects serialize to `.cbx` files as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! BoxProject
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: DesignSettings (limits, part catalog, drill pattern)
//! └── designs: BTreeMap<Uuid, BoxDesign> (labelled box specs)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use box_core::input::BoxSpec;
//! use box_core::project::{BoxDesign, BoxProject};
//!
//! let mut project = BoxProject::new("Jane Engineer", "26-014", "ACME Logistics");
//! let id = project.add_design(BoxDesign::new("Van body 4.2m", BoxSpec::default()));
//! assert!(project.get_design(&id).is_some());
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Van body 4.2m"));
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BoxResult;
use crate::input::BoxSpec;
use crate::pipeline::{decompose, Decomposition};
use crate::settings::DesignSettings;

/// Current schema version for .cbx files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One labelled box in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDesign {
    /// User label (e.g., "Van body 4.2m", "Reefer 7.6m")
    pub label: String,
    pub spec: BoxSpec,
}

impl BoxDesign {
    pub fn new(label: impl Into<String>, spec: BoxSpec) -> Self {
        BoxDesign {
            label: label.into(),
            spec,
        }
    }
}

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxProject {
    pub meta: ProjectMetadata,

    /// Settings every design in this project is solved under
    #[serde(default)]
    pub settings: DesignSettings,

    /// Designs keyed by UUID. Ordered map so saved files diff cleanly.
    pub designs: BTreeMap<Uuid, BoxDesign>,
}

impl BoxProject {
    /// Create a new empty project with default settings.
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        BoxProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: DesignSettings::default(),
            designs: BTreeMap::new(),
        }
    }

    /// Add a design and return its new UUID.
    pub fn add_design(&mut self, design: BoxDesign) -> Uuid {
        let id = Uuid::new_v4();
        self.designs.insert(id, design);
        self.touch();
        id
    }

    /// Remove a design by UUID.
    pub fn remove_design(&mut self, id: &Uuid) -> Option<BoxDesign> {
        let design = self.designs.remove(id);
        if design.is_some() {
            self.touch();
        }
        design
    }

    pub fn get_design(&self, id: &Uuid) -> Option<&BoxDesign> {
        self.designs.get(id)
    }

    /// First design whose label matches exactly
    pub fn find_by_label(&self, label: &str) -> Option<(&Uuid, &BoxDesign)> {
        self.designs.iter().find(|(_, d)| d.label == label)
    }

    pub fn design_count(&self) -> usize {
        self.designs.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Decompose every design with the project settings.
    ///
    /// Each design is solved independently; one invalid design does not
    /// stop the others.
    pub fn decompose_all(&self) -> Vec<(Uuid, BoxResult<Decomposition>)> {
        self.designs
            .iter()
            .map(|(id, design)| (*id, decompose(&design.spec, &self.settings)))
            .collect()
    }
}

impl Default for BoxProject {
    fn default() -> Self {
        BoxProject::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = BoxProject::new("John Doe", "26-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "26-001");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.design_count(), 0);
    }

    #[test]
    fn test_add_remove_design() {
        let mut project = BoxProject::new("Engineer", "26-001", "Client");
        let id = project.add_design(BoxDesign::new("B-1", BoxSpec::default()));
        assert_eq!(project.design_count(), 1);
        assert_eq!(project.find_by_label("B-1").map(|(k, _)| *k), Some(id));

        let removed = project.remove_design(&id);
        assert!(removed.is_some());
        assert_eq!(project.design_count(), 0);
        assert!(project.remove_design(&id).is_none());
    }

    #[test]
    fn test_decompose_all_isolates_failures() {
        let mut project = BoxProject::new("Engineer", "26-001", "Client");
        let good = project.add_design(BoxDesign::new("ok", BoxSpec::default()));
        let bad = project.add_design(BoxDesign::new(
            "too long",
            BoxSpec {
                length_mm: 12000,
                ..BoxSpec::default()
            },
        ));

        let results = project.decompose_all();
        assert_eq!(results.len(), 2);
        for (id, result) in results {
            if id == good {
                assert!(result.is_ok());
            } else {
                assert_eq!(id, bad);
                assert!(result.is_err());
            }
        }
    }

    #[test]
    fn test_project_serialization() {
        let mut project = BoxProject::new("Jane Engineer", "26-042", "Test Client");
        project.add_design(BoxDesign::new("Reefer", BoxSpec::new(7600, 2450, 2500, 550, 1500)));
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("\"skin_panel_widths_mm\""));

        let roundtrip: BoxProject = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.designs, project.designs);
        assert_eq!(roundtrip.settings, project.settings);
    }
}
