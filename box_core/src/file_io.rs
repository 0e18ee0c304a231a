//! # File I/O Module
//!
//! Reads and writes everything that leaves memory:
//! - **Projects**: `.cbx` JSON files, saved atomically, version-checked on load
//! - **Settings**: JSON design tables, validated on load
//! - **Artifacts**: exported CSV/DXF bytes, written with the same atomic rename
//!
//! Atomic writes go to a `.tmp` sibling, fsync, then rename over the target
//! so an interrupted write never leaves a half-written file behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use box_core::file_io::{load_project, save_project};
//! use box_core::project::BoxProject;
//! use std::path::Path;
//!
//! let project = BoxProject::new("Engineer", "26-001", "Client");
//! save_project(&project, Path::new("fleet.cbx"))?;
//! let loaded = load_project(Path::new("fleet.cbx"))?;
//! assert_eq!(loaded.meta.job_id, "26-001");
//! # Ok::<(), box_core::errors::BoxError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{BoxError, BoxResult};
use crate::project::{BoxProject, SCHEMA_VERSION};
use crate::settings::DesignSettings;

/// Write `bytes` to `path` atomically (temp file, fsync, rename).
pub fn write_atomic(path: &Path, bytes: &[u8]) -> BoxResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        BoxError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        BoxError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        BoxError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        BoxError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn read_to_string(path: &Path) -> BoxResult<String> {
    fs::read_to_string(path)
        .map_err(|e| BoxError::file_error("read", path.display().to_string(), e.to_string()))
}

/// Save a project as pretty JSON.
pub fn save_project(project: &BoxProject, path: &Path) -> BoxResult<()> {
    let json = serde_json::to_string_pretty(project)?;
    write_atomic(path, json.as_bytes())
}

/// Load a project and check its schema version.
///
/// # Returns
///
/// * `Ok(BoxProject)` - Successfully loaded project
/// * `Err(BoxError::VersionMismatch)` - File version is incompatible
/// * `Err(BoxError::SerializationError)` - Invalid JSON
/// * `Err(BoxError::InvalidSettings)` - Embedded settings are unusable
/// * `Err(BoxError::FileError)` - I/O error
pub fn load_project(path: &Path) -> BoxResult<BoxProject> {
    let contents = read_to_string(path)?;
    let project: BoxProject =
        serde_json::from_str(&contents).map_err(|e| BoxError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;
    project.settings.validate()?;
    Ok(project)
}

/// Load design settings from a JSON file. Missing fields take defaults.
pub fn load_settings(path: &Path) -> BoxResult<DesignSettings> {
    let contents = read_to_string(path)?;
    let settings: DesignSettings =
        serde_json::from_str(&contents).map_err(|e| BoxError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
    settings.validate()?;
    Ok(settings)
}

/// Write one exported artifact into `dir`, returning the full path.
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &[u8]) -> BoxResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        BoxError::file_error("create directory", dir.display().to_string(), e.to_string())
    })?;
    let path = dir.join(file_name);
    write_atomic(&path, bytes)?;
    Ok(path)
}

/// Validate that a file version is compatible with the current schema.
///
/// Major and minor must match; patch differences are accepted.
fn validate_version(file_version: &str) -> BoxResult<()> {
    let major_minor = |v: &str| -> Option<(u32, u32)> {
        let mut parts = v.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some((major, minor))
    };

    match (major_minor(file_version), major_minor(SCHEMA_VERSION)) {
        (Some(file), Some(current)) if file == current => Ok(()),
        _ => Err(BoxError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        }),
    }
}
