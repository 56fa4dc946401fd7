//! File-level conversion pipeline
//!
//! Stages run strictly in order: extract the container, parse the scenario
//! XML, map it to the normalized document, write `scenario.json`, delete
//! the source-only artifacts, and rename the directory to the package id.
//! The presence of `scenario.json` signals that the whole pipeline
//! completed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::archive::SiqOperations;
use crate::converter::siq_to_scenario::{self, MapWarning};
use crate::error::Result;
use crate::formats::scenario::write_scenario;
use crate::formats::siq::read_siq;
use crate::utils::resolve_package_path;

/// The scenario description inside the container.
const CONTENT_DESCRIPTOR: &str = "content.xml";
/// Zip content-types manifest written by the authoring tool.
const CONTENT_TYPES_MANIFEST: &str = "[Content_Types].xml";
/// Text-resource directory not used by game clients.
const TEXTS_DIR: &str = "Texts";
/// Name of the emitted document.
const SCENARIO_FILE: &str = "scenario.json";

/// Result of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    /// Final output directory, named after the package id.
    pub output_dir: PathBuf,
    /// Mapping diagnostics (already logged, returned for callers that want
    /// to inspect them).
    pub warnings: Vec<MapWarning>,
}

/// Convert a package file into a scenario directory
///
/// The output directory is created next to the input file. Media files
/// stay at their original relative locations inside it.
///
/// # Errors
/// Returns an error on bad input paths, extraction or parse failures, or
/// any mapping error (the first one aborts the conversion). A missing
/// housekeeping artifact during cleanup is not an error.
pub fn convert_siq(source: impl AsRef<Path>) -> Result<ConvertOutcome> {
    let source = resolve_package_path(source.as_ref())?;
    let extract_dir = source.with_extension("");

    tracing::info!(
        "Extracting {} to {}",
        source.display(),
        extract_dir.display()
    );
    SiqOperations::extract(&source, &extract_dir)?;

    let doc = read_siq(extract_dir.join(CONTENT_DESCRIPTOR))?;
    let outcome = siq_to_scenario::to_scenario(&doc)?;
    for warning in &outcome.warnings {
        tracing::warn!("{warning}");
    }

    write_scenario(&outcome.package, extract_dir.join(SCENARIO_FILE))?;
    cleanup_extracted(&extract_dir)?;
    let output_dir = rename_to_package_id(&extract_dir, &outcome.package.id)?;

    tracing::info!("Conversion complete: {}", output_dir.display());
    Ok(ConvertOutcome {
        output_dir,
        warnings: outcome.warnings,
    })
}

/// Best-effort removal of source-only artifacts. Absence is fine; any
/// other failure propagates.
fn cleanup_extracted(dir: &Path) -> Result<()> {
    remove_artifact(&dir.join(CONTENT_DESCRIPTOR), false)?;
    remove_artifact(&dir.join(CONTENT_TYPES_MANIFEST), false)?;
    remove_artifact(&dir.join(TEXTS_DIR), true)?;
    Ok(())
}

fn remove_artifact(path: &Path, is_dir: bool) -> Result<()> {
    let removed = if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Rename the extraction directory after the package's internal identity.
/// Skipped when the id is empty or already matches.
fn rename_to_package_id(extract_dir: &Path, package_id: &str) -> Result<PathBuf> {
    if package_id.is_empty() {
        return Ok(extract_dir.to_path_buf());
    }
    let target = extract_dir.with_file_name(package_id);
    if target == extract_dir {
        return Ok(target);
    }
    fs::rename(extract_dir, &target)?;
    Ok(target)
}
