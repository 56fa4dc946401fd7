//! Container extraction

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::archive::filename::{LegacyEncoding, recover_entry_name};
use crate::error::{Error, Result};

/// High-level package container operations.
pub struct SiqOperations;

impl SiqOperations {
    /// Extract a package container to a directory.
    ///
    /// The output tree mirrors the container's internal structure with
    /// entry names recovered (CP866 and percent-escape decoding). Any read
    /// or write error aborts the whole extraction; partially written output
    /// is left on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the container cannot be opened or an entry
    /// cannot be written. Returns [`Error::Zip`] if the container is not a
    /// valid zip archive. Returns [`Error::InvalidEntryPath`] for entry
    /// names that escape the output directory.
    pub fn extract(siq_path: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<()> {
        let output_dir = output_dir.as_ref();
        let file = File::open(siq_path.as_ref())?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;

        fs::create_dir_all(output_dir)?;

        // Directories created this run; keeps repeated prefixes from
        // hitting the filesystem again.
        let mut created: HashSet<PathBuf> = HashSet::new();
        created.insert(output_dir.to_path_buf());

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = recover_entry_name(entry.name_raw(), LegacyEncoding::default());
            let Some(relative) = entry_path(&name)? else {
                continue;
            };
            let target = output_dir.join(relative);

            if entry.is_dir() {
                ensure_dir(&mut created, &target)?;
                continue;
            }

            if let Some(parent) = target.parent() {
                ensure_dir(&mut created, parent)?;
            }
            let mut out = File::create(&target)?;
            io::copy(&mut entry, &mut out)?;
        }

        Ok(())
    }

    /// List a container's file entries by recovered name, in archive order.
    ///
    /// Directory entries are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the container cannot be opened and
    /// [`Error::Zip`] if it is not a valid zip archive.
    pub fn list(siq_path: impl AsRef<Path>) -> Result<Vec<String>> {
        let file = File::open(siq_path.as_ref())?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;

        let mut names = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            names.push(recover_entry_name(
                entry.name_raw(),
                LegacyEncoding::default(),
            ));
        }
        Ok(names)
    }
}

/// Turn a recovered entry name into a safe relative path.
///
/// Returns `Ok(None)` for empty names; rejects absolute paths and `..`
/// components so no entry can escape the output directory.
fn entry_path(name: &str) -> Result<Option<PathBuf>> {
    let mut path = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) | Component::ParentDir => {
                return Err(Error::InvalidEntryPath {
                    name: name.to_string(),
                });
            }
        }
    }
    if path.as_os_str().is_empty() {
        return Ok(None);
    }
    Ok(Some(path))
}

fn ensure_dir(created: &mut HashSet<PathBuf>, dir: &Path) -> Result<()> {
    if created.contains(dir) {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    created.insert(dir.to_path_buf());
    Ok(())
}
