//! Path utilities

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension carried by quiz package containers.
pub const PACKAGE_EXTENSION: &str = "siq";

/// Normalize a media reference from a scenario atom.
///
/// Strips the leading `@` marker (package-embedded file) and normalizes
/// path separators to forward slashes.
pub fn normalize_media_path(reference: &str) -> String {
    let reference = reference.strip_prefix('@').unwrap_or(reference);
    reference.replace('\\', "/")
}

/// Resolve a user-supplied package path.
///
/// A path without an extension gets `.siq` appended; any other extension is
/// rejected before any I/O happens. The file must exist at the resolved
/// path.
///
/// # Errors
/// Returns [`Error::UnsupportedExtension`] for non-package extensions and
/// [`Error::PackageNotFound`] when the resolved file does not exist.
pub fn resolve_package_path(path: &Path) -> Result<PathBuf> {
    let resolved = match path.extension() {
        None => path.with_extension(PACKAGE_EXTENSION),
        Some(ext) if ext.eq_ignore_ascii_case(PACKAGE_EXTENSION) => path.to_path_buf(),
        Some(_) => {
            return Err(Error::UnsupportedExtension {
                path: path.to_path_buf(),
            });
        }
    };
    if !resolved.is_file() {
        return Err(Error::PackageNotFound { path: resolved });
    }
    Ok(resolved)
}
