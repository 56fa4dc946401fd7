//! Utility functions

pub mod path;

pub use path::{PACKAGE_EXTENSION, normalize_media_path, resolve_package_path};
