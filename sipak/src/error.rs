//! Error types for `sipak`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `sipak` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Package Archive Errors ====================
    /// The container could not be read as a zip archive.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The input path does not carry the package extension.
    #[error("unsupported package extension: {path} (expected .siq)")]
    UnsupportedExtension {
        /// The offending input path.
        path: PathBuf,
    },

    /// The package file does not exist at the resolved path.
    #[error("package not found: {path}")]
    PackageNotFound {
        /// The resolved input path.
        path: PathBuf,
    },

    /// An archive entry carries a path that escapes the output directory.
    #[error("invalid archive entry path: {name}")]
    InvalidEntryPath {
        /// The recovered entry name.
        name: String,
    },

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttr(String),

    /// The document has no root element.
    #[error("document has no root element")]
    EmptyDocument,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== Mapping Errors ====================
    /// A required element is missing from the source document.
    #[error("missing element: {path}")]
    MissingElement {
        /// Slash-separated location of the missing element.
        path: String,
    },

    /// A required attribute is missing from an element.
    #[error("missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        /// The element name.
        element: String,
        /// The attribute name.
        attribute: String,
    },

    /// A numeric field could not be parsed as an integer.
    #[error("invalid integer in {field}: {value:?}")]
    InvalidNumber {
        /// The field the value came from (e.g. `price`, `cost`).
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(err.to_string())
    }
}

/// A specialized Result type for `sipak` operations.
pub type Result<T> = std::result::Result<T, Error>;
