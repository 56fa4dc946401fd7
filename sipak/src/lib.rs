//! # sipak
//!
//! A pure-Rust library for working with SIGame quiz packages (`.siq`).
//!
//! A package is a zip container holding an XML scenario description
//! (`content.xml`) and the media files it references. This crate extracts
//! the container (recovering legacy CP866 entry names along the way) and
//! converts the scenario into a normalized JSON document for game clients.
//!
//! ## Quick Start
//!
//! ### Converting a package
//!
//! ```no_run
//! use sipak::converter::convert_siq;
//!
//! let outcome = convert_siq("night-quiz.siq")?;
//! println!("scenario written to {}", outcome.output_dir.display());
//! # Ok::<(), sipak::Error>(())
//! ```
//!
//! ### Working with the container directly
//!
//! ```no_run
//! use sipak::archive::SiqOperations;
//!
//! // List entries without extracting
//! let entries = SiqOperations::list("night-quiz.siq")?;
//! println!("found {} entries", entries.len());
//!
//! // Extract the container
//! SiqOperations::extract("night-quiz.siq", "night-quiz/")?;
//! # Ok::<(), sipak::Error>(())
//! ```

pub mod error;
pub mod archive;
pub mod formats;
pub mod converter;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::archive::{LegacyEncoding, SiqOperations};
    pub use crate::formats::siq::{SiqDocument, SiqNode};
    pub use crate::formats::scenario::{
        Metadata, Package, Question, Round, Task, TaskType, Theme,
    };
    pub use crate::converter::{ConvertOutcome, MapOutcome, MapWarning, convert_siq, to_scenario};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
