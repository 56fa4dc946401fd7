//! Package container handling
//!
//! A `.siq` package is a plain zip archive. The only wrinkle is entry
//! naming: older authoring tools stored entry names in CP866 and
//! percent-encoded them on top, so extraction has to recover the real
//! filenames before writing anything to disk.

pub mod extractor;
pub mod filename;

pub use extractor::SiqOperations;
pub use filename::{LegacyEncoding, recover_entry_name};
