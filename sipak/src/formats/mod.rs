//! Document formats
//!
//! - `siq` - the source XML scenario description, parsed into a generic
//!   element tree (the schema is irregular, so interpretation is left to
//!   the converter)
//! - `scenario` - the normalized JSON document consumed by game clients

pub mod scenario;
pub mod siq;
