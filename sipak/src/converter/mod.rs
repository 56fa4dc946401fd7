//! Scenario conversion
//!
//! Two layers:
//! - `siq_to_scenario` - the in-memory mapping from the parsed XML tree to
//!   the normalized document (all the disambiguation rules live here)
//! - `package` - the file-level pipeline: extract, parse, map, write,
//!   cleanup, rename

pub mod package;
pub mod siq_to_scenario;

pub use package::{ConvertOutcome, convert_siq};
pub use siq_to_scenario::{MapOutcome, MapWarning, to_scenario};
