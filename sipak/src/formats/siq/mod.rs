pub mod document;
pub mod reader;

pub use document::{SiqDocument, SiqNode};
pub use reader::{parse_siq, read_siq};
