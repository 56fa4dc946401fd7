pub mod document;
pub mod writer;

pub use document::{MODE_DEFAULT, MODE_DELEGATE, Metadata, Package, Question, Round, Task, TaskType, Theme};
pub use writer::{serialize_scenario, write_scenario};
