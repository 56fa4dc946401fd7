//! Scenario document writing

use std::fs;
use std::path::Path;

use super::document::Package;
use crate::error::Result;

/// Write a scenario document to disk
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_scenario<P: AsRef<Path>>(package: &Package, path: P) -> Result<()> {
    let json = serialize_scenario(package)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a scenario document to pretty-printed JSON (2-space indent)
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_scenario(package: &Package) -> Result<String> {
    Ok(serde_json::to_string_pretty(package)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::scenario::{Metadata, Task, TaskType};
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_expected_keys_and_indent() {
        let package = Package {
            id: "p-1".to_string(),
            name: "Trivia Night".to_string(),
            rounds: vec![crate::formats::scenario::Round {
                name: "Round 1".to_string(),
                themes: vec![crate::formats::scenario::Theme {
                    name: "History".to_string(),
                    questions: vec![crate::formats::scenario::Question {
                        points: 100,
                        mode: "default".to_string(),
                        task_type: TaskType::Plain,
                        answers: vec!["Nobody".to_string()],
                        task: Task {
                            text: "Who built it?".to_string(),
                            ..Task::default()
                        },
                        explanation: String::new(),
                    }],
                }],
            }],
            metadata: Metadata {
                version: "4".to_string(),
                created_by: vec!["Ada".to_string()],
                difficulty: "5".to_string(),
                restriction: String::new(),
                created_at: "02.11.2024".to_string(),
            },
        };

        let json = serialize_scenario(&package).unwrap();

        // 2-space indentation, identity first
        assert!(json.starts_with("{\n  \"id\": \"p-1\""));
        // question keys in schema order
        let points = json.find("\"points\"").unwrap();
        let mode = json.find("\"mode\"").unwrap();
        let task_type = json.find("\"type\"").unwrap();
        let answers = json.find("\"answers\"").unwrap();
        assert!(points < mode && mode < task_type && task_type < answers);
        // metadata field renames
        assert!(json.contains("\"createdBy\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"type\": \"plain\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rounds"][0]["themes"][0]["questions"][0]["points"], 100);
    }
}
