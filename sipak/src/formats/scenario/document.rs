//! Normalized scenario document structures
//!
//! This is the strict, uniform schema game clients consume. Field order in
//! the structs matches the key order of the serialized document.

use serde::{Deserialize, Serialize};

/// Adjudication mode for questions answered the standard way.
pub const MODE_DEFAULT: &str = "default";
/// Adjudication mode for category-wager questions (the player commits
/// points before seeing the question).
pub const MODE_DELEGATE: &str = "delegate";

/// The normalized package document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Package identity, also the name of the output directory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rounds in source document order; the order is semantically
    /// significant.
    pub rounds: Vec<Round>,
    /// Package metadata.
    pub metadata: Metadata,
}

/// One game round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub themes: Vec<Theme>,
}

/// One theme inside a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub questions: Vec<Question>,
}

/// One question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Point value; a category-wager `cost` parameter overrides the
    /// question's own price.
    pub points: i32,
    /// `"default"`, `"delegate"`, or a type name copied verbatim from the
    /// source for the client to interpret.
    pub mode: String,
    /// Whether the task is a single text or a media composition.
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Accepted answers, copied as-is.
    pub answers: Vec<String>,
    pub task: Task,
    /// Host commentary, resolved last-write-wins from its three sources.
    pub explanation: String,
}

/// Task content classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Plain,
    Media,
}

/// What is presented to the players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    /// Normalized relative media paths, in scenario order.
    pub images: Vec<String>,
    pub sounds: Vec<String>,
    pub video: Vec<String>,
}

/// Package metadata, copied through from the source attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub version: String,
    /// Author names; empty when the package declares none.
    pub created_by: Vec<String>,
    pub difficulty: String,
    pub restriction: String,
    pub created_at: String,
}
