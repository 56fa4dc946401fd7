//! Scenario XML to normalized document mapping
//!
//! The source schema is irregular: scenario entries ("atoms") form an open
//! tagged union, question types carry overrides in nested parameter lists,
//! and the explanation text can come from three different places. The rules
//! here apply a fixed override order so precedence stays explicit:
//! info comment, then wager `theme` parameter, then `say` atom.

use std::fmt;

use crate::error::{Error, Result};
use crate::formats::scenario::{
    MODE_DEFAULT, MODE_DELEGATE, Metadata, Package, Question, Round, Task, TaskType, Theme,
};
use crate::formats::siq::{SiqDocument, SiqNode};
use crate::utils::normalize_media_path;

/// Category-wager type names; the source format knows two spellings.
const WAGER_TYPE_NAMES: [&str; 2] = ["cat", "bagcat"];

/// A mapped package plus the diagnostics produced along the way.
#[derive(Debug, Clone)]
pub struct MapOutcome {
    pub package: Package,
    /// Non-fatal findings; the caller decides how to surface them.
    pub warnings: Vec<MapWarning>,
}

/// Non-fatal mapping diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapWarning {
    /// A scenario atom declared a kind this converter does not know; the
    /// atom was skipped to stay forward compatible.
    UnknownAtomKind { kind: String },
}

impl fmt::Display for MapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapWarning::UnknownAtomKind { kind } => {
                write!(f, "unknown scenario atom kind {kind:?}: atom skipped")
            }
        }
    }
}

/// Scenario atom kinds.
///
/// Closed set of known variants plus a catch-all, so unknown future kinds
/// degrade to a warning instead of failing the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AtomKind {
    Text,
    Image,
    Voice,
    Video,
    Say,
    Marker,
    Unknown(String),
}

impl AtomKind {
    fn of(atom: &SiqNode) -> Self {
        match atom.attr("type") {
            None | Some("") => AtomKind::Text,
            Some("image") => AtomKind::Image,
            Some("voice") => AtomKind::Voice,
            Some("video") => AtomKind::Video,
            Some("say") => AtomKind::Say,
            Some("marker") => AtomKind::Marker,
            Some(other) => AtomKind::Unknown(other.to_string()),
        }
    }
}

/// Convert a parsed scenario document to the normalized package
///
/// # Errors
/// Returns an error when the root element is not a package, when a question
/// has no scenario content, or when a numeric field fails to parse. The
/// first mapping error aborts the whole conversion.
pub fn to_scenario(doc: &SiqDocument) -> Result<MapOutcome> {
    let package_node = &doc.root;
    if package_node.name != "package" {
        return Err(Error::MissingElement {
            path: "package".to_string(),
        });
    }

    let mut warnings = Vec::new();
    let mut rounds = Vec::new();
    if let Some(rounds_node) = package_node.child("rounds") {
        for round in rounds_node.children_named("round") {
            rounds.push(map_round(round, &mut warnings)?);
        }
    }

    let package = Package {
        id: attr_or_empty(package_node, "id"),
        name: attr_or_empty(package_node, "name"),
        rounds,
        metadata: Metadata {
            version: attr_or_empty(package_node, "version"),
            created_by: map_authors(package_node),
            difficulty: attr_or_empty(package_node, "difficulty"),
            restriction: attr_or_empty(package_node, "restriction"),
            created_at: attr_or_empty(package_node, "date"),
        },
    };

    Ok(MapOutcome { package, warnings })
}

/// Author names from the first info block that declares an authors
/// collection; packages without one simply have no authors.
fn map_authors(package_node: &SiqNode) -> Vec<String> {
    package_node
        .children_named("info")
        .find_map(|info| info.child("authors"))
        .map(|authors| {
            authors
                .children_named("author")
                .map(|author| author.text.clone())
                .collect()
        })
        .unwrap_or_default()
}

fn map_round(node: &SiqNode, warnings: &mut Vec<MapWarning>) -> Result<Round> {
    let mut themes = Vec::new();
    if let Some(themes_node) = node.child("themes") {
        for theme in themes_node.children_named("theme") {
            themes.push(map_theme(theme, warnings)?);
        }
    }
    Ok(Round {
        name: attr_or_empty(node, "name"),
        themes,
    })
}

fn map_theme(node: &SiqNode, warnings: &mut Vec<MapWarning>) -> Result<Theme> {
    let mut questions = Vec::new();
    if let Some(questions_node) = node.child("questions") {
        for question in questions_node.children_named("question") {
            questions.push(map_question(question, warnings)?);
        }
    }
    Ok(Theme {
        name: attr_or_empty(node, "name"),
        questions,
    })
}

fn map_question(node: &SiqNode, warnings: &mut Vec<MapWarning>) -> Result<Question> {
    let price = node.attr("price").ok_or_else(|| Error::MissingAttribute {
        element: "question".to_string(),
        attribute: "price".to_string(),
    })?;
    let mut points = parse_points(price, "price")?;
    let mut mode = MODE_DEFAULT.to_string();
    let mut explanation = String::new();

    let answers: Vec<String> = node
        .child("right")
        .map(|right| {
            right
                .children_named("answer")
                .map(|answer| answer.text.clone())
                .collect()
        })
        .unwrap_or_default();

    // Explanation source 1: host commentary
    if let Some(info) = node.child("info")
        && let Some(comments) = info.child("comments")
    {
        explanation = comments.text.clone();
    }

    // Explanation source 2 / points override: category-wager parameters
    if let Some(type_node) = node.child("type") {
        let type_name = type_node.attr("name").unwrap_or_default();
        if WAGER_TYPE_NAMES.contains(&type_name) {
            mode = MODE_DELEGATE.to_string();
            for param in type_node.children_named("param") {
                match param.attr("name") {
                    Some("cost") => points = parse_points(&param.text, "cost")?,
                    Some("theme") => explanation = param.text.clone(),
                    // Unknown parameters are part of the open schema
                    _ => {}
                }
            }
        } else {
            mode = type_name.to_string();
        }
    }

    let scenario = node.child("scenario").ok_or_else(|| Error::MissingElement {
        path: "question/scenario".to_string(),
    })?;
    let atoms: Vec<&SiqNode> = scenario.children_named("atom").collect();
    if atoms.is_empty() {
        return Err(Error::MissingElement {
            path: "question/scenario/atom".to_string(),
        });
    }

    let mut task = Task::default();
    let task_type = if atoms.len() == 1 && AtomKind::of(atoms[0]) == AtomKind::Text {
        task.text = atoms[0].text.clone();
        TaskType::Plain
    } else {
        for atom in &atoms {
            match AtomKind::of(atom) {
                AtomKind::Text => task.text = atom.text.clone(),
                AtomKind::Image => task.images.push(normalize_media_path(&atom.text)),
                AtomKind::Voice => task.sounds.push(normalize_media_path(&atom.text)),
                AtomKind::Video => task.video.push(normalize_media_path(&atom.text)),
                // Explanation source 3, wins over the other two
                AtomKind::Say => explanation = atom.text.clone(),
                AtomKind::Marker => {}
                AtomKind::Unknown(kind) => warnings.push(MapWarning::UnknownAtomKind { kind }),
            }
        }
        TaskType::Media
    };

    Ok(Question {
        points,
        mode,
        task_type,
        answers,
        task,
        explanation,
    })
}

fn attr_or_empty(node: &SiqNode, name: &str) -> String {
    node.attr(name).unwrap_or_default().to_string()
}

fn parse_points(value: &str, field: &str) -> Result<i32> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}
