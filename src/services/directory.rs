use crate::models::{Level, LearningStyle, MentorProfile, MentorRecord, TeachingStyle};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rating assumed for mentors the directory has not rated yet
pub const PLACEHOLDER_RATING: f64 = 4.5;

/// Errors that can occur when loading the mentor directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read directory file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported directory format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid directory contents: {0}")]
    InvalidFormat(String),

    #[error("Duplicate mentor id: {0}")]
    DuplicateId(String),
}

/// Values filled in for recommender fields a raw record leaves out
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryDefaults {
    pub experience_level: Level,
    pub teaching_style: TeachingStyle,
    pub rating: f64,
}

impl Default for DirectoryDefaults {
    fn default() -> Self {
        Self {
            experience_level: Level::Advanced,
            teaching_style: TeachingStyle::Single(LearningStyle::Mixed),
            rating: PLACEHOLDER_RATING,
        }
    }
}

impl DirectoryDefaults {
    pub fn with_rating(rating: f64) -> Self {
        Self {
            rating,
            ..Self::default()
        }
    }
}

/// Map a raw directory record to the profile the recommender scores
///
/// The record's single `fieldOfExpertise` becomes the first expertise entry,
/// followed by any extra tags.
pub fn to_profile(record: MentorRecord, defaults: &DirectoryDefaults) -> MentorProfile {
    let mut expertise = Vec::with_capacity(1 + record.tags.len());
    expertise.push(record.field_of_expertise);
    expertise.extend(record.tags);

    MentorProfile {
        id: record.id,
        name: Some(record.name),
        expertise,
        experience_level: record.experience_level.unwrap_or(defaults.experience_level),
        teaching_style: Some(
            record
                .teaching_style
                .unwrap_or_else(|| defaults.teaching_style.clone()),
        ),
        rating: record.rating.unwrap_or(defaults.rating),
    }
}

#[derive(Debug, Deserialize)]
struct TomlDirectory {
    #[serde(default)]
    mentors: Vec<MentorRecord>,
}

/// In-memory mentor directory
///
/// Holds the mentor profiles the service ranks when a request does not carry
/// its own candidates. Read-only after construction.
#[derive(Debug, Clone)]
pub struct MentorDirectory {
    mentors: Vec<MentorProfile>,
    loaded_at: chrono::DateTime<chrono::Utc>,
    source: Option<PathBuf>,
}

impl MentorDirectory {
    /// Directory with no mentors
    pub fn empty() -> Self {
        Self {
            mentors: Vec::new(),
            loaded_at: chrono::Utc::now(),
            source: None,
        }
    }

    /// Build a directory from raw records, rejecting duplicate ids
    pub fn from_records(
        records: Vec<MentorRecord>,
        defaults: &DirectoryDefaults,
    ) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut mentors = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(DirectoryError::DuplicateId(record.id));
            }
            mentors.push(to_profile(record, defaults));
        }

        Ok(Self {
            mentors,
            loaded_at: chrono::Utc::now(),
            source: None,
        })
    }

    /// Load a directory file (`.json` or `.toml`)
    pub async fn load<P: AsRef<Path>>(
        path: P,
        defaults: &DirectoryDefaults,
    ) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        let records = match extension.as_str() {
            "json" => parse_json_records(&contents)?,
            "toml" => toml::from_str::<TomlDirectory>(&contents)?.mentors,
            other => {
                return Err(DirectoryError::UnsupportedFormat(format!(
                    "{} (expected .json or .toml)",
                    if other.is_empty() { "<none>" } else { other }
                )))
            }
        };

        let mut directory = Self::from_records(records, defaults)?;
        directory.source = Some(path.to_path_buf());

        tracing::info!(
            "Loaded {} mentors from {}",
            directory.len(),
            path.display()
        );

        Ok(directory)
    }

    pub fn profiles(&self) -> &[MentorProfile] {
        &self.mentors
    }

    pub fn get(&self, id: &str) -> Option<&MentorProfile> {
        self.mentors.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.mentors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty()
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for MentorDirectory {
    fn default() -> Self {
        Self::empty()
    }
}

/// Extract mentor records from a JSON export
///
/// Accepts a bare array, the API envelope `{ "success", "message", "data" }`
/// or an object with a `mentors` array.
pub fn parse_json_records(contents: &str) -> Result<Vec<MentorRecord>, DirectoryError> {
    let json: Value = serde_json::from_str(contents)?;

    if json.get("success").and_then(|s| s.as_bool()) == Some(false) {
        let message = json
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("no message");
        return Err(DirectoryError::InvalidFormat(format!(
            "export reports failure: {}",
            message
        )));
    }

    let documents = match &json {
        Value::Array(items) => items,
        Value::Object(_) => json
            .get("data")
            .or_else(|| json.get("mentors"))
            .and_then(|d| d.as_array())
            .ok_or_else(|| {
                DirectoryError::InvalidFormat("Missing `data` or `mentors` array".into())
            })?,
        _ => {
            return Err(DirectoryError::InvalidFormat(
                "Expected an array or an object".into(),
            ))
        }
    };

    documents
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            serde_json::from_value(doc.clone()).map_err(|e| {
                DirectoryError::InvalidFormat(format!("mentor #{}: {}", index, e))
            })
        })
        .collect()
}
