use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl std::str::FromStr for NoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(NoteStatus::Draft),
            "published" => Ok(NoteStatus::Published),
            "archived" => Ok(NoteStatus::Archived),
            _ => Err(format!("Unknown note status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactCheckStatus {
    Verified,
    Questionable,
    Inaccurate,
    Pending,
    /// Anything else the checker reports
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheck {
    pub claim: String,
    pub status: FactCheckStatus,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub sources: Vec<String>,
    /// 0.0 to 1.0
    #[serde(default)]
    pub confidence: f64,
}

/// Result of fact-checking a stored note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckSummary {
    #[serde(default)]
    pub message: Option<String>,
    pub status: FactCheckStatus,
    /// Percentage, 0 to 100
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteVersion {
    pub version: u32,
    pub content: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub changes_summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub topic_id: String,
    #[serde(default)]
    pub status: NoteStatus,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub collaborators: Vec<String>,
    #[serde(default)]
    pub fact_checks: Vec<FactCheck>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub versions: Vec<NoteVersion>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn latest_version(&self) -> Option<&NoteVersion> {
        self.versions.iter().max_by_key(|v| v.version)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub topic_id: String,
    pub status: NoteStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NoteStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNoteVersion {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes_summary: Option<String>,
}
