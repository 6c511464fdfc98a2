use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored base resume. Owns zero or more [`WorkExperience`] rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    pub title: String,

    /// Raw pasted resume text, kept verbatim.
    pub content: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One job-history entry belonging to a resume.
///
/// `original_description` is captured at creation time and never changed by
/// edits; the reset operation copies it back into `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub original_description: String,

    /// Display order within the resume, zero-based.
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkExperience {
    pub fn is_modified(&self) -> bool {
        self.description != self.original_description
    }
}

/// Insert payload for the resumes table. The store assigns id and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewResume {
    pub title: String,
    pub content: String,
}

/// Insert payload for the work-experience table.
#[derive(Debug, Clone, Serialize)]
pub struct NewExperience {
    pub resume_id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub original_description: String,
    pub order: i32,
}

/// A candidate work-experience entry produced by the section extractor.
/// Not yet persisted, so it carries no id or parent reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedExperience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub original_description: String,
    pub order: i32,
}

impl ParsedExperience {
    pub fn into_new(self, resume_id: Uuid) -> NewExperience {
        NewExperience {
            resume_id,
            title: self.title,
            company: self.company,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            original_description: self.original_description,
            order: self.order,
        }
    }
}
