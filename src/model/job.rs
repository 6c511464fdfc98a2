use crate::error::{JobtrailError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Board column for a tracked application.
///
/// Serialized as the capitalized word ("Saved", "Applied", ...) because the
/// exported job document must stay field-for-field compatible with existing
/// exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JobStatus {
    #[default]
    Saved,
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Fixed column order on the board.
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Saved,
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Saved => write!(f, "Saved"),
            JobStatus::Applied => write!(f, "Applied"),
            JobStatus::Interviewing => write!(f, "Interviewing"),
            JobStatus::Offer => write!(f, "Offer"),
            JobStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for JobStatus {
    type Err = JobtrailError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "saved" => Ok(JobStatus::Saved),
            "applied" => Ok(JobStatus::Applied),
            "interviewing" | "interview" => Ok(JobStatus::Interviewing),
            "offer" => Ok(JobStatus::Offer),
            "rejected" => Ok(JobStatus::Rejected),
            _ => Err(JobtrailError::Parse(format!("Invalid job status: {}", s))),
        }
    }
}

/// One tracked job application.
///
/// Field names follow the exported JSON document (camelCase), which is the
/// exchange format for `jobtrail export` / `jobtrail import`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub role: String,

    #[serde(default)]
    pub status: JobStatus,

    #[serde(rename = "dateApplied", default)]
    pub date_applied: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "updatedAt", default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// User-supplied fields of an application, before an id and timestamp are
/// assigned.
#[derive(Debug, Clone, Default)]
pub struct JobForm {
    pub company: String,
    pub role: String,
    pub status: JobStatus,
    pub date_applied: String,
    pub salary: Option<String>,
    pub link: Option<String>,
    pub notes: Option<String>,
}

impl JobApplication {
    pub fn new(form: JobForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            company: form.company,
            role: form.role,
            status: form.status,
            date_applied: form.date_applied,
            salary: form.salary,
            link: form.link,
            notes: form.notes,
            updated_at: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.status, JobStatus::Rejected)
    }
}
