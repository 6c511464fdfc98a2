//! Data models for jobtrail.
//!
//! This module defines the core data structures:
//!
//! - [`JobApplication`]: one tracked application on the kanban board
//! - [`JobStatus`]: board columns (saved, applied, interviewing, offer, rejected)
//! - [`Resume`]: a stored base resume with raw content
//! - [`WorkExperience`]: one job-history entry belonging to a resume
//! - [`ParsedExperience`]: extractor output, not yet persisted

mod job;
mod resume;

pub use job::{JobApplication, JobForm, JobStatus};
pub use resume::{NewExperience, NewResume, ParsedExperience, Resume, WorkExperience};
