//! Remote resume store.
//!
//! Resumes and work experiences live in a remote tabular store reached over
//! plain request/response HTTP calls. Every operation either succeeds and
//! returns the affected record(s), or fails with a single error; there is
//! no automatic retry and no conflict resolution beyond last-write-wins.
//!
//! [`ResumeStore`] is the seam: session logic and tests depend on the
//! trait, [`RestResumeStore`] is the real PostgREST-speaking client.

mod rest;

pub use rest::RestResumeStore;

use crate::error::Result;
use crate::model::{NewExperience, NewResume, Resume, WorkExperience};
use async_trait::async_trait;
use uuid::Uuid;

/// CRUD operations over the two remote tables.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// All resumes, newest update first.
    async fn list_resumes(&self) -> Result<Vec<Resume>>;

    async fn create_resume(&self, new: NewResume) -> Result<Resume>;

    async fn delete_resume(&self, id: Uuid) -> Result<()>;

    /// Work experiences of one resume, by display order.
    async fn list_experiences(&self, resume_id: Uuid) -> Result<Vec<WorkExperience>>;

    async fn insert_experience(&self, new: NewExperience) -> Result<WorkExperience>;

    /// Overwrite the live description of one experience. The original
    /// description column is never written by this call.
    async fn update_description(&self, id: Uuid, description: &str) -> Result<WorkExperience>;
}
