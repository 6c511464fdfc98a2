use crate::error::{JobtrailError, Result};
use crate::extract::parse_experiences;
use crate::model::{NewResume, Resume, WorkExperience};
use crate::remote::ResumeStore;
use std::sync::Arc;
use uuid::Uuid;

/// Local working state over the remote resume store.
///
/// Changes apply optimistically but only after the remote call succeeds:
/// each operation replaces the affected collection wholesale from the
/// store's response, so local state never diverges silently on failure.
/// The last failure is kept as a display string until the next successful
/// operation, mirroring a persistent error banner.
pub struct ResumeSession {
    store: Arc<dyn ResumeStore>,
    resumes: Vec<Resume>,
    current: Option<Resume>,
    experiences: Vec<WorkExperience>,
    last_error: Option<String>,
}

impl ResumeSession {
    pub fn new(store: Arc<dyn ResumeStore>) -> Self {
        Self {
            store,
            resumes: Vec::new(),
            current: None,
            experiences: Vec::new(),
            last_error: None,
        }
    }

    pub fn resumes(&self) -> &[Resume] {
        &self.resumes
    }

    pub fn current(&self) -> Option<&Resume> {
        self.current.as_ref()
    }

    pub fn experiences(&self) -> &[WorkExperience] {
        &self.experiences
    }

    /// Display string of the most recent failure, cleared by the next
    /// successful operation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
        result
    }

    /// Refresh the resume list from the store.
    pub async fn fetch_resumes(&mut self) -> Result<&[Resume]> {
        let result = self.store.list_resumes().await;
        let resumes = self.record(result)?;
        self.resumes = resumes;
        Ok(&self.resumes)
    }

    /// Select a resume and load its work experiences.
    pub async fn select(&mut self, resume_id: Uuid) -> Result<&Resume> {
        let resume = self
            .resumes
            .iter()
            .find(|r| r.id == resume_id)
            .cloned()
            .ok_or_else(|| JobtrailError::NotFound(resume_id.to_string()))?;

        let result = self.store.list_experiences(resume_id).await;
        let experiences = self.record(result)?;

        self.experiences = experiences;
        self.current = Some(resume);
        Ok(self.current.as_ref().expect("just set"))
    }

    /// Create a resume from pasted text, run the section extractor over the
    /// content, and persist every candidate entry in parse order. The new
    /// resume becomes the current selection.
    pub async fn upload(&mut self, title: String, content: String) -> Result<&Resume> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(JobtrailError::Validation(
                "Resume title and content are required".to_string(),
            ));
        }

        let result = self
            .store
            .create_resume(NewResume {
                title,
                content: content.clone(),
            })
            .await;
        let resume = self.record(result)?;
        tracing::info!(id = %resume.id, "Created resume");

        let mut experiences = Vec::new();
        for parsed in parse_experiences(&content) {
            let result = self.store.insert_experience(parsed.into_new(resume.id)).await;
            experiences.push(self.record(result)?);
        }
        tracing::info!(count = experiences.len(), "Extracted work experiences");

        self.resumes.insert(0, resume.clone());
        self.experiences = experiences;
        self.current = Some(resume);
        Ok(self.current.as_ref().expect("just set"))
    }

    /// Overwrite the live description of one experience of the current
    /// selection. `original_description` is untouched.
    pub async fn update_description(
        &mut self,
        experience_id: Uuid,
        description: &str,
    ) -> Result<WorkExperience> {
        let result = self.store.update_description(experience_id, description).await;
        let updated = self.record(result)?;
        self.replace_experience(updated.clone());
        Ok(updated)
    }

    /// Restore the description captured when the experience was created,
    /// however many edits happened in between.
    pub async fn reset_description(&mut self, experience_id: Uuid) -> Result<WorkExperience> {
        let original = self
            .experiences
            .iter()
            .find(|e| e.id == experience_id)
            .map(|e| e.original_description.clone())
            .ok_or_else(|| JobtrailError::NotFound(experience_id.to_string()))?;

        let result = self
            .store
            .update_description(experience_id, &original)
            .await;
        let updated = self.record(result)?;
        self.replace_experience(updated.clone());
        Ok(updated)
    }

    /// Delete a resume. Deleting the current selection clears it and
    /// empties the experience list.
    pub async fn delete_resume(&mut self, resume_id: Uuid) -> Result<()> {
        let result = self.store.delete_resume(resume_id).await;
        self.record(result)?;

        self.resumes.retain(|r| r.id != resume_id);
        if self.current.as_ref().is_some_and(|r| r.id == resume_id) {
            self.current = None;
            self.experiences.clear();
        }
        Ok(())
    }

    fn replace_experience(&mut self, updated: WorkExperience) {
        if let Some(slot) = self.experiences.iter_mut().find(|e| e.id == updated.id) {
            *slot = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewExperience, NewResume};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory fake store backing the session tests.
    #[derive(Default)]
    struct FakeStore {
        resumes: Mutex<Vec<Resume>>,
        experiences: Mutex<Vec<WorkExperience>>,
        fail_next: Mutex<bool>,
    }

    impl FakeStore {
        fn fail_next(&self) {
            *self.fail_next.lock().unwrap() = true;
        }

        fn maybe_fail(&self) -> Result<()> {
            let mut flag = self.fail_next.lock().unwrap();
            if *flag {
                *flag = false;
                return Err(JobtrailError::Remote {
                    status: 500,
                    message: "injected failure".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ResumeStore for FakeStore {
        async fn list_resumes(&self) -> Result<Vec<Resume>> {
            self.maybe_fail()?;
            Ok(self.resumes.lock().unwrap().clone())
        }

        async fn create_resume(&self, new: NewResume) -> Result<Resume> {
            self.maybe_fail()?;
            let now = Utc::now();
            let resume = Resume {
                id: Uuid::new_v4(),
                user_id: None,
                title: new.title,
                content: new.content,
                created_at: now,
                updated_at: now,
            };
            self.resumes.lock().unwrap().push(resume.clone());
            Ok(resume)
        }

        async fn delete_resume(&self, id: Uuid) -> Result<()> {
            self.maybe_fail()?;
            self.resumes.lock().unwrap().retain(|r| r.id != id);
            self.experiences
                .lock()
                .unwrap()
                .retain(|e| e.resume_id != id);
            Ok(())
        }

        async fn list_experiences(&self, resume_id: Uuid) -> Result<Vec<WorkExperience>> {
            self.maybe_fail()?;
            let mut rows: Vec<WorkExperience> = self
                .experiences
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.resume_id == resume_id)
                .cloned()
                .collect();
            rows.sort_by_key(|e| e.order);
            Ok(rows)
        }

        async fn insert_experience(&self, new: NewExperience) -> Result<WorkExperience> {
            self.maybe_fail()?;
            let now = Utc::now();
            let row = WorkExperience {
                id: Uuid::new_v4(),
                resume_id: new.resume_id,
                title: new.title,
                company: new.company,
                start_date: new.start_date,
                end_date: new.end_date,
                description: new.description,
                original_description: new.original_description,
                order: new.order,
                created_at: now,
                updated_at: now,
            };
            self.experiences.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn update_description(&self, id: Uuid, description: &str) -> Result<WorkExperience> {
            self.maybe_fail()?;
            let mut rows = self.experiences.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| JobtrailError::NotFound(id.to_string()))?;
            row.description = description.to_string();
            row.updated_at = Utc::now();
            Ok(row.clone())
        }
    }

    fn session() -> (ResumeSession, Arc<FakeStore>) {
        let store = Arc::new(FakeStore::default());
        (ResumeSession::new(store.clone()), store)
    }

    const RESUME_TEXT: &str = "Acme\nEngineer\n2019 - 2022\nBuilt things\n";

    #[tokio::test]
    async fn test_upload_creates_resume_and_experiences() {
        let (mut session, _store) = session();

        let resume_id = session
            .upload("Base Resume".to_string(), RESUME_TEXT.to_string())
            .await
            .unwrap()
            .id;

        assert_eq!(session.resumes().len(), 1);
        assert_eq!(session.current().unwrap().id, resume_id);
        assert_eq!(session.experiences().len(), 1);
        assert_eq!(session.experiences()[0].title, "Engineer");
        assert_eq!(session.experiences()[0].description, "Built things");
    }

    #[tokio::test]
    async fn test_upload_rejects_blank_input() {
        let (mut session, _store) = session();
        assert!(session.upload(" ".to_string(), "x".to_string()).await.is_err());
        assert!(session.upload("t".to_string(), "".to_string()).await.is_err());
        assert!(session.resumes().is_empty());
    }

    #[tokio::test]
    async fn test_reset_restores_creation_time_description() {
        let (mut session, _store) = session();
        session
            .upload("Base".to_string(), RESUME_TEXT.to_string())
            .await
            .unwrap();
        let exp_id = session.experiences()[0].id;

        // Several intermediate edits
        session.update_description(exp_id, "edit one").await.unwrap();
        session.update_description(exp_id, "edit two").await.unwrap();
        assert_eq!(session.experiences()[0].description, "edit two");
        assert!(session.experiences()[0].is_modified());

        let reset = session.reset_description(exp_id).await.unwrap();
        assert_eq!(reset.description, "Built things");
        assert!(!session.experiences()[0].is_modified());
    }

    #[tokio::test]
    async fn test_delete_selected_resume_clears_selection() {
        let (mut session, _store) = session();
        let resume_id = session
            .upload("Base".to_string(), RESUME_TEXT.to_string())
            .await
            .unwrap()
            .id;

        session.delete_resume(resume_id).await.unwrap();

        assert!(session.resumes().is_empty());
        assert!(session.current().is_none());
        assert!(session.experiences().is_empty());
    }

    #[tokio::test]
    async fn test_delete_other_resume_keeps_selection() {
        let (mut session, _store) = session();
        let kept = session
            .upload("Kept".to_string(), RESUME_TEXT.to_string())
            .await
            .unwrap()
            .id;
        let dropped = session
            .upload("Dropped".to_string(), RESUME_TEXT.to_string())
            .await
            .unwrap()
            .id;

        // Select the first one back, then delete the other.
        session.select(kept).await.unwrap();
        session.delete_resume(dropped).await.unwrap();

        assert_eq!(session.current().unwrap().id, kept);
        assert!(!session.experiences().is_empty());
    }

    #[tokio::test]
    async fn test_failure_leaves_state_and_sets_banner() {
        let (mut session, store) = session();
        session
            .upload("Base".to_string(), RESUME_TEXT.to_string())
            .await
            .unwrap();
        let exp_id = session.experiences()[0].id;

        store.fail_next();
        let err = session.update_description(exp_id, "new text").await;
        assert!(err.is_err());

        // Local state unchanged, error banner set
        assert_eq!(session.experiences()[0].description, "Built things");
        assert!(session.last_error().unwrap().contains("injected failure"));

        // Next success clears the banner
        session.update_description(exp_id, "new text").await.unwrap();
        assert!(session.last_error().is_none());
    }
}
