use crate::error::{JobtrailError, Result};
use crate::model::{NewExperience, NewResume, Resume, WorkExperience};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

const RESUMES_TABLE: &str = "resumes";
const EXPERIENCE_TABLE: &str = "resume_work_experience";

/// PostgREST-style client for the resume store.
///
/// Explicitly constructed and passed around; holds the configured base URL
/// and API key instead of relying on any process-wide state.
pub struct RestResumeStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestResumeStore {
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Convert a non-success response into a single error with the status
    /// and response body; surface-level, no retry.
    async fn check<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobtrailError::Remote {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Inserts return a representation array; we insert one row at a time.
    fn single<T>(rows: Vec<T>, what: &str) -> Result<T> {
        rows.into_iter()
            .next()
            .ok_or_else(|| JobtrailError::Remote {
                status: 200,
                message: format!("Store returned no {} row", what),
            })
    }
}

#[async_trait]
impl super::ResumeStore for RestResumeStore {
    async fn list_resumes(&self) -> Result<Vec<Resume>> {
        let response = self
            .authed(self.client.get(self.table_url(RESUMES_TABLE)))
            .query(&[("select", "*"), ("order", "updated_at.desc")])
            .send()
            .await?;
        self.check(response).await
    }

    async fn create_resume(&self, new: NewResume) -> Result<Resume> {
        tracing::info!(title = %new.title, "Creating resume");
        let response = self
            .authed(self.client.post(self.table_url(RESUMES_TABLE)))
            .header("Prefer", "return=representation")
            .json(&vec![new])
            .send()
            .await?;
        let rows: Vec<Resume> = self.check(response).await?;
        Self::single(rows, "resume")
    }

    async fn delete_resume(&self, id: Uuid) -> Result<()> {
        tracing::info!(id = %id, "Deleting resume");
        let response = self
            .authed(self.client.delete(self.table_url(RESUMES_TABLE)))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobtrailError::Remote {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    async fn list_experiences(&self, resume_id: Uuid) -> Result<Vec<WorkExperience>> {
        let response = self
            .authed(self.client.get(self.table_url(EXPERIENCE_TABLE)))
            .query(&[
                ("select", "*".to_string()),
                ("resume_id", format!("eq.{}", resume_id)),
                ("order", "order.asc".to_string()),
            ])
            .send()
            .await?;
        self.check(response).await
    }

    async fn insert_experience(&self, new: NewExperience) -> Result<WorkExperience> {
        tracing::debug!(resume_id = %new.resume_id, order = new.order, "Inserting work experience");
        let response = self
            .authed(self.client.post(self.table_url(EXPERIENCE_TABLE)))
            .header("Prefer", "return=representation")
            .json(&vec![new])
            .send()
            .await?;
        let rows: Vec<WorkExperience> = self.check(response).await?;
        Self::single(rows, "work experience")
    }

    async fn update_description(&self, id: Uuid, description: &str) -> Result<WorkExperience> {
        tracing::debug!(id = %id, "Updating experience description");
        let response = self
            .authed(self.client.patch(self.table_url(EXPERIENCE_TABLE)))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "description": description }))
            .send()
            .await?;
        let rows: Vec<WorkExperience> = self.check(response).await?;
        Self::single(rows, "work experience")
    }
}
