use crate::{
    error::{JobtrailError, Result},
    model::{JobApplication, JobForm, JobStatus},
    validation,
};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Field-level changes applied by [`JobStore::update`]. `None` leaves the
/// field untouched; optional fields use a nested Option so they can be
/// cleared explicitly.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<JobStatus>,
    pub date_applied: Option<String>,
    pub salary: Option<Option<String>>,
    pub link: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

/// The job list plus its backing document.
///
/// All mutations apply to the in-memory list first and then rewrite the
/// whole document. Last write wins; there is no merging.
pub struct JobStore {
    file_path: PathBuf,
    jobs: Vec<JobApplication>,
}

impl JobStore {
    /// Open the store, reading the document if it exists. A missing file is
    /// an empty list, not an error.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        let jobs = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        Ok(Self { file_path, jobs })
    }

    pub fn jobs(&self) -> &[JobApplication] {
        &self.jobs
    }

    /// Look up a job by full id or unique id prefix.
    pub fn find(&self, id: &str) -> Result<&JobApplication> {
        if let Ok(uuid) = id.parse::<Uuid>() {
            return self
                .jobs
                .iter()
                .find(|j| j.id == uuid)
                .ok_or_else(|| JobtrailError::NotFound(id.to_string()));
        }

        let matches: Vec<&JobApplication> = self
            .jobs
            .iter()
            .filter(|j| j.id.to_string().starts_with(id))
            .collect();
        match matches.len() {
            0 => Err(JobtrailError::NotFound(id.to_string())),
            1 => Ok(matches[0]),
            n => Err(JobtrailError::Validation(format!(
                "ID prefix '{}' is ambiguous ({} matches)",
                id, n
            ))),
        }
    }

    /// Create a new application and prepend it to the list.
    pub fn add(&mut self, form: JobForm) -> Result<JobApplication> {
        validation::validate_company(&form.company)?;
        validation::validate_role(&form.role)?;
        validation::validate_link(form.link.as_deref())?;
        if let Some(ref notes) = form.notes {
            validation::validate_notes(notes)?;
        }

        let job = JobApplication::new(form);
        tracing::info!(id = %job.id, company = %job.company, "Adding job application");

        self.jobs.insert(0, job.clone());
        self.save()?;
        Ok(job)
    }

    /// Apply field changes to one application and refresh its timestamp.
    pub fn update(&mut self, id: &str, changes: JobUpdate) -> Result<JobApplication> {
        let uuid = self.find(id)?.id;
        tracing::info!(id = %uuid, "Updating job application");

        if let Some(ref company) = changes.company {
            validation::validate_company(company)?;
        }
        if let Some(ref role) = changes.role {
            validation::validate_role(role)?;
        }
        if let Some(Some(ref link)) = changes.link {
            validation::validate_link(Some(link))?;
        }
        if let Some(Some(ref notes)) = changes.notes {
            validation::validate_notes(notes)?;
        }

        let job = self
            .jobs
            .iter_mut()
            .find(|j| j.id == uuid)
            .expect("id resolved above");

        if let Some(company) = changes.company {
            job.company = company;
        }
        if let Some(role) = changes.role {
            job.role = role;
        }
        if let Some(status) = changes.status {
            job.status = status;
        }
        if let Some(date) = changes.date_applied {
            job.date_applied = date;
        }
        if let Some(salary) = changes.salary {
            job.salary = salary;
        }
        if let Some(link) = changes.link {
            job.link = link;
        }
        if let Some(notes) = changes.notes {
            job.notes = notes;
        }
        job.touch();

        let job = job.clone();
        self.save()?;
        Ok(job)
    }

    /// Move an application to another board column.
    pub fn move_to(&mut self, id: &str, status: JobStatus) -> Result<JobApplication> {
        self.update(
            id,
            JobUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let uuid = self.find(id)?.id;
        tracing::info!(id = %uuid, "Deleting job application");

        self.jobs.retain(|j| j.id != uuid);
        self.save()
    }

    /// Pretty-printed JSON of the full list, the export document format.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.jobs)?)
    }

    /// Replace the entire list with the contents of an exported document.
    /// The document must be a JSON array of applications; anything else is
    /// rejected without touching current state.
    pub fn import_json(&mut self, content: &str) -> Result<usize> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| JobtrailError::Validation(format!("Invalid JSON file: {}", e)))?;
        if !value.is_array() {
            return Err(JobtrailError::Validation(
                "Import file must be a JSON array of job applications".to_string(),
            ));
        }

        let jobs: Vec<JobApplication> = serde_json::from_value(value)
            .map_err(|e| JobtrailError::Validation(format!("Invalid job record: {}", e)))?;

        tracing::info!(count = jobs.len(), "Importing job list wholesale");
        self.jobs = jobs;
        self.save()?;
        Ok(self.jobs.len())
    }

    /// Jobs grouped into the five fixed board columns, in column order.
    pub fn by_status(&self) -> Vec<(JobStatus, Vec<&JobApplication>)> {
        JobStatus::ALL
            .iter()
            .map(|&status| {
                let column = self.jobs.iter().filter(|j| j.status == status).collect();
                (status, column)
            })
            .collect()
    }

    /// Rewrite the backing document from the in-memory list.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.jobs)?;
        atomic_write(&self.file_path, &content)
    }
}

/// Atomically write content to a file using temp file + rename, so a crash
/// never leaves a partially written document.
fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = target_path
        .parent()
        .ok_or_else(|| JobtrailError::Storage("Target path has no parent directory".to_string()))?;

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| JobtrailError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| JobtrailError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| JobtrailError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(target_path)
        .map_err(|e| JobtrailError::Storage(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
