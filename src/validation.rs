//! Input validation for job application data.

use crate::error::{JobtrailError, Result};

/// Maximum allowed length for company and role names.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for free-form notes.
pub const MAX_NOTES_LENGTH: usize = 50_000;

/// Validates a company name.
pub fn validate_company(company: &str) -> Result<()> {
    if company.trim().is_empty() {
        return Err(JobtrailError::Validation(
            "Company cannot be empty".to_string(),
        ));
    }
    if company.len() > MAX_NAME_LENGTH {
        return Err(JobtrailError::Validation(format!(
            "Company exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a role title.
pub fn validate_role(role: &str) -> Result<()> {
    if role.trim().is_empty() {
        return Err(JobtrailError::Validation("Role cannot be empty".to_string()));
    }
    if role.len() > MAX_NAME_LENGTH {
        return Err(JobtrailError::Validation(format!(
            "Role exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates an optional posting link as an absolute URL.
pub fn validate_link(link: Option<&str>) -> Result<()> {
    if let Some(link) = link {
        url::Url::parse(link)
            .map_err(|e| JobtrailError::Validation(format!("Invalid link '{}': {}", link, e)))?;
    }
    Ok(())
}

/// Validates notes content.
pub fn validate_notes(notes: &str) -> Result<()> {
    if notes.len() > MAX_NOTES_LENGTH {
        return Err(JobtrailError::Validation(format!(
            "Notes exceed maximum length of {} characters",
            MAX_NOTES_LENGTH
        )));
    }
    Ok(())
}
