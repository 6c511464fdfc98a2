//! AI text customization.
//!
//! One HTTP POST to a remote customization endpoint that rewrites a work
//! experience's original description against a pasted job description.
//! The caller supplies the OpenAI key per call; it is passed through on the
//! wire and never persisted or logged. One shot, no retry: any transport
//! error or non-success status is terminal for that action.

use crate::error::{JobtrailError, Result};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomizeRequest<'a> {
    openai_key: &'a str,
    original_description: &'a str,
    job_description: &'a str,
    job_title: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomizeResponse {
    customized_description: String,
}

/// Client for the customize-resume endpoint.
pub struct CustomizeClient {
    client: Client,
    endpoint: String,
}

impl CustomizeClient {
    pub fn new(endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Rewrite `original` to target `job_description`, returning the
    /// replacement description.
    pub async fn customize(
        &self,
        api_key: &SecretString,
        original: &str,
        job_description: &str,
        job_title: &str,
    ) -> Result<String> {
        tracing::info!(job_title = %job_title, "Requesting AI customization");

        let body = CustomizeRequest {
            openai_key: api_key.expose_secret(),
            original_description: original,
            job_description,
            job_title,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| JobtrailError::Customize(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobtrailError::Customize(format!(
                "Service returned {}: {}",
                status, message
            )));
        }

        let parsed: CustomizeResponse = response
            .json()
            .await
            .map_err(|e| JobtrailError::Customize(format!("Invalid response body: {}", e)))?;

        Ok(parsed.customized_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let body = CustomizeRequest {
            openai_key: "sk-test",
            original_description: "Did work",
            job_description: "Wants work done",
            job_title: "Engineer",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["openaiKey"], "sk-test");
        assert_eq!(json["originalDescription"], "Did work");
        assert_eq!(json["jobDescription"], "Wants work done");
        assert_eq!(json["jobTitle"], "Engineer");
    }

    #[test]
    fn test_response_wire_format() {
        let parsed: CustomizeResponse =
            serde_json::from_str(r#"{"customizedDescription": "Tailored text"}"#).unwrap();
        assert_eq!(parsed.customized_description, "Tailored text");
    }
}
