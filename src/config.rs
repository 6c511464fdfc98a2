use crate::error::{JobtrailError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerSettings,

    #[serde(default)]
    pub remote: RemoteSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Directory holding the job document, relative to the project root.
    #[serde(default = "default_tracker_path")]
    pub path: String,
}

fn default_tracker_path() -> String {
    ".jobtrail".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// Base URL of the resume store (PostgREST-style API).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the store API key.
    /// Keys never live in the config file itself.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Override for the customize-resume endpoint. Defaults to
    /// `{base_url}/functions/v1/customize-resume`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customize_endpoint: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_api_key_env() -> String {
    "JOBTRAIL_REMOTE_KEY".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port for the document-extraction service.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8780
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            path: default_tracker_path(),
        }
    }
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            customize_endpoint: None,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl RemoteSettings {
    /// Resolve the store API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).map_err(|_| {
            JobtrailError::Config(format!(
                "Environment variable '{}' is not set",
                self.api_key_env
            ))
        })
    }

    pub fn customize_endpoint(&self) -> String {
        self.customize_endpoint.clone().unwrap_or_else(|| {
            format!(
                "{}/functions/v1/customize-resume",
                self.base_url.trim_end_matches('/')
            )
        })
    }
}

impl Config {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                JobtrailError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(".jobtrail.yml");
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(JobtrailError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.tracker.path)
    }

    /// Location of the single JSON document holding the job list.
    pub fn jobs_file(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join("jobs.json")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
