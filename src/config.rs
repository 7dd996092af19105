use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_PROFILE: &str = "DEFAULT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("profile '{profile}' not found in {}", .path.display())]
    MissingProfile { profile: String, path: PathBuf },

    #[error("profile '{profile}' is missing required key '{key}'")]
    MissingKey { profile: String, key: String },

    #[error("no home directory; set OCI_CONFIG_FILE to the config location")]
    NoHomeDir,

    #[error("failed to read security token {}: {message}", .path.display())]
    TokenRead { path: PathBuf, message: String },
}

/// Credentials and scope loaded from the OCI CLI config file.
///
/// Only session-token authentication is supported: the selected profile must
/// name a `security_token_file`, whose trimmed contents become the bearer
/// credential for every identity lookup.
#[derive(Clone, PartialEq)]
pub struct OciConfig {
    pub tenancy: String,
    pub region: String,
    pub security_token: String,
}

impl OciConfig {
    /// Loads the given profile from the default location, `~/.oci/config`.
    pub fn from_default_file(profile: &str) -> Result<Self, ConfigError> {
        let path = dirs::home_dir()
            .ok_or(ConfigError::NoHomeDir)?
            .join(".oci")
            .join("config");
        Self::from_file(&path, profile)
    }

    pub fn from_file(path: &Path, profile: &str) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let profiles = parse_profiles(&text);
        let entries = profiles
            .get(profile)
            .ok_or_else(|| ConfigError::MissingProfile {
                profile: profile.to_string(),
                path: path.to_path_buf(),
            })?;

        let tenancy = require(entries, profile, "tenancy")?;
        let region = require(entries, profile, "region")?;
        let token_file = require(entries, profile, "security_token_file")?;

        let token_path = expand_home(&token_file)?;
        let security_token = std::fs::read_to_string(&token_path)
            .map_err(|e| ConfigError::TokenRead {
                path: token_path.clone(),
                message: e.to_string(),
            })?
            .trim()
            .to_string();

        Ok(Self {
            tenancy,
            region,
            security_token,
        })
    }
}

impl fmt::Debug for OciConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OciConfig")
            .field("tenancy", &self.tenancy)
            .field("region", &self.region)
            .field("security_token", &"[REDACTED]")
            .finish()
    }
}

fn require(
    entries: &HashMap<String, String>,
    profile: &str,
    key: &str,
) -> Result<String, ConfigError> {
    entries
        .get(key)
        .cloned()
        .ok_or_else(|| ConfigError::MissingKey {
            profile: profile.to_string(),
            key: key.to_string(),
        })
}

/// Parses the INI profile format written by the OCI CLI: `[NAME]` section
/// headers, `key=value` entries, `#`/`;` comments.
fn parse_profiles(text: &str) -> HashMap<String, HashMap<String, String>> {
    let mut profiles: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_string();
            profiles.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        if let (Some(profile), Some((key, value))) = (&current, line.split_once('=')) {
            if let Some(entries) = profiles.get_mut(profile) {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    profiles
}

fn expand_home(path: &str) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~/") {
        Some(rest) => Ok(dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}
