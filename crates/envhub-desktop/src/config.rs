//! Desktop configuration from environment variables

use envhub_core::MetadataSpace;

const DEFAULT_RECORD_TYPE: &str = "EnvVarRecord";
const DEFAULT_PREFIX: &str = "EnvVar";

/// Remote store connection settings for the desktop app
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    /// Metadata API base URL
    pub api_base_url: String,
    /// Bearer token for the metadata API
    pub access_token: String,
    /// Record class and namespace prefix
    pub space: MetadataSpace,
}

impl DesktopConfig {
    /// Read configuration from the environment.
    ///
    /// Returns `None` when no remote store is configured; the app then
    /// starts offline.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_base_url = env_value("ENVHUB_API_BASE_URL")?;
        let access_token = env_value("ENVHUB_ACCESS_TOKEN")?;
        let record_type =
            env_value("ENVHUB_RECORD_TYPE").unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string());
        let prefix = env_value("ENVHUB_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        Some(Self {
            api_base_url,
            access_token,
            space: MetadataSpace::new(record_type, prefix),
        })
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(normalize)
}

/// Trim a configured value and drop it entirely when empty
fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_blank_values() {
        assert_eq!(normalize("  ".to_string()), None);
        assert_eq!(normalize(String::new()), None);
        assert_eq!(
            normalize("  https://api.example.com ".to_string()),
            Some("https://api.example.com".to_string())
        );
    }
}
