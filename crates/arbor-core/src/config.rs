use serde::{Deserialize, Serialize};

/// Base URL of the public catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api";

/// Root of `config.toml`.
///
/// Every key is optional; a missing file or key falls back to the defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArborConfig {
    pub api_base_url: String,
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ArborConfig {
    /// Replaces the base URL, trimming surrounding whitespace and trailing slashes.
    pub fn with_api_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.api_base_url = url.as_ref().trim().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ArborConfig::default().api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_with_api_base_url_trims() {
        let config = ArborConfig::default().with_api_base_url(" http://localhost:8080/api/ ");
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: ArborConfig = toml::from_str("").unwrap();
        assert_eq!(config, ArborConfig::default());
    }
}
