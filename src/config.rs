use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Articles per rendered page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Search term used when the request carries none
    #[serde(default = "default_query")]
    pub default_query: String,
    pub api: ApiConfig,
}

fn default_page_size() -> u32 {
    12
}

fn default_query() -> String {
    "technology".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub key: String,
}

fn default_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        assert_eq!(default_page_size(), 12);
        assert_eq!(default_query(), "technology");
        assert_eq!(default_base_url(), "https://newsapi.org/v2");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
            page_size = 20
            default_query = "rust"

            [api]
            base_url = "https://news.example.com/v2"
            key = "secret"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.page_size, 20);
        assert_eq!(config.default_query, "rust");
        assert_eq!(config.api.base_url, "https://news.example.com/v2");
        assert_eq!(config.api.key, "secret");
    }

    #[test]
    fn test_load_config_with_defaults() {
        let content = r#"
            [api]
            key = "secret"
        "#;

        let config = Config::from_str(content).unwrap();

        assert_eq!(config.page_size, 12);
        assert_eq!(config.default_query, "technology");
        assert_eq!(config.api.base_url, "https://newsapi.org/v2");
    }

    #[test]
    fn test_api_key_defaults_to_empty() {
        let content = "[api]";

        let config = Config::from_str(content).unwrap();
        assert!(config.api.key.is_empty());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let content = "this is not valid toml {{{";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_api_section() {
        let content = "page_size = 10";

        let result = Config::from_str(content);
        assert!(result.is_err());
    }
}
