//! Configuration management

use std::{env, path::Path};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Default service location
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Environment files to load before processing config.
    /// Paths support ~ expansion. Loaded in order, later files override earlier.
    pub env_files: Vec<String>,
    /// Analysis API configuration
    pub api: ApiConfig,
}

/// Analysis API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Memescan service; supports `${VAR}` and `${VAR:-default}`
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional YAML file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the config file does not exist, cannot be parsed,
    /// or the resulting base URL is not a usable http(s) URL.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(p) = path {
            if !p.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            figment = figment.merge(Yaml::file(p));
        }

        // MEMESCAN_API__BASE_URL -> api.base_url
        figment = figment.merge(Env::prefixed("MEMESCAN_").split("__"));

        let mut config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.load_env_files();
        config.expand_env_vars()?;
        config.validate()?;

        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)
            .map_err(|e| Error::Config(format!("Invalid api.base_url '{}': {e}", self.api.base_url)))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Config(format!(
                    "Unsupported api.base_url scheme '{other}' (expected http or https)"
                )));
            }
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::Config(format!(
                "api.base_url must not carry a query or fragment: {}",
                self.api.base_url
            )));
        }

        Ok(())
    }

    /// Load environment files into the process environment.
    /// Files that don't exist are skipped.
    fn load_env_files(&self) {
        for path_str in &self.env_files {
            let expanded = if path_str.starts_with('~') {
                match dirs::home_dir() {
                    Some(home) => path_str.replacen('~', &home.display().to_string(), 1),
                    None => path_str.clone(),
                }
            } else {
                path_str.clone()
            };

            let path = Path::new(&expanded);
            if !path.exists() {
                tracing::debug!("Env file not found (skipped): {expanded}");
                continue;
            }
            match dotenvy::from_path(path) {
                Ok(()) => tracing::info!("Loaded env file: {expanded}"),
                Err(e) => tracing::warn!("Failed to load env file {expanded}: {e}"),
            }
        }
    }

    /// Expand ${VAR} and ${VAR:-default} in the base URL
    fn expand_env_vars(&mut self) -> Result<()> {
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
            .map_err(|e| Error::Config(e.to_string()))?;
        self.api.base_url = expand_string(&re, &self.api.base_url);
        Ok(())
    }
}

fn expand_string(re: &Regex, value: &str) -> String {
    re.replace_all(value, |caps: &regex::Captures| {
        let default = caps.get(2).map_or("", |m| m.as_str());
        env::var(&caps[1]).unwrap_or_else(|_| default.to_string())
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn with_base(base_url: &str) -> Config {
        Config {
            api: ApiConfig {
                base_url: base_url.to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memescan.yaml");
        std::fs::write(&path, "api:\n  base_url: \"https://scan.example.com/api\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api.base_url, "https://scan.example.com/api");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/memescan.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(with_base("not a url").validate().is_err());
        assert!(with_base("ftp://scan.example.com").validate().is_err());
        assert!(with_base("http://scan.example.com/?x=1").validate().is_err());
        assert!(with_base("https://scan.example.com:8443/v1/").validate().is_ok());
    }

    #[test]
    fn test_expand_string_uses_default_when_unset() {
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}").unwrap();
        let expanded = expand_string(
            &re,
            "http://${MEMESCAN_TEST_UNSET_HOST:-localhost}:${MEMESCAN_TEST_UNSET_PORT:-8000}",
        );
        assert_eq!(expanded, "http://localhost:8000");
    }

    #[test]
    fn test_env_file_feeds_base_url_expansion() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join("memescan.env");
        let mut f = std::fs::File::create(&env_path).unwrap();
        writeln!(f, "MEMESCAN_TEST_SCAN_HOST=scan.internal").unwrap();
        drop(f);

        let mut config = Config {
            env_files: vec![env_path.to_string_lossy().to_string()],
            api: ApiConfig {
                base_url: "http://${MEMESCAN_TEST_SCAN_HOST}:9000".to_string(),
            },
        };
        config.load_env_files();
        config.expand_env_vars().unwrap();

        assert_eq!(config.api.base_url, "http://scan.internal:9000");
    }

    #[test]
    fn test_load_env_files_skips_missing() {
        let config = Config {
            env_files: vec!["/nonexistent/path/.env".to_string()],
            ..Default::default()
        };
        config.load_env_files();
    }

    #[test]
    fn test_deserialized_from_yaml() {
        let yaml = r"
env_files:
  - ~/.memescan/secrets.env
api:
  base_url: http://10.0.0.5:8000
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.env_files, vec!["~/.memescan/secrets.env".to_string()]);
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config: Config = serde_yaml::from_str("env_files: []\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }
}
