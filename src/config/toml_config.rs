use crate::adapters::http::SupabaseCatalog;
use crate::adapters::storage::{FileCatalog, LocalStorage};
use crate::adapters::CatalogBackend;
use crate::core::sitemap::{CHANGE_FREQUENCIES, DEFAULT_CHANGE_FREQUENCY, DEFAULT_PAIR_PRIORITY};
use crate::core::ConfigProvider;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const SOURCE_TYPES: [&str; 2] = ["supabase", "file"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub site: SiteConfig,
    pub source: SourceConfig,
    pub sitemap: Option<SitemapConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    /// Supabase project URL, e.g. `https://<ref>.supabase.co`.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    /// JSON catalog file, for `type = "file"`.
    pub path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapConfig {
    pub output_path: Option<String>,
    pub change_frequency: Option<String>,
    pub pair_priority: Option<f64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: None,
            base_url: default_base_url(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            source: SourceConfig {
                r#type: "supabase".to_string(),
                endpoint: None,
                api_key: None,
                path: None,
                timeout_seconds: None,
            },
            sitemap: None,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CompareError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CompareError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn sitemap_output_path(&self) -> &str {
        self.sitemap
            .as_ref()
            .and_then(|s| s.output_path.as_deref())
            .unwrap_or(".")
    }

    /// Builds the catalog source named by `[source]`. Call `validate` first.
    pub fn build_source(&self) -> Result<CatalogBackend> {
        match self.source.r#type.as_str() {
            "supabase" => {
                let endpoint = required("source.endpoint", &self.source.endpoint)?;
                let api_key = required("source.api_key", &self.source.api_key)?;
                Ok(CatalogBackend::Supabase(SupabaseCatalog::new(
                    endpoint.as_str(),
                    api_key.as_str(),
                    self.timeout(),
                )?))
            }
            "file" => {
                let path = required("source.path", &self.source.path)?;
                Ok(CatalogBackend::File(FileCatalog::new(
                    LocalStorage::new(".".to_string()),
                    path.as_str(),
                )))
            }
            other => Err(CompareError::InvalidConfigValueError {
                field: "source.type".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", SOURCE_TYPES.join(", ")),
            }),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("site.base_url", &self.site.base_url)?;
        validation::validate_one_of("source.type", &self.source.r#type, &SOURCE_TYPES)?;

        if self.source.r#type == "supabase" {
            let endpoint = required("source.endpoint", &self.source.endpoint)?;
            validation::validate_url("source.endpoint", endpoint)?;

            let api_key = required("source.api_key", &self.source.api_key)?;
            if api_key.trim().is_empty() {
                return Err(invalid_value("source.api_key", api_key, "API key cannot be empty"));
            }
            if env_var_pattern().is_match(api_key) {
                return Err(invalid_value(
                    "source.api_key",
                    api_key,
                    "Environment variable is not set",
                ));
            }
        } else {
            let path = required("source.path", &self.source.path)?;
            check_path("source.path", path)?;
        }

        if self.source.timeout_seconds == Some(0) {
            return Err(invalid_value(
                "source.timeout_seconds",
                "0",
                "Timeout must be at least 1 second",
            ));
        }

        if let Some(sitemap) = &self.sitemap {
            if let Some(path) = &sitemap.output_path {
                check_path("sitemap.output_path", path)?;
            }
            if let Some(freq) = &sitemap.change_frequency {
                validation::validate_one_of("sitemap.change_frequency", freq, &CHANGE_FREQUENCIES)?;
            }
            if let Some(priority) = sitemap.pair_priority {
                validation::validate_range("sitemap.pair_priority", priority, 0.0, 1.0)?;
            }
        }

        Ok(())
    }
}

fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a String> {
    value.as_ref().ok_or_else(|| CompareError::MissingConfigError {
        field: field.to_string(),
    })
}

fn invalid_value(field: &str, value: &str, reason: &str) -> CompareError {
    CompareError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn check_path(field: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid_value(field, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid_value(field, path, "Path contains null bytes"));
    }
    Ok(())
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.site.base_url
    }

    fn change_frequency(&self) -> &str {
        self.sitemap
            .as_ref()
            .and_then(|s| s.change_frequency.as_deref())
            .unwrap_or(DEFAULT_CHANGE_FREQUENCY)
    }

    fn pair_priority(&self) -> f64 {
        self.sitemap
            .as_ref()
            .and_then(|s| s.pair_priority)
            .unwrap_or(DEFAULT_PAIR_PRIORITY)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
