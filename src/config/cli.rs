use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Args;

/// Catalog and site flags shared by every binary. Flags win over the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Supabase project URL
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// Supabase anon key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,

    /// Read the catalog from a JSON file instead of Supabase
    #[arg(long)]
    pub catalog_file: Option<String>,

    /// Public URL of the comparison page
    #[arg(long)]
    pub base_url: Option<String>,

    /// HTTP timeout for catalog requests
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl SourceArgs {
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(path) = &self.catalog_file {
            config.source.r#type = "file".to_string();
            config.source.path = Some(path.clone());
            tracing::debug!("🔧 Catalog file overridden to: {}", path);
        } else if let Some(url) = &self.supabase_url {
            config.source.r#type = "supabase".to_string();
            config.source.endpoint = Some(url.clone());
            tracing::debug!("🔧 Supabase URL overridden to: {}", url);
        }
        if let Some(key) = &self.supabase_key {
            config.source.api_key = Some(key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.site.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = Some(timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_file_overrides_supabase() {
        let mut config = TomlConfig::from_toml_str(
            "[source]\ntype = \"supabase\"\nendpoint = \"https://abc.supabase.co\"\napi_key = \"k\"\n",
        )
        .unwrap();
        let args = SourceArgs {
            catalog_file: Some("phones.json".to_string()),
            base_url: Some("https://compare.example.com".to_string()),
            ..Default::default()
        };

        args.apply_overrides(&mut config);

        assert_eq!(config.source.r#type, "file");
        assert_eq!(config.source.path.as_deref(), Some("phones.json"));
        assert_eq!(config.site.base_url, "https://compare.example.com");
    }

    #[test]
    fn test_load_without_file_uses_flags() {
        let args = SourceArgs {
            supabase_url: Some("https://abc.supabase.co".to_string()),
            supabase_key: Some("anon".to_string()),
            timeout_seconds: Some(2),
            ..Default::default()
        };

        let config = args.load().unwrap();

        assert_eq!(config.source.r#type, "supabase");
        assert_eq!(config.source.api_key.as_deref(), Some("anon"));
        assert_eq!(config.source.timeout_seconds, Some(2));
    }
}
