#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::SelectionInput;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "phone-compare")]
#[command(about = "Compare two phone models side by side")]
pub struct CliConfig {
    #[command(flatten)]
    pub source: cli::SourceArgs,

    /// Query string as found in a share link, e.g. "primary=iphone15&secondary=iphone14"
    #[arg(long)]
    pub query: Option<String>,

    #[arg(long)]
    pub primary: Option<String>,

    #[arg(long)]
    pub secondary: Option<String>,

    #[arg(long)]
    pub primary_color: Option<String>,

    #[arg(long)]
    pub secondary_color: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Selection from `--query`, with the individual flags taking precedence.
    pub fn selection(&self) -> SelectionInput {
        let mut input = self
            .query
            .as_deref()
            .map(SelectionInput::from_query)
            .unwrap_or_default();

        let overrides = [
            (&mut input.primary, &self.primary),
            (&mut input.secondary, &self.secondary),
            (&mut input.primary_color, &self.primary_color),
            (&mut input.secondary_color, &self.secondary_color),
        ];
        for (slot, flag) in overrides {
            if flag.is_some() {
                *slot = flag.clone();
            }
        }

        input
    }
}
