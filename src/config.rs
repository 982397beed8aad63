use crate::locale::Locale;
use anyhow::{bail, Context, Result};

/// How the binary renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format: '{}' (expected 'text' or 'json')", other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    // Output
    pub output_format: OutputFormat,

    // Stop at the first rejected identifier
    pub fail_fast: bool,

    // Last entry of every lookup list
    pub default_locale: Option<Locale>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            output_format: match std::env::var("LOCALE_OUTPUT_FORMAT") {
                Ok(name) => OutputFormat::from_name(&name)?,
                Err(_) => OutputFormat::Text,
            },

            fail_fast: match std::env::var("LOCALE_FAIL_FAST") {
                Ok(v) => v
                    .parse::<bool>()
                    .with_context(|| format!("LOCALE_FAIL_FAST must be true or false, got '{}'", v))?,
                Err(_) => false,
            },

            default_locale: std::env::var("LOCALE_DEFAULT")
                .ok()
                .map(|v| Locale::parse(&v).context("LOCALE_DEFAULT is not a valid locale"))
                .transpose()?,
        })
    }
}
