use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::cli::Cli;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorOptions,
}

/// Policy deciding when a schema's literal example replaces synthesized data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UseExamples {
    /// Always synthesize, ignore examples
    #[default]
    No,
    /// Return the example when one is attached, synthesize otherwise
    IfPresent,
    /// Only examples are returned; a schema without one is an error
    Exclusively,
}

impl std::fmt::Display for UseExamples {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UseExamples::No => write!(f, "no"),
            UseExamples::IfPresent => write!(f, "if_present"),
            UseExamples::Exclusively => write!(f, "exclusively"),
        }
    }
}

impl std::str::FromStr for UseExamples {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "no" | "never" => Ok(UseExamples::No),
            "if_present" => Ok(UseExamples::IfPresent),
            "exclusively" => Ok(UseExamples::Exclusively),
            other => Err(format!(
                "unknown example policy '{}', expected one of: no, if_present, exclusively",
                other
            )),
        }
    }
}

/// Options for one composed generator
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneratorOptions {
    #[serde(default)]
    pub use_examples: UseExamples,
    #[serde(default)]
    pub array: ArrayOptions,
    #[serde(default)]
    pub integer: IntegerOptions,
    #[serde(default)]
    pub number: NumberOptions,
    #[serde(default)]
    pub string: StringOptions,
}

impl GeneratorOptions {
    pub fn with_use_examples(use_examples: UseExamples) -> Self {
        Self {
            use_examples,
            ..Default::default()
        }
    }
}

/// Array length used when a schema has no `minItems`/`maxItems`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArrayOptions {
    #[serde(default = "default_min_items")]
    pub min_items: usize,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Upper bound on any array length, including schema `maxItems`
    #[serde(default = "default_max_items_limit")]
    pub max_items_limit: usize,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            min_items: default_min_items(),
            max_items: default_max_items(),
            max_items_limit: default_max_items_limit(),
        }
    }
}

fn default_min_items() -> usize {
    1
}

fn default_max_items() -> usize {
    5
}

fn default_max_items_limit() -> usize {
    1_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntegerOptions {
    #[serde(default)]
    pub minimum: i64,
    #[serde(default = "default_integer_maximum")]
    pub maximum: i64,
}

impl Default for IntegerOptions {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: default_integer_maximum(),
        }
    }
}

fn default_integer_maximum() -> i64 {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NumberOptions {
    #[serde(default)]
    pub minimum: f64,
    #[serde(default = "default_number_maximum")]
    pub maximum: f64,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: default_number_maximum(),
        }
    }
}

fn default_number_maximum() -> f64 {
    10_000.0
}

/// Length bounds for free-text strings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StringOptions {
    #[serde(default)]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Upper bound on any string length, including schema `maxLength`
    #[serde(default = "default_max_length_limit")]
    pub max_length_limit: usize,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: default_max_length(),
            max_length_limit: default_max_length_limit(),
        }
    }
}

fn default_max_length() -> usize {
    64
}

fn default_max_length_limit() -> usize {
    65_536
}

impl Settings {
    /// Create settings from CLI arguments (config file, env vars, then CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("MOCKGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(use_examples) = cli.use_examples {
            self.generator.use_examples = use_examples;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
