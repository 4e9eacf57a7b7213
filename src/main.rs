use std::path::Path;
use std::time::Duration;

use clap::Parser;
use mockgen::cli::Cli;
use mockgen::config::Settings;
use mockgen::domain::{GenerationContext, MediaGenerator, MediaType, Schema, SchemaGenerator};
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    let document = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };
    Ok(document)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the generated document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    info!(
        "Generating data for {} (use_examples = {})",
        cli.document.display(),
        settings.generator.use_examples
    );

    let ctx = match cli.timeout_ms {
        Some(ms) => GenerationContext::new().with_timeout(Duration::from_millis(ms)),
        None => GenerationContext::new(),
    };

    let data = if cli.schema_only {
        let schema: Schema = read_document(&cli.document)?;
        mockgen::new_schema_generator(&settings.generator)
            .generate_data_by_schema(&ctx, &schema)
            .await?
    } else {
        let media_type: MediaType = read_document(&cli.document)?;
        mockgen::new(&settings.generator)
            .generate_data(&ctx, &media_type)
            .await?
    };

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
