mod types;

pub use types::*;

use crate::batch::Batch;
use crate::plan::OutputNaming;
use anyhow::{Context, Result};
use concatrim_timeline::{Span, TimelineMapper};
use std::collections::HashSet;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config).with_context(|| format!("Invalid config file: {:?}", path))?;

    tracing::debug!(
        "Loaded config {:?}: {} files, padding {}ms",
        path,
        config.files.len(),
        config.padding_ms
    );

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./concatrim.toml", "~/.config/concatrim/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

impl Config {
    /// Build a batch holding every configured file and its spans
    pub fn batch(&self) -> Result<Batch> {
        let mut batch = Batch::new(self.padding_ms)?;
        for file in &self.files {
            let spans = file_spans(file)?;
            batch
                .add_file(&file.path)?
                .register_spans(spans)
                .with_context(|| format!("Invalid spans for {:?}", file.path))?;
        }
        Ok(batch)
    }

    /// Mapper for a single configured file
    pub fn mapper_for(&self, path: &Path) -> Result<TimelineMapper> {
        self.batch()?
            .file(path)
            .cloned()
            .with_context(|| format!("No spans configured for {:?}", path))
    }

    /// Output naming from the `[output]` section
    pub fn naming(&self) -> OutputNaming {
        OutputNaming::from(&self.output)
    }
}

fn file_spans(file: &FileConfig) -> Result<Vec<Span>> {
    file.spans
        .iter()
        .map(|&pair| {
            Span::try_from(pair).with_context(|| format!("Invalid span for {:?}", file.path))
        })
        .collect()
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();
    for file in &config.files {
        if !seen.insert(&file.path) {
            anyhow::bail!("File {:?} is listed more than once", file.path);
        }
        if file.spans.is_empty() {
            tracing::warn!("File {:?} has no spans", file.path);
        }
    }

    // Padding, span bounds and overlaps are checked by the mappers themselves
    config.batch()?;

    Ok(())
}
