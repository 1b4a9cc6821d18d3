mod cli;

use concatrim::{config, Direction, TimelineMapper};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, SpanArgs};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "concatrim=trace,concatrim_timeline=trace".to_string()
        } else {
            "concatrim=warn,concatrim_timeline=warn".to_string()
        }
    });

    // Logs go to stderr so that stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            timepoints,
            to,
            spans,
            json,
        } => convert(&timepoints, to.into(), spans, cli.config.as_deref(), json),
        Commands::Layout { spans, json } => layout(spans, cli.config.as_deref(), json),
        Commands::Plan { out_dir } => plan(out_dir, cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("concatrim {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Build a mapper from the config entry for `--source` (if any), then apply
/// the padding override and the spans given on the command line.
fn build_mapper(args: SpanArgs, config_path: Option<&Path>) -> Result<TimelineMapper> {
    let config = config::load_config_or_default(config_path)?;

    let mut mapper = match args.source.as_deref() {
        Some(source) => config.mapper_for(source)?,
        None => TimelineMapper::new(config.padding_ms)?,
    };

    if let Some(padding) = args.padding {
        mapper.set_padding(padding)?;
    }
    mapper.register_spans(args.spans)?;

    tracing::debug!(
        "Mapper ready: {} spans, padding {}ms",
        mapper.len(),
        mapper.padding()
    );

    Ok(mapper)
}

fn convert(
    timepoints: &[i64],
    direction: Direction,
    args: SpanArgs,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mapper = build_mapper(args, config_path)?;

    if mapper.is_empty() {
        tracing::warn!("No spans configured, timepoints are passed through unchanged");
    }

    let results: Vec<(i64, Option<i64>)> = timepoints
        .iter()
        .map(|&t| (t, mapper.convert(t, direction)))
        .collect();

    if json {
        let values: Vec<serde_json::Value> = results
            .iter()
            .map(|(t, converted)| serde_json::json!({ "timepoint": t, "converted": converted }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for (t, converted) in results {
            match converted {
                Some(c) => println!("{} -> {}", t, c),
                None => println!("{} -> -", t),
            }
        }
    }

    Ok(())
}

fn layout(args: SpanArgs, config_path: Option<&Path>, json: bool) -> Result<()> {
    let mapper = build_mapper(args, config_path)?;
    let layout = mapper.layout();

    if json {
        let value = serde_json::json!({
            "padding_ms": mapper.padding(),
            "spans": mapper.spans(),
            "trimmed": layout.spans(),
            "trimmed_duration_ms": layout.duration(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Padding: {} ms", mapper.padding());
    println!("Spans: {}", mapper.len());
    for (i, (original, trimmed)) in mapper.spans().iter().zip(layout.spans()).enumerate() {
        println!("  [{}] {} -> {}", i, original, trimmed);
    }
    println!("Trimmed duration: {} ms", layout.duration());

    Ok(())
}

fn plan(out_dir: Option<PathBuf>, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    if config.files.is_empty() {
        anyhow::bail!("No files configured; add [[files]] entries to the config");
    }

    let mut naming = config.naming();
    if let Some(dir) = out_dir {
        naming.dir = dir;
    }

    let batch = config.batch()?;
    let plans = batch.plans(&naming)?;

    tracing::info!("Planned {} files into {:?}", plans.len(), naming.dir);
    println!("{}", serde_json::to_string_pretty(&plans)?);

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Padding: {} ms", config.padding_ms);
            println!("  Output dir: {}", config.output.dir.display());
            println!("  Files: {}", config.files.len());
            for file in &config.files {
                println!("    {} ({} spans)", file.path.display(), file.spans.len());
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Padding: {} ms", config.padding_ms);
            println!("  Output dir: {}", config.output.dir.display());
        }
    }

    Ok(())
}
