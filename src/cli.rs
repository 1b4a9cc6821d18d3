use clap::{Args, Parser, Subcommand, ValueEnum};
use concatrim::{Direction, Millis, Span};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concatrim")]
#[command(author, version, about = "Trim media to kept spans and map timepoints between timelines")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the spans of a one-off mapper come from
#[derive(Args)]
pub struct SpanArgs {
    /// Span to keep, in milliseconds (repeatable)
    #[arg(short, long = "span", value_name = "START:END")]
    pub spans: Vec<Span>,

    /// Gap between kept segments in milliseconds (overrides the config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub padding: Option<Millis>,

    /// Start from the spans configured for this source file
    #[arg(long)]
    pub source: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert timepoints between the original and trimmed timelines
    Convert {
        /// Timepoints in milliseconds
        #[arg(required = true, allow_negative_numbers = true)]
        timepoints: Vec<Millis>,

        /// Timeline to convert to
        #[arg(long, value_enum, default_value = "trimmed")]
        to: Timeline,

        #[command(flatten)]
        spans: SpanArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the trimmed layout derived from the spans and padding
    Layout {
        #[command(flatten)]
        spans: SpanArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the trim plans for every configured file as JSON
    Plan {
        /// Directory for trimmed outputs (overrides the config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

/// Target timeline of a conversion
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Timeline {
    Trimmed,
    Original,
}

impl From<Timeline> for Direction {
    fn from(target: Timeline) -> Self {
        match target {
            Timeline::Trimmed => Direction::OriginalToTrimmed,
            Timeline::Original => Direction::TrimmedToOriginal,
        }
    }
}
