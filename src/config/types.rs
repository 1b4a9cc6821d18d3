use crate::plan::OutputNaming;
use concatrim_timeline::Millis;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Gap between kept segments in the trimmed output, in milliseconds
    #[serde(default)]
    pub padding_ms: Millis,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub files: Vec<FileConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Prepended to the source file stem
    #[serde(default)]
    pub prefix: String,

    /// Appended to the source file stem, before the extension
    #[serde(default)]
    pub suffix: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("trimmed")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl From<&OutputConfig> for OutputNaming {
    fn from(output: &OutputConfig) -> Self {
        OutputNaming::new(&output.dir)
            .with_prefix(&output.prefix)
            .with_suffix(&output.suffix)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    pub path: PathBuf,

    /// Kept spans as `[start, end]` pairs in milliseconds
    #[serde(default)]
    pub spans: Vec<(Millis, Millis)>,
}
