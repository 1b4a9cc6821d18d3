//! Trim plans handed to the external encoder.
//!
//! A plan is everything an encoder needs to cut one source: where to read,
//! where to write, which spans to keep, how much padding to insert, and the
//! trimmed layout its output is expected to match.

use concatrim_timeline::{Millis, Span, TimelineMapper};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while building a trim plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The source media file does not exist.
    #[error("source file {} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// The source path has no file name to derive the output name from.
    #[error("source path {} has no file name", .0.display())]
    InvalidSource(PathBuf),

    /// No span was registered for the source.
    #[error("no spans configured to trim {}", .0.display())]
    NoSpans(PathBuf),

    /// The output directory path is taken by a regular file.
    #[error("cannot use {} as output directory: a file already exists there", .0.display())]
    OutputDirIsFile(PathBuf),
}

/// How trimmed outputs are named and where they go.
///
/// The output keeps the source's file stem and extension, with `prefix`
/// prepended to the stem and `suffix` appended to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputNaming {
    /// Directory the trimmed files are written to.
    #[serde(default)]
    pub dir: PathBuf,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,
}

impl OutputNaming {
    /// Naming that writes into `dir` with the source's own file name.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Output path for `source`.
    ///
    /// ```
    /// use concatrim::plan::OutputNaming;
    /// use std::path::Path;
    ///
    /// let naming = OutputNaming::new("out").with_prefix("cut_").with_suffix(".v2");
    /// let output = naming.output_path(Path::new("/media/take 1.wav")).unwrap();
    /// assert_eq!(output, Path::new("out/cut_take 1.v2.wav"));
    /// ```
    pub fn output_path(&self, source: &Path) -> Result<PathBuf, PlanError> {
        let stem = source
            .file_stem()
            .ok_or_else(|| PlanError::InvalidSource(source.to_path_buf()))?;

        let mut name = std::ffi::OsString::from(&self.prefix);
        name.push(stem);
        name.push(&self.suffix);
        if let Some(ext) = source.extension() {
            name.push(".");
            name.push(ext);
        }

        Ok(self.dir.join(name))
    }
}

/// Everything an encoder needs to produce one trimmed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrimPlan {
    pub source: PathBuf,
    pub output: PathBuf,
    pub padding_ms: Millis,
    /// Kept spans on the source timeline, in order.
    pub spans: Vec<Span>,
    /// Where each kept span lands in the output.
    pub trimmed: Vec<Span>,
    pub trimmed_duration_ms: Millis,
}

impl TrimPlan {
    /// Build the plan for `source` from its mapper.
    pub fn new(
        source: &Path,
        mapper: &TimelineMapper,
        naming: &OutputNaming,
    ) -> Result<Self, PlanError> {
        if !source.exists() {
            return Err(PlanError::SourceNotFound(source.to_path_buf()));
        }
        if mapper.is_empty() {
            return Err(PlanError::NoSpans(source.to_path_buf()));
        }
        if naming.dir.exists() && !naming.dir.is_dir() {
            return Err(PlanError::OutputDirIsFile(naming.dir.clone()));
        }

        let output = naming.output_path(source)?;
        let layout = mapper.layout();

        tracing::debug!(
            source = %source.display(),
            output = %output.display(),
            spans = mapper.len(),
            "built trim plan"
        );

        Ok(Self {
            source: source.to_path_buf(),
            output,
            padding_ms: mapper.padding(),
            spans: mapper.spans().to_vec(),
            trimmed: layout.spans().to_vec(),
            trimmed_duration_ms: layout.duration(),
        })
    }
}
