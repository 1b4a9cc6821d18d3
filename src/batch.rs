//! Several sources trimmed with one shared padding.

use crate::plan::{OutputNaming, PlanError, TrimPlan};
use concatrim_timeline::{validate_padding, Millis, Result, TimelineMapper};
use std::path::{Path, PathBuf};

/// A set of source files, each with its own span set, sharing one padding.
///
/// Sources keep the order in which they were added.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    padding: Millis,
    files: Vec<(PathBuf, TimelineMapper)>,
}

impl Batch {
    /// Create an empty batch.
    pub fn new(padding: Millis) -> Result<Self> {
        validate_padding(padding)?;
        Ok(Self {
            padding,
            files: Vec::new(),
        })
    }

    pub fn padding(&self) -> Millis {
        self.padding
    }

    /// Change the padding of the batch and of every source in it.
    ///
    /// Every source is checked before any is changed, so a rejected padding
    /// leaves the whole batch as it was.
    pub fn set_padding(&mut self, padding: Millis) -> Result<()> {
        validate_padding(padding)?;
        for (_, mapper) in &self.files {
            mapper.check_padding(padding)?;
        }
        for (_, mapper) in &mut self.files {
            mapper.set_padding(padding)?;
        }
        self.padding = padding;
        Ok(())
    }

    /// Add a source with no spans yet and return its mapper.
    ///
    /// A leading `~` is expanded. Adding a path that is already present
    /// replaces its mapper with an empty one.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<&mut TimelineMapper> {
        let path = expand(path.as_ref());
        let mapper = TimelineMapper::new(self.padding)?;

        match self.files.iter().position(|(p, _)| *p == path) {
            Some(idx) => {
                tracing::debug!(path = %path.display(), "resetting spans of source");
                self.files[idx].1 = mapper;
                Ok(&mut self.files[idx].1)
            }
            None => {
                tracing::debug!(path = %path.display(), "added source");
                self.files.push((path, mapper));
                let last = self.files.len() - 1;
                Ok(&mut self.files[last].1)
            }
        }
    }

    /// Mapper of a source, if present.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&TimelineMapper> {
        let path = expand(path.as_ref());
        self.files
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, mapper)| mapper)
    }

    /// Mutable mapper of a source, if present.
    pub fn file_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut TimelineMapper> {
        let path = expand(path.as_ref());
        self.files
            .iter_mut()
            .find(|(p, _)| *p == path)
            .map(|(_, mapper)| mapper)
    }

    /// Sources and their mappers in insertion order.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &TimelineMapper)> {
        self.files.iter().map(|(p, m)| (p.as_path(), m))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Trim plans for every source, in insertion order.
    ///
    /// Stops at the first source that cannot be planned.
    pub fn plans(&self, naming: &OutputNaming) -> std::result::Result<Vec<TrimPlan>, PlanError> {
        self.files
            .iter()
            .map(|(path, mapper)| TrimPlan::new(path, mapper, naming))
            .collect()
    }
}

fn expand(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}
