//! Timeline mapper.
//!
//! Owns the registered original spans and the padding value, derives the
//! trimmed layout on demand, and converts timepoints between the two
//! timelines.

use crate::{Error, Millis, Result, Span, TrimmedLayout};
use std::cell::OnceCell;

/// Direction of a timepoint conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// From the source media's timeline to the trimmed one.
    OriginalToTrimmed,
    /// From the trimmed timeline back to the source media's.
    TrimmedToOriginal,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::OriginalToTrimmed => Direction::TrimmedToOriginal,
            Direction::TrimmedToOriginal => Direction::OriginalToTrimmed,
        }
    }
}

/// Span set plus padding, with a lazily derived trimmed layout.
///
/// The layout is cached in a [`OnceCell`], so the mapper is `Send` but not
/// `Sync`. Share it between threads behind a `Mutex`.
///
/// # Example
///
/// ```
/// use concatrim_timeline::{Span, TimelineMapper};
///
/// let mut mapper = TimelineMapper::new(100)?;
/// mapper.register_spans([Span::new(100, 200)?, Span::new(300, 400)?])?;
///
/// assert_eq!(mapper.to_trimmed(150), Some(50));
/// assert_eq!(mapper.to_trimmed(250), None);
/// assert_eq!(mapper.to_original(250), Some(350));
/// # Ok::<(), concatrim_timeline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineMapper {
    /// Original spans, sorted by start and pairwise non-overlapping.
    spans: Vec<Span>,
    padding: Millis,
    layout: OnceCell<TrimmedLayout>,
}

impl TimelineMapper {
    /// Create an empty mapper with the given padding in milliseconds.
    pub fn new(padding: Millis) -> Result<Self> {
        validate_padding(padding)?;
        Ok(Self {
            padding,
            ..Self::default()
        })
    }

    /// Gap inserted between consecutive kept segments, in milliseconds.
    pub fn padding(&self) -> Millis {
        self.padding
    }

    /// Check that `padding` could be set on this mapper: it must be
    /// non-negative and the resulting trimmed timeline must fit in [`Millis`].
    pub fn check_padding(&self, padding: Millis) -> Result<()> {
        validate_padding(padding)?;
        if TrimmedLayout::duration_for(&self.spans, padding).is_none() {
            return Err(Error::invalid_configuration(format!(
                "padding of {}ms makes the trimmed timeline of {} spans exceed {}ms",
                padding,
                self.spans.len(),
                Millis::MAX
            )));
        }
        Ok(())
    }

    /// Change the padding. Rejected values leave the mapper unchanged.
    pub fn set_padding(&mut self, padding: Millis) -> Result<()> {
        self.check_padding(padding)?;
        self.padding = padding;
        self.invalidate();
        Ok(())
    }

    /// Registered original spans in ascending start order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of registered spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether no span is registered.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The registered span that `span` would collide with, if any.
    pub fn overlapping(&self, span: &Span) -> Option<Span> {
        find_overlap(&self.spans, span)
    }

    /// Register a single span.
    ///
    /// Fails with [`Error::OverlappingSpan`] if it touches or overlaps any
    /// registered span, and with [`Error::InvalidSpan`] if the trimmed
    /// timeline would no longer fit in [`Millis`]. The set is left unchanged
    /// on failure.
    pub fn register_span(&mut self, span: Span) -> Result<()> {
        self.register_spans(std::iter::once(span))
    }

    /// Register several spans at once.
    ///
    /// Each span is checked against the registered set and against the spans
    /// accepted earlier in the same call. Either every span is registered or,
    /// on the first failure, none is.
    pub fn register_spans<I>(&mut self, spans: I) -> Result<()>
    where
        I: IntoIterator<Item = Span>,
    {
        let mut staged = self.spans.clone();
        for span in spans {
            insert_sorted(&mut staged, span)?;
        }
        if TrimmedLayout::duration_for(&staged, self.padding).is_none() {
            return Err(Error::invalid_span(format!(
                "with {}ms padding, {} spans make the trimmed timeline exceed {}ms",
                self.padding,
                staged.len(),
                Millis::MAX
            )));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            added = staged.len() - self.spans.len(),
            total = staged.len(),
            "registered spans"
        );

        self.spans = staged;
        self.invalidate();
        Ok(())
    }

    /// Remove every registered span.
    pub fn clear_spans(&mut self) {
        self.spans.clear();
        self.invalidate();
    }

    /// Trimmed layout for the current spans and padding.
    pub fn layout(&self) -> &TrimmedLayout {
        self.layout.get_or_init(|| self.derive_trimmed_layout())
    }

    /// Whether a derived layout is cached for the current state.
    pub fn is_layout_current(&self) -> bool {
        self.layout.get().is_some()
    }

    /// Convert a timepoint between the original and trimmed timelines.
    ///
    /// Returns `None` when the timepoint falls outside every kept span on the
    /// origin timeline (including the padding gaps of the trimmed one). With
    /// no spans registered the timepoint is returned unchanged.
    pub fn convert(&self, timepoint: Millis, direction: Direction) -> Option<Millis> {
        if self.spans.is_empty() {
            return Some(timepoint);
        }

        let layout = self.layout();
        let (origin, target) = match direction {
            Direction::OriginalToTrimmed => (self.spans.as_slice(), layout.spans()),
            Direction::TrimmedToOriginal => (layout.spans(), self.spans.as_slice()),
        };

        // Last span starting at or before the timepoint
        let index = origin
            .partition_point(|s| s.start() <= timepoint)
            .checked_sub(1)?;
        let from = origin[index];
        if timepoint > from.end() {
            return None;
        }

        Some(target[index].start() + (timepoint - from.start()))
    }

    /// Convert a timepoint from the original timeline to the trimmed one.
    pub fn to_trimmed(&self, timepoint: Millis) -> Option<Millis> {
        self.convert(timepoint, Direction::OriginalToTrimmed)
    }

    /// Convert a timepoint from the trimmed timeline to the original one.
    pub fn to_original(&self, timepoint: Millis) -> Option<Millis> {
        self.convert(timepoint, Direction::TrimmedToOriginal)
    }

    fn derive_trimmed_layout(&self) -> TrimmedLayout {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            spans = self.spans.len(),
            padding = self.padding,
            "deriving trimmed layout"
        );

        TrimmedLayout::derive(&self.spans, self.padding)
            .expect("trimmed layout length is checked whenever spans or padding change")
    }

    fn invalidate(&mut self) {
        self.layout.take();
    }
}

/// Reject negative padding.
pub fn validate_padding(padding: Millis) -> Result<()> {
    if padding < 0 {
        return Err(Error::invalid_configuration(format!(
            "padding must be a non-negative number of milliseconds, got {}",
            padding
        )));
    }
    Ok(())
}

/// Find a span in sorted, non-overlapping `spans` that overlaps `span`.
///
/// Ends are ascending as well, so the last span starting at or before
/// `span.end()` is the only candidate.
fn find_overlap(spans: &[Span], span: &Span) -> Option<Span> {
    let idx = spans.partition_point(|s| s.start() <= span.end());
    idx.checked_sub(1)
        .map(|i| spans[i])
        .filter(|candidate| candidate.overlaps(span))
}

fn insert_sorted(spans: &mut Vec<Span>, span: Span) -> Result<()> {
    if let Some(existing) = find_overlap(spans, &span) {
        return Err(Error::OverlappingSpan { span, existing });
    }
    let idx = spans.partition_point(|s| s.start() < span.start());
    spans.insert(idx, span);
    Ok(())
}
