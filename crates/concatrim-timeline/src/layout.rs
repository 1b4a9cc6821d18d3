//! Trimmed timeline layout.
//!
//! The layout is what the timeline looks like after every region outside the
//! kept spans is cut away and the kept pieces are joined back together with a
//! fixed gap between consecutive pieces. There is no gap before the first
//! piece or after the last one.

use crate::{Error, Millis, Result, Span};

/// Trimmed-timeline spans, one per original span and in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimmedLayout {
    spans: Vec<Span>,
}

impl TrimmedLayout {
    /// Derive the layout for `original` spans (sorted by start) joined with
    /// `padding` milliseconds between them.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when the trimmed timeline
    /// would end past [`Millis::MAX`].
    pub fn derive(original: &[Span], padding: Millis) -> Result<Self> {
        let mut spans: Vec<Span> = Vec::with_capacity(original.len());

        for span in original {
            let start = match spans.last() {
                Some(prev) => prev.end().checked_add(padding),
                None => Some(0),
            };
            let (start, end) = start
                .and_then(|start| Some((start, start.checked_add(span.duration())?)))
                .ok_or_else(|| too_long(original.len(), padding))?;
            spans.push(Span::new(start, end)?);
        }

        Ok(Self { spans })
    }

    /// End of the trimmed timeline for `original` and `padding`, or `None`
    /// if it does not fit in [`Millis`]. Does not allocate.
    pub fn duration_for(original: &[Span], padding: Millis) -> Option<Millis> {
        original
            .iter()
            .enumerate()
            .try_fold(0, |end: Millis, (i, span)| {
                let start = if i == 0 { 0 } else { end.checked_add(padding)? };
                start.checked_add(span.duration())
            })
    }

    /// Trimmed spans in timeline order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of trimmed spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the layout has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// End of the last trimmed span, or 0 when empty.
    pub fn duration(&self) -> Millis {
        self.spans.last().map(Span::end).unwrap_or(0)
    }

    /// Padding regions between consecutive trimmed spans, as open gaps
    /// `(prev.end, next.start)`.
    pub fn gaps(&self) -> impl Iterator<Item = (Millis, Millis)> + '_ {
        self.spans
            .windows(2)
            .map(|pair| (pair[0].end(), pair[1].start()))
    }
}

fn too_long(count: usize, padding: Millis) -> Error {
    Error::invalid_configuration(format!(
        "trimmed timeline of {} spans with {}ms padding exceeds {}ms",
        count,
        padding,
        Millis::MAX
    ))
}
