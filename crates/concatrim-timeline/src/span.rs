//! Closed millisecond intervals.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Millisecond offset on a timeline.
///
/// Signed so that conversion queries can take any integer; span bounds are
/// always non-negative.
pub type Millis = i64;

/// A closed interval `[start, end]` in milliseconds.
///
/// Bounds are non-negative and `start <= end`. Spans can only be built
/// through [`Span::new`] (or the parsing/conversion impls that call it), so
/// a span literal does not compile:
///
/// ```compile_fail
/// use concatrim_timeline::Span;
///
/// let span = Span { start: 50, end: 10 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "RawSpan"))]
pub struct Span {
    start: Millis,
    end: Millis,
}

/// Unchecked wire form of a [`Span`].
#[cfg(feature = "serialize")]
#[derive(serde::Deserialize)]
struct RawSpan {
    start: Millis,
    end: Millis,
}

#[cfg(feature = "serialize")]
impl TryFrom<RawSpan> for Span {
    type Error = Error;

    fn try_from(raw: RawSpan) -> Result<Self> {
        Span::new(raw.start, raw.end)
    }
}

impl Span {
    /// Create a span, rejecting negative bounds and `start > end`.
    pub fn new(start: Millis, end: Millis) -> Result<Self> {
        if start < 0 || end < 0 {
            return Err(Error::invalid_span(format!(
                "bounds must be non-negative, got [{}, {}]",
                start, end
            )));
        }
        if start > end {
            return Err(Error::invalid_span(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// First kept millisecond.
    pub fn start(&self) -> Millis {
        self.start
    }

    /// Last kept millisecond (inclusive).
    pub fn end(&self) -> Millis {
        self.end
    }

    /// Length of the span in milliseconds.
    pub fn duration(&self) -> Millis {
        self.end - self.start
    }

    /// Whether `timepoint` lies inside the span, both bounds included.
    pub fn contains(&self, timepoint: Millis) -> bool {
        self.start <= timepoint && timepoint <= self.end
    }

    /// Inclusive overlap test: touching endpoints count as overlapping.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Inclusive overlap test between two spans.
///
/// ```
/// use concatrim_timeline::{is_overlapping, Span};
///
/// let a = Span::new(1, 3).unwrap();
/// let b = Span::new(2, 4).unwrap();
/// assert!(is_overlapping(&a, &b));
/// ```
pub fn is_overlapping(a: &Span, b: &Span) -> bool {
    a.overlaps(b)
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl TryFrom<(Millis, Millis)> for Span {
    type Error = Error;

    fn try_from((start, end): (Millis, Millis)) -> Result<Self> {
        Span::new(start, end)
    }
}

impl FromStr for Span {
    type Err = Error;

    /// Parse `START:END` or `START-END`.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(':')
            .or_else(|| s.split_once('-'))
            .ok_or_else(|| Error::invalid_span(format!("expected START:END, got {:?}", s)))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<Millis>()
                .map_err(|e| Error::invalid_span(format!("{:?} in {:?}: {}", part, s, e)))
        };

        Span::new(parse(start)?, parse(end)?)
    }
}
