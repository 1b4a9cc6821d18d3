//! Concatrim-Timeline: span registration and timeline mapping.
//!
//! A trim keeps a set of non-overlapping spans of a source timeline, cuts
//! everything else away and joins the kept pieces back together with a fixed
//! gap between consecutive pieces. This crate tracks those spans and maps
//! timepoints between the source ("original") timeline and the result
//! ("trimmed") timeline. It performs no I/O; whatever physically cuts the media
//! reads [`TimelineMapper::spans`], [`TimelineMapper::padding`] and
//! [`TimelineMapper::layout`].
//!
//! # Modules
//!
//! - `span` - Closed millisecond intervals and the inclusive overlap test
//! - `layout` - Derivation of the trimmed-timeline spans
//! - `mapper` - The span set, padding and bidirectional conversion
//!
//! # Features
//!
//! - `serialize` - `serde` support for [`Span`], [`TrimmedLayout`] and [`Direction`]
//! - `tracing` - Debug/trace events on registration and layout derivation
//!
//! # Example
//!
//! ```
//! use concatrim_timeline::{Direction, Span, TimelineMapper};
//!
//! let mut mapper = TimelineMapper::new(100)?;
//! mapper.register_spans([
//!     Span::new(100, 200)?,
//!     Span::new(300, 400)?,
//!     Span::new(500, 600)?,
//! ])?;
//!
//! assert_eq!(mapper.convert(150, Direction::OriginalToTrimmed), Some(50));
//! assert_eq!(mapper.convert(450, Direction::TrimmedToOriginal), Some(550));
//! assert_eq!(mapper.convert(250, Direction::OriginalToTrimmed), None);
//! # Ok::<(), concatrim_timeline::Error>(())
//! ```

pub mod error;
pub mod layout;
pub mod mapper;
pub mod span;

pub use error::{Error, Result};
pub use layout::TrimmedLayout;
pub use mapper::{validate_padding, Direction, TimelineMapper};
pub use span::{is_overlapping, Millis, Span};
