//! Concatrim - trim media down to a set of spans and map timepoints
//!
//! The timeline engine lives in `concatrim-timeline`; this crate adds the
//! glue around it: multi-file batches, output naming and trim plans for the
//! external encoder, and configuration loading. It is exposed as a library
//! for integration testing and benchmarks.

pub mod batch;
pub mod config;
pub mod plan;

pub use batch::Batch;
pub use concatrim_timeline::{
    is_overlapping, Direction, Error, Millis, Span, TimelineMapper, TrimmedLayout,
};
pub use config::{load_config, load_config_or_default, Config};
pub use plan::{OutputNaming, PlanError, TrimPlan};
