//! techatlas-engine — The weighted aggregation pipeline.
//! The single place where raw scores and weights combine; every
//! visualization consumes this crate's output and nothing else.
//! See ARCHITECTURE.md §5.

pub mod memo;
pub mod pipeline;
pub mod view;

pub use memo::AggregationCache;
pub use pipeline::{aggregate, AggregatedCountry};
pub use view::ViewState;
