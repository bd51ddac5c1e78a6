//! techatlas-data — Immutable raw score repository.
//! Loads the dataset snapshot produced by the external ingestion step and
//! serves per-(country, sector, subsector) raw scores to the engine.
//! See ARCHITECTURE.md §4.

pub mod table;
pub mod validation;

pub use table::{CountryScores, ScoreTable};
pub use validation::ValidationReport;
