//! Single-entry memoization of the pipeline output.
//! See ARCHITECTURE.md §5.4.
//!
//! Recomputation is cheap and the UI event loop is serial, so one cached
//! entry keyed on the last (weight config, selection) pair is enough: slider
//! drags re-render several consumers from the same unchanged snapshot. The
//! score table is immutable for the whole session and is deliberately not
//! part of the key.

use techatlas_data::ScoreTable;
use techatlas_taxonomy::Sector;
use techatlas_weights::WeightConfig;

use crate::pipeline::{aggregate, AggregatedCountry};

#[derive(Debug, Clone)]
struct CacheEntry {
    config: WeightConfig,
    selected: Option<Sector>,
    output: Vec<AggregatedCountry>,
}

/// Caches the last aggregation result. Purely an optimization: hits return a
/// value equal to what [`aggregate`] would produce.
#[derive(Debug, Clone, Default)]
pub struct AggregationCache {
    last: Option<CacheEntry>,
}

impl AggregationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate, reusing the previous result when inputs are unchanged.
    pub fn aggregate(
        &mut self,
        table: &ScoreTable,
        config: &WeightConfig,
        selected: Option<Sector>,
    ) -> &[AggregatedCountry] {
        let hit = self
            .last
            .as_ref()
            .is_some_and(|e| e.selected == selected && e.config == *config);

        if !hit {
            self.last = Some(CacheEntry {
                config: config.clone(),
                selected,
                output: aggregate(table, config, selected),
            });
        } else {
            tracing::debug!(target: "techatlas::engine", "aggregation cache hit");
        }

        &self.last.as_ref().expect("entry populated above").output
    }

    /// Drop the cached entry (e.g. if the table is ever swapped out).
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
