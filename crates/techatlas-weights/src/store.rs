//! Controlled mutation of the weight configuration.
//! See ARCHITECTURE.md §3.3.

use techatlas_common::{AtlasError, Result};
use techatlas_taxonomy::Sector;

use crate::config::WeightConfig;
use crate::defaults::{default_subsector_weights, DEFAULT_SECTOR_WEIGHT};

/// Which sibling group a mutation targets: the top-level sector weights, or
/// one sector's subsector weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightScope {
    Overall,
    Sector(Sector),
}

/// Owns the session's [`WeightConfig`] and funnels every edit through
/// validation. Slider clamping and step size stay in the UI; the store only
/// rejects values that make no sense as weights.
#[derive(Debug, Clone, Default)]
pub struct WeightStore {
    config: WeightConfig,
}

impl WeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WeightConfig) -> Self {
        Self { config }
    }

    /// Current configuration, for handing to the aggregation engine.
    pub fn config(&self) -> &WeightConfig {
        &self.config
    }

    /// Set one weight. No sibling renormalisation: adjusting one slider never
    /// moves the others, so a user can deliberately under- or over-allocate.
    ///
    /// Non-finite or negative values are rejected and leave the prior weight
    /// untouched. A subsector key outside the taxonomy is stored anyway
    /// (weight configs and datasets are populated independently; the engine
    /// reads taxonomy keys only). An unknown sector key under `Overall` is
    /// ignored with a warning because the sector set is closed.
    pub fn set_weight(&mut self, scope: WeightScope, key: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(AtlasError::InvalidWeight {
                key: key.to_string(),
                value,
            });
        }

        match scope {
            WeightScope::Overall => match Sector::from_key(key) {
                Some(sector) => {
                    self.config.sectors.insert(sector, value);
                }
                None => {
                    tracing::warn!(
                        target: "techatlas::weights",
                        "ignoring weight for unknown sector '{key}'"
                    );
                }
            },
            WeightScope::Sector(sector) => {
                self.config
                    .subsectors
                    .entry(sector)
                    .or_default()
                    .insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Reset one sibling group to its built-in defaults.
    ///
    /// Deliberately asymmetric: `Overall` restores the five sector weights
    /// and leaves every subsector table alone; `Sector(s)` restores only s's
    /// subsector table and leaves the sector weights (including s's own)
    /// alone.
    pub fn reset(&mut self, scope: WeightScope) {
        match scope {
            WeightScope::Overall => {
                for &sector in Sector::all() {
                    self.config.sectors.insert(sector, DEFAULT_SECTOR_WEIGHT);
                }
            }
            WeightScope::Sector(sector) => {
                let table = default_subsector_weights(sector)
                    .iter()
                    .map(|&(key, weight)| (key.to_string(), weight))
                    .collect();
                self.config.subsectors.insert(sector, table);
            }
        }
    }
}
