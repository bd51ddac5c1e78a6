//! The in-memory weight configuration.
//! See ARCHITECTURE.md §3.2.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use techatlas_taxonomy::Sector;

use crate::allocation::{allocation_status, AllocationStatus};
use crate::defaults::{default_subsector_weights, DEFAULT_SECTOR_WEIGHT};

/// The full two-level weight hierarchy: one weight per sector, one weight per
/// (sector, subsector). Session state only — never persisted.
///
/// Equality is exact (bitwise on the f64 values); the engine's memo cache
/// relies on it to detect unchanged input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub sectors: BTreeMap<Sector, f64>,
    pub subsectors: BTreeMap<Sector, BTreeMap<String, f64>>,
}

impl Default for WeightConfig {
    /// A fresh deep copy of the built-in tables. Callers can mutate the
    /// result without affecting any other copy.
    fn default() -> Self {
        let sectors = Sector::all()
            .iter()
            .map(|&s| (s, DEFAULT_SECTOR_WEIGHT))
            .collect();
        let subsectors = Sector::all()
            .iter()
            .map(|&s| {
                let table = default_subsector_weights(s)
                    .iter()
                    .map(|&(key, weight)| (key.to_string(), weight))
                    .collect();
                (s, table)
            })
            .collect();
        Self { sectors, subsectors }
    }
}

impl WeightConfig {
    /// Top-level weight for `sector`. Absent entries weigh zero.
    pub fn sector_weight(&self, sector: Sector) -> f64 {
        self.sectors.get(&sector).copied().unwrap_or(0.0)
    }

    /// Weight for one subsector of `sector`. Absent entries weigh zero.
    pub fn subsector_weight(&self, sector: Sector, key: &str) -> f64 {
        self.subsectors
            .get(&sector)
            .and_then(|table| table.get(key))
            .copied()
            .unwrap_or(0.0)
    }

    /// Allocation status of the top-level sector weights.
    pub fn sector_allocation(&self) -> AllocationStatus {
        allocation_status(self.sectors.values().copied())
    }

    /// Allocation status of one sector's subsector weights. Only keys in the
    /// taxonomy count towards the sibling sum; stale extra keys are inert.
    pub fn subsector_allocation(&self, sector: Sector) -> AllocationStatus {
        allocation_status(
            sector
                .subsector_keys()
                .iter()
                .map(|key| self.subsector_weight(sector, key)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a_fresh_copy() {
        let mut a = WeightConfig::default();
        let b = WeightConfig::default();
        a.sectors.insert(Sector::Ai, 0.9);
        a.subsectors.get_mut(&Sector::Ai).unwrap().insert("data".into(), 0.9);
        assert_eq!(b.sector_weight(Sector::Ai), 0.2);
        assert_eq!(b.subsector_weight(Sector::Ai, "data"), 0.15);
    }

    #[test]
    fn test_missing_entries_weigh_zero() {
        let config = WeightConfig::default();
        assert_eq!(config.subsector_weight(Sector::Ai, "quantum_computing"), 0.0);
    }

    #[test]
    fn test_default_allocation_is_perfect() {
        let config = WeightConfig::default();
        assert_eq!(config.sector_allocation(), AllocationStatus::Perfect);
        for &sector in Sector::all() {
            assert_eq!(config.subsector_allocation(sector), AllocationStatus::Perfect);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let config = WeightConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: WeightConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
