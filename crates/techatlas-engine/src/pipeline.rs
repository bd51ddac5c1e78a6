//! The three-stage aggregation pipeline.
//! See ARCHITECTURE.md §5.1–§5.3.
//!
//! Stage A: weighted = raw(country, sector, subsector) × subsector_weight
//! Stage B: sector_score = Σ weighted over the sector's subsectors
//! Stage C: total = Σ sector_score × sector_weight (overview mode only)
//!
//! No intermediate rounding anywhere: display layers round at their own
//! boundary, so floating-point drift never compounds through the stages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use techatlas_data::{CountryScores, ScoreTable};
use techatlas_taxonomy::Sector;
use techatlas_weights::WeightConfig;

/// The computed, weight-applied view of one country. `data` is keyed by
/// sector in overview mode and by the selected sector's subsector keys in
/// detail mode; map, bar chart, pie chart, and table all read this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedCountry {
    pub country: String,
    pub data: BTreeMap<String, f64>,
    pub total: f64,
}

/// Stage A — one country's full weighted breakdown: sector → subsector →
/// raw × subsector_weight.
///
/// Iteration is over the taxonomy, so weight entries for keys outside it are
/// never read, and a missing raw score or missing weight contributes 0.
pub fn weighted_breakdown(
    country: &CountryScores,
    config: &WeightConfig,
) -> BTreeMap<Sector, BTreeMap<&'static str, f64>> {
    Sector::all()
        .iter()
        .map(|&sector| {
            let raw = country.sectors.get(&sector);
            let weighted = sector
                .subsector_keys()
                .iter()
                .map(|&key| {
                    let score = raw.and_then(|s| s.get(key)).copied().unwrap_or(0.0);
                    (key, score * config.subsector_weight(sector, key))
                })
                .collect();
            (sector, weighted)
        })
        .collect()
}

/// Stage B — plain sum of one sector's weighted subsector values. No
/// renormalisation: an under- or over-allocated weight budget shrinks or
/// inflates the sector score proportionally, and that is the visualized
/// state.
pub fn sector_rollup(breakdown: &BTreeMap<&'static str, f64>) -> f64 {
    breakdown.values().sum()
}

/// Run the full pipeline for every country in the table.
///
/// With `selected = None` (overview) each country's `data` maps sector keys
/// to `sector_score × sector_weight` and `total` sums those contributions.
/// With a selected sector, `data` maps that sector's subsector keys to their
/// Stage-A values and `total` is the sector's Stage-B score, unscaled by the
/// top-level sector weight — intra-sector comparison is independent of how
/// the sector is weighted in the overview.
///
/// Pure and infallible: identical inputs yield identical output, and partial
/// or mismatched input degrades to zeros instead of failing.
pub fn aggregate(
    table: &ScoreTable,
    config: &WeightConfig,
    selected: Option<Sector>,
) -> Vec<AggregatedCountry> {
    tracing::debug!(
        target: "techatlas::engine",
        countries = table.len(),
        selected = selected.map(Sector::key),
        "recomputing aggregation"
    );

    table
        .countries()
        .iter()
        .map(|country| {
            let breakdown = weighted_breakdown(country, config);

            match selected {
                Some(sector) => {
                    let subsectors = &breakdown[&sector];
                    AggregatedCountry {
                        country: country.country.clone(),
                        data: subsectors
                            .iter()
                            .map(|(&key, &value)| (key.to_string(), value))
                            .collect(),
                        total: sector_rollup(subsectors),
                    }
                }
                None => {
                    let mut total = 0.0;
                    let data = breakdown
                        .iter()
                        .map(|(&sector, subsectors)| {
                            let contribution =
                                sector_rollup(subsectors) * config.sector_weight(sector);
                            total += contribution;
                            (sector.key().to_string(), contribution)
                        })
                        .collect();
                    AggregatedCountry {
                        country: country.country.clone(),
                        data,
                        total,
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use techatlas_test_utils::{approx_eq, small_table, two_subsector_store, zeroed_config};
    use techatlas_weights::{WeightScope, WeightStore};

    #[test]
    fn test_worked_example() {
        // ai splits 50/50 between algorithms (0.8) and computing_power (0.4);
        // ai sector weight is 0.25.
        let table = small_table();
        let store = two_subsector_store();

        let detail = aggregate(&table, store.config(), Some(Sector::Ai));
        let atlantis = &detail[0];
        assert!(approx_eq(atlantis.data["algorithms"], 0.4));
        assert!(approx_eq(atlantis.data["computing_power"], 0.2));
        assert!(approx_eq(atlantis.total, 0.6));

        let overview = aggregate(&table, store.config(), None);
        let atlantis = &overview[0];
        assert!(approx_eq(atlantis.data["ai"], 0.15));
        assert!(approx_eq(atlantis.total, 0.15));
    }

    #[test]
    fn test_determinism() {
        let table = small_table();
        let config = WeightConfig::default();
        let a = aggregate(&table, &config, None);
        let b = aggregate(&table, &config, None);
        assert_eq!(a, b);
        let c = aggregate(&table, &config, Some(Sector::Quantum));
        let d = aggregate(&table, &config, Some(Sector::Quantum));
        assert_eq!(c, d);
    }

    #[test]
    fn test_zero_weights_annihilate_sector() {
        let table = small_table();
        // Atlantis has quantum raw scores, but all quantum weights are zero.
        let config = zeroed_config();
        for entry in aggregate(&table, &config, Some(Sector::Quantum)) {
            assert_eq!(entry.total, 0.0);
            assert!(entry.data.values().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_weight_linearity() {
        let table = small_table();
        let mut store = WeightStore::with_config(zeroed_config());
        store
            .set_weight(WeightScope::Sector(Sector::Ai), "algorithms", 0.2)
            .unwrap();
        let base = aggregate(&table, store.config(), Some(Sector::Ai));

        store
            .set_weight(WeightScope::Sector(Sector::Ai), "algorithms", 0.6)
            .unwrap();
        let tripled = aggregate(&table, store.config(), Some(Sector::Ai));

        for (before, after) in base.iter().zip(&tripled) {
            assert!(approx_eq(after.data["algorithms"], before.data["algorithms"] * 3.0));
            assert!(approx_eq(after.total, before.total * 3.0));
        }
    }

    #[test]
    fn test_overview_detail_consistency() {
        let table = small_table();
        let config = WeightConfig::default();
        let overview = aggregate(&table, &config, None);

        for &sector in Sector::all() {
            let weight = config.sector_weight(sector);
            assert!(weight != 0.0);
            let detail = aggregate(&table, &config, Some(sector));
            for (o, d) in overview.iter().zip(&detail) {
                assert!(approx_eq(d.total, o.data[sector.key()] / weight));
            }
        }
    }

    #[test]
    fn test_missing_data_neutrality() {
        // Lemuria has no quantum data at all; its quantum scores are zero and
        // other countries are unaffected compared to a table without it.
        let table = small_table();
        let config = WeightConfig::default();
        let detail = aggregate(&table, &config, Some(Sector::Quantum));

        let lemuria = detail.iter().find(|e| e.country == "Lemuria").unwrap();
        assert_eq!(lemuria.total, 0.0);

        let reduced = techatlas_data::ScoreTable::from_rows(
            table
                .countries()
                .iter()
                .filter(|c| c.country != "Lemuria")
                .cloned()
                .collect(),
        );
        let reduced_detail = aggregate(&reduced, &config, Some(Sector::Quantum));
        for entry in &reduced_detail {
            let full = detail.iter().find(|e| e.country == entry.country).unwrap();
            assert_eq!(entry, full);
        }
    }

    #[test]
    fn test_unknown_weight_keys_are_ignored() {
        let table = small_table();
        let mut store = WeightStore::new();
        let base = aggregate(&table, store.config(), None);
        store
            .set_weight(WeightScope::Sector(Sector::Ai), "lobbying", 0.9)
            .unwrap();
        assert_eq!(aggregate(&table, store.config(), None), base);
    }

    #[test]
    fn test_output_preserves_dataset_order() {
        let table = small_table();
        let config = WeightConfig::default();
        let names: Vec<String> = aggregate(&table, &config, None)
            .into_iter()
            .map(|e| e.country)
            .collect();
        assert_eq!(names, vec!["Atlantis", "Lemuria", "Mu"]);
    }

    #[test]
    fn test_output_serializes_for_the_ui() {
        let table = small_table();
        let config = WeightConfig::default();
        let output = aggregate(&table, &config, None);
        let json = serde_json::to_value(&output).unwrap();
        let first = &json[0];
        assert_eq!(first["country"], "Atlantis");
        assert!(first["data"]["ai"].is_number());
        assert!(first["total"].is_number());
    }
}
