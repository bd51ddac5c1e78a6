//! The immutable score table and its snapshot loader.
//! See ARCHITECTURE.md §4.1.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use techatlas_common::{AtlasError, Result};
use techatlas_taxonomy::Sector;

use crate::validation::{check_score, ValidationReport};

/// Raw subsector scores for one country. Keys mirror the dataset snapshot;
/// subsector keys outside the taxonomy are kept (the engine never reads
/// them), unknown sector keys are dropped at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryScores {
    pub country: String,
    pub sectors: BTreeMap<Sector, BTreeMap<String, f64>>,
}

/// One row of the snapshot as the ingestion step writes it: sector keys are
/// plain strings so an unknown sector degrades to a skipped entry instead of
/// failing the whole document.
#[derive(Debug, Deserialize)]
struct SnapshotRow {
    country: String,
    sectors: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Immutable, ordered raw score repository. Built once at startup from the
/// ingestion snapshot; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTable {
    countries: Vec<CountryScores>,
}

impl ScoreTable {
    /// Parse and validate a JSON dataset snapshot.
    ///
    /// Rows with a non-finite or negative score, or an empty country name,
    /// are rejected and reported; duplicate countries keep the first row.
    /// Fails only when the document is unreadable or no row survives.
    pub fn from_json(snapshot: &str) -> Result<(ScoreTable, ValidationReport)> {
        let rows: Vec<SnapshotRow> = serde_json::from_str(snapshot)?;
        if rows.is_empty() {
            return Err(AtlasError::Dataset("no rows in dataset snapshot".into()));
        }

        let mut report = ValidationReport::default();
        let mut countries: Vec<CountryScores> = Vec::with_capacity(rows.len());

        for row in rows {
            let country = row.country.trim().to_string();
            if country.is_empty() {
                report.error("Row with empty country name".into());
                continue;
            }
            if countries.iter().any(|c| c.country == country) {
                report.warning(format!("Duplicate country found: {country}"));
                continue;
            }

            let mut sectors = BTreeMap::new();
            let mut rejected = false;
            for (sector_key, subsectors) in row.sectors {
                let Some(sector) = Sector::from_key(&sector_key) else {
                    tracing::debug!(
                        target: "techatlas::data",
                        "ignoring unknown sector '{sector_key}' for {country}"
                    );
                    continue;
                };
                for (subsector, &value) in &subsectors {
                    if !check_score(&mut report, &country, &sector_key, subsector, value) {
                        rejected = true;
                    }
                }
                sectors.insert(sector, subsectors);
            }
            if rejected {
                continue;
            }

            countries.push(CountryScores { country, sectors });
        }

        if countries.is_empty() {
            return Err(AtlasError::Dataset("no valid rows in dataset snapshot".into()));
        }
        Ok((ScoreTable { countries }, report))
    }

    /// Build a table from already-validated rows. Fixture and test entry point.
    pub fn from_rows(countries: Vec<CountryScores>) -> ScoreTable {
        ScoreTable { countries }
    }

    /// Countries in dataset order. All aggregated output preserves this order.
    pub fn countries(&self) -> &[CountryScores] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Raw score for one (country, sector, subsector) triple.
    pub fn score(&self, country: &str, sector: Sector, subsector: &str) -> Option<f64> {
        self.countries
            .iter()
            .find(|c| c.country == country)?
            .sectors
            .get(&sector)?
            .get(subsector)
            .copied()
    }

    /// Missing data is not an error: absent entries score zero.
    pub fn score_or_zero(&self, country: &str, sector: Sector, subsector: &str) -> f64 {
        self.score(country, sector, subsector).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"[
        {
            "country": "Atlantis",
            "sectors": {
                "ai": { "algorithms": 0.8, "data": 0.4 },
                "quantum": { "quantum_computing": 0.6 }
            }
        },
        {
            "country": "Lemuria",
            "sectors": {
                "ai": { "algorithms": 0.5 }
            }
        }
    ]"#;

    #[test]
    fn test_snapshot_load_preserves_order() {
        let (table, report) = ScoreTable::from_json(SNAPSHOT).unwrap();
        assert!(report.is_clean());
        let names: Vec<&str> = table.countries().iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Atlantis", "Lemuria"]);
    }

    #[test]
    fn test_score_lookup() {
        let (table, _) = ScoreTable::from_json(SNAPSHOT).unwrap();
        assert_eq!(table.score("Atlantis", Sector::Ai, "algorithms"), Some(0.8));
        assert_eq!(table.score("Atlantis", Sector::Ai, "human_capital"), None);
        assert_eq!(table.score_or_zero("Atlantis", Sector::Ai, "human_capital"), 0.0);
        assert_eq!(table.score_or_zero("Mu", Sector::Ai, "algorithms"), 0.0);
    }

    #[test]
    fn test_negative_score_rejects_row() {
        let snapshot = r#"[
            { "country": "Atlantis", "sectors": { "ai": { "algorithms": -0.2 } } },
            { "country": "Lemuria", "sectors": { "ai": { "algorithms": 0.5 } } }
        ]"#;
        let (table, report) = ScoreTable::from_json(snapshot).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.countries()[0].country, "Lemuria");
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_duplicate_country_keeps_first_row() {
        let snapshot = r#"[
            { "country": "Atlantis", "sectors": { "ai": { "algorithms": 0.8 } } },
            { "country": "Atlantis", "sectors": { "ai": { "algorithms": 0.1 } } }
        ]"#;
        let (table, report) = ScoreTable::from_json(snapshot).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.score("Atlantis", Sector::Ai, "algorithms"), Some(0.8));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_unknown_sector_is_skipped() {
        let snapshot = r#"[
            { "country": "Atlantis", "sectors": { "fintech": { "payments": 0.9 }, "ai": { "data": 0.3 } } }
        ]"#;
        let (table, report) = ScoreTable::from_json(snapshot).unwrap();
        assert!(report.is_clean());
        assert_eq!(table.score("Atlantis", Sector::Ai, "data"), Some(0.3));
        assert_eq!(table.countries()[0].sectors.len(), 1);
    }

    #[test]
    fn test_empty_snapshot_is_fatal() {
        assert!(ScoreTable::from_json("[]").is_err());
    }

    #[test]
    fn test_score_above_one_is_kept_with_warning() {
        let snapshot = r#"[
            { "country": "Atlantis", "sectors": { "ai": { "algorithms": 1.3 } } }
        ]"#;
        let (table, report) = ScoreTable::from_json(snapshot).unwrap();
        assert_eq!(table.score("Atlantis", Sector::Ai, "algorithms"), Some(1.3));
        assert_eq!(report.warnings.len(), 1);
    }
}
