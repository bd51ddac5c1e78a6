//! techatlas-test-utils — Shared fixtures for workspace tests.

pub use pretty_assertions;

use techatlas_data::ScoreTable;
use techatlas_taxonomy::Sector;
use techatlas_weights::{WeightConfig, WeightScope, WeightStore};

/// A small but realistic dataset snapshot: three countries with uneven
/// coverage (Lemuria has no quantum data at all).
pub const SMALL_SNAPSHOT: &str = r#"[
    {
        "country": "Atlantis",
        "sectors": {
            "ai": {
                "algorithms": 0.8,
                "computing_power": 0.4,
                "data": 0.6,
                "economic_resources": 0.5,
                "human_capital": 0.7
            },
            "quantum": {
                "quantum_computing": 0.9,
                "economic_resources": 0.3
            },
            "space": {
                "domestic_launch_capability": 1.0
            }
        }
    },
    {
        "country": "Lemuria",
        "sectors": {
            "ai": {
                "algorithms": 0.3,
                "data": 0.2
            },
            "biotech": {
                "vaccine_research": 0.6,
                "human_capital": 0.4
            }
        }
    },
    {
        "country": "Mu",
        "sectors": {
            "semiconductors": {
                "chip_design_and_tools": 0.7,
                "manufacturing": 0.9
            }
        }
    }
]"#;

/// Load [`SMALL_SNAPSHOT`] into a table, asserting it validates cleanly.
pub fn small_table() -> ScoreTable {
    let (table, report) =
        ScoreTable::from_json(SMALL_SNAPSHOT).expect("fixture snapshot must parse");
    assert!(report.is_clean(), "fixture snapshot must validate cleanly");
    table
}

/// A config that zeroes every weight. Useful as a blank slate: tests then
/// raise exactly the weights they care about.
pub fn zeroed_config() -> WeightConfig {
    let mut config = WeightConfig::default();
    for weight in config.sectors.values_mut() {
        *weight = 0.0;
    }
    for table in config.subsectors.values_mut() {
        for weight in table.values_mut() {
            *weight = 0.0;
        }
    }
    config
}

/// The worked two-subsector example: ai splits 50/50 between algorithms and
/// computing_power, every other weight is zero, and the ai sector weight is
/// 0.25.
pub fn two_subsector_store() -> WeightStore {
    let mut store = WeightStore::with_config(zeroed_config());
    store
        .set_weight(WeightScope::Sector(Sector::Ai), "algorithms", 0.5)
        .expect("valid weight");
    store
        .set_weight(WeightScope::Sector(Sector::Ai), "computing_power", 0.5)
        .expect("valid weight");
    store
        .set_weight(WeightScope::Overall, "ai", 0.25)
        .expect("valid weight");
    store
}

/// Compare floats the way the workspace tests do.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
