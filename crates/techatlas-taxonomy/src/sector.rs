//! The five-sector taxonomy and each sector's ordered subsector keys.
//! See ARCHITECTURE.md §2.1.

use serde::{Deserialize, Serialize};

/// Top-level technology domain. Closed set; declaration order is the
/// canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Ai,
    Biotech,
    Semiconductors,
    Space,
    Quantum,
}

/// Canonical sector order.
pub const ALL_SECTORS: [Sector; 5] = [
    Sector::Ai,
    Sector::Biotech,
    Sector::Semiconductors,
    Sector::Space,
    Sector::Quantum,
];

const AI_SUBSECTORS: [&str; 8] = [
    "algorithms",
    "computing_power",
    "data",
    "economic_resources",
    "global_player",
    "human_capital",
    "regulatory",
    "accuracy_of_top_models",
];

const BIOTECH_SUBSECTORS: [&str; 9] = [
    "economic_resources",
    "security",
    "human_capital",
    "global_player",
    "regulatory",
    "agricultural_technology",
    "vaccine_research",
    "pharmaceutical_production",
    "genetic_engineering",
];

const SEMICONDUCTORS_SUBSECTORS: [&str; 9] = [
    "chip_design_and_tools",
    "manufacturing",
    "economic_resources",
    "human_capital",
    "equipment",
    "assembly_and_testing_(osat)",
    "global_player",
    "raw_materials_and_wafers",
    "regulatory",
];

const SPACE_SUBSECTORS: [&str; 10] = [
    "domestic_launch_capability",
    "economic_resources",
    "global_player",
    "regulatory",
    "science_and_exploration",
    "pnt",
    "telecommunications",
    "remote_sensing",
    "human_capital",
    "security",
];

const QUANTUM_SUBSECTORS: [&str; 8] = [
    "economic_resources",
    "security",
    "human_capital",
    "global_player",
    "policy_environment",
    "quantum_sensing",
    "quantum_communications",
    "quantum_computing",
];

impl Sector {
    /// All sectors in canonical order.
    pub fn all() -> &'static [Sector] {
        &ALL_SECTORS
    }

    /// Stable string key, matching the dataset and weight-config encoding.
    pub fn key(self) -> &'static str {
        match self {
            Sector::Ai => "ai",
            Sector::Biotech => "biotech",
            Sector::Semiconductors => "semiconductors",
            Sector::Space => "space",
            Sector::Quantum => "quantum",
        }
    }

    /// Parse a sector key. Returns None for anything outside the closed set.
    pub fn from_key(key: &str) -> Option<Sector> {
        match key {
            "ai" => Some(Sector::Ai),
            "biotech" => Some(Sector::Biotech),
            "semiconductors" => Some(Sector::Semiconductors),
            "space" => Some(Sector::Space),
            "quantum" => Some(Sector::Quantum),
            _ => None,
        }
    }

    /// The sector's fixed, ordered subsector keys.
    pub fn subsector_keys(self) -> &'static [&'static str] {
        match self {
            Sector::Ai => &AI_SUBSECTORS,
            Sector::Biotech => &BIOTECH_SUBSECTORS,
            Sector::Semiconductors => &SEMICONDUCTORS_SUBSECTORS,
            Sector::Space => &SPACE_SUBSECTORS,
            Sector::Quantum => &QUANTUM_SUBSECTORS,
        }
    }

    /// Whether `key` names one of this sector's subsectors.
    pub fn has_subsector(self, key: &str) -> bool {
        self.subsector_keys().contains(&key)
    }
}
