//! Built-in default weight tables.
//! See ARCHITECTURE.md §3.1 — each sibling group sums to 1.0.

use techatlas_taxonomy::Sector;

/// Default top-level weight per sector: an even split across the five sectors.
pub const DEFAULT_SECTOR_WEIGHT: f64 = 0.2;

const AI_DEFAULTS: [(&str, f64); 8] = [
    ("algorithms", 0.15),
    ("computing_power", 0.15),
    ("data", 0.15),
    ("economic_resources", 0.2),
    ("global_player", 0.025),
    ("human_capital", 0.2),
    ("regulatory", 0.025),
    ("accuracy_of_top_models", 0.1),
];

const BIOTECH_DEFAULTS: [(&str, f64); 9] = [
    ("economic_resources", 0.1),
    ("security", 0.05),
    ("human_capital", 0.25),
    ("global_player", 0.025),
    ("regulatory", 0.025),
    ("agricultural_technology", 0.05),
    ("vaccine_research", 0.15),
    ("pharmaceutical_production", 0.2),
    ("genetic_engineering", 0.15),
];

const SEMICONDUCTORS_DEFAULTS: [(&str, f64); 9] = [
    ("chip_design_and_tools", 0.325),
    ("manufacturing", 0.1),
    ("economic_resources", 0.2),
    ("human_capital", 0.2),
    ("equipment", 0.075),
    ("assembly_and_testing_(osat)", 0.025),
    ("global_player", 0.025),
    ("raw_materials_and_wafers", 0.025),
    ("regulatory", 0.025),
];

const SPACE_DEFAULTS: [(&str, f64); 10] = [
    ("domestic_launch_capability", 0.1),
    ("economic_resources", 0.15),
    ("global_player", 0.025),
    ("human_capital", 0.15),
    ("pnt", 0.1),
    ("regulatory", 0.025),
    ("remote_sensing", 0.1),
    ("science_and_exploration", 0.1),
    ("telecommunications", 0.1),
    ("security", 0.15),
];

const QUANTUM_DEFAULTS: [(&str, f64); 8] = [
    ("economic_resources", 0.2),
    ("human_capital", 0.15),
    ("global_player", 0.05),
    ("policy_environment", 0.1),
    ("quantum_communications", 0.15),
    ("quantum_computing", 0.15),
    ("quantum_sensing", 0.15),
    ("security", 0.05),
];

/// Default subsector weights for one sector, in taxonomy-independent
/// (key, weight) pairs. One lookup replaces the per-sector constant tables
/// the dashboard used to switch over by hand.
pub fn default_subsector_weights(sector: Sector) -> &'static [(&'static str, f64)] {
    match sector {
        Sector::Ai => &AI_DEFAULTS,
        Sector::Biotech => &BIOTECH_DEFAULTS,
        Sector::Semiconductors => &SEMICONDUCTORS_DEFAULTS,
        Sector::Space => &SPACE_DEFAULTS,
        Sector::Quantum => &QUANTUM_DEFAULTS,
    }
}
