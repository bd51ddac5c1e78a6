//! Display labels for sectors and subsector keys.
//! Consumed by the UI shell only; the aggregation pipeline never reads these.

use crate::sector::Sector;

impl Sector {
    /// Human-readable sector label.
    pub fn label(self) -> &'static str {
        match self {
            Sector::Ai => "AI",
            Sector::Biotech => "Biotechnology",
            Sector::Semiconductors => "Semiconductors",
            Sector::Space => "Space",
            Sector::Quantum => "Quantum",
        }
    }
}

/// Human-readable label for a subsector key within `sector`.
/// Returns None for keys outside the sector's taxonomy.
pub fn subsector_label(sector: Sector, key: &str) -> Option<&'static str> {
    let label = match (sector, key) {
        (Sector::Ai, "algorithms") => "Algorithms",
        (Sector::Ai, "computing_power") => "Computing Power",
        (Sector::Ai, "data") => "Data",
        (Sector::Ai, "accuracy_of_top_models") => "Accuracy of Top Models",

        (Sector::Biotech, "agricultural_technology") => "Agricultural Technology",
        (Sector::Biotech, "vaccine_research") => "Vaccine Research",
        (Sector::Biotech, "pharmaceutical_production") => "Pharmaceutical Production",
        (Sector::Biotech, "genetic_engineering") => "Genetic Engineering",

        (Sector::Semiconductors, "chip_design_and_tools") => "Chip Design and Tools",
        (Sector::Semiconductors, "manufacturing") => "Manufacturing and Fabrication",
        (Sector::Semiconductors, "equipment") => "Equipment",
        (Sector::Semiconductors, "assembly_and_testing_(osat)") => "Assembly and Testing",
        (Sector::Semiconductors, "raw_materials_and_wafers") => "Specialized Materials and Wafers",

        (Sector::Space, "domestic_launch_capability") => "Domestic Launch Capability",
        (Sector::Space, "science_and_exploration") => "Science and Exploration",
        (Sector::Space, "pnt") => "Position, Navigation, and Timing",
        (Sector::Space, "telecommunications") => "Telecommunications",
        (Sector::Space, "remote_sensing") => "Remote Sensing",

        (Sector::Quantum, "policy_environment") => "Policy Environment",
        (Sector::Quantum, "quantum_sensing") => "Quantum Sensing",
        (Sector::Quantum, "quantum_communications") => "Quantum Communications",
        (Sector::Quantum, "quantum_computing") => "Quantum Computing",

        // Keys shared by several sectors.
        (_, "economic_resources") => "Economic Resources",
        (_, "human_capital") => "Human Capital",
        (_, "global_player") => "Global Player",
        (_, "regulatory") => "Regulatory",
        (_, "security") => "Security",

        _ => return None,
    };

    // Shared-key arms above can match keys a sector does not actually carry.
    if sector.has_subsector(key) {
        Some(label)
    } else {
        None
    }
}
