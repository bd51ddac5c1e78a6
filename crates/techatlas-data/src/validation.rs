//! Row-level validation for the dataset snapshot.
//! See ARCHITECTURE.md §4.2 — errors reject a row, warnings keep it.

use serde::{Deserialize, Serialize};

/// Outcome of validating a dataset snapshot.
/// Errors name rows that were rejected; warnings name rows that were kept
/// but look suspicious (score above 1, duplicate country).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub(crate) fn error(&mut self, msg: String) {
        tracing::warn!(target: "techatlas::data", "{msg}");
        self.errors.push(msg);
    }

    pub(crate) fn warning(&mut self, msg: String) {
        tracing::warn!(target: "techatlas::data", "{msg}");
        self.warnings.push(msg);
    }
}

/// Check one raw score value. Raw scores live in [0, 1]; values above 1 are
/// tolerated with a warning so a recalibrated dataset still renders.
pub(crate) fn check_score(
    report: &mut ValidationReport,
    country: &str,
    sector_key: &str,
    subsector: &str,
    value: f64,
) -> bool {
    if !value.is_finite() {
        report.error(format!(
            "Non-finite {sector_key}/{subsector} score for {country}"
        ));
        return false;
    }
    if value < 0.0 {
        report.error(format!(
            "Negative {sector_key}/{subsector} score for {country}: {value}"
        ));
        return false;
    }
    if value > 1.0 {
        report.warning(format!(
            "{sector_key}/{subsector} score above 1 for {country}: {value}"
        ));
    }
    true
}
