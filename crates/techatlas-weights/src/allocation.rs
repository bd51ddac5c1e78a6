//! Sibling-group allocation reporting.
//! See ARCHITECTURE.md §3.4 — feedback only, never a gate on computation.

use serde::{Deserialize, Serialize};

/// Tolerance for calling an allocation perfect. Wider than machine epsilon so
/// sums assembled from slider steps (multiples of 0.025) still qualify.
const ALLOCATION_EPSILON: f64 = 1e-9;

/// How a sibling weight group compares to the 100% budget.
/// Under- and over-allocation are valid, visualized states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AllocationStatus {
    Perfect,
    Under { remaining_percent: f64 },
    Over { excess_percent: f64 },
}

impl AllocationStatus {
    /// Distance from the 100% budget, in percentage points. Zero when perfect.
    pub fn delta_percent(self) -> f64 {
        match self {
            AllocationStatus::Perfect => 0.0,
            AllocationStatus::Under { remaining_percent } => remaining_percent,
            AllocationStatus::Over { excess_percent } => excess_percent,
        }
    }
}

/// Classify the sum of one sibling weight group (all sectors, or all
/// subsectors of one sector) against the 100% budget.
pub fn allocation_status<I>(weights: I) -> AllocationStatus
where
    I: IntoIterator<Item = f64>,
{
    let sum: f64 = weights.into_iter().sum();
    if (sum - 1.0).abs() < ALLOCATION_EPSILON {
        AllocationStatus::Perfect
    } else if sum < 1.0 {
        AllocationStatus::Under {
            remaining_percent: (1.0 - sum) * 100.0,
        }
    } else {
        AllocationStatus::Over {
            excess_percent: (sum - 1.0) * 100.0,
        }
    }
}
