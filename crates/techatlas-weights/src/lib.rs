//! techatlas-weights — The two-level weight hierarchy and its store.
//! One weight per sector, one weight per (sector, subsector); user sliders
//! are the sole mutator, routed through [`store::WeightStore`].
//! See ARCHITECTURE.md §3.

pub mod allocation;
pub mod config;
pub mod defaults;
pub mod store;

pub use allocation::{allocation_status, AllocationStatus};
pub use config::WeightConfig;
pub use store::{WeightScope, WeightStore};
