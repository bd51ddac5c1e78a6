//! techatlas-taxonomy — Static sector/subsector taxonomy.
//! See ARCHITECTURE.md §2 — the taxonomy defines the shape of every
//! weight table and score table in the workspace.

pub mod labels;
pub mod sector;

pub use sector::Sector;
