//! mathdrill-report — progress visualization.
//!
//! Consumes `ProgressRecord` sequences from the ledger and renders a
//! self-contained SVG line chart of session time vs. percentage correct.

pub mod chart;

pub use chart::{render_progress_chart, write_progress_chart};
