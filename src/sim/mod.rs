//! Simulation driver and result reporting.
//!
//! - `Simulator`: deals, ticks to a terminal outcome, builds a `Report`
//! - `Report` / `Summary`: outcome code plus outcome-specific data
//! - `BatchSummary`: outcome tally over a seed range

pub mod report;
pub mod simulator;

pub use report::{BatchSummary, Report, Summary};
pub use simulator::Simulator;
