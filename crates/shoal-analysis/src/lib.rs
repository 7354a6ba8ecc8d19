//! Trace analysis and cost model emission for Shoal.
//!
//! This crate provides:
//! - Classification of Green-Marl compiler trace lines
//! - Translation of cost descriptors into symbolic product terms
//! - Per-array accumulation of read and write cost formulas
//! - Plain-text, LaTeX, C header and JSON renderings of the result

pub mod analyzer;
pub mod classifier;
pub mod metrics;
pub mod registry;
pub mod report;
pub mod translator;

pub use analyzer::{Analyzer, CostModel};
pub use metrics::PassMetrics;
pub use registry::{ArrayCost, ArrayRegistry};
pub use report::Report;
