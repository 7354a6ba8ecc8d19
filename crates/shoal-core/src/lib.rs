//! Core types and errors for the Shoal array cost extractor.
//!
//! This crate defines the data model shared by the analysis passes and the
//! CLI: cost symbols and the expressions built from them, access records read
//! from a trace, and the error type. It contains no parsing or I/O logic.

pub mod access;
pub mod cost;
pub mod error;

pub use access::{AccessRecord, Direction};
pub use cost::{CostExpression, CostSymbol, ProductTerm};
pub use error::{Error, Result};
