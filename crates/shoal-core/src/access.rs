//! Access records observed in an instrumented program trace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an access reads or writes the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Read,
    Write,
}

impl Direction {
    pub fn from_write_flag(write: bool) -> Self {
        if write {
            Direction::Write
        } else {
            Direction::Read
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
        }
    }
}

/// One `arr access:` line.
///
/// The cost descriptor is kept raw: `cost_items[0]` is a marker and every
/// following item has the form `TAG=TOKEN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Array identifier as printed by the compiler
    pub array: String,
    /// Non-unit-stride access. Carried through, not used for cost.
    pub indexed: bool,
    pub direction: Direction,
    /// Whitespace-separated items of the bracketed cost descriptor
    pub cost_items: Vec<String>,
}

impl AccessRecord {
    /// Items after the leading marker.
    pub fn cost_tokens(&self) -> &[String] {
        self.cost_items.get(1..).unwrap_or(&[])
    }
}
