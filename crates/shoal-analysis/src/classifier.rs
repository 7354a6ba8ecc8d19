//! Line classification for Green-Marl compiler traces.
//!
//! Two line shapes carry information:
//!
//! ```text
//! arr access: [G_dist ] indexed [ ] write [X] cost [cost a=LOOP_NODES b=LOOP_EDGES]
//! ../../bin/gm_comp -t=cpp bfs.gm
//! ```
//!
//! The first is an access record, the second names the program being compiled.
//! Every other line is inert.

use regex::Regex;
use shoal_core::{AccessRecord, Direction};
use std::sync::LazyLock;

static ACCESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^arr access:\s*\[([A-Za-z0-9_]+)\s*\]",
        r"\s*indexed\s*\[([X ])\]",
        r"\s*write\s*\[([X ])\]",
        r"\s*cost\s*\[(.*)\]",
    ))
    .expect("access pattern is a valid regex")
});

static PROGRAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S*gm_comp.*\s([A-Za-z_-]+)\.gm$").expect("program pattern is a valid regex")
});

/// What a single trace line contributes to the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLine {
    Access(AccessRecord),
    Program(String),
    Inert,
}

/// Classify one line. Trailing whitespace is ignored.
pub fn classify(line: &str) -> TraceLine {
    let line = line.trim_end();

    if let Some(record) = parse_access(line) {
        return TraceLine::Access(record);
    }
    if let Some(program) = parse_program(line) {
        return TraceLine::Program(program.to_string());
    }
    TraceLine::Inert
}

/// Parse an access record line, returning `None` if the line doesn't match.
pub fn parse_access(line: &str) -> Option<AccessRecord> {
    let caps = ACCESS_PATTERN.captures(line)?;

    Some(AccessRecord {
        array: caps[1].to_string(),
        indexed: &caps[2] == "X",
        direction: Direction::from_write_flag(&caps[3] == "X"),
        cost_items: caps[4].split_whitespace().map(str::to_string).collect(),
    })
}

/// Parse a compiler invocation line, returning the program base name.
pub fn parse_program(line: &str) -> Option<&str> {
    PROGRAM_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
