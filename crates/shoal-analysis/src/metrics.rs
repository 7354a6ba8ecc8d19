use serde::{Deserialize, Serialize};

/// Counters collected during a single pass over a trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassMetrics {
    pub lines_scanned: usize,
    pub access_records: usize,
    pub read_records: usize,
    pub write_records: usize,
    /// Access records flagged as non-unit-stride
    pub indexed_records: usize,
    pub program_lines: usize,
}
