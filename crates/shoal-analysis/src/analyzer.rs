use crate::classifier::{classify, TraceLine};
use crate::metrics::PassMetrics;
use crate::registry::ArrayRegistry;
use crate::translator::translate;
use shoal_core::{AccessRecord, Direction, Result};
use std::io::BufRead;
use tracing::{debug, info, warn};

/// The finished cost model of one trace.
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    /// Name of the last program identified in the trace
    pub program: Option<String>,
    pub registry: ArrayRegistry,
    pub metrics: PassMetrics,
}

/// Pass-scoped context for extracting a cost model from a trace.
///
/// Feed lines with [`Analyzer::feed_line`] or whole readers with
/// [`Analyzer::consume`], then call [`Analyzer::finish`]. Line numbers run
/// across every reader consumed by the same analyzer.
#[derive(Debug, Default)]
pub struct Analyzer {
    model: CostModel,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze a complete trace in one call.
    pub fn analyze<R: BufRead>(reader: R) -> Result<CostModel> {
        let mut analyzer = Self::new();
        analyzer.consume(reader)?;
        Ok(analyzer.finish())
    }

    /// Read `reader` to exhaustion, feeding every line.
    ///
    /// Lines are read as bytes; invalid UTF-8 is replaced rather than
    /// rejected, since compiler chatter between records carries no cost.
    /// Stops at the first error; the analyzer should then be discarded.
    pub fn consume<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            self.feed_line(&String::from_utf8_lossy(&buf))?;
        }
    }

    /// Process one trace line.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.model.metrics.lines_scanned += 1;
        let line_no = self.model.metrics.lines_scanned;

        match classify(line) {
            TraceLine::Access(record) => self.observe(record, line_no)?,
            TraceLine::Program(name) => self.set_program(name, line_no),
            TraceLine::Inert => {}
        }
        Ok(())
    }

    fn observe(&mut self, record: AccessRecord, line_no: usize) -> Result<()> {
        let term = translate(&record, line_no)?;
        debug!(
            line = line_no,
            array = %record.array,
            direction = %record.direction,
            indexed = record.indexed,
            term = %term,
            "array access"
        );

        let metrics = &mut self.model.metrics;
        metrics.access_records += 1;
        match record.direction {
            Direction::Read => metrics.read_records += 1,
            Direction::Write => metrics.write_records += 1,
        }
        if record.indexed {
            metrics.indexed_records += 1;
        }

        self.model
            .registry
            .observe(&record.array, record.direction, term);
        Ok(())
    }

    /// Last identification line wins. A trace naming several programs most
    /// likely mixes their arrays too, so say so.
    fn set_program(&mut self, name: String, line_no: usize) {
        self.model.metrics.program_lines += 1;
        if let Some(previous) = self.model.program.as_deref() {
            if previous != name {
                warn!(
                    line = line_no,
                    previous,
                    current = %name,
                    "trace identifies more than one program, keeping the last"
                );
            }
        }
        debug!(line = line_no, program = %name, "found program name");
        self.model.program = Some(name);
    }

    /// End the pass and hand over the model.
    pub fn finish(self) -> CostModel {
        let metrics = &self.model.metrics;
        info!(
            lines = metrics.lines_scanned,
            records = metrics.access_records,
            arrays = self.model.registry.len(),
            program = self.model.program.as_deref().unwrap_or("UNKNOWN"),
            "trace analyzed"
        );
        self.model
    }
}
