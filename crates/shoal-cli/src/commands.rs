//! Command implementations for the Shoal CLI.

use anyhow::{Context, Result};
use shoal_analysis::{Analyzer, CostModel, Report};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

/// Extract command: analyze the traces, print both reports, write the header.
///
/// Nothing is printed or written unless the whole trace was analyzed.
pub fn extract(traces: &[PathBuf], header: &Path, json: Option<&Path>) -> Result<()> {
    let model = analyze_traces(traces)?;
    let report = Report::new(&model);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", report.to_text())?;
    writeln!(stdout, "{}", report.to_latex())?;
    stdout.flush()?;

    report
        .write_header(header)
        .with_context(|| format!("Failed to write cost header {}", header.display()))?;

    if let Some(json_path) = json {
        std::fs::write(json_path, report.to_json()?)
            .with_context(|| format!("Failed to write JSON report {}", json_path.display()))?;
    }

    Ok(())
}

/// Run one pass over all traces, in order.
fn analyze_traces(traces: &[PathBuf]) -> Result<CostModel> {
    let mut analyzer = Analyzer::new();

    if traces.is_empty() {
        analyzer
            .consume(io::stdin().lock())
            .context("Failed to analyze trace from stdin")?;
    }

    for path in traces {
        if path == Path::new("-") {
            analyzer
                .consume(io::stdin().lock())
                .context("Failed to analyze trace from stdin")?;
            continue;
        }

        tracing::info!(path = %path.display(), "reading trace");
        let file = File::open(path)
            .with_context(|| format!("Failed to open trace {}", path.display()))?;
        analyzer
            .consume(BufReader::new(file))
            .with_context(|| format!("Failed to analyze trace {}", path.display()))?;
    }

    Ok(analyzer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = "\
../../bin/gm_comp -t=cpp bfs.gm
arr access: [G_level] indexed [ ] write [X] cost [cost a=LOOP_NODES]
";

    #[test]
    fn test_extract_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let trace = dir.path().join("bfs.trace");
        let header = dir.path().join("shl_array_cost.h");
        let json = dir.path().join("bfs.json");
        std::fs::write(&trace, TRACE).unwrap();

        extract(&[trace], &header, Some(json.as_path())).unwrap();

        let contents = std::fs::read_to_string(&header).unwrap();
        assert!(contents.contains("#define G_level_wr \"N\"\n"));
        assert!(contents.contains("#define G_level_rd \"0\"\n"));
        assert!(std::fs::read_to_string(&json).unwrap().contains("\"bfs\""));
    }

    #[test]
    fn test_unknown_token_leaves_header_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let trace = dir.path().join("bad.trace");
        let header = dir.path().join("shl_array_cost.h");
        std::fs::write(
            &trace,
            "arr access: [A] indexed [ ] write [X] cost [cost a=LOOP_UNKNOWN_TOKEN]\n",
        )
        .unwrap();
        std::fs::write(&header, "previous header\n").unwrap();

        let err = extract(&[trace], &header, None).unwrap_err();
        assert!(format!("{:#}", err).contains("LOOP_UNKNOWN_TOKEN"));
        assert_eq!(std::fs::read_to_string(&header).unwrap(), "previous header\n");
    }

    #[test]
    fn test_missing_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let header = dir.path().join("shl_array_cost.h");

        let err = extract(&[dir.path().join("nope.trace")], &header, None).unwrap_err();
        assert!(err.to_string().contains("Failed to open trace"));
        assert!(!header.exists());
    }
}
