//! Renderings of a finished cost model.
//!
//! Three independent forms are produced from the same model:
//!
//! - a plain-text summary (`reads:` / `writes:` sections),
//! - a LaTeX table for papers,
//! - a C header of string constants consumed by the Shoal runtime to pick an
//!   array placement.
//!
//! Each handles a missing read or write expression its own way: the summary
//! omits it, the table leaves the cell blank and the header substitutes `"0"`.

use crate::analyzer::CostModel;
use crate::metrics::PassMetrics;
use serde::Serialize;
use shoal_core::{CostExpression, Direction, Error, Result};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

/// Fixed location the Shoal runtime includes the cost header from.
pub const DEFAULT_HEADER_PATH: &str = "/tmp/shl_array_cost.h";

/// Caption label used when the trace never named its program.
pub const UNKNOWN_PROGRAM: &str = "UNKNOWN";

/// Prefix the Green-Marl backend puts on generated array names.
const GENERATED_PREFIX: &str = "shl__G_";

const HEADER_GUARD: &str = "SHL_COST";

/// Generates human-readable and machine-readable reports.
pub struct Report<'a> {
    model: &'a CostModel,
}

impl<'a> Report<'a> {
    pub fn new(model: &'a CostModel) -> Self {
        Self { model }
    }

    /// Program name for captions.
    pub fn program(&self) -> &'a str {
        self.model.program.as_deref().unwrap_or(UNKNOWN_PROGRAM)
    }

    /// Generate the plain-text summary.
    ///
    /// Arrays without an expression in a direction are left out of that section.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (title, direction) in [("reads:", Direction::Read), ("writes:", Direction::Write)] {
            out.push_str(title);
            out.push('\n');
            for (name, cost) in self.model.registry.iter() {
                if let Some(expr) = cost.get(direction) {
                    let _ = writeln!(out, "{} -> {}", name, expr);
                }
            }
        }
        out
    }

    /// Generate the LaTeX table, one row per array in first-seen order.
    pub fn to_latex(&self) -> String {
        let mut out = String::from(concat!(
            "\\begin{center}\n",
            "\\begin{table}[h!]\n",
            "\\begin{tabular}{lll}\n",
            "\\hline\n",
            "array & \\#reads & \\#writes \\\\\n",
            "\\hline\n",
        ));

        for (name, cost) in self.model.registry.iter() {
            let _ = writeln!(
                out,
                "{} & {} & {} \\\\",
                latex_array_name(name),
                latex_cell(cost.reads.as_ref()),
                latex_cell(cost.writes.as_ref()),
            );
        }

        let _ = write!(
            out,
            concat!(
                "\\hline\n",
                "\\end{{tabular}}\n",
                "\\caption{{{} arrays access cost as extracted by \\project}}\n",
                "\\end{{table}}\n",
                "\\end{{center}}\n",
            ),
            latex_escape(self.program()),
        );
        out
    }

    /// Generate the C header of cost strings.
    ///
    /// Every array gets both `<array>_wr` and `<array>_rd`; a missing
    /// expression is defined as `"0"` so lookups never fail.
    pub fn to_header(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "#ifndef {}", HEADER_GUARD);
        let _ = writeln!(out, "#define {}", HEADER_GUARD);
        out.push('\n');
        out.push_str("// Automatically generated by shoal-cost, do not edit\n");

        for (name, cost) in self.model.registry.iter() {
            let _ = writeln!(
                out,
                "#define {}_wr \"{}\"",
                name,
                header_value(cost.writes.as_ref())
            );
            let _ = writeln!(
                out,
                "#define {}_rd \"{}\"",
                name,
                header_value(cost.reads.as_ref())
            );
        }

        let _ = writeln!(out, "#endif /* {} */", HEADER_GUARD);
        out
    }

    /// Generate a JSON report of the model and pass metrics.
    pub fn to_json(&self) -> Result<String> {
        let arrays = self
            .model
            .registry
            .iter()
            .map(|(name, cost)| JsonArray {
                name,
                reads: cost.reads.as_ref().map(ToString::to_string),
                writes: cost.writes.as_ref().map(ToString::to_string),
            })
            .collect();

        let report = JsonReport {
            program: self.model.program.as_deref(),
            arrays,
            metrics: &self.model.metrics,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Write the C header to `path`, replacing any previous file atomically.
    ///
    /// The header is written to a temporary file next to `path` and renamed
    /// over it, so readers see either the old or the complete new header.
    pub fn write_header(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(self.to_header().as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| Error::HeaderPersist {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        tracing::info!(
            path = %path.display(),
            arrays = self.model.registry.len(),
            "wrote cost header"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    program: Option<&'a str>,
    arrays: Vec<JsonArray<'a>>,
    metrics: &'a PassMetrics,
}

#[derive(Serialize)]
struct JsonArray<'a> {
    name: &'a str,
    reads: Option<String>,
    writes: Option<String>,
}

fn latex_escape(s: &str) -> String {
    s.replace('_', "\\_")
}

fn latex_array_name(name: &str) -> String {
    let short = name.strip_prefix(GENERATED_PREFIX).unwrap_or(name);
    format!("\\texttt{{{}}}", latex_escape(short))
}

/// Factors are written adjacent; a missing expression is a blank cell.
fn latex_cell(expr: Option<&CostExpression>) -> String {
    match expr {
        Some(expr) => format!("${}$", expr.render("")),
        None => String::new(),
    }
}

fn header_value(expr: Option<&CostExpression>) -> String {
    expr.map_or_else(|| "0".to_string(), ToString::to_string)
}
