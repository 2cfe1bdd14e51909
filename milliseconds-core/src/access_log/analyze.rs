use crate::access_log::aggregator::Aggregator;
use crate::access_log::error::{AnalyzeError, ParseError};
use crate::access_log::parse::LineParser;
use crate::access_log::report::Report;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error, warn};

/// Line accounting for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: Report,
    pub summary: RunSummary,
}

pub fn analyze_file(path: &Path) -> Result<Analysis, AnalyzeError> {
    let file = File::open(path).map_err(|e| AnalyzeError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    analyze_reader(&LineParser::new(), BufReader::new(file))
}

pub fn analyze_reader<R: BufRead>(
    parser: &LineParser,
    reader: R,
) -> Result<Analysis, AnalyzeError> {
    analyze_lines(parser, raw_lines(reader))
}

/// Splits on `\n` without decoding, so a line with invalid UTF-8 reaches the
/// parser as a bad line instead of failing the read.
fn raw_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    std::iter::from_fn(move || {
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                Some(Ok(buf))
            }
            Err(e) => Some(Err(e)),
        }
    })
}

/// Parses and aggregates lines one at a time.
///
/// Lines that do not look like access log entries, including lines that are
/// not valid UTF-8, are logged and skipped. A schema violation stops the run
/// and no report is produced.
pub fn analyze_lines<I, L>(parser: &LineParser, lines: I) -> Result<Analysis, AnalyzeError>
where
    I: IntoIterator<Item = io::Result<L>>,
    L: Into<Vec<u8>>,
{
    let mut aggregator = Aggregator::new();
    let mut summary = RunSummary::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| AnalyzeError::ReadLine {
            line_number,
            source: e,
        })?;
        summary.lines_read += 1;

        let line = match String::from_utf8(line.into()) {
            Ok(line) => line,
            Err(e) => {
                let line = String::from_utf8_lossy(e.as_bytes());
                warn!(line_number, line = ?line, "unexpected log line contents");
                summary.skipped += 1;
                continue;
            }
        };

        match parser.parse(&line) {
            Ok(record) => {
                aggregator.observe(&record);
                summary.records += 1;
            }
            Err(ParseError::SyntaxMismatch) => {
                warn!(line_number, line = ?line, "unexpected log line contents");
                summary.skipped += 1;
            }
            Err(ParseError::SchemaViolation(violation)) => {
                error!(line_number, line = ?line, %violation, "unexpected log line schema");
                return Err(AnalyzeError::SchemaViolation {
                    line_number,
                    line,
                    violation,
                });
            }
        }
    }

    debug!(
        lines_read = summary.lines_read,
        records = summary.records,
        skipped = summary.skipped,
        "access log analyzed"
    );

    Ok(Analysis {
        report: aggregator.finalize(),
        summary,
    })
}
