use super::{SAMPLE_LINE, line};
use crate::access_log::{
    ACCESS_LOG_PATTERN, AnalyzeError, LineParser, RunSummary, SchemaViolation, analyze_file,
    analyze_lines, analyze_reader,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{self, Cursor};
use tempfile::tempdir;

fn ok_lines(lines: &[&str]) -> Vec<io::Result<String>> {
    lines.iter().map(|l| Ok(l.to_string())).collect()
}

#[test]
fn skips_malformed_lines_and_keeps_going() {
    let bad = SAMPLE_LINE.replace("\"GET /index.html HTTP/1.1\"", "\"\"");
    let input = ok_lines(&[SAMPLE_LINE, &bad, SAMPLE_LINE]);

    let analysis = analyze_lines(&LineParser::new(), input).unwrap();

    assert_eq!(
        analysis.summary,
        RunSummary {
            lines_read: 3,
            records: 2,
            skipped: 1,
        }
    );
    assert_eq!(analysis.report.total.count, 2);
    assert_eq!(analysis.report.top_hostname.get("example.com"), Some(2));
}

#[test]
fn malformed_line_leaves_no_trace_in_the_report() {
    let bad = SAMPLE_LINE.replace("\"GET /index.html HTTP/1.1\"", "\"\"");

    let analysis = analyze_lines(&LineParser::new(), ok_lines(&[&bad])).unwrap();

    assert_eq!(analysis.report, Default::default());
}

#[test]
fn schema_violation_aborts_the_run() {
    let input = ok_lines(&[
        SAMPLE_LINE,
        &line("200", "HIT", "1.2.3", "Mozilla/5.0"),
        SAMPLE_LINE,
    ]);

    let err = analyze_lines(&LineParser::new(), input).unwrap_err();

    match &err {
        AnalyzeError::SchemaViolation {
            line_number,
            line,
            violation,
        } => {
            assert_eq!(*line_number, 2);
            assert!(line.ends_with("1.2.3"));
            assert!(matches!(violation, SchemaViolation::InvalidNumber { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn field_count_mismatch_aborts_the_run() {
    let pattern = ACCESS_LOG_PATTERN.replace("^(?P<hostname>", "^(?P<vhost>(?P<hostname>");
    let pattern = pattern.replace("(?P<hostname>[^ ]+) ", "(?P<hostname>[^ ]+)) ");
    let parser = LineParser::with_pattern(&pattern).unwrap();

    let err = analyze_lines(&parser, ok_lines(&["garbage", SAMPLE_LINE])).unwrap_err();

    assert!(matches!(
        err,
        AnalyzeError::SchemaViolation {
            line_number: 2,
            violation: SchemaViolation::FieldCount {
                expected: 14,
                found: 15
            },
            ..
        }
    ));
}

#[test]
fn read_errors_are_reported_with_line_number() {
    let input = vec![
        Ok(SAMPLE_LINE.to_string()),
        Err(io::Error::other("device went away")),
    ];

    let err = analyze_lines(&LineParser::new(), input).unwrap_err();

    assert!(matches!(err, AnalyzeError::ReadLine { line_number: 2, .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn invalid_utf8_line_is_skipped() {
    let mut input = Vec::new();
    input.extend_from_slice(SAMPLE_LINE.as_bytes());
    input.extend_from_slice(b"\njunk \xff\xfe line\n");
    input.extend_from_slice(SAMPLE_LINE.as_bytes());
    input.push(b'\n');

    let analysis = analyze_reader(&LineParser::new(), Cursor::new(input)).unwrap();

    assert_eq!(
        analysis.summary,
        RunSummary {
            lines_read: 3,
            records: 2,
            skipped: 1,
        }
    );
    assert_eq!(analysis.report.total.count, 2);
}

#[test]
fn invalid_utf8_in_a_well_formed_line_is_skipped() {
    let mut bad = SAMPLE_LINE.as_bytes().to_vec();
    bad[0] = 0xff;

    let analysis = analyze_lines(&LineParser::new(), vec![Ok(bad)]).unwrap();

    assert_eq!(analysis.summary.skipped, 1);
    assert_eq!(analysis.report, Default::default());
}

#[test]
fn reader_strips_crlf_and_accepts_missing_final_newline() {
    let text = format!("{SAMPLE_LINE}\r\n{SAMPLE_LINE}");

    let analysis = analyze_reader(&LineParser::new(), Cursor::new(text)).unwrap();

    assert_eq!(analysis.summary.records, 2);
}

#[test]
fn reads_from_any_buffered_reader() {
    let text = format!("{SAMPLE_LINE}\n{}\n", line("404", "MISS", "0.5", "SWD"));

    let analysis = analyze_reader(&LineParser::new(), Cursor::new(text)).unwrap();

    assert_eq!(analysis.summary.records, 2);
    assert_eq!(analysis.report.http_4xx.max, 500);
    assert_eq!(analysis.report.internal.count, 1);
}

#[test]
fn analyzes_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(
        &path,
        format!(
            "{}\n{}\n{}\n",
            line("200", "HIT", "0.010", "Mozilla/5.0"),
            line("503", "-", "2.500", "Mozilla/5.0"),
            line("500", "MISS", "0.300", "Zabbix"),
        ),
    )
    .unwrap();

    let report = analyze_file(&path).unwrap().report;

    assert_eq!(report.total.count, 3);
    assert_eq!(report.total.min, 10);
    assert_eq!(report.total.max, 2500);
    assert_eq!(report.total.avg, 936); // 2810 / 3
    assert_eq!(report.total.bytes, 1536);
    assert_eq!(report.http_503.count, 1);
    assert_eq!(report.http_5xx.count, 1);
    assert_eq!(report.internal.sum, 300);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = analyze_file(&dir.path().join("nope.log")).unwrap_err();

    assert!(matches!(err, AnalyzeError::ReadFile { .. }));
    assert_eq!(err.exit_code(), 1);
}
