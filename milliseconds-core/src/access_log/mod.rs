//! Access log analysis.
//!
//! Reads web server access log lines, one at a time, and boils them down to
//! latency and traffic statistics:
//!
//! - per-category duration/bytes buckets (all traffic, cache status, status
//!   class, internal clients)
//! - rankings of the most common hostnames, client addresses, users,
//!   methods, protocols, statuses and cache statuses
//!
//! The data flow is:
//!
//! lines
//! LineParser::parse
//! LogRecord
//! Aggregator::observe
//! Aggregator::finalize
//! Report
//!

mod aggregator;
mod analyze;
mod bucket;
mod classify;
mod constants;
mod error;
mod frequency;
mod parse;
mod report;
mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{Aggregator, BucketKind};
pub use analyze::{Analysis, RunSummary, analyze_file, analyze_lines, analyze_reader};
pub use bucket::{Bucket, BucketStats};
pub use classify::{CacheClass, StatusClass, classify_cache, classify_status, is_internal};
pub use constants::{ACCESS_LOG_PATTERN, FIELD_COUNT, INTERNAL_AGENTS, TOP_N};
pub use error::{AnalyzeError, ParseError, SchemaViolation};
pub use frequency::FrequencyTable;
pub use parse::LineParser;
pub use report::{Ranking, Report};
pub use types::{Dimension, LogRecord};
