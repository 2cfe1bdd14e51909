use crate::access_log::constants::{ACCESS_LOG_PATTERN, FIELD_COUNT};
use crate::access_log::error::{ParseError, SchemaViolation};
use crate::access_log::types::LogRecord;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(ACCESS_LOG_PATTERN).expect("built-in access log pattern compiles"));

/// Turns raw access log lines into [`LogRecord`]s.
///
/// The whole line has to match; a line that only starts like an access log
/// entry is a [`ParseError::SyntaxMismatch`].
#[derive(Debug, Clone)]
pub struct LineParser {
    pattern: Regex,
    field_count: usize,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self::from_regex(DEFAULT_PATTERN.clone())
    }

    /// Builds a parser from another pattern, to check how broken patterns
    /// are reported.
    #[cfg(test)]
    pub(crate) fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    fn from_regex(pattern: Regex) -> Self {
        let field_count = pattern.capture_names().flatten().count();
        Self {
            pattern,
            field_count,
        }
    }

    pub fn parse(&self, line: &str) -> Result<LogRecord, ParseError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let Some(caps) = self.pattern.captures(line) else {
            return Err(ParseError::SyntaxMismatch);
        };

        if self.field_count != FIELD_COUNT {
            return Err(SchemaViolation::FieldCount {
                expected: FIELD_COUNT,
                found: self.field_count,
            }
            .into());
        }

        let response_bytes = field(&caps, "response_bytes")?;
        let response_bytes =
            response_bytes
                .parse::<u64>()
                .map_err(|_| SchemaViolation::InvalidNumber {
                    field: "response_bytes",
                    value: response_bytes.to_string(),
                })?;

        let duration = field(&caps, "duration")?;
        let duration_ms =
            seconds_to_millis(duration).ok_or_else(|| SchemaViolation::InvalidNumber {
                field: "duration",
                value: duration.to_string(),
            })?;

        Ok(LogRecord {
            hostname: field(&caps, "hostname")?.to_string(),
            remote_addr: field(&caps, "remote_addr")?.to_string(),
            remote_user: field(&caps, "remote_user")?.to_string(),
            timestamp: field(&caps, "timestamp")?.to_string(),
            request_type: field(&caps, "request_type")?.to_string(),
            request_url: field(&caps, "request_url")?.to_string(),
            protocol: field(&caps, "protocol")?.to_string(),
            status: field(&caps, "status")?.to_string(),
            response_bytes,
            referer: field(&caps, "referer")?.to_string(),
            user_agent: field(&caps, "user_agent")?.to_string(),
            cache_status: field(&caps, "cache_status")?.to_string(),
            server: field(&caps, "server")?.to_string(),
            duration_ms,
        })
    }
}

fn field<'h>(caps: &Captures<'h>, name: &'static str) -> Result<&'h str, SchemaViolation> {
    caps.name(name)
        .map(|m| m.as_str())
        .ok_or(SchemaViolation::MissingField { field: name })
}

/// Converts decimal seconds ("0.123", "12", ".5") to whole milliseconds,
/// truncating anything past the third decimal. Works on the digits directly
/// so that e.g. "1.005" is 1005 and not 1004.
pub(crate) fn seconds_to_millis(text: &str) -> Option<u64> {
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().ok()?
    };

    let millis = frac
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

    whole.checked_mul(1000)?.checked_add(millis)
}
