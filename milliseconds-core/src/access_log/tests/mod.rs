mod analyze_tests;

use crate::access_log::LogRecord;

pub(super) const SAMPLE_LINE: &str = concat!(
    "example.com 192.0.2.10 - - [16/Oct/2026:10:00:00 +0300] ",
    r#""GET /index.html HTTP/1.1" 200 512 "-" "Mozilla/5.0" HIT "php" 0.123"#,
);

pub(super) fn line(status: &str, cache: &str, duration: &str, user_agent: &str) -> String {
    format!(
        "example.com 192.0.2.10 - - [16/Oct/2026:10:00:00 +0300] \
         \"GET /index.html HTTP/1.1\" {status} 512 \"-\" \"{user_agent}\" {cache} \"php\" {duration}"
    )
}

pub(super) fn record(status: &str, cache: &str, duration_ms: u64, bytes: u64) -> LogRecord {
    LogRecord {
        hostname: "example.com".into(),
        remote_addr: "192.0.2.10".into(),
        remote_user: "-".into(),
        timestamp: "16/Oct/2026:10:00:00 +0300".into(),
        request_type: "GET".into(),
        request_url: "/".into(),
        protocol: "HTTP/1.1".into(),
        status: status.into(),
        response_bytes: bytes,
        referer: "-".into(),
        user_agent: "Mozilla/5.0".into(),
        cache_status: cache.into(),
        server: "php".into(),
        duration_ms,
    }
}
