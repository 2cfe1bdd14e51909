/// Number of named fields an access log line must produce.
pub const FIELD_COUNT: usize = 14;

/// How many entries each ranking keeps. The rankings are reported as
/// "top" lists but have always held nine entries.
pub const TOP_N: usize = 9;

/// User agent fragments that mark monitoring and other in-house traffic.
pub const INTERNAL_AGENTS: &[&str] = &["Zabbix", "Seravo", "SWD"];

/// The access log line format:
///
/// `$host $remote_addr - $remote_user [$time_local] "$request" $status
/// $body_bytes_sent "$http_referer" "$http_user_agent" $upstream_cache_status
/// "$server" $request_time`
pub const ACCESS_LOG_PATTERN: &str = concat!(
    r"^(?P<hostname>[^ ]+) ",
    r"(?P<remote_addr>[^ ]+) ",
    r"- ",
    r"(?P<remote_user>[^\[]+) ",
    r"\[(?P<timestamp>.+)\] ",
    // Clients can name their methods whatever, e.g. CCM_POST
    r#""(?P<request_type>[A-Z_]+) "#,
    r#"(?P<request_url>[^"]+) "#,
    r#"(?P<protocol>[^ ]+)" "#,
    r"(?P<status>[0-9]+) ",
    r"(?P<response_bytes>[0-9]+) ",
    r#""(?P<referer>[^"]*)" "#,
    r#""(?P<user_agent>[^"]*)" "#,
    r"(?P<cache_status>[A-Z-]+) ",
    r#""(?P<server>[^"]+)" "#,
    r"(?P<duration>[0-9.]+)$",
);
