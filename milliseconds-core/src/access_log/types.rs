/// One access log line, split into its fields.
///
/// Produced by [`LineParser::parse`](super::LineParser::parse) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub hostname: String,
    pub remote_addr: String,
    pub remote_user: String,
    /// Raw timestamp text, as found between the brackets.
    pub timestamp: String,
    pub request_type: String,
    pub request_url: String,
    pub protocol: String,
    /// Status code as text (e.g. "200"), kept as written.
    pub status: String,
    pub response_bytes: u64,
    pub referer: String,
    pub user_agent: String,
    pub cache_status: String,
    pub server: String,
    /// Request duration, truncated to whole milliseconds.
    pub duration_ms: u64,
}

/// The categorical fields counted into frequency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Hostname,
    RemoteAddr,
    RemoteUser,
    RequestType,
    Protocol,
    Status,
    Cache,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Hostname,
        Dimension::RemoteAddr,
        Dimension::RemoteUser,
        Dimension::RequestType,
        Dimension::Protocol,
        Dimension::Status,
        Dimension::Cache,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl LogRecord {
    pub fn dimension(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Hostname => &self.hostname,
            Dimension::RemoteAddr => &self.remote_addr,
            Dimension::RemoteUser => &self.remote_user,
            Dimension::RequestType => &self.request_type,
            Dimension::Protocol => &self.protocol,
            Dimension::Status => &self.status,
            Dimension::Cache => &self.cache_status,
        }
    }
}
