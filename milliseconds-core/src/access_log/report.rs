use crate::access_log::bucket::BucketStats;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

/// Final statistics for one access log. Field order is the key order of
/// the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total: BucketStats,
    pub cache_none: BucketStats,
    pub cache_hit: BucketStats,
    pub cache_miss: BucketStats,
    pub cache_other: BucketStats,
    #[serde(rename = "2xx")]
    pub http_2xx: BucketStats,
    #[serde(rename = "3xx")]
    pub http_3xx: BucketStats,
    #[serde(rename = "4xx")]
    pub http_4xx: BucketStats,
    #[serde(rename = "5xx")]
    pub http_5xx: BucketStats,
    #[serde(rename = "503")]
    pub http_503: BucketStats,
    pub internal: BucketStats,

    #[serde(rename = "top-hostname")]
    pub top_hostname: Ranking,
    #[serde(rename = "top-remote_addr")]
    pub top_remote_addr: Ranking,
    #[serde(rename = "top-remote_user")]
    pub top_remote_user: Ranking,
    #[serde(rename = "top-request_type")]
    pub top_request_type: Ranking,
    #[serde(rename = "top-protocol")]
    pub top_protocol: Ranking,
    #[serde(rename = "top-status")]
    pub top_status: Ranking,
    #[serde(rename = "top-cache")]
    pub top_cache: Ranking,
}

impl Report {
    /// JSON with four-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;

        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Values ranked by count, highest first. Serializes as a JSON object whose
/// keys keep the ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    entries: Vec<(String, u64)>,
}

impl Ranking {
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, count)| *count)
    }
}

impl Serialize for Ranking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (value, count) in &self.entries {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}
