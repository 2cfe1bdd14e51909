use crate::access_log::constants::INTERNAL_AGENTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheClass {
    None,
    Hit,
    Miss,
    Other,
}

/// Status buckets. 503 is kept apart from the other 5xx responses since
/// sites in maintenance mode answer with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirection,
    ClientError,
    ServerError,
    Unavailable,
    /// First digit outside 2-5; there is no bucket for these.
    Unclassified,
}

/// Classifies an upstream cache status token.
///
/// The rules overlap on compound tokens and are checked in order:
/// `HIT-STALE` contains `-` and so counts as uncached.
pub fn classify_cache(cache_status: &str) -> CacheClass {
    if cache_status.contains('-') || cache_status.contains("BYPASS") {
        CacheClass::None
    } else if cache_status.contains("HIT") {
        CacheClass::Hit
    } else if cache_status.contains("MISS") {
        CacheClass::Miss
    } else {
        CacheClass::Other
    }
}

pub fn classify_status(status: &str) -> StatusClass {
    if status == "503" {
        return StatusClass::Unavailable;
    }

    match status.as_bytes().first() {
        Some(b'2') => StatusClass::Success,
        Some(b'3') => StatusClass::Redirection,
        Some(b'4') => StatusClass::ClientError,
        Some(b'5') => StatusClass::ServerError,
        _ => StatusClass::Unclassified,
    }
}

pub fn is_internal(user_agent: &str) -> bool {
    INTERNAL_AGENTS
        .iter()
        .any(|agent| user_agent.contains(agent))
}
