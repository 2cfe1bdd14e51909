use crate::access_log::bucket::Bucket;
use crate::access_log::classify::{
    CacheClass, StatusClass, classify_cache, classify_status, is_internal,
};
use crate::access_log::constants::TOP_N;
use crate::access_log::frequency::FrequencyTable;
use crate::access_log::report::{Ranking, Report};
use crate::access_log::types::{Dimension, LogRecord};
use tracing::debug;

/// The fixed set of buckets a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKind {
    Total,
    CacheNone,
    CacheHit,
    CacheMiss,
    CacheOther,
    Http2xx,
    Http3xx,
    Http4xx,
    Http5xx,
    Http503,
    Internal,
}

impl BucketKind {
    pub const ALL: [BucketKind; 11] = [
        BucketKind::Total,
        BucketKind::CacheNone,
        BucketKind::CacheHit,
        BucketKind::CacheMiss,
        BucketKind::CacheOther,
        BucketKind::Http2xx,
        BucketKind::Http3xx,
        BucketKind::Http4xx,
        BucketKind::Http5xx,
        BucketKind::Http503,
        BucketKind::Internal,
    ];

    fn for_status(class: StatusClass) -> Option<BucketKind> {
        match class {
            StatusClass::Success => Some(BucketKind::Http2xx),
            StatusClass::Redirection => Some(BucketKind::Http3xx),
            StatusClass::ClientError => Some(BucketKind::Http4xx),
            StatusClass::ServerError => Some(BucketKind::Http5xx),
            StatusClass::Unavailable => Some(BucketKind::Http503),
            StatusClass::Unclassified => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl From<CacheClass> for BucketKind {
    fn from(class: CacheClass) -> Self {
        match class {
            CacheClass::None => BucketKind::CacheNone,
            CacheClass::Hit => BucketKind::CacheHit,
            CacheClass::Miss => BucketKind::CacheMiss,
            CacheClass::Other => BucketKind::CacheOther,
        }
    }
}

/// Accumulates parsed records into buckets and frequency tables.
///
/// Lifecycle is `new` -> `observe` per record -> `finalize`. Two aggregators
/// fed disjoint parts of a log can be combined with [`Aggregator::merge`].
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    buckets: [Bucket; BucketKind::ALL.len()],
    tables: [FrequencyTable; Dimension::ALL.len()],
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: &LogRecord) {
        for dimension in Dimension::ALL {
            self.tables[dimension.index()].increment(record.dimension(dimension));
        }

        self.record(BucketKind::Total, record);
        self.record(classify_cache(&record.cache_status).into(), record);

        match BucketKind::for_status(classify_status(&record.status)) {
            Some(kind) => self.record(kind, record),
            None => debug!(status = %record.status, "no bucket for status class"),
        }

        if is_internal(&record.user_agent) {
            self.record(BucketKind::Internal, record);
        }
    }

    fn record(&mut self, kind: BucketKind, record: &LogRecord) {
        self.buckets[kind.index()].record(record.duration_ms, record.response_bytes);
    }

    pub fn merge(&mut self, other: &Aggregator) {
        for (mine, theirs) in self.buckets.iter_mut().zip(&other.buckets) {
            mine.merge(theirs);
        }
        for (mine, theirs) in self.tables.iter_mut().zip(&other.tables) {
            mine.merge(theirs);
        }
    }

    pub fn bucket(&self, kind: BucketKind) -> &Bucket {
        &self.buckets[kind.index()]
    }

    pub fn table(&self, dimension: Dimension) -> &FrequencyTable {
        &self.tables[dimension.index()]
    }

    /// Snapshot of the current state. Can be called repeatedly; the report
    /// owns its data.
    pub fn finalize(&self) -> Report {
        let stats = |kind| self.bucket(kind).stats();
        let top = |dimension| Ranking::new(self.table(dimension).top(TOP_N));

        Report {
            total: stats(BucketKind::Total),
            cache_none: stats(BucketKind::CacheNone),
            cache_hit: stats(BucketKind::CacheHit),
            cache_miss: stats(BucketKind::CacheMiss),
            cache_other: stats(BucketKind::CacheOther),
            http_2xx: stats(BucketKind::Http2xx),
            http_3xx: stats(BucketKind::Http3xx),
            http_4xx: stats(BucketKind::Http4xx),
            http_5xx: stats(BucketKind::Http5xx),
            http_503: stats(BucketKind::Http503),
            internal: stats(BucketKind::Internal),
            top_hostname: top(Dimension::Hostname),
            top_remote_addr: top(Dimension::RemoteAddr),
            top_remote_user: top(Dimension::RemoteUser),
            top_request_type: top(Dimension::RequestType),
            top_protocol: top(Dimension::Protocol),
            top_status: top(Dimension::Status),
            top_cache: top(Dimension::Cache),
        }
    }
}
