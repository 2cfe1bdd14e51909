use serde::Serialize;

/// Running duration/bytes statistics for one category of requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    count: u64,
    min_ms: u64,
    max_ms: u64,
    sum_ms: u64,
    bytes: u64,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, duration_ms: u64, bytes: u64) {
        if self.count == 0 {
            // First sample sets both bounds.
            self.min_ms = duration_ms;
            self.max_ms = duration_ms;
        } else {
            self.min_ms = self.min_ms.min(duration_ms);
            self.max_ms = self.max_ms.max(duration_ms);
        }

        self.count += 1;
        self.sum_ms = self.sum_ms.saturating_add(duration_ms);
        self.bytes = self.bytes.saturating_add(bytes);
    }

    /// Folds another bucket into this one, as if its samples had been
    /// recorded here.
    pub fn merge(&mut self, other: &Bucket) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        self.count += other.count;
        self.min_ms = self.min_ms.min(other.min_ms);
        self.max_ms = self.max_ms.max(other.max_ms);
        self.sum_ms = self.sum_ms.saturating_add(other.sum_ms);
        self.bytes = self.bytes.saturating_add(other.bytes);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    pub fn sum_ms(&self) -> u64 {
        self.sum_ms
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Mean duration, truncated. Zero for an empty bucket.
    pub fn avg_ms(&self) -> u64 {
        self.sum_ms.checked_div(self.count).unwrap_or(0)
    }

    pub fn stats(&self) -> BucketStats {
        BucketStats {
            count: self.count,
            min: self.min_ms,
            max: self.max_ms,
            avg: self.avg_ms(),
            sum: self.sum_ms,
            bytes: self.bytes,
        }
    }
}

/// Frozen view of a [`Bucket`], in report form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketStats {
    pub count: u64,
    pub min: u64,
    pub max: u64,
    pub avg: u64,
    pub sum: u64,
    pub bytes: u64,
}
