/// Smallest pool a processor will ever run with
pub const MIN_WORKERS: usize = 1;

/// Largest pool a processor will ever run with
pub const MAX_WORKERS: usize = 256;

/// Thread name prefix used when none is configured
pub const DEFAULT_THREAD_NAME_PREFIX: &str = "dataproc-worker";

/// Clamp a requested worker count to a usable pool size
///
/// Zero and negative requests degrade to [`MIN_WORKERS`], oversized ones to
/// [`MAX_WORKERS`]; neither is an error.
pub fn effective_workers(requested: i64) -> usize {
    usize::try_from(requested)
        .map_or(MIN_WORKERS, |n| n.clamp(MIN_WORKERS, MAX_WORKERS))
}

/// Worker pool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Caller-supplied worker count; may be zero or negative
    pub requested_workers: i64,
    /// Worker threads are named `<prefix>-<index>`
    pub thread_name_prefix: String,
}

impl PoolConfig {
    pub fn new(requested_workers: i64) -> Self {
        Self {
            requested_workers,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
        }
    }

    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Worker count actually used at runtime, within `MIN_WORKERS..=MAX_WORKERS`
    pub fn effective_workers(&self) -> usize {
        effective_workers(self.requested_workers)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        let n = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(MIN_WORKERS);
        Self::new(i64::try_from(n).unwrap_or(i64::MAX))
    }
}
