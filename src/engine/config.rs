use crate::io::SaveMode;
use crate::pool::PoolConfig;

/// Processor configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessorConfig {
    pub pool: PoolConfig,
    pub save_mode: SaveMode,
}

impl ProcessorConfig {
    /// Configuration with `workers` requested workers and atomic saves
    pub fn new(workers: i64) -> Self {
        Self {
            pool: PoolConfig::new(workers),
            save_mode: SaveMode::default(),
        }
    }

    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.pool = self.pool.with_thread_name_prefix(prefix);
        self
    }

    pub fn with_save_mode(mut self, save_mode: SaveMode) -> Self {
        self.save_mode = save_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_atomic_saves() {
        let config = ProcessorConfig::new(4);
        assert_eq!(config.pool.requested_workers, 4);
        assert_eq!(config.save_mode, SaveMode::Atomic);
    }

    #[test]
    fn builder_overrides() {
        let config = ProcessorConfig::new(0)
            .with_thread_name_prefix("batch")
            .with_save_mode(SaveMode::Direct);

        assert_eq!(config.pool.thread_name_prefix, "batch");
        assert_eq!(config.pool.effective_workers(), 1);
        assert_eq!(config.save_mode, SaveMode::Direct);
    }
}
