use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the archive.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific settings which are shared by archive operations.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies the minimum archive size starting from which candidate comparisons within one
    /// insertion run in parallel. `None` keeps every insertion sequential.
    pub parallelism: Option<usize>,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, parallelism: Option<usize>) -> Self {
        Self { logger, parallelism }
    }

    /// Creates an environment which discards all log messages.
    pub fn silent() -> Self {
        Self::new(Arc::new(|_: &str| {}), None)
    }

    /// Returns true if an insertion into archive of given size should compare in parallel.
    pub fn is_parallel_for(&self, archive_size: usize) -> bool {
        self.parallelism.is_some_and(|threshold| archive_size >= threshold)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")), None)
    }
}
