use crate::error::FpError;

/// Settings for a single [`FPTree`](crate::FPTree) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Minimum number of transactions an item must appear in to be frequent.
    pub min_support: usize,
    /// Compute conditional pattern bases on the rayon thread pool.
    pub parallel: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            parallel: false,
        }
    }
}

impl TreeConfig {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), FpError> {
        if self.min_support == 0 {
            return Err(FpError::InvalidMinSupport(self.min_support));
        }
        Ok(())
    }
}
