//! Executor trait for running independent per-slide work.
//!
//! Slide layouts share no state, so a deck can be processed by any strategy
//! that maps a function over a list and preserves order.

use thiserror::Error;

/// Error type for executor construction.
#[derive(Error, Debug, Clone)]
pub enum ExecutorError {
    #[error("Failed to create worker pool: {0}")]
    PoolCreation(String),

    #[error("Invalid worker count: {0}")]
    InvalidWorkerCount(usize),
}

/// Maps a function over a batch of items.
///
/// Implementations must return results in the same order as `items`.
pub trait Executor: Send + Sync {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.execute_all(items, f)
    }

    /// Number of items that may run concurrently.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Runs every item on the calling thread, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_executor_preserves_order() {
        let results = SyncExecutor::new().execute_all(vec![3, 1, 2], |x| x * 10);
        assert_eq!(results, vec![30, 10, 20]);
    }

    #[test]
    fn test_sync_executor_fallible() {
        let results = SyncExecutor.execute_all_fallible(vec![1, 0, 2], |x| {
            if x == 0 { Err("zero") } else { Ok(x) }
        });
        assert_eq!(results, vec![Ok(1), Err("zero"), Ok(2)]);
    }

    #[test]
    fn test_sync_executor_empty() {
        let results: Vec<i32> = SyncExecutor.execute_all(Vec::<i32>::new(), |x| x);
        assert!(results.is_empty());
        assert_eq!(SyncExecutor.parallelism(), 1);
    }

    #[test]
    fn test_executor_error_display() {
        assert_eq!(
            ExecutorError::InvalidWorkerCount(0).to_string(),
            "Invalid worker count: 0"
        );
    }
}
