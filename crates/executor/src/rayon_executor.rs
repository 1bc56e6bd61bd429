use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use slidefit_traits::{Executor, ExecutorError};
use std::fmt;
use std::sync::Arc;

/// Work-stealing executor backed by rayon.
///
/// `new()` shares rayon's global pool; `with_threads` owns a dedicated pool
/// so deck layout does not compete with other rayon users.
#[derive(Clone)]
pub struct RayonExecutor {
    pool: Option<Arc<ThreadPool>>,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self { pool: None }
    }

    pub fn with_threads(threads: usize) -> Result<Self, ExecutorError> {
        if threads == 0 {
            return Err(ExecutorError::InvalidWorkerCount(threads));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("slidefit-layout-{}", i))
            .build()
            .map_err(|e| ExecutorError::PoolCreation(e.to_string()))?;
        Ok(Self {
            pool: Some(Arc::new(pool)),
        })
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RayonExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RayonExecutor")
            .field("threads", &self.parallelism())
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match &self.pool {
            Some(pool) => pool.install(|| items.into_par_iter().map(f).collect()),
            None => items.into_par_iter().map(f).collect(),
        }
    }

    fn parallelism(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}
