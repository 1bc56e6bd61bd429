//! Strategies for fanning a deck's slides out to workers.
//!
//! Slides are laid out independently, so running a deck is an ordered map
//! over its slides. [`DeckExecutor`] picks between running that map on the
//! calling thread and on a rayon pool (feature `rayon`, on by default).
//!
//! ```ignore
//! use slidefit_executor::{DeckExecutor, Executor};
//!
//! let executor = DeckExecutor::parallel(4)?;
//! let layouts = executor.execute_all_fallible(slides, |slide| engine.layout(&slide));
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use slidefit_traits::{Executor, ExecutorError, SyncExecutor};

/// The executor a deck pipeline owns.
///
/// `Executor` has generic methods and cannot be boxed, so the pipeline
/// holds one of the concrete strategies by value.
#[derive(Clone, Debug)]
pub enum DeckExecutor {
    Sync(SyncExecutor),
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

/// Forwards a call to whichever strategy `$self` holds.
macro_rules! on_strategy {
    ($self:expr, |$exec:ident| $call:expr) => {
        match $self {
            DeckExecutor::Sync($exec) => $call,
            #[cfg(feature = "rayon")]
            DeckExecutor::Rayon($exec) => $call,
        }
    };
}

impl DeckExecutor {
    /// Lays slides out one after another on the calling thread.
    pub fn sequential() -> Self {
        DeckExecutor::Sync(SyncExecutor::new())
    }

    /// A dedicated pool of `workers` threads.
    ///
    /// Without the `rayon` feature this is sequential, but the worker
    /// count is still checked.
    pub fn parallel(workers: usize) -> Result<Self, ExecutorError> {
        if workers == 0 {
            return Err(ExecutorError::InvalidWorkerCount(workers));
        }
        #[cfg(feature = "rayon")]
        let executor = DeckExecutor::Rayon(RayonExecutor::with_threads(workers)?);
        #[cfg(not(feature = "rayon"))]
        let executor = DeckExecutor::sequential();
        Ok(executor)
    }
}

impl Default for DeckExecutor {
    /// The global rayon pool when available, otherwise sequential.
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            DeckExecutor::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            DeckExecutor::sequential()
        }
    }
}

impl Executor for DeckExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        on_strategy!(self, |exec| exec.execute_all(items, f))
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        on_strategy!(self, |exec| exec.execute_all_fallible(items, f))
    }

    fn parallelism(&self) -> usize {
        on_strategy!(self, |exec| exec.parallelism())
    }

    fn name(&self) -> &'static str {
        on_strategy!(self, |exec| exec.name())
    }
}
