pub mod executor;
pub mod measure;

pub use executor::{Executor, ExecutorError, SyncExecutor};
pub use measure::{TextMeasurer, TextRole};
