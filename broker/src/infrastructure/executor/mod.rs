mod deferred;
mod pool;

pub use deferred::{Deferred, ExecutorError};
pub use pool::{ExecutorConfig, ExecutorStats, IoExecutor};
