use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use parking_lot::{Mutex, RwLock};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use tokio::sync::oneshot;

use super::deferred::{Deferred, ExecutorError};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Configuration for the I/O executor
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Number of worker threads
    pub workers: usize,
    /// Maximum number of jobs waiting for a worker
    pub queue_capacity: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get().max(2),
            queue_capacity: 1024,
        }
    }
}

impl ExecutorConfig {
    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    pub fn with_queue_capacity(mut self, n: usize) -> Self {
        self.queue_capacity = n;
        self
    }
}

/// Statistics for the executor
#[derive(Debug, Clone, Default)]
pub struct ExecutorStats {
    pub workers: usize,
    pub queued_jobs: usize,
    pub completed_jobs: u64,
}

/// Bounded pool of worker threads dedicated to I/O-shaped work.
///
/// Jobs are queued on a bounded channel and results come back through a
/// [`Deferred`] handle, so request tasks never block on the work itself.
pub struct IoExecutor {
    sender: RwLock<Option<Sender<Job>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    completed: Arc<AtomicU64>,
    config: ExecutorConfig,
}

impl IoExecutor {
    /// Create the pool and start all workers
    pub fn new(config: ExecutorConfig) -> Self {
        let workers = config.workers.max(1);
        let (sender, receiver) = bounded::<Job>(config.queue_capacity.max(1));

        let handles = (0..workers)
            .map(|worker_id| {
                let receiver = receiver.clone();
                thread::Builder::new()
                    .name(format!("broker-io-{}", worker_id))
                    .spawn(move || run_worker(worker_id, receiver))
                    .expect("Failed to spawn I/O worker thread")
            })
            .collect();

        tracing::info!(
            workers,
            queue_capacity = config.queue_capacity,
            "I/O executor started"
        );

        IoExecutor {
            sender: RwLock::new(Some(sender)),
            workers: Mutex::new(handles),
            completed: Arc::new(AtomicU64::new(0)),
            config,
        }
    }

    /// Schedule `job` on a worker and return a handle to its result.
    ///
    /// Never blocks: a full queue or a shut-down pool resolves the handle
    /// to an error right away.
    pub fn submit<F, T>(&self, job: F) -> Deferred<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let completed = Arc::clone(&self.completed);
        let task: Job = Box::new(move || {
            // Handle dropped while queued
            if tx.is_closed() {
                return;
            }
            let output = job();
            completed.fetch_add(1, Ordering::Relaxed);
            let _ = tx.send(output);
        });

        let guard = self.sender.read();
        let Some(sender) = guard.as_ref() else {
            return Deferred::failed(ExecutorError::Shutdown);
        };

        match sender.try_send(task) {
            Ok(()) => Deferred::pending(rx),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(
                    queue_capacity = self.config.queue_capacity,
                    "I/O executor saturated, rejecting job"
                );
                Deferred::failed(ExecutorError::Saturated)
            }
            Err(TrySendError::Disconnected(_)) => Deferred::failed(ExecutorError::Shutdown),
        }
    }

    /// Get executor statistics
    pub fn stats(&self) -> ExecutorStats {
        ExecutorStats {
            workers: self.workers.lock().len(),
            queued_jobs: self.sender.read().as_ref().map_or(0, |s| s.len()),
            completed_jobs: self.completed.load(Ordering::Relaxed),
        }
    }

    /// Check if the pool accepts work and all workers are running
    pub fn is_alive(&self) -> bool {
        self.sender.read().is_some() && self.workers.lock().iter().all(|h| !h.is_finished())
    }

    /// Stop accepting jobs, let workers drain the queue and wait for them
    pub fn shutdown(&self) {
        self.sender.write().take();

        let handles = std::mem::take(&mut *self.workers.lock());
        for handle in handles {
            let _ = handle.join();
        }

        tracing::info!("I/O executor shutdown complete");
    }
}

impl Default for IoExecutor {
    fn default() -> Self {
        Self::new(ExecutorConfig::default())
    }
}

impl Drop for IoExecutor {
    fn drop(&mut self) {
        // Workers exit once the queue is closed and drained
        self.sender.write().take();
    }
}

fn run_worker(worker_id: usize, receiver: Receiver<Job>) {
    tracing::debug!(worker_id, "I/O worker started");

    while let Ok(job) = receiver.recv() {
        if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            tracing::error!(worker_id, "I/O job panicked");
        }
    }

    tracing::debug!(worker_id, "I/O worker stopped");
}
