//! Asynchronous task loading.
//!
//! [`load_tasks`] performs one fetch against a [`TaskSource`] and prepares
//! the result. [`Loader`] runs loads in the background and reports each
//! outcome on a channel; the owner of the [`TaskStore`](crate::TaskStore)
//! drains the channel and commits outcomes in arrival order, so when two
//! loads overlap the later resolution wins.

use std::sync::Arc;
use std::time::Duration;

use tasklane_protocol::{RawTask, Task, TaskKey};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::error::{LoadError, Result};
use crate::source::TaskSource;

/// Default time a load may take before it is abandoned.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Assigns positional keys (`task0`, `task1`, ...) to raw records.
///
/// # Examples
///
/// ```
/// use tasklane_protocol::{RawTask, TaskStatus};
/// use tasklane_store::prepare_tasks;
///
/// let tasks = prepare_tasks(vec![
///     RawTask::new("A", TaskStatus::Todo),
///     RawTask::new("B", TaskStatus::Done),
/// ]);
/// assert_eq!(tasks[1].key.as_str(), "task1");
/// ```
#[must_use]
pub fn prepare_tasks(raw: Vec<RawTask>) -> Vec<Task> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.into_task(TaskKey::from_index(index)))
        .collect()
}

/// Fetches from `source` and prepares the result.
///
/// # Errors
///
/// Returns [`LoadError::TimedOut`] if the source does not answer within
/// `timeout`, or [`LoadError::Source`] if it fails.
#[instrument(skip(source))]
pub async fn load_tasks<S: TaskSource>(source: &S, timeout: Duration) -> Result<Vec<Task>> {
    let raw = tokio::time::timeout(timeout, source.fetch())
        .await
        .map_err(|_| LoadError::TimedOut(timeout))??;

    let tasks = prepare_tasks(raw);
    info!(count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Identifies one load started by a [`Loader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadId(u64);

impl LoadId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// The result of one background load.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Which load produced this outcome.
    pub id: LoadId,
    /// Prepared tasks, or why the load failed.
    pub result: Result<Vec<Task>>,
}

/// Runs loads on the tokio runtime.
///
/// Loads are not de-duplicated: each call to [`start`](Self::start) spawns a
/// new one. [`cancel`](Self::cancel) stops every in-flight load; a cancelled
/// load never reports an outcome, and outcomes already queued before the
/// cancel are rejected by [`accepts`](Self::accepts).
///
/// Dropping the loader cancels all in-flight loads.
#[derive(Debug)]
pub struct Loader<S> {
    source: Arc<S>,
    timeout: Duration,
    next_id: u64,
    first_live_id: u64,
    token: CancellationToken,
    tx: mpsc::UnboundedSender<LoadOutcome>,
}

impl<S: TaskSource + 'static> Loader<S> {
    /// Creates a loader and the receiving end of its outcome channel.
    #[must_use]
    pub fn new(source: S, timeout: Duration) -> (Self, mpsc::UnboundedReceiver<LoadOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let loader = Self {
            source: Arc::new(source),
            timeout,
            next_id: 0,
            first_live_id: 0,
            token: CancellationToken::new(),
            tx,
        };
        (loader, rx)
    }

    /// Spawns a load. Must be called from within a tokio runtime.
    pub fn start(&mut self) -> LoadId {
        let id = LoadId(self.next_id);
        self.next_id += 1;

        let source = Arc::clone(&self.source);
        let token = self.token.child_token();
        let tx = self.tx.clone();
        let timeout = self.timeout;

        debug!(id = id.0, "starting load");
        tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!(id = id.0, "load cancelled");
                    return;
                }
                result = load_tasks(source.as_ref(), timeout) => result,
            };

            if token.is_cancelled() {
                debug!(id = id.0, "load cancelled after completion");
                return;
            }

            if tx.send(LoadOutcome { id, result }).is_err() {
                debug!(id = id.0, "outcome receiver dropped");
            }
        });

        id
    }

    /// Cancels every in-flight load.
    pub fn cancel(&mut self) {
        debug!(in_flight = self.next_id - self.first_live_id, "cancelling loads");
        self.token.cancel();
        self.token = CancellationToken::new();
        self.first_live_id = self.next_id;
    }

    /// Returns `true` if `outcome` comes from a load that was not cancelled.
    #[must_use]
    pub fn accepts(&self, outcome: &LoadOutcome) -> bool {
        outcome.id.0 >= self.first_live_id
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<S> Drop for Loader<S> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
