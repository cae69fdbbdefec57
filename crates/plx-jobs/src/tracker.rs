use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use plx_auth::ClientStore;
use plx_core::enums::JobStatus;
use plx_core::progress::{JobHandle, JobProgress};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::{JobError, JobSource, PollPolicy};

/// How a tracked job ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed {
        content: String,
        save_path: Option<String>,
    },
    Failed {
        message: String,
    },
    /// The status endpoint could not be reached; the job is abandoned.
    Lost {
        message: String,
    },
    TimedOut {
        elapsed: Duration,
    },
}

impl JobOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// What subscribers see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackerState {
    #[default]
    Idle,
    Running(JobProgress),
    Finished(JobOutcome),
}

#[derive(Debug)]
enum Slot {
    Empty,
    /// A submission is in flight and has no id yet.
    Reserved,
    Tracking(JobProgress),
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Finished,
}

/// Holds `Slot::Reserved` while a submission is in flight. Dropping it
/// uncommitted (submit error or a cancelled `start`) frees the slot.
struct Reservation<'a, S: JobSource> {
    inner: &'a Inner<S>,
    committed: bool,
}

impl<S: JobSource> Reservation<'_, S> {
    fn commit(mut self, progress: JobProgress) {
        *self.inner.lock_slot() = Slot::Tracking(progress);
        self.committed = true;
    }
}

impl<S: JobSource> Drop for Reservation<'_, S> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        let mut slot = self.inner.lock_slot();
        if matches!(*slot, Slot::Reserved) {
            *slot = Slot::Empty;
        }
    }
}

struct Inner<S> {
    source: S,
    store: Arc<dyn ClientStore>,
    policy: PollPolicy,
    slot: Mutex<Slot>,
    state: watch::Sender<TrackerState>,
    task: Mutex<Option<JoinHandle<()>>>,
}

/// Tracks at most one job of kind `S` at a time.
///
/// Dropping the tracker stops polling but leaves the persisted id in place,
/// so the job can be resumed later.
pub struct ProgressTracker<S: JobSource> {
    inner: Arc<Inner<S>>,
}

impl<S: JobSource> ProgressTracker<S> {
    #[must_use]
    pub fn new(source: S, store: Arc<dyn ClientStore>, policy: PollPolicy) -> Self {
        let (state, _) = watch::channel(TrackerState::Idle);
        Self {
            inner: Arc::new(Inner {
                source,
                store,
                policy,
                slot: Mutex::new(Slot::Empty),
                state,
                task: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.inner.source.label()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TrackerState> {
        self.inner.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.inner.state.borrow().clone()
    }

    /// The in-memory record of the job being tracked.
    #[must_use]
    pub fn progress(&self) -> Option<JobProgress> {
        match &*self.inner.lock_slot() {
            Slot::Tracking(progress) => Some(progress.clone()),
            Slot::Empty | Slot::Reserved => None,
        }
    }

    /// Id left in durable storage by this or an earlier process.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Storage`] if the store cannot be read.
    pub fn persisted_id(&self) -> Result<Option<String>, JobError> {
        Ok(self.inner.store.get(self.inner.source.storage_key())?)
    }

    /// Submit a new job and start polling it.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::AlreadyInProgress`] without touching the network
    /// if a job is being tracked or an id is persisted, and
    /// [`JobError::Submit`] if the backend rejects the submission.
    pub async fn start(&self, request: &S::Request) -> Result<JobHandle, JobError> {
        let reservation = self.inner.reserve()?;
        let label = self.label();

        let handle = match self.inner.source.submit(request).await {
            Ok(handle) => handle,
            Err(source) => {
                tracing::warn!(error = %source, "{label} submission failed");
                return Err(JobError::Submit { label, source });
            }
        };
        tracing::info!(job = %handle.id, "{label} started");

        if let Err(error) = self
            .inner
            .store
            .set(self.inner.source.storage_key(), &handle.id)
        {
            tracing::warn!(%error, "could not persist job id; it will not survive a restart");
        }

        let progress = JobProgress::from_handle(&handle);
        reservation.commit(progress.clone());
        self.inner.state.send_replace(TrackerState::Running(progress));
        self.spawn_polling(handle.id.clone(), Instant::now());
        Ok(handle)
    }

    /// Pick up a job whose id was persisted by an earlier run.
    ///
    /// Fetches its status once, silently: a transport error clears the
    /// persisted id without surfacing. Interval polling resumes if the job is
    /// still running. Returns `None` when there is nothing to resume.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Storage`] if the store cannot be read.
    pub async fn resume(&self) -> Result<Option<TrackerState>, JobError> {
        let id = {
            let mut slot = self.inner.lock_slot();
            if !matches!(*slot, Slot::Empty) {
                return Ok(None);
            }
            let Some(id) = self.inner.store.get(self.inner.source.storage_key())? else {
                return Ok(None);
            };
            *slot = Slot::Tracking(JobProgress::from_handle(&JobHandle {
                id: id.clone(),
                status: JobStatus::Queued,
            }));
            id
        };
        tracing::debug!(job = %id, "resuming {}", self.label());

        let started = Instant::now();
        if self.inner.poll_once(&id, true).await == Step::Continue {
            self.spawn_polling(id, started);
        }
        Ok(Some(self.state()))
    }

    /// Wait until the tracked job finishes.
    ///
    /// Returns immediately when nothing is tracked. Never returns if polling
    /// was stopped while a job is still running.
    pub async fn wait(&self) -> TrackerState {
        let mut rx = self.subscribe();
        match rx
            .wait_for(|state| !matches!(state, TrackerState::Running(_)))
            .await
        {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    /// Cancel the polling task. The in-memory record and persisted id are kept.
    pub fn stop(&self) {
        if let Some(task) = self.inner.lock_task().take() {
            task.abort();
        }
    }

    fn spawn_polling(&self, id: String, started: Instant) {
        self.stop();
        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(inner.poll_loop(id, started));
        *self.inner.lock_task() = Some(task);
    }
}

impl<S: JobSource> Drop for ProgressTracker<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: JobSource> Inner<S> {
    fn lock_slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_task(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reserve(&self) -> Result<Reservation<'_, S>, JobError> {
        let label = self.source.label();
        let mut slot = self.lock_slot();
        match &*slot {
            Slot::Tracking(progress) => {
                return Err(JobError::AlreadyInProgress {
                    label,
                    id: progress.id.clone(),
                });
            }
            Slot::Reserved => {
                return Err(JobError::AlreadyInProgress {
                    label,
                    id: "pending".into(),
                });
            }
            Slot::Empty => {}
        }
        if let Some(id) = self.store.get(self.source.storage_key())? {
            return Err(JobError::AlreadyInProgress { label, id });
        }
        *slot = Slot::Reserved;
        Ok(Reservation {
            inner: self,
            committed: false,
        })
    }

    async fn poll_loop(self: Arc<Self>, id: String, started: Instant) {
        let interval = self.policy.interval;
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let elapsed = started.elapsed();
            if self.policy.expired(elapsed) {
                tracing::warn!(job = %id, ?elapsed, "{} exceeded its polling bound", self.source.label());
                self.finish(JobOutcome::TimedOut { elapsed }, false);
                return;
            }
            if self.poll_once(&id, false).await == Step::Finished {
                return;
            }
        }
    }

    /// Fetch one status snapshot and fold it into the tracked record.
    async fn poll_once(&self, id: &str, silent: bool) -> Step {
        let label = self.source.label();
        let snapshot = match self.source.status(id).await {
            Ok(mut snapshot) => {
                if snapshot.id.is_empty() {
                    snapshot.id = id.to_string();
                }
                snapshot
            }
            Err(error) => {
                if silent {
                    tracing::debug!(job = %id, %error, "{label} status unavailable; dropping job");
                } else {
                    tracing::warn!(job = %id, %error, "{label} status request failed");
                }
                self.finish(
                    JobOutcome::Lost {
                        message: error.display_message(),
                    },
                    silent,
                );
                return Step::Finished;
            }
        };

        let progress = {
            let mut slot = self.lock_slot();
            match &mut *slot {
                Slot::Tracking(progress) if progress.id == id => {
                    if let Err(error) = progress.advance(snapshot) {
                        tracing::debug!(%error, "ignoring out-of-order snapshot");
                    }
                    progress.clone()
                }
                _ => {
                    tracing::debug!(job = %id, "snapshot for a job no longer tracked");
                    return Step::Finished;
                }
            }
        };

        match progress.status {
            JobStatus::Queued | JobStatus::Running => {
                tracing::trace!(job = %id, percent = progress.percent, "{label} progress");
                self.state.send_replace(TrackerState::Running(progress));
                Step::Continue
            }
            JobStatus::Completed => {
                tracing::info!(job = %id, "{label} completed");
                self.finish(
                    JobOutcome::Completed {
                        content: progress.result_content.unwrap_or_default(),
                        save_path: progress.save_path,
                    },
                    silent,
                );
                Step::Finished
            }
            JobStatus::Failed => {
                let message = progress
                    .error_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("{label} failed"));
                tracing::warn!(job = %id, %message, "{label} failed");
                self.finish(JobOutcome::Failed { message }, silent);
                Step::Finished
            }
        }
    }

    /// Terminal bookkeeping: forget the job everywhere and publish the outcome.
    fn finish(&self, outcome: JobOutcome, silent: bool) {
        *self.lock_slot() = Slot::Empty;
        if let Err(error) = self.store.remove(self.source.storage_key()) {
            tracing::warn!(%error, "could not clear persisted job id");
        }
        let state = if silent && matches!(outcome, JobOutcome::Lost { .. }) {
            TrackerState::Idle
        } else {
            TrackerState::Finished(outcome)
        };
        self.state.send_replace(state);
        // Detach rather than abort: this may be the polling task itself.
        drop(self.lock_task().take());
    }
}
