use plx_core::progress::JobProgress;
use plx_jobs::{JobError, JobOutcome, JobSource, ProgressTracker, TrackerState};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::{note, output};
use crate::progress::{Progress, describe};

/// Printable view of a tracked job.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JobReport {
    pub job: &'static str,
    pub id: Option<String>,
    pub state: &'static str,
    pub percent: Option<u8>,
    pub message: Option<String>,
    pub content: Option<String>,
    pub save_path: Option<String>,
}

impl JobReport {
    #[must_use]
    pub fn from_state(job: &'static str, id: Option<String>, state: &TrackerState) -> Self {
        let mut report = Self {
            job,
            id,
            state: "idle",
            percent: None,
            message: None,
            content: None,
            save_path: None,
        };
        match state {
            TrackerState::Idle => {
                report.message = Some(format!("no {job} in progress"));
            }
            TrackerState::Running(progress) => {
                report.state = progress.status.as_str();
                report.percent = Some(progress.percent);
                report.message = Some(describe(progress));
            }
            TrackerState::Finished(JobOutcome::Completed { content, save_path }) => {
                report.state = "completed";
                report.percent = Some(100);
                report.content = Some(content.clone());
                report.save_path.clone_from(save_path);
            }
            TrackerState::Finished(JobOutcome::Failed { message }) => {
                report.state = "failed";
                report.message = Some(message.clone());
            }
            TrackerState::Finished(JobOutcome::Lost { message }) => {
                report.state = "lost";
                report.message = Some(message.clone());
            }
            TrackerState::Finished(JobOutcome::TimedOut { elapsed }) => {
                report.state = "timed_out";
                report.message = Some(format!(
                    "gave up waiting after {}s; the job may still finish on the server",
                    elapsed.as_secs()
                ));
            }
        }
        report
    }

    /// Running snapshot read directly from the status endpoint.
    #[must_use]
    pub fn from_progress(job: &'static str, progress: &JobProgress) -> Self {
        let state = TrackerState::Running(progress.clone());
        let mut report = Self::from_state(job, Some(progress.id.clone()), &state);
        report.content.clone_from(&progress.result_content);
        report.save_path.clone_from(&progress.save_path);
        if let Some(error) = &progress.error_message {
            report.message = Some(error.clone());
        }
        report
    }
}

/// Submit a job through `tracker` and, unless `detach`, follow it to the end.
///
/// With `resume_on_start`, an id persisted by an earlier run is checked
/// first: a job that has since finished (or can no longer be reached) is
/// cleared so the new submission can go ahead.
pub async fn start_job<S: JobSource>(
    tracker: &ProgressTracker<S>,
    request: &S::Request,
    resume_on_start: bool,
    detach: bool,
    resume_hint: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let label = tracker.label();
    if resume_on_start && tracker.persisted_id().map_err(job_error)?.is_some() {
        if let Some(TrackerState::Finished(outcome)) = tracker.resume().await.map_err(job_error)? {
            let previous = JobReport::from_state(label, None, &TrackerState::Finished(outcome));
            note(flags, &format!("previous {label} ended: {}", previous.state));
        }
        tracker.stop();
    }

    let handle = tracker.start(request).await.map_err(|error| match error {
        JobError::AlreadyInProgress { .. } => {
            anyhow::anyhow!("{}; run `{resume_hint}` to follow it", error.display_message())
        }
        other => job_error(other),
    })?;

    if detach {
        let state = TrackerState::Running(JobProgress::from_handle(&handle));
        output(&JobReport::from_state(label, Some(handle.id), &state), flags.format)?;
        note(flags, &format!("submitted; run `{resume_hint}` to follow it"));
        return Ok(());
    }

    let state = follow(tracker, resume_hint, flags).await;
    report_outcome(label, Some(handle.id), &state, flags)
}

/// Pick up the job persisted by an earlier run and follow it.
pub async fn resume_job<S: JobSource>(
    tracker: &ProgressTracker<S>,
    resume_hint: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let label = tracker.label();
    let id = tracker.persisted_id().map_err(job_error)?;
    let Some(state) = tracker.resume().await.map_err(job_error)? else {
        return report_outcome(label, None, &TrackerState::Idle, flags);
    };

    let state = match state {
        TrackerState::Running(_) => follow(tracker, resume_hint, flags).await,
        TrackerState::Idle => {
            note(flags, &format!("the previous {label} could not be reached and was dropped"));
            TrackerState::Idle
        }
        finished @ TrackerState::Finished(_) => finished,
    };
    report_outcome(label, id, &state, flags)
}

fn job_error(error: JobError) -> anyhow::Error {
    anyhow::anyhow!(error.display_message())
}

/// Follow a tracker until its job leaves the running state, drawing a
/// progress bar from the published snapshots. Ctrl-C stops polling and keeps
/// the persisted id so the job can be resumed.
pub async fn follow<S: JobSource>(
    tracker: &ProgressTracker<S>,
    resume_hint: &str,
    flags: &GlobalFlags,
) -> TrackerState {
    let bar = Progress::percent(tracker.label());
    let mut rx = tracker.subscribe();

    loop {
        let state = rx.borrow_and_update().clone();
        match &state {
            TrackerState::Running(progress) => bar.update(progress),
            TrackerState::Finished(outcome) if outcome.is_success() => {
                bar.finish_ok("done");
                return state;
            }
            TrackerState::Finished(_) => {
                bar.finish_err("stopped");
                return state;
            }
            TrackerState::Idle => {
                bar.finish_clear();
                return state;
            }
        }

        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    bar.finish_clear();
                    return tracker.state();
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracker.stop();
                bar.finish_err("detached");
                note(flags, &format!("stopped following; run `{resume_hint}` to pick it up again"));
                return state;
            }
        }
    }
}

/// Print the final report; failed, lost and timed-out jobs also exit non-zero.
pub fn report_outcome(
    job: &'static str,
    id: Option<String>,
    state: &TrackerState,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = JobReport::from_state(job, id, state);
    output(&report, flags.format)?;
    match state {
        TrackerState::Finished(outcome) if !outcome.is_success() => {
            let status = report.state.replace('_', " ");
            anyhow::bail!("{job} {status}: {}", report.message.unwrap_or_default())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use plx_core::enums::JobStatus;
    use plx_core::progress::{JobHandle, JobProgress};
    use plx_jobs::{JobOutcome, TrackerState};
    use pretty_assertions::assert_eq;

    use super::JobReport;

    #[test]
    fn completed_report_carries_content() {
        let state = TrackerState::Finished(JobOutcome::Completed {
            content: "# Payments".into(),
            save_path: Some("docs/payments.md".into()),
        });
        let report =
            JobReport::from_state("documentation generation", Some("job-1".into()), &state);
        assert_eq!(report.state, "completed");
        assert_eq!(report.percent, Some(100));
        assert_eq!(report.content.as_deref(), Some("# Payments"));
        assert_eq!(report.save_path.as_deref(), Some("docs/payments.md"));
    }

    #[test]
    fn running_report_describes_progress() {
        let mut progress = JobProgress::from_handle(&JobHandle {
            id: "job-1".into(),
            status: JobStatus::Running,
        });
        progress.percent = 40;
        progress.chunk = 4;
        progress.total_chunks = 10;
        let report = JobReport::from_progress("documentation generation", &progress);
        assert_eq!(report.state, "running");
        assert_eq!(report.percent, Some(40));
        assert_eq!(report.message.as_deref(), Some("running · chunk 4 of 10"));
    }

    #[test]
    fn timed_out_report_explains_bound() {
        let state = TrackerState::Finished(JobOutcome::TimedOut {
            elapsed: Duration::from_secs(600),
        });
        let report = JobReport::from_state("service creation", None, &state);
        assert_eq!(report.state, "timed_out");
        assert!(report.message.is_some_and(|m| m.contains("600s")));
    }

    #[test]
    fn idle_report_says_nothing_in_progress() {
        let report = JobReport::from_state("service creation", None, &TrackerState::Idle);
        assert_eq!(report.state, "idle");
        assert_eq!(report.message.as_deref(), Some("no service creation in progress"));
    }
}
