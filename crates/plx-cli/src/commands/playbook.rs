use plx_core::entities::ServiceCreateRequest;
use plx_core::progress::JobProgress;
use plx_jobs::TrackerState;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlaybookCommands;
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::parse::parse_pairs;
use crate::commands::shared::track::{JobReport, resume_job, start_job};
use crate::context::AppContext;
use crate::output::output;

const RESUME_HINT: &str = "plx playbook resume";

/// Handle `plx playbook`.
pub async fn handle(
    action: &PlaybookCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tracker = ctx.playbook_tracker();
    match action {
        PlaybookCommands::Create(args) => {
            let request = ServiceCreateRequest {
                name: args.name.trim().to_string(),
                template_id: args.template.clone(),
                owner: args.owner.clone(),
                description: args.description.clone(),
                variables: parse_pairs(&args.vars, "var")?,
            };
            start_job(
                &tracker,
                &request,
                ctx.config.polling.resume_on_start,
                args.detach,
                RESUME_HINT,
                flags,
            )
            .await
        }
        PlaybookCommands::Status { id } => {
            let id = match id {
                Some(id) => Some(id.clone()),
                None => tracker
                    .persisted_id()
                    .map_err(|e| anyhow::anyhow!(e.display_message()))?,
            };
            let Some(id) = id else {
                let report = JobReport::from_state(tracker.label(), None, &TrackerState::Idle);
                return output(&report, flags.format);
            };
            let snapshot = ctx.client.playbook_progress(&id).await.user_facing()?;
            let mut progress = JobProgress::from(snapshot);
            if progress.id.is_empty() {
                progress.id = id;
            }
            output(&JobReport::from_progress(tracker.label(), &progress), flags.format)
        }
        PlaybookCommands::Resume => resume_job(&tracker, RESUME_HINT, flags).await,
    }
}
