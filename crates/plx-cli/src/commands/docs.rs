use plx_core::entities::DocGenerationRequest;
use plx_core::enums::DocKind;
use plx_jobs::TrackerState;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocsCommands;
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::track::{JobReport, resume_job, start_job};
use crate::context::AppContext;
use crate::output::output;

const RESUME_HINT: &str = "plx docs resume";

/// Handle `plx docs`.
pub async fn handle(
    action: &DocsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tracker = ctx.docs_tracker();
    match action {
        DocsCommands::Generate(args) => {
            if args.repository.trim().is_empty() {
                anyhow::bail!("--repository must not be empty");
            }
            let request = DocGenerationRequest {
                repository: args.repository.trim().to_string(),
                kind: parse_enum::<DocKind>(&args.kind, "kind")?,
                branch: args.branch.clone(),
                prompt: args.prompt.clone(),
                output_path: args.output_path.clone(),
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
        DocsCommands::Status => {
            let persisted = tracker
                .persisted_id()
                .map_err(|e| anyhow::anyhow!(e.display_message()))?;
            let Some(id) = persisted else {
                let report = JobReport::from_state(tracker.label(), None, &TrackerState::Idle);
                return output(&report, flags.format);
            };
            let mut progress = ctx.client.docs_progress(&id).await.user_facing()?;
            if progress.id.is_empty() {
                progress.id = id;
            }
            output(&JobReport::from_progress(tracker.label(), &progress), flags.format)
        }
        DocsCommands::Resume => resume_job(&tracker, RESUME_HINT, flags).await,
    }
}
