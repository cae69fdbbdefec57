use plx_client::ci::BuildFilter;
use plx_core::entities::{ReleaseDecision, TriggerBuild};
use plx_core::enums::BuildStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CiCommands;
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::limit::limit_for;
use crate::commands::shared::parse::{parse_enum, parse_pairs};
use crate::context::AppContext;
use crate::output::{output, output_list};

#[derive(Serialize)]
struct ReleaseDecisionResponse<'a> {
    release_id: &'a str,
    decision: &'static str,
    comment: Option<&'a str>,
}

/// Handle `plx ci`.
pub async fn handle(
    action: &CiCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        CiCommands::Builds {
            status,
            branch,
            pipeline,
            limit,
        } => {
            let filter = BuildFilter {
                status: status
                    .as_deref()
                    .map(|raw| parse_enum::<BuildStatus>(raw, "status"))
                    .transpose()?,
                branch: branch.clone(),
                pipeline: pipeline.clone(),
                limit: Some(limit_for(*limit, flags)),
            };
            let builds = client.list_builds(&filter).await.user_facing()?;
            output_list(&builds, "no builds found", flags.format)
        }
        CiCommands::Logs { id } => {
            let logs = client.build_logs(id).await.user_facing()?;
            if flags.format == crate::cli::OutputFormat::Table {
                if logs.lines.is_empty() {
                    println!("no log output for build {id}");
                } else {
                    println!("{}", logs.lines.join("\n"));
                }
                return Ok(());
            }
            output(&logs, flags.format)
        }
        CiCommands::Trigger {
            pipeline,
            branch,
            params,
        } => {
            let request = TriggerBuild {
                pipeline: pipeline.clone(),
                branch: branch.clone(),
                parameters: parse_pairs(params, "param")?,
            };
            let build = client.trigger_build(&request).await.user_facing()?;
            output(&build, flags.format)
        }
        CiCommands::Pipelines { limit } => {
            let pipelines = client
                .list_pipelines(Some(limit_for(*limit, flags)))
                .await
                .user_facing()?;
            output_list(&pipelines, "no pipelines found", flags.format)
        }
        CiCommands::Runs { pipeline, limit } => {
            let runs = client
                .pipeline_runs(pipeline, Some(limit_for(*limit, flags)))
                .await
                .user_facing()?;
            output_list(&runs, &format!("no runs found for pipeline {pipeline}"), flags.format)
        }
        CiCommands::Releases { limit } => {
            let releases = client
                .list_releases(Some(limit_for(*limit, flags)))
                .await
                .user_facing()?;
            output_list(&releases, "no releases found", flags.format)
        }
        CiCommands::Approve { id, comment } => {
            let decision = ReleaseDecision {
                release_id: id.clone(),
                comment: comment.clone(),
            };
            client.approve_release(&decision).await.user_facing()?;
            output(
                &ReleaseDecisionResponse {
                    release_id: id,
                    decision: "approved",
                    comment: comment.as_deref(),
                },
                flags.format,
            )
        }
        CiCommands::Reject { id, reason } => {
            let decision = ReleaseDecision {
                release_id: id.clone(),
                comment: reason.clone(),
            };
            client.reject_release(&decision).await.user_facing()?;
            output(
                &ReleaseDecisionResponse {
                    release_id: id,
                    decision: "rejected",
                    comment: reason.as_deref(),
                },
                flags.format,
            )
        }
        CiCommands::Stats => {
            let stats = client.ci_stats().await.user_facing()?;
            output(&stats, flags.format)
        }
    }
}
