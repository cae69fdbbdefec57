use crate::cli::GlobalFlags;
use crate::cli::subcommands::FinopsCommands;
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::limit::{limit_for, truncate_to};
use crate::context::AppContext;
use crate::output::{output, output_list};

/// Handle `plx finops`.
pub async fn handle(
    action: &FinopsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        FinopsCommands::Stats => {
            let stats = client.finops_stats().await.user_facing()?;
            output(&stats, flags.format)
        }
        FinopsCommands::ByService { limit } => {
            let mut costs = client.aws_cost_by_service().await.user_facing()?;
            truncate_to(&mut costs, limit_for(*limit, flags));
            output_list(&costs, "no cost data", flags.format)
        }
        FinopsCommands::Monthly { months } => {
            let costs = client.aws_monthly_costs(*months).await.user_facing()?;
            output_list(&costs, "no cost data", flags.format)
        }
        FinopsCommands::Forecast => {
            let forecast = client.aws_cost_forecast().await.user_facing()?;
            output_list(&forecast, "no forecast available", flags.format)
        }
    }
}
