use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ci { action } => commands::ci::handle(&action, ctx, flags).await,
        Commands::Secrets { action } => commands::secrets::handle(&action, ctx, flags).await,
        Commands::Rbac { action } => commands::rbac::handle(&action, ctx, flags).await,
        Commands::Settings { action } => commands::settings::handle(&action, ctx, flags).await,
        Commands::Finops { action } => commands::finops::handle(&action, ctx, flags).await,
        Commands::Templates { action } => commands::templates::handle(&action, ctx, flags).await,
        Commands::Docs { action } => commands::docs::handle(&action, ctx, flags).await,
        Commands::Playbook { action } => commands::playbook::handle(&action, ctx, flags).await,
        Commands::Schema(_) | Commands::Auth { .. } => {
            unreachable!("schema/auth are pre-dispatched in main")
        }
    }
}
