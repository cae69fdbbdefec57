mod login;
mod logout;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `plx auth <subcommand>`.
pub async fn handle(action: &AuthCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags),
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags),
    }
}
