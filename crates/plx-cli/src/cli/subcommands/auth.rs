use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Store an API token (and optionally the active organization).
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// API token issued by the PlatifyX portal.
    #[arg(long)]
    pub token: String,
    /// Organization id sent with every request.
    #[arg(long)]
    pub org: Option<String>,
}
