use clap::{Args, Subcommand};

/// Organization settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Single sign-on.
    Sso {
        #[command(subcommand)]
        action: SsoCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum SsoCommands {
    /// Configure an identity provider.
    Configure(SsoConfigureArgs),
    /// Enable a configured provider.
    Enable { provider: String },
    /// Disable a provider.
    Disable { provider: String },
}

#[derive(Clone, Debug, Args)]
pub struct SsoConfigureArgs {
    /// google, github, okta, azure-ad
    pub provider: String,
    #[arg(long)]
    pub client_id: String,
    #[arg(long)]
    pub client_secret: String,
    #[arg(long)]
    pub redirect_url: Option<String>,
    #[arg(long = "domain")]
    pub allowed_domains: Vec<String>,
    /// Enable the provider right away.
    #[arg(long)]
    pub enable: bool,
}
