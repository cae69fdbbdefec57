use clap::{Args, Subcommand};

/// Service playbook commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlaybookCommands {
    /// Run the service-creation playbook.
    Create(PlaybookCreateArgs),
    /// Show the progress of a playbook run.
    Status {
        /// Playbook id (defaults to the in-flight run).
        id: Option<String>,
    },
    /// Resume following a run started by an earlier invocation.
    Resume,
}

#[derive(Clone, Debug, Args)]
pub struct PlaybookCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub template: String,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Template variable as KEY=VALUE (repeatable).
    #[arg(long = "var")]
    pub vars: Vec<String>,
    /// Return after submission instead of waiting for the result.
    #[arg(long)]
    pub detach: bool,
}
