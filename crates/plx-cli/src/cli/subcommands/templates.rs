use clap::{Args, Subcommand};

/// Infrastructure template commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TemplatesCommands {
    /// List available templates.
    List,
    /// Create a service from a template (preview first, `--yes` to generate).
    Create(TemplateCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TemplateCreateArgs {
    /// Template id.
    #[arg(long)]
    pub template: String,
    /// Service name: lowercase letters, digits and hyphens.
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub owner: Option<String>,
    /// Template variable as KEY=VALUE (repeatable).
    #[arg(long = "var")]
    pub vars: Vec<String>,
    /// Generate after showing the preview.
    #[arg(long, short = 'y')]
    pub yes: bool,
}
