use clap::{Args, Subcommand};

/// Documentation generation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocsCommands {
    /// Start a documentation or diagram generation job.
    Generate(DocsGenerateArgs),
    /// Show the status of the in-flight job.
    Status,
    /// Resume tracking a job started by an earlier run.
    Resume,
}

#[derive(Clone, Debug, Args)]
pub struct DocsGenerateArgs {
    /// Repository URL to document.
    #[arg(long)]
    pub repository: String,
    /// documentation or diagram
    #[arg(long, default_value = "documentation")]
    pub kind: String,
    #[arg(long)]
    pub branch: Option<String>,
    /// Extra instructions for the generator.
    #[arg(long)]
    pub prompt: Option<String>,
    /// Where the generated document should be saved.
    #[arg(long)]
    pub output_path: Option<String>,
    /// Return after submission instead of waiting for the result.
    #[arg(long)]
    pub detach: bool,
}
