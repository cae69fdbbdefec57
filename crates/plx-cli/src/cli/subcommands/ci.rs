use clap::Subcommand;

/// CI/CD commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CiCommands {
    /// List builds.
    Builds {
        /// queued, running, success, failed, cancelled
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        branch: Option<String>,
        #[arg(long)]
        pipeline: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the log of a build.
    Logs { id: String },
    /// Trigger a build.
    Trigger {
        #[arg(long)]
        pipeline: String,
        #[arg(long)]
        branch: Option<String>,
        /// Build parameter as KEY=VALUE (repeatable).
        #[arg(long = "param")]
        params: Vec<String>,
    },
    /// List pipelines.
    Pipelines {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List runs of a pipeline.
    Runs {
        pipeline: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List releases.
    Releases {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Approve a pending release.
    Approve {
        id: String,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Reject a pending release.
    Reject {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Aggregate CI statistics.
    Stats,
}
