use clap::Subcommand;

/// Secret management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SecretsCommands {
    /// AWS Secrets Manager.
    Aws {
        #[command(subcommand)]
        action: AwsCommands,
    },
    /// Vault KV.
    Vault {
        #[command(subcommand)]
        action: VaultCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AwsCommands {
    /// List secrets (values are not included).
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Read a secret value.
    Get { name: String },
    /// Create a secret.
    Create {
        name: String,
        #[arg(long)]
        value: String,
        #[arg(long)]
        description: Option<String>,
        /// Tag as KEY=VALUE (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Replace the value of a secret.
    Update {
        name: String,
        #[arg(long)]
        value: String,
    },
    /// Delete a secret.
    Delete { name: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum VaultCommands {
    /// List keys under a path.
    List {
        #[arg(default_value = "")]
        path: String,
    },
    /// Read the secret at a path.
    Read { path: String },
    /// Write KEY=VALUE pairs to a path.
    Write {
        path: String,
        #[arg(long = "data", required = true)]
        data: Vec<String>,
    },
    /// Delete the secret at a path.
    Delete { path: String },
}
