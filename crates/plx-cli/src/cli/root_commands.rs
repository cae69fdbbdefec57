use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, CiCommands, DocsCommands, FinopsCommands, PlaybookCommands, RbacCommands,
    SecretsCommands, SettingsCommands, TemplatesCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// CI/CD builds, pipelines and releases.
    Ci {
        #[command(subcommand)]
        action: CiCommands,
    },
    /// AWS Secrets Manager and Vault.
    Secrets {
        #[command(subcommand)]
        action: SecretsCommands,
    },
    /// Users, roles and permissions.
    Rbac {
        #[command(subcommand)]
        action: RbacCommands,
    },
    /// Organization settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Cloud cost reporting.
    Finops {
        #[command(subcommand)]
        action: FinopsCommands,
    },
    /// Infrastructure templates.
    Templates {
        #[command(subcommand)]
        action: TemplatesCommands,
    },
    /// Documentation and diagram generation.
    Docs {
        #[command(subcommand)]
        action: DocsCommands,
    },
    /// Service-creation playbooks.
    Playbook {
        #[command(subcommand)]
        action: PlaybookCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `plx schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `job-progress` or `build`. `list` prints the known names.
    pub type_name: String,
}
