use clap::Subcommand;

/// Access control commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RbacCommands {
    /// List users.
    Users {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Invite a user.
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "role")]
        roles: Vec<String>,
    },
    /// List roles.
    Roles,
    /// Create a role.
    CreateRole {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// List permissions.
    Permissions,
}
