use plx_core::entities::{NewRole, NewUser};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RbacCommands;
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::limit::{limit_for, truncate_to};
use crate::context::AppContext;
use crate::output::{output, output_list};

/// Handle `plx rbac`.
pub async fn handle(
    action: &RbacCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        RbacCommands::Users { limit } => {
            let users = client
                .list_users(Some(limit_for(*limit, flags)))
                .await
                .user_facing()?;
            output_list(&users, "no users found", flags.format)
        }
        RbacCommands::CreateUser { email, name, roles } => {
            if !email.contains('@') {
                anyhow::bail!("invalid email '{email}'");
            }
            let user = NewUser {
                email: email.trim().to_string(),
                name: name.clone(),
                roles: roles.clone(),
            };
            let created = client.create_user(&user).await.user_facing()?;
            output(&created, flags.format)
        }
        RbacCommands::Roles => {
            let mut roles = client.list_roles().await.user_facing()?;
            truncate_to(&mut roles, limit_for(None, flags));
            output_list(&roles, "no roles found", flags.format)
        }
        RbacCommands::CreateRole {
            name,
            description,
            permissions,
        } => {
            let role = NewRole {
                name: name.clone(),
                description: description.clone(),
                permissions: permissions.clone(),
            };
            let created = client.create_role(&role).await.user_facing()?;
            output(&created, flags.format)
        }
        RbacCommands::Permissions => {
            let mut permissions = client.list_permissions().await.user_facing()?;
            truncate_to(&mut permissions, limit_for(None, flags));
            output_list(&permissions, "no permissions found", flags.format)
        }
    }
}
