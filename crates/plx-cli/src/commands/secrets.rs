use plx_core::entities::{NewAwsSecret, VaultWrite};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AwsCommands, SecretsCommands, VaultCommands};
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::limit::limit_for;
use crate::commands::shared::parse::parse_pairs;
use crate::context::AppContext;
use crate::output::{output, output_list};

#[derive(Serialize)]
struct SecretChangeResponse<'a> {
    store: &'static str,
    name: &'a str,
    action: &'static str,
}

/// Handle `plx secrets`.
pub async fn handle(
    action: &SecretsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SecretsCommands::Aws { action } => handle_aws(action, ctx, flags).await,
        SecretsCommands::Vault { action } => handle_vault(action, ctx, flags).await,
    }
}

async fn handle_aws(
    action: &AwsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    let (name, action) = match action {
        AwsCommands::List { limit } => {
            let secrets = client
                .list_aws_secrets(Some(limit_for(*limit, flags)))
                .await
                .user_facing()?;
            return output_list(&secrets, "no secrets found", flags.format);
        }
        AwsCommands::Get { name } => {
            let secret = client.get_aws_secret(name).await.user_facing()?;
            return output(&secret, flags.format);
        }
        AwsCommands::Create {
            name,
            value,
            description,
            tags,
        } => {
            let secret = NewAwsSecret {
                name: name.clone(),
                value: value.clone(),
                description: description.clone(),
                tags: parse_pairs(tags, "tag")?,
            };
            client.create_aws_secret(&secret).await.user_facing()?;
            (name, "created")
        }
        AwsCommands::Update { name, value } => {
            client.update_aws_secret(name, value).await.user_facing()?;
            (name, "updated")
        }
        AwsCommands::Delete { name } => {
            client.delete_aws_secret(name).await.user_facing()?;
            (name, "deleted")
        }
    };

    output(
        &SecretChangeResponse {
            store: "aws",
            name,
            action,
        },
        flags.format,
    )
}

async fn handle_vault(
    action: &VaultCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    let (path, action) = match action {
        VaultCommands::List { path } => {
            let listing = client.list_vault_keys(path).await.user_facing()?;
            let empty = if path.is_empty() {
                "no secrets found".to_string()
            } else {
                format!("no secrets found under {path}")
            };
            return output_list(&listing.keys, &empty, flags.format);
        }
        VaultCommands::Read { path } => {
            let secret = client.read_vault_secret(path).await.user_facing()?;
            return output(&secret, flags.format);
        }
        VaultCommands::Write { path, data } => {
            let write = VaultWrite {
                path: path.clone(),
                data: parse_pairs(data, "data")?
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::String(value)))
                    .collect(),
            };
            client.write_vault_secret(&write).await.user_facing()?;
            (path, "written")
        }
        VaultCommands::Delete { path } => {
            client.delete_vault_secret(path).await.user_facing()?;
            (path, "deleted")
        }
    };

    output(
        &SecretChangeResponse {
            store: "vault",
            name: path,
            action,
        },
        flags.format,
    )
}
