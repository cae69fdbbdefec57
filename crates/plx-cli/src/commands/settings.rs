use plx_core::entities::SsoSettings;
use plx_core::enums::SsoProvider;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SettingsCommands, SsoCommands};
use crate::commands::shared::api::ApiResultExt;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SsoStateResponse {
    provider: SsoProvider,
    configured: bool,
    enabled: bool,
}

/// Handle `plx settings`.
pub async fn handle(
    action: &SettingsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let SettingsCommands::Sso { action } = action;
    let client = &ctx.client;

    let response = match action {
        SsoCommands::Configure(args) => {
            let provider = parse_enum::<SsoProvider>(&args.provider, "provider")?;
            let settings = SsoSettings {
                provider,
                client_id: args.client_id.clone(),
                client_secret: args.client_secret.clone(),
                redirect_url: args.redirect_url.clone(),
                allowed_domains: args.allowed_domains.clone(),
                enabled: args.enable,
            };
            client.configure_sso(&settings).await.user_facing()?;
            SsoStateResponse {
                provider,
                configured: true,
                enabled: args.enable,
            }
        }
        SsoCommands::Enable { provider } | SsoCommands::Disable { provider } => {
            let enabled = matches!(action, SsoCommands::Enable { .. });
            let provider = parse_enum::<SsoProvider>(provider, "provider")?;
            client.set_sso_enabled(provider, enabled).await.user_facing()?;
            SsoStateResponse {
                provider,
                configured: true,
                enabled,
            }
        }
    };

    output(&response, flags.format)
}
