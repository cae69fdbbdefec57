use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    org_id: Option<String>,
    token_source: Option<String>,
    expires_at: Option<String>,
}

pub fn handle(args: &AuthLoginArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    plx_auth::login(&args.token, args.org.as_deref())?;

    let credentials = plx_auth::resolve_credentials();
    output(
        &AuthLoginResponse {
            authenticated: credentials.is_authenticated(),
            org_id: credentials.org_id,
            token_source: plx_auth::token_store::detect_token_source(),
            expires_at: plx_auth::expiry::decode_expiry(args.token.trim())
                .ok()
                .map(|at| at.to_rfc3339()),
        },
        flags.format,
    )
}
