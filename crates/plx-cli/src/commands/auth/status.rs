use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct AuthStatusResponse {
    authenticated: bool,
    org_id: Option<String>,
    token_source: Option<String>,
    expires_at: Option<String>,
    expired: Option<bool>,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let credentials = plx_auth::resolve_credentials();
    let status = describe(credentials, plx_auth::token_store::detect_token_source());
    output(&status, flags.format)
}

fn describe(
    credentials: plx_auth::Credentials,
    token_source: Option<String>,
) -> AuthStatusResponse {
    let Some(token) = credentials.token else {
        return AuthStatusResponse {
            authenticated: false,
            org_id: credentials.org_id,
            token_source: None,
            expires_at: None,
            expired: None,
            note: Some("no token found; run `plx auth login --token <TOKEN>`".into()),
        };
    };

    let expires_at = plx_auth::expiry::decode_expiry(&token).ok();
    let expired = plx_auth::expiry::is_expired(&token);
    let note = match (expired, credentials.org_id.is_some()) {
        (Some(true), _) => Some("token has expired; log in again".into()),
        (_, false) => Some("no organization set; requests are not organization-scoped".into()),
        _ => None,
    };

    AuthStatusResponse {
        authenticated: expired != Some(true),
        org_id: credentials.org_id,
        token_source,
        expires_at: expires_at.map(|at| at.to_rfc3339()),
        expired,
        note,
    }
}
