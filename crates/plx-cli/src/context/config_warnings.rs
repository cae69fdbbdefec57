use plx_config::PlxConfig;

/// Config sections that can be set through `PLATIFYX_<SECTION>__<KEY>`.
const SECTIONS: [&str; 3] = ["API", "POLLING", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PlxConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PlxConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    // `PLATIFYX_API_BASE_URL` lands on a top-level `api_base_url` key that nothing reads.
    for section in SECTIONS {
        let single = format!("PLATIFYX_{section}_");
        let double = format!("PLATIFYX_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            let suggestion = key.replacen(&single, &double, 1);
            warnings.push(format!(
                "{key} is ignored. Use double underscores to address the [{}] section (example: {suggestion}).",
                section.to_ascii_lowercase()
            ));
        }
    }

    if !config.api.is_configured() && has_env_prefix(&env_keys, "PLATIFYX_API") {
        warnings.push(
            "API config is incomplete while PLATIFYX_API* env vars exist. Set both PLATIFYX_API__BASE_URL and PLATIFYX_API__VERSION."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
