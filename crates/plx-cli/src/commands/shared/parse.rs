use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse repeated `KEY=VALUE` arguments. Later duplicates win.
pub fn parse_pairs(raw: &[String], field: &str) -> anyhow::Result<BTreeMap<String, String>> {
    raw.iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("invalid {field} '{pair}': expected KEY=VALUE"))?;
            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("invalid {field} '{pair}': key is empty");
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use plx_core::enums::{BuildStatus, DocKind, SsoProvider};
    use pretty_assertions::assert_eq;

    use super::{parse_enum, parse_pairs};

    #[test]
    fn parses_snake_case_enum() {
        let status: BuildStatus = parse_enum("success", "status").expect("status should parse");
        assert_eq!(status, BuildStatus::Success);
        let kind: DocKind = parse_enum("Diagram", "kind").expect("kind should parse");
        assert_eq!(kind, DocKind::Diagram);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let provider: SsoProvider = parse_enum("azure-ad", "provider").expect("should parse");
        assert_eq!(provider, SsoProvider::AzureAd);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<DocKind>("slides", "kind").expect_err("should fail");
        assert!(err.to_string().contains("invalid kind 'slides'"));
    }

    #[test]
    fn parses_key_value_pairs() {
        let pairs = parse_pairs(
            &["region=eu-west-1".into(), "url=a=b".into(), "region=us-east-1".into()],
            "var",
        )
        .expect("pairs should parse");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["region"], "us-east-1");
        assert_eq!(pairs["url"], "a=b");
    }

    #[test]
    fn rejects_pairs_without_separator_or_key() {
        assert!(parse_pairs(&["region".into()], "var").is_err());
        let err = parse_pairs(&["=x".into()], "tag").expect_err("should fail");
        assert!(err.to_string().contains("key is empty"));
    }
}
