use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the JSON array of targets
pub const CONFIGS_ENV: &str = "SUPABASE_CONFIGS";

/// Errors raised while loading the target list, all of them fatal
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing SUPABASE_CONFIGS environment variable")]
    Missing,
    #[error("SUPABASE_CONFIGS is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("SUPABASE_CONFIGS must be a non-empty array of database configurations")]
    NotAList,
}

/// One database endpoint to check
///
/// Fields holding anything other than a non-empty string are treated as
/// absent, so a bad entry fails on its own instead of aborting the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TargetDescriptor {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub key: Option<String>,
}

impl TargetDescriptor {
    /// Label used in the report, `Database N` when no name is given
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Database {}", index + 1))
    }

    fn from_value(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Load variables from a `.env` file in the current directory or its parents
///
/// # Errors
///
/// Returns an error if no file is found or it cannot be parsed, callers are
/// expected to log it and carry on with the process environment.
pub fn load_dotenv() -> Result<PathBuf, dotenv::Error> {
    dotenv::dotenv()
}

/// Decode the raw `SUPABASE_CONFIGS` value into an ordered target list
///
/// # Errors
///
/// Returns [`ConfigError`] if the value is absent, is not valid JSON, or is
/// not a non-empty array.
pub fn parse_targets(raw: Option<&str>) -> Result<Vec<TargetDescriptor>, ConfigError> {
    let raw = raw.ok_or(ConfigError::Missing)?;

    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) if !items.is_empty() => {
            Ok(items.into_iter().map(TargetDescriptor::from_value).collect())
        }
        _ => Err(ConfigError::NotAList),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_single_target() {
        let targets =
            parse_targets(Some(r#"[{"name":"My DB","url":"https://xxx.example.co","key":"k"}]"#))
                .unwrap();
        assert_eq!(
            targets,
            vec![TargetDescriptor {
                name: Some("My DB".to_string()),
                url: Some("https://xxx.example.co".to_string()),
                key: Some("k".to_string()),
            }]
        );
    }

    #[test]
    fn test_parse_keeps_order() {
        let targets = parse_targets(Some(
            r#"[{"name":"one","url":"u1","key":"k"},{"name":"two","url":"u2","key":"k"},{"name":"three","url":"u3","key":"k"}]"#,
        ))
        .unwrap();
        let names: Vec<_> = targets.iter().filter_map(|t| t.name.as_deref()).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn test_parse_missing() {
        assert!(matches!(parse_targets(None), Err(ConfigError::Missing)));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_targets(Some("[{\"url\":")),
            Err(ConfigError::Malformed(_))
        ));
        assert!(matches!(
            parse_targets(Some("")),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(matches!(
            parse_targets(Some("[]")),
            Err(ConfigError::NotAList)
        ));
    }

    #[test]
    fn test_parse_not_an_array() {
        for raw in [r#"{"url":"u","key":"k"}"#, "42", "\"text\"", "null", "true"] {
            assert!(
                matches!(parse_targets(Some(raw)), Err(ConfigError::NotAList)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_lenient_fields() {
        let targets = parse_targets(Some(
            r#"[{"name":"","url":"","key":"k"},{"url":5,"key":null},7,null,["n","u","k"]]"#,
        ))
        .unwrap();
        assert_eq!(targets.len(), 5);
        assert_eq!(
            targets.first().unwrap(),
            &TargetDescriptor {
                name: None,
                url: None,
                key: Some("k".to_string()),
            }
        );
        for target in targets.iter().skip(1) {
            assert_eq!(target, &TargetDescriptor::default());
        }
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let targets =
            parse_targets(Some(r#"[{"url":"u","key":"k","region":"eu-west-1"}]"#)).unwrap();
        assert_eq!(targets.first().unwrap().url.as_deref(), Some("u"));
    }

    #[test]
    fn test_display_name() {
        let named = TargetDescriptor {
            name: Some("primary".to_string()),
            ..Default::default()
        };
        assert_eq!(named.display_name(3), "primary");
        assert_eq!(TargetDescriptor::default().display_name(0), "Database 1");
        assert_eq!(TargetDescriptor::default().display_name(9), "Database 10");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::Missing.to_string(),
            "Missing SUPABASE_CONFIGS environment variable"
        );
        assert_eq!(
            ConfigError::NotAList.to_string(),
            "SUPABASE_CONFIGS must be a non-empty array of database configurations"
        );
    }
}
