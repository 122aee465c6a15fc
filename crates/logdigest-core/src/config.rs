//! Runtime configuration read from the environment

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const TOKEN_KEY: &str = "NOTION_TOKEN";
const DAILY_DB_KEY: &str = "NOTION_DAILY_LOG_DATABASE_ID";
const WEEKLY_DB_KEY: &str = "NOTION_WEEKLY_LOG_DATABASE_ID";
const OUTPUT_DIR_KEY: &str = "OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Settings for one collection run, built once at startup
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub notion_token: String,
    /// Hyphens removed
    pub daily_database_id: String,
    /// Hyphens removed
    pub weekly_database_id: String,
    pub output_dir: PathBuf,
    pub api_base_url: String,
    pub notion_version: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("notion_token", &"***REDACTED***")
            .field("daily_database_id", &self.daily_database_id)
            .field("weekly_database_id", &self.weekly_database_id)
            .field("output_dir", &self.output_dir)
            .field("api_base_url", &self.api_base_url)
            .field("notion_version", &self.notion_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_blank(&lookup, key);

        let token = get(TOKEN_KEY);
        let daily = get(DAILY_DB_KEY);
        let weekly = get(WEEKLY_DB_KEY);

        let missing: Vec<&'static str> = [
            (TOKEN_KEY, token.is_none()),
            (DAILY_DB_KEY, daily.is_none()),
            (WEEKLY_DB_KEY, weekly.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, absent)| absent.then_some(key))
        .collect();

        let (Some(notion_token), Some(daily), Some(weekly)) = (token, daily, weekly) else {
            return Err(ConfigError::Missing(missing));
        };

        Ok(Self {
            notion_token,
            daily_database_id: normalize_database_id(&daily),
            weekly_database_id: normalize_database_id(&weekly),
            output_dir: Self::output_dir_from_lookup(&lookup),
            api_base_url: get("NOTION_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            notion_version: get("NOTION_VERSION")
                .unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string()),
            timeout_secs: parse_or(
                get("NOTION_TIMEOUT_SECS"),
                "NOTION_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            ),
        })
    }

    /// Output directory alone, for commands that never talk to Notion
    pub fn output_dir_from_env() -> PathBuf {
        Self::output_dir_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn output_dir_from_lookup<F>(lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        PathBuf::from(
            non_blank(&lookup, OUTPUT_DIR_KEY).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
        )
    }
}

/// Trimmed value, with blank treated as unset
fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Database ids are accepted with or without hyphens
pub fn normalize_database_id(raw: &str) -> String {
    raw.replace('-', "")
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match raw {
        Some(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Failed to parse config value, using default");
                default
            }
        },
        None => default,
    }
}
