use logdigest_core::{Config, ConfigError};
use serial_test::serial;
use std::env;

const KEYS: &[&str] = &[
    "NOTION_TOKEN",
    "NOTION_DAILY_LOG_DATABASE_ID",
    "NOTION_WEEKLY_LOG_DATABASE_ID",
    "OUTPUT_DIR",
    "NOTION_API_BASE_URL",
    "NOTION_VERSION",
    "NOTION_TIMEOUT_SECS",
];

fn clear_env() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_fails_fast_without_token() {
    clear_env();
    env::set_var("NOTION_DAILY_LOG_DATABASE_ID", "daily");
    env::set_var("NOTION_WEEKLY_LOG_DATABASE_ID", "weekly");

    let err = Config::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Missing(vec!["NOTION_TOKEN"]));

    clear_env();
}

#[test]
#[serial]
fn test_from_env_reads_all_values() {
    clear_env();
    env::set_var("NOTION_TOKEN", "secret_xyz");
    env::set_var("NOTION_DAILY_LOG_DATABASE_ID", "aaaa-bbbb");
    env::set_var("NOTION_WEEKLY_LOG_DATABASE_ID", "cccc-dddd");
    env::set_var("OUTPUT_DIR", "reports");

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.notion_token, "secret_xyz");
    assert_eq!(cfg.daily_database_id, "aaaabbbb");
    assert_eq!(cfg.weekly_database_id, "ccccdddd");
    assert_eq!(cfg.output_dir, std::path::PathBuf::from("reports"));

    clear_env();
}
