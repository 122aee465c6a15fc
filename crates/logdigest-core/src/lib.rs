//! Entry types, configuration and report aggregation for log digests

mod config;
mod processor;
mod time;
mod types;

pub use config::{
    normalize_database_id, Config, ConfigError, DEFAULT_NOTION_VERSION, DEFAULT_OUTPUT_DIR,
};
pub use processor::{process_daily_logs, process_weekly_logs, sort_key};
pub use time::{parse_timestamp, week_key, CutoffOutcome, UNKNOWN_KEY};
pub use types::{
    CombinedMetadata, CombinedReport, DailyEntry, DailyReport, DailySummary, DateGroup, DateRange,
    RelationField, ReportMetadata, ReportType, SummaryItem, TaskItem, WeekGroup, WeeklyEntry,
    WeeklyReport,
};
