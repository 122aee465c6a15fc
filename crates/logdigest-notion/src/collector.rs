//! Fetch, parse and recency-filter daily and weekly logs

use crate::client::{fetch_all, PageSource};
use crate::error::NotionError;
use crate::parse::{parse_daily_entry, parse_weekly_entry, DailySchema, WeeklySchema};
use crate::record::RawRecord;
use chrono::{DateTime, Duration, Utc};
use logdigest_core::{sort_key, Config, CutoffOutcome, DailyEntry, WeeklyEntry};

pub struct Collector<S> {
    source: S,
    daily_database_id: String,
    weekly_database_id: String,
    daily_schema: DailySchema,
    weekly_schema: WeeklySchema,
}

impl<S: PageSource> Collector<S> {
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            source,
            daily_database_id: config.daily_database_id.clone(),
            weekly_database_id: config.weekly_database_id.clone(),
            daily_schema: DailySchema::default(),
            weekly_schema: WeeklySchema::default(),
        }
    }

    pub fn with_schemas(mut self, daily: DailySchema, weekly: WeeklySchema) -> Self {
        self.daily_schema = daily;
        self.weekly_schema = weekly;
        self
    }

    /// Daily entries dated within the last `days` days, newest first
    pub async fn get_daily_logs(&self, days: u32) -> Result<Vec<DailyEntry>, NotionError> {
        let records = fetch_all(&self.source, &self.daily_database_id).await?;
        Ok(select_daily(&records, &self.daily_schema, days, Utc::now()))
    }

    /// Weekly entries created within the last `weeks` weeks, newest first
    pub async fn get_weekly_logs(&self, weeks: u32) -> Result<Vec<WeeklyEntry>, NotionError> {
        let records = fetch_all(&self.source, &self.weekly_database_id).await?;
        Ok(select_weekly(&records, &self.weekly_schema, weeks, Utc::now()))
    }
}

pub fn select_daily(
    records: &[RawRecord],
    schema: &DailySchema,
    days: u32,
    now: DateTime<Utc>,
) -> Vec<DailyEntry> {
    let cutoff = cutoff_before(now, Duration::try_days(i64::from(days)));
    let mut entries: Vec<DailyEntry> = records
        .iter()
        .filter_map(|r| parse_daily_entry(r, schema))
        .filter(|e| keep(&e.id, e.date.as_deref(), cutoff))
        .collect();
    entries.sort_by(|a, b| sort_key(&b.date).cmp(sort_key(&a.date)));
    tracing::debug!(
        records = records.len(),
        kept = entries.len(),
        days,
        "Selected daily logs"
    );
    entries
}

pub fn select_weekly(
    records: &[RawRecord],
    schema: &WeeklySchema,
    weeks: u32,
    now: DateTime<Utc>,
) -> Vec<WeeklyEntry> {
    let cutoff = cutoff_before(now, Duration::try_weeks(i64::from(weeks)));
    let mut entries: Vec<WeeklyEntry> = records
        .iter()
        .filter_map(|r| parse_weekly_entry(r, schema))
        .filter(|e| keep(&e.id, e.created_time.as_deref(), cutoff))
        .collect();
    entries.sort_by(|a, b| sort_key(&b.created_time).cmp(sort_key(&a.created_time)));
    tracing::debug!(
        records = records.len(),
        kept = entries.len(),
        weeks,
        "Selected weekly logs"
    );
    entries
}

/// `now - span`, clamped to the earliest representable instant when the
/// window reaches past it
fn cutoff_before(now: DateTime<Utc>, span: Option<Duration>) -> DateTime<Utc> {
    span.and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn keep(id: &str, value: Option<&str>, cutoff: DateTime<Utc>) -> bool {
    let outcome = CutoffOutcome::classify(value, cutoff);
    if outcome == CutoffOutcome::Unparseable {
        tracing::debug!(id, value = ?value, "Keeping entry with unparseable date");
    }
    outcome.is_kept()
}
