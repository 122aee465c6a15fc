//! Aggregation of parsed entries into daily and weekly reports

use crate::time::{week_key, UNKNOWN_KEY};
use crate::types::{
    DailyEntry, DailyReport, DailySummary, DateGroup, DateRange, RelationField, ReportMetadata,
    SummaryItem, TaskItem, WeekGroup, WeeklyEntry, WeeklyReport,
};
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};

pub fn process_daily_logs(entries: &[DailyEntry]) -> DailyReport {
    DailyReport {
        summary: daily_summary(entries),
        by_date: group_by_date(entries),
        relationships: relationships(entries),
        metadata: ReportMetadata {
            total_count: entries.len(),
            date_range: date_range(entries.iter().map(|e| e.date.as_deref())),
            generated_at: Utc::now(),
        },
    }
}

pub fn process_weekly_logs(entries: &[WeeklyEntry]) -> WeeklyReport {
    WeeklyReport {
        summaries: extract_summaries(entries),
        tasks: extract_tasks(entries),
        by_week: group_by_week(entries),
        metadata: ReportMetadata {
            total_count: entries.len(),
            date_range: date_range(entries.iter().map(|e| e.created_time.as_deref())),
            generated_at: Utc::now(),
        },
    }
}

fn daily_summary(entries: &[DailyEntry]) -> DailySummary {
    let mut summary = DailySummary {
        total_entries: entries.len(),
        ..Default::default()
    };
    for entry in entries {
        for (&field, ids) in &entry.relations {
            summary.add(field, ids.len());
        }
    }
    summary
}

/// One group per distinct date string, newest first. Undated entries share `unknown`.
fn group_by_date(entries: &[DailyEntry]) -> Vec<DateGroup> {
    let mut grouped: BTreeMap<&str, Vec<DailyEntry>> = BTreeMap::new();
    for entry in entries {
        let key = entry.date.as_deref().unwrap_or(UNKNOWN_KEY);
        grouped.entry(key).or_default().push(entry.clone());
    }

    grouped
        .into_iter()
        .rev()
        .map(|(date, entries)| DateGroup {
            date: date.to_string(),
            count: entries.len(),
            entries,
        })
        .collect()
}

/// Distinct ids per relation field. Every field is present, possibly empty.
fn relationships(entries: &[DailyEntry]) -> BTreeMap<RelationField, Vec<String>> {
    let mut sets: BTreeMap<RelationField, BTreeSet<&str>> = RelationField::ALL
        .iter()
        .map(|&field| (field, BTreeSet::new()))
        .collect();

    for entry in entries {
        for (field, ids) in &entry.relations {
            if let Some(set) = sets.get_mut(field) {
                set.extend(ids.iter().map(String::as_str));
            }
        }
    }

    sets.into_iter()
        .map(|(field, ids)| (field, ids.into_iter().map(String::from).collect()))
        .collect()
}

fn date_range<'a>(values: impl Iterator<Item = Option<&'a str>>) -> DateRange {
    let present: Vec<&str> = values.flatten().filter(|v| !v.is_empty()).collect();
    DateRange {
        start: present.iter().min().map(|s| s.to_string()),
        end: present.iter().max().map(|s| s.to_string()),
    }
}

fn extract_summaries(entries: &[WeeklyEntry]) -> Vec<SummaryItem> {
    let mut summaries: Vec<SummaryItem> = entries
        .iter()
        .filter_map(|e| {
            e.summary.as_ref().map(|summary| SummaryItem {
                id: e.id.clone(),
                date: e.date.clone(),
                created_time: e.created_time.clone(),
                summary: summary.clone(),
            })
        })
        .collect();
    summaries.sort_by(|a, b| sort_key(&b.date).cmp(sort_key(&a.date)));
    summaries
}

fn extract_tasks(entries: &[WeeklyEntry]) -> Vec<TaskItem> {
    let mut tasks: Vec<TaskItem> = entries
        .iter()
        .filter_map(|e| {
            e.tasks.as_ref().map(|tasks| TaskItem {
                id: e.id.clone(),
                date: e.date.clone(),
                created_time: e.created_time.clone(),
                tasks: tasks.clone(),
            })
        })
        .collect();
    tasks.sort_by(|a, b| sort_key(&b.date).cmp(sort_key(&a.date)));
    tasks
}

fn group_by_week(entries: &[WeeklyEntry]) -> Vec<WeekGroup> {
    let mut grouped: BTreeMap<String, Vec<WeeklyEntry>> = BTreeMap::new();
    for entry in entries {
        grouped
            .entry(week_key(entry.created_time.as_deref()))
            .or_default()
            .push(entry.clone());
    }

    grouped
        .into_iter()
        .rev()
        .map(|(week, entries)| WeekGroup {
            week,
            count: entries.len(),
            entries,
        })
        .collect()
}

/// Absent dates sort as the empty string, i.e. last when descending
pub fn sort_key(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
