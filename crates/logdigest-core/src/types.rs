//! Entry and report types shared by the collector, processor and writer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relation properties tracked on daily entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationField {
    Concepts,
    Strategies,
    Experiments,
    Insights,
    Codebase,
}

impl RelationField {
    pub const ALL: [RelationField; 5] = [
        RelationField::Concepts,
        RelationField::Strategies,
        RelationField::Experiments,
        RelationField::Insights,
        RelationField::Codebase,
    ];

    /// Property name in the daily log database
    pub fn property_name(self) -> &'static str {
        match self {
            RelationField::Concepts => "Concepts",
            RelationField::Strategies => "Strategies",
            RelationField::Experiments => "Experiments",
            RelationField::Insights => "Insights",
            RelationField::Codebase => "Codebase",
        }
    }

    /// Key used in parsed entries and reports
    pub fn key(self) -> &'static str {
        match self {
            RelationField::Concepts => "concepts",
            RelationField::Strategies => "strategies",
            RelationField::Experiments => "experiments",
            RelationField::Insights => "insights",
            RelationField::Codebase => "codebase",
        }
    }
}

/// A daily log row after field extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub id: String,
    pub url: Option<String>,
    pub created_time: Option<String>,
    pub last_edited_time: Option<String>,
    pub name: String,
    pub date: Option<String>,
    /// Only relation properties present on the record appear here,
    /// serialized as top-level `concepts`, `strategies`, ... keys
    #[serde(flatten)]
    pub relations: BTreeMap<RelationField, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_task: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekly_log_ids: Vec<String>,
}

impl DailyEntry {
    pub fn relation(&self, field: RelationField) -> &[String] {
        self.relations.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A weekly log row after field extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyEntry {
    pub id: String,
    pub url: Option<String>,
    pub created_time: Option<String>,
    pub last_edited_time: Option<String>,
    #[serde(rename = "last_week_summary")]
    pub summary: Option<String>,
    #[serde(rename = "this_week_tasks")]
    pub tasks: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub total_count: usize,
    pub date_range: DateRange,
    pub generated_at: DateTime<Utc>,
}

/// Relation reference counts (list lengths, not distinct ids)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub total_entries: usize,
    pub concepts_count: usize,
    pub strategies_count: usize,
    pub experiments_count: usize,
    pub insights_count: usize,
    pub codebase_count: usize,
}

impl DailySummary {
    pub fn count(&self, field: RelationField) -> usize {
        match field {
            RelationField::Concepts => self.concepts_count,
            RelationField::Strategies => self.strategies_count,
            RelationField::Experiments => self.experiments_count,
            RelationField::Insights => self.insights_count,
            RelationField::Codebase => self.codebase_count,
        }
    }

    pub(crate) fn add(&mut self, field: RelationField, n: usize) {
        let slot = match field {
            RelationField::Concepts => &mut self.concepts_count,
            RelationField::Strategies => &mut self.strategies_count,
            RelationField::Experiments => &mut self.experiments_count,
            RelationField::Insights => &mut self.insights_count,
            RelationField::Codebase => &mut self.codebase_count,
        };
        *slot += n;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateGroup {
    pub date: String,
    pub entries: Vec<DailyEntry>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub summary: DailySummary,
    pub by_date: Vec<DateGroup>,
    pub relationships: BTreeMap<RelationField, Vec<String>>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub id: String,
    pub date: Option<String>,
    pub created_time: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub date: Option<String>,
    pub created_time: Option<String>,
    pub tasks: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGroup {
    pub week: String,
    pub entries: Vec<WeeklyEntry>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub summaries: Vec<SummaryItem>,
    pub tasks: Vec<TaskItem>,
    pub by_week: Vec<WeekGroup>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Combined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedMetadata {
    pub generated_at: DateTime<Utc>,
    pub report_type: ReportType,
}

/// Both reports in one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedReport {
    pub daily_logs: DailyReport,
    pub weekly_logs: WeeklyReport,
    pub report_metadata: CombinedMetadata,
}

impl CombinedReport {
    pub fn new(daily: DailyReport, weekly: WeeklyReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            daily_logs: daily,
            weekly_logs: weekly,
            report_metadata: CombinedMetadata {
                generated_at,
                report_type: ReportType::Combined,
            },
        }
    }
}
