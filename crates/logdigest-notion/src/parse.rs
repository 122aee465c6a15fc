//! Field extraction from raw records into daily and weekly entries

use crate::record::RawRecord;
use logdigest_core::{DailyEntry, RelationField, WeeklyEntry};
use std::collections::BTreeMap;

/// Property names of the daily log database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySchema {
    pub name: String,
    pub date: String,
    pub relations: Vec<(RelationField, String)>,
    pub week_task: String,
    pub weekly_log: String,
}

impl Default for DailySchema {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            date: "Date".to_string(),
            relations: RelationField::ALL
                .iter()
                .map(|&field| (field, field.property_name().to_string()))
                .collect(),
            week_task: "Week Task".to_string(),
            weekly_log: "Weekly Log".to_string(),
        }
    }
}

/// Property names of the weekly log database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchema {
    pub summary: String,
    pub tasks: String,
    pub date: String,
}

impl Default for WeeklySchema {
    fn default() -> Self {
        Self {
            summary: "上周总结".to_string(),
            tasks: "本周任务".to_string(),
            date: "Date".to_string(),
        }
    }
}

/// Returns `None` when the record has no usable name
pub fn parse_daily_entry(record: &RawRecord, schema: &DailySchema) -> Option<DailyEntry> {
    let name = record
        .property(&schema.name)
        .and_then(|p| p.title_text().map(String::from))?;

    let date = record
        .property(&schema.date)
        .and_then(|p| p.date_start().map(String::from));

    let mut relations = BTreeMap::new();
    for (field, prop_name) in &schema.relations {
        if let Some(ids) = record.property(prop_name).and_then(|p| p.relation_ids()) {
            relations.insert(*field, ids);
        }
    }

    let week_task = record
        .property(&schema.week_task)
        .and_then(|p| p.rollup_text().map(String::from));
    let weekly_log_ids = record
        .property(&schema.weekly_log)
        .and_then(|p| p.relation_ids())
        .unwrap_or_default();

    Some(DailyEntry {
        id: record.id.clone(),
        url: record.url.clone(),
        created_time: record.created_time.clone(),
        last_edited_time: record.last_edited_time.clone(),
        name,
        date,
        relations,
        week_task,
        weekly_log_ids,
    })
}

/// Returns `None` when the record has neither summary nor task text
pub fn parse_weekly_entry(record: &RawRecord, schema: &WeeklySchema) -> Option<WeeklyEntry> {
    let summary = record
        .property(&schema.summary)
        .and_then(|p| p.title_text().map(String::from));
    let tasks = record
        .property(&schema.tasks)
        .and_then(|p| p.text().map(String::from));

    if summary.is_none() && tasks.is_none() {
        return None;
    }

    let date = record
        .property(&schema.date)
        .and_then(|p| p.created_time().map(String::from))
        .or_else(|| record.created_time.clone());

    Some(WeeklyEntry {
        id: record.id.clone(),
        url: record.url.clone(),
        created_time: record.created_time.clone(),
        last_edited_time: record.last_edited_time.clone(),
        summary,
        tasks,
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(properties: serde_json::Value) -> RawRecord {
        serde_json::from_value(json!({
            "id": "page-1",
            "url": "https://www.notion.so/page-1",
            "created_time": "2024-01-08T03:00:00.000Z",
            "last_edited_time": "2024-01-09T03:00:00.000Z",
            "properties": properties,
        }))
        .unwrap()
    }

    #[test]
    fn test_daily_full_record() {
        let r = record(json!({
            "Name": {"type": "title", "title": [{"plain_text": "Refactor day"}]},
            "Date": {"type": "date", "date": {"start": "2024-01-10", "end": null}},
            "Concepts": {"type": "relation", "relation": [{"id": "a"}, {"id": "b"}]},
            "Codebase": {"type": "relation", "relation": []},
            "Week Task": {"type": "rollup", "rollup": {"type": "array", "array": [
                {"type": "title", "title": [{"plain_text": "ship v2"}]}
            ]}},
            "Weekly Log": {"type": "relation", "relation": [{"id": "w1"}]}
        }));

        let entry = parse_daily_entry(&r, &DailySchema::default()).unwrap();
        assert_eq!(entry.id, "page-1");
        assert_eq!(entry.name, "Refactor day");
        assert_eq!(entry.date.as_deref(), Some("2024-01-10"));
        assert_eq!(entry.relation(RelationField::Concepts), ["a", "b"]);
        assert!(entry.relations.contains_key(&RelationField::Codebase));
        assert!(!entry.relations.contains_key(&RelationField::Insights));
        assert_eq!(entry.week_task.as_deref(), Some("ship v2"));
        assert_eq!(entry.weekly_log_ids, vec!["w1"]);
    }

    #[test]
    fn test_daily_without_name_is_dropped() {
        let schema = DailySchema::default();
        let no_name = record(json!({
            "Date": {"type": "date", "date": {"start": "2024-01-10"}}
        }));
        assert!(parse_daily_entry(&no_name, &schema).is_none());

        let empty_title = record(json!({"Name": {"type": "title", "title": []}}));
        assert!(parse_daily_entry(&empty_title, &schema).is_none());

        let wrong_type = record(json!({
            "Name": {"type": "rich_text", "rich_text": [{"plain_text": "x"}]}
        }));
        assert!(parse_daily_entry(&wrong_type, &schema).is_none());
    }

    #[test]
    fn test_daily_relation_with_wrong_type_ignored() {
        let r = record(json!({
            "Name": {"type": "title", "title": [{"plain_text": "n"}]},
            "Concepts": {"type": "multi_select", "multi_select": [{"name": "a"}]}
        }));
        let entry = parse_daily_entry(&r, &DailySchema::default()).unwrap();
        assert!(entry.relations.is_empty());
        assert!(entry.date.is_none());
    }

    #[test]
    fn test_weekly_summary_and_tasks() {
        let r = record(json!({
            "上周总结": {"type": "title", "title": [{"plain_text": "完成解析器"}]},
            "本周任务": {"type": "rich_text", "rich_text": [{"plain_text": "写测试"}]},
            "Date": {"type": "created_time", "created_time": "2024-01-08T00:00:00.000Z"}
        }));
        let entry = parse_weekly_entry(&r, &WeeklySchema::default()).unwrap();
        assert_eq!(entry.summary.as_deref(), Some("完成解析器"));
        assert_eq!(entry.tasks.as_deref(), Some("写测试"));
        assert_eq!(entry.date.as_deref(), Some("2024-01-08T00:00:00.000Z"));
    }

    #[test]
    fn test_weekly_text_tag_and_date_fallback() {
        let r = record(json!({
            "本周任务": {"type": "text", "text": [{"plain_text": "plan"}]}
        }));
        let entry = parse_weekly_entry(&r, &WeeklySchema::default()).unwrap();
        assert!(entry.summary.is_none());
        assert_eq!(entry.tasks.as_deref(), Some("plan"));
        assert_eq!(entry.date.as_deref(), Some("2024-01-08T03:00:00.000Z"));
    }

    #[test]
    fn test_weekly_without_text_is_dropped() {
        let r = record(json!({
            "上周总结": {"type": "title", "title": [{"plain_text": ""}]},
            "Date": {"type": "created_time", "created_time": "2024-01-08T00:00:00.000Z"}
        }));
        assert!(parse_weekly_entry(&r, &WeeklySchema::default()).is_none());
    }
}
