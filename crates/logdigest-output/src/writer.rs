//! Dated JSON report files in the output directory

use crate::io::{atomic_write, to_pretty_json};
use chrono::{DateTime, NaiveDate, Utc};
use logdigest_core::{CombinedReport, DailyReport, WeeklyReport};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Daily,
    Weekly,
    Combined,
}

impl ReportKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ReportKind::Daily => "daily",
            ReportKind::Weekly => "weekly",
            ReportKind::Combined => "report",
        }
    }

    /// `{prefix}_{YYYY-MM-DD}.json`
    pub fn file_name(self, date: NaiveDate) -> String {
        format!("{}_{}.json", self.prefix(), date.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize `report` to its dated file, replacing any file of the same name
    pub fn save<T: Serialize>(
        &self,
        report: &T,
        kind: ReportKind,
        date: NaiveDate,
    ) -> std::io::Result<PathBuf> {
        let path = self.dir.join(kind.file_name(date));
        atomic_write(&path, &to_pretty_json(report)?)?;
        tracing::debug!(path = %path.display(), "Wrote report");
        Ok(path)
    }

    pub fn save_daily(&self, report: &DailyReport, date: NaiveDate) -> std::io::Result<PathBuf> {
        self.save(report, ReportKind::Daily, date)
    }

    pub fn save_weekly(&self, report: &WeeklyReport, date: NaiveDate) -> std::io::Result<PathBuf> {
        self.save(report, ReportKind::Weekly, date)
    }

    pub fn save_combined(
        &self,
        daily: &DailyReport,
        weekly: &WeeklyReport,
        date: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> std::io::Result<PathBuf> {
        let combined = CombinedReport::new(daily.clone(), weekly.clone(), generated_at);
        self.save(&combined, ReportKind::Combined, date)
    }

    /// `*.json` files in the output directory, descending by file name
    pub fn list_output_files(&self) -> std::io::Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_file_names() {
        let d = date(2024, 1, 9);
        assert_eq!(ReportKind::Daily.file_name(d), "daily_2024-01-09.json");
        assert_eq!(ReportKind::Weekly.file_name(d), "weekly_2024-01-09.json");
        assert_eq!(ReportKind::Combined.file_name(d), "report_2024-01-09.json");
    }

    #[test]
    fn test_save_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path().join("out"));
        let path = writer
            .save(&serde_json::json!({"ok": true}), ReportKind::Daily, date(2024, 1, 10))
            .unwrap();
        assert_eq!(path, tmp.path().join("out").join("daily_2024-01-10.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path().join("never-created"));
        assert!(writer.list_output_files().unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_descending_json_only() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path());
        for d in [date(2024, 1, 8), date(2024, 1, 10), date(2024, 1, 9)] {
            writer
                .save(&serde_json::json!({}), ReportKind::Daily, d)
                .unwrap();
        }
        std::fs::write(tmp.path().join("notes.txt"), "skip me").unwrap();

        let names: Vec<String> = writer
            .list_output_files()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "daily_2024-01-10.json",
                "daily_2024-01-09.json",
                "daily_2024-01-08.json"
            ]
        );
    }
}
