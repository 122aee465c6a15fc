//! Notion database client and log entry extraction

mod client;
mod collector;
mod error;
mod parse;
mod property;
mod record;

pub use client::{fetch_all, NotionClient, PageSource};
pub use collector::{select_daily, select_weekly, Collector};
pub use error::NotionError;
pub use parse::{parse_daily_entry, parse_weekly_entry, DailySchema, WeeklySchema};
pub use property::{DateValue, Property, RelationRef, RichText, Rollup};
pub use record::{QueryPage, RawRecord};
