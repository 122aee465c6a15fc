//! Typed decoding of database properties, keyed on the `type` tag

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelationRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// Rollup payload; array rollups hold property values of the related rows
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rollup {
    Array {
        #[serde(default)]
        array: Vec<Property>,
    },
    Number {
        number: Option<f64>,
    },
    Date {
        date: Option<DateValue>,
    },
    #[serde(other)]
    Other,
}

/// One property value. Tags we do not read decode to `Other`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Text {
        #[serde(default)]
        text: Vec<RichText>,
    },
    Date {
        date: Option<DateValue>,
    },
    Relation {
        #[serde(default)]
        relation: Vec<RelationRef>,
    },
    Rollup {
        rollup: Rollup,
    },
    CreatedTime {
        created_time: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl Property {
    /// Look up `name` and decode it. Absent or malformed properties yield `None`.
    pub fn lookup(properties: &Map<String, Value>, name: &str) -> Option<Self> {
        let raw = properties.get(name)?;
        match Property::deserialize(raw) {
            Ok(prop) => Some(prop),
            Err(err) => {
                tracing::debug!(property = name, error = %err, "Skipping undecodable property");
                None
            }
        }
    }

    /// First run of a title property
    pub fn title_text(&self) -> Option<&str> {
        match self {
            Property::Title { title } => first_plain_text(title),
            _ => None,
        }
    }

    /// First run of a text or rich_text property
    pub fn text(&self) -> Option<&str> {
        match self {
            Property::Text { text } => first_plain_text(text),
            Property::RichText { rich_text } => first_plain_text(rich_text),
            _ => None,
        }
    }

    pub fn date_start(&self) -> Option<&str> {
        match self {
            Property::Date { date: Some(date) } => non_empty(date.start.as_deref()),
            _ => None,
        }
    }

    pub fn relation_ids(&self) -> Option<Vec<String>> {
        match self {
            Property::Relation { relation } => {
                Some(relation.iter().filter_map(|r| r.id.clone()).collect())
            }
            _ => None,
        }
    }

    pub fn created_time(&self) -> Option<&str> {
        match self {
            Property::CreatedTime { created_time } => non_empty(created_time.as_deref()),
            _ => None,
        }
    }

    /// First textual value inside an array rollup
    pub fn rollup_text(&self) -> Option<&str> {
        match self {
            Property::Rollup {
                rollup: Rollup::Array { array },
            } => array.iter().find_map(|p| p.title_text().or_else(|| p.text())),
            _ => None,
        }
    }
}

fn first_plain_text(runs: &[RichText]) -> Option<&str> {
    non_empty(runs.first()?.plain_text.as_deref())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
