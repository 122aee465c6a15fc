//! Raw query results as returned by the remote API

use crate::property::Property;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One database row before field extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl RawRecord {
    pub fn property(&self, name: &str) -> Option<Property> {
        Property::lookup(&self.properties, name)
    }
}

/// One page of a database query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPage {
    #[serde(default)]
    pub results: Vec<RawRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
