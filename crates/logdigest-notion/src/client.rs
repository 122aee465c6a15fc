//! Paginated database queries over HTTP

use crate::error::NotionError;
use crate::record::{QueryPage, RawRecord};
use logdigest_core::Config;
use std::time::Duration;

/// Anything that can return one page of a database query
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(
        &self,
        database_id: &str,
        cursor: Option<&str>,
    ) -> Result<QueryPage, NotionError>;
}

/// Bearer-authenticated client for the database query endpoint
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    notion_version: String,
}

impl NotionClient {
    pub fn new(config: &Config) -> Result<Self, NotionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.notion_token.clone(),
            notion_version: config.notion_version.clone(),
        })
    }

    fn query_url(&self, database_id: &str) -> String {
        format!("{}/databases/{}/query", self.base_url, database_id)
    }
}

impl PageSource for NotionClient {
    async fn fetch_page(
        &self,
        database_id: &str,
        cursor: Option<&str>,
    ) -> Result<QueryPage, NotionError> {
        let mut body = serde_json::Map::new();
        if let Some(cursor) = cursor {
            body.insert("start_cursor".to_string(), cursor.into());
        }

        let response = self
            .http
            .post(self.query_url(database_id))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.notion_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Walk every page of a database, concatenating results in the order returned
pub async fn fetch_all<S: PageSource>(
    source: &S,
    database_id: &str,
) -> Result<Vec<RawRecord>, NotionError> {
    let mut records = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = source.fetch_page(database_id, cursor.as_deref()).await?;
        pages += 1;
        records.extend(page.results);

        if !page.has_more {
            break;
        }
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                tracing::warn!(database_id, pages, "has_more set without next_cursor, stopping");
                break;
            }
        }
    }

    tracing::debug!(database_id, pages, records = records.len(), "Fetched database");
    Ok(records)
}
