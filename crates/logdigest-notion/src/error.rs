#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("notion api error: status={status}, body={body}")]
    Api { status: u16, body: String },
    #[error("notion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid notion response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NotionError {
    /// HTTP status for errors the remote side returned
    pub fn status(&self) -> Option<u16> {
        match self {
            NotionError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
