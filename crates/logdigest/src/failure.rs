//! Top-level error classification and exit codes

use logdigest_core::ConfigError;
use logdigest_notion::NotionError;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Configuration,
    RemoteApi,
    Unexpected,
}

pub fn classify(err: &anyhow::Error) -> FailureKind {
    if err.downcast_ref::<ConfigError>().is_some() {
        FailureKind::Configuration
    } else if err.downcast_ref::<NotionError>().is_some() {
        FailureKind::RemoteApi
    } else {
        FailureKind::Unexpected
    }
}

/// Print a diagnostic for `err` and return the process exit code
pub fn report(err: &anyhow::Error) -> ExitCode {
    match classify(err) {
        FailureKind::Configuration => {
            tracing::error!(error = %err, "Configuration error");
            eprintln!("configuration error: {err}");
            eprintln!("check the NOTION_* variables in the environment or .env file");
        }
        FailureKind::RemoteApi => {
            tracing::error!(error = %err, "Remote API error");
            eprintln!("remote api error: {err}");
            if let Some(NotionError::Api { status, body }) = err.downcast_ref::<NotionError>() {
                eprintln!("status: {status}");
                eprintln!("body: {body}");
            }
        }
        FailureKind::Unexpected => {
            tracing::error!(error = ?err, "Unexpected error");
            eprintln!("unexpected error: {err:#}");
        }
    }
    ExitCode::FAILURE
}
