use async_trait::async_trait;
use http::StatusCode;
use thiserror::Error;

use super::form::FormFields;

/// What the email service answered with. Only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: StatusCode,
    pub text: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("email service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Delivers a submitted form somewhere a human will read it.
///
/// Futures are `?Send` because the browser implementation sits on `fetch`.
#[async_trait(?Send)]
pub trait EmailDispatcher: Send + Sync {
    async fn send(&self, fields: &FormFields) -> Result<DispatchResponse, DispatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Fire-and-forget user feedback (toasts).
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}
