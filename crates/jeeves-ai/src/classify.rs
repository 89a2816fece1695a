//! Maps raw provider failures to user-ready messages.
//!
//! Rules are ordered, case-insensitive substring checks; the first
//! match wins. Matching on message text rather than structured codes
//! survives upstream proxies that flatten every failure into an
//! exception string.

use crate::ProviderError;

/// Failure category, after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ServiceUnavailable,
    CapacityExceeded,
    SafetyBlocked,
    Timeout,
    Unknown,
}

/// A provider failure translated for end users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub user_message: String,
    pub retryable: bool,
}

/// Longest raw-message fragment shown to users for unknown failures.
const UNKNOWN_MESSAGE_LIMIT: usize = 150;

/// Classify a raw provider failure.
pub fn classify(raw: &ProviderError) -> ClassifiedError {
    let text = raw.message.to_lowercase();

    if raw.status == Some(503)
        || text.contains("503")
        || text.contains("unavailable")
        || text.contains("unhealthy")
    {
        return ClassifiedError {
            kind: ErrorKind::ServiceUnavailable,
            user_message: "AI service is unavailable. Check that the upstream proxy is running."
                .into(),
            retryable: true,
        };
    }

    if text.contains("capacity") {
        return ClassifiedError {
            kind: ErrorKind::CapacityExceeded,
            user_message: "The selected model is at capacity. Try again shortly or switch to \
                           another model."
                .into(),
            retryable: true,
        };
    }

    if text.contains("block") || text.contains("safety") {
        return ClassifiedError {
            kind: ErrorKind::SafetyBlocked,
            user_message: "The reply was withheld by the provider's safety filter. Try rephrasing \
                           the request."
                .into(),
            retryable: false,
        };
    }

    if text.contains("timeout") || text.contains("timed out") {
        return ClassifiedError {
            kind: ErrorKind::Timeout,
            user_message: "The request timed out. Try again.".into(),
            retryable: true,
        };
    }

    if text.contains("connection") {
        return ClassifiedError {
            kind: ErrorKind::ServiceUnavailable,
            user_message: "Cannot reach the AI gateway. Check the network and the proxy address."
                .into(),
            retryable: true,
        };
    }

    ClassifiedError {
        kind: ErrorKind::Unknown,
        user_message: truncate_chars(&raw.message, UNKNOWN_MESSAGE_LIMIT),
        retryable: false,
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
