//! Response envelope shared by every API route.
//!
//! A success envelope carries `data` (or, for deletions, a `message`);
//! an error envelope carries a human-readable `message`.

use serde::{Deserialize, Serialize};

/// Outcome tag of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// The request succeeded.
    Success,
    /// The request failed.
    Error,
}

/// `{ status, data | message }` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Outcome tag.
    pub status: EnvelopeStatus,
    /// Payload of a successful request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    /// Returns true for a success envelope.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }
}

impl Envelope<()> {
    /// A success envelope with only a message (used for deletions).
    #[must_use]
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data: None,
            message: Some(message.into()),
        }
    }

    /// An error envelope.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            data: None,
            message: Some(message.into()),
        }
    }
}
