//! REST response envelopes.
//!
//! Every backend response wraps its payload in an envelope carrying a
//! success flag and optional message/timestamp. `into_data` turns a
//! `success: false` envelope into a typed error.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::band::Band;
use crate::error::{LineupError, LineupResult};

/// RFC-3339 timestamp for envelope stamping.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Envelope around a data payload (reads, create, update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data,
            message: None,
            timestamp: Some(now_timestamp()),
        }
    }

    /// Unwrap the payload, treating a failure flag as a backend error.
    pub fn into_data(self) -> LineupResult<T> {
        if self.success {
            Ok(self.data)
        } else {
            Err(LineupError::Backend(
                self.message
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            ))
        }
    }
}

/// Envelope for operations that return no payload (delete, selection save).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl StatusEnvelope {
    pub fn ok(message: impl Into<String>) -> Self {
        StatusEnvelope {
            success: true,
            message: Some(message.into()),
            timestamp: Some(now_timestamp()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        StatusEnvelope {
            success: false,
            message: Some(message.into()),
            timestamp: Some(now_timestamp()),
        }
    }

    pub fn check(self) -> LineupResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(LineupError::Backend(
                self.message
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            ))
        }
    }
}

/// Band listing envelope; `person` echoes whose selection view this is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandsEnvelope {
    pub success: bool,
    pub data: Vec<Band>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
}

impl BandsEnvelope {
    pub fn ok(data: Vec<Band>) -> Self {
        BandsEnvelope {
            success: true,
            data,
            message: None,
            timestamp: Some(now_timestamp()),
            person: None,
        }
    }

    pub fn into_data(self) -> LineupResult<Vec<Band>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(LineupError::Backend(
                self.message
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            ))
        }
    }
}
