//! Store record types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An inbox message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique reference (`MSG` + 8 upper-case characters for created messages).
    pub reference: String,
    /// Local creation time, serialized without zone.
    pub entry_date: NaiveDateTime,
    /// Delivery channel, e.g. "Email" or "SMS".
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
}

/// Fields accepted when creating a message. Missing fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMessage {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
}

/// A source-of-funds question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SofQuestion {
    pub question: String,
    pub answer: String,
}

impl SofQuestion {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
