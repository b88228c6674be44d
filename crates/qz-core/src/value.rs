use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::FrameIndex;

/// A recorded answer. Free-choice questions record the chosen label,
/// exclusive-choice questions record the selected target frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Frame(FrameIndex),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_frame_index(&self) -> Option<FrameIndex> {
        match self {
            Self::Frame(value) => Some(*value),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Frame(_) => "frame",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Frame(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Renders a slot for display. Unset slots render as the empty string.
pub fn slot_to_text(slot: Option<&AnswerValue>) -> String {
    slot.map(ToString::to_string).unwrap_or_default()
}
