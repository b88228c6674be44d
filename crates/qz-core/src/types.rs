use serde::{Deserialize, Serialize};

/// Stable identity of a frame: its position in the frame graph.
pub type FrameIndex = usize;

/// Address of an answer slot; equal to the owning question's creation order.
pub type SlotIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn synthetic() -> Self {
        Self {
            start: SourceLocation { line: 1, column: 1 },
            end: SourceLocation { line: 1, column: 1 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoiceDiscipline {
    /// Every choice is its own action and resolves on activation.
    Free,
    /// Choices form a mutually exclusive group and resolve on selection change.
    Exclusive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceItem {
    pub index: usize,
    pub label: String,
    pub discipline: ChoiceDiscipline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameKind {
    Statement,
    Question,
    ConditionalSwitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavigationState {
    Idle,
    #[serde(rename_all = "camelCase")]
    Presenting {
        frame_index: FrameIndex,
    },
    Halted,
}

impl NavigationState {
    pub fn current_frame(&self) -> Option<FrameIndex> {
        match self {
            Self::Presenting { frame_index } => Some(*frame_index),
            _ => None,
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, Self::Halted)
    }
}

/// What the engine is waiting on after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EngineOutput {
    #[serde(rename_all = "camelCase")]
    Statement { frame_index: FrameIndex, text: String },
    #[serde(rename_all = "camelCase")]
    Question {
        frame_index: FrameIndex,
        prompt: String,
        choices: Vec<ChoiceItem>,
    },
    Halted,
}

impl EngineOutput {
    pub fn frame_index(&self) -> Option<FrameIndex> {
        match self {
            Self::Statement { frame_index, .. } | Self::Question { frame_index, .. } => {
                Some(*frame_index)
            }
            Self::Halted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum UserAction {
    Dismiss,
    Choose(usize),
    Select(usize),
}
