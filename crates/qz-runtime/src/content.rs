use qz_core::slot_to_text;

use crate::AnswerStore;

/// Placeholder shown in place of a statement whose content could not be understood.
pub const INVALID_STATEMENT_TEXT: &str = "ERROR: invalid statement args";

/// Where a reference statement reads its middle text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// The graph's answer store, addressed by slot.
    Answers,
    /// A fixed table owned by the statement.
    Table(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementContent {
    Literal(String),
    /// Resolved at presentation time, so it may name a slot that a
    /// later-created question fills in.
    Reference {
        source: TextSource,
        index: usize,
        pretext: String,
        posttext: String,
    },
}

impl StatementContent {
    pub fn reference(
        source: TextSource,
        index: usize,
        pretext: impl Into<String>,
        posttext: impl Into<String>,
    ) -> Self {
        Self::Reference {
            source,
            index,
            pretext: pretext.into(),
            posttext: posttext.into(),
        }
    }

    /// Content used when an authored argument is neither text nor a reference.
    pub fn invalid(reason: &str) -> Self {
        tracing::warn!(reason, "substituting placeholder for malformed statement content");
        Self::Literal(INVALID_STATEMENT_TEXT.to_string())
    }

    /// Missing table entries and unset slots resolve to the empty string.
    pub fn resolve(&self, answers: &AnswerStore) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Reference {
                source,
                index,
                pretext,
                posttext,
            } => {
                let middle = match source {
                    TextSource::Answers => slot_to_text(answers.get(*index)),
                    TextSource::Table(entries) => entries.get(*index).cloned().unwrap_or_default(),
                };
                format!("{}{}{}", pretext, middle, posttext)
            }
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }
}

impl From<&str> for StatementContent {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for StatementContent {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

/// A bare table shows its first entry.
impl From<Vec<String>> for StatementContent {
    fn from(entries: Vec<String>) -> Self {
        Self::reference(TextSource::Table(entries), 0, "", "")
    }
}
