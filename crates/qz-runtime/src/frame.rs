use qz_core::{
    AnswerValue, ChoiceDiscipline, ChoiceItem, EngineOutput, FrameIndex, FrameKind, QuizError,
    SlotIndex,
};

use crate::{AnswerStore, RenderSurface, StatementContent};

/// Result of presenting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Waiting for the dismiss affordance; resolves to `next`.
    AwaitDismiss { next: FrameIndex },
    /// Waiting for one of the rendered choices.
    AwaitChoice,
    /// Resolved without rendering anything.
    PassThrough { target: FrameIndex },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Statement(Statement),
    Question(Question),
    ConditionalSwitch(ConditionalSwitch),
}

impl Frame {
    pub fn frame_index(&self) -> FrameIndex {
        match self {
            Self::Statement(statement) => statement.frame_index,
            Self::Question(question) => question.frame_index,
            Self::ConditionalSwitch(switch) => switch.frame_index,
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Statement(_) => FrameKind::Statement,
            Self::Question(_) => FrameKind::Question,
            Self::ConditionalSwitch(_) => FrameKind::ConditionalSwitch,
        }
    }

    pub fn present(&self, answers: &AnswerStore, surface: &mut dyn RenderSurface) -> Presentation {
        match self {
            Self::Statement(statement) => statement.present(answers, surface),
            Self::Question(question) => question.present(surface),
            Self::ConditionalSwitch(switch) => switch.present(answers),
        }
    }

    /// Describes the boundary this frame waits on. Pass-through frames have none.
    pub fn output(&self, answers: &AnswerStore) -> Option<EngineOutput> {
        match self {
            Self::Statement(statement) => Some(EngineOutput::Statement {
                frame_index: statement.frame_index,
                text: statement.text(answers),
            }),
            Self::Question(question) => Some(EngineOutput::Question {
                frame_index: question.frame_index,
                prompt: question.prompt.clone(),
                choices: question.choice_items(),
            }),
            Self::ConditionalSwitch(_) => None,
        }
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Self::Question(question) => Some(question),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub frame_index: FrameIndex,
    pub statement_index: usize,
    pub content: StatementContent,
    pub next: FrameIndex,
}

impl Statement {
    pub fn text(&self, answers: &AnswerStore) -> String {
        self.content.resolve(answers)
    }

    fn present(&self, answers: &AnswerStore, surface: &mut dyn RenderSurface) -> Presentation {
        surface.render_text(&self.text(answers));
        surface.render_dismiss_affordance();
        Presentation::AwaitDismiss { next: self.next }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub target: FrameIndex,
    pub discipline: ChoiceDiscipline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub frame_index: FrameIndex,
    pub question_index: SlotIndex,
    pub prompt: String,
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn add_choice(&mut self, label: impl Into<String>, target: FrameIndex) -> usize {
        self.push_choice(label.into(), target, ChoiceDiscipline::Free)
    }

    pub fn add_exclusive_choice(&mut self, label: impl Into<String>, target: FrameIndex) -> usize {
        self.push_choice(label.into(), target, ChoiceDiscipline::Exclusive)
    }

    fn push_choice(&mut self, label: String, target: FrameIndex, discipline: ChoiceDiscipline) -> usize {
        self.choices.push(Choice {
            label,
            target,
            discipline,
        });
        self.choices.len() - 1
    }

    pub fn choice_items(&self) -> Vec<ChoiceItem> {
        self.choices
            .iter()
            .enumerate()
            .map(|(index, choice)| ChoiceItem {
                index,
                label: choice.label.clone(),
                discipline: choice.discipline,
            })
            .collect()
    }

    fn present(&self, surface: &mut dyn RenderSurface) -> Presentation {
        surface.render_text(&self.prompt);
        let (free, exclusive): (Vec<ChoiceItem>, Vec<ChoiceItem>) = self
            .choice_items()
            .into_iter()
            .partition(|item| item.discipline == ChoiceDiscipline::Free);
        if !free.is_empty() {
            surface.render_choice_list(&free);
        }
        if !exclusive.is_empty() {
            surface.render_exclusive_choice_list(&exclusive);
        }
        Presentation::AwaitChoice
    }

    /// Records the answer for `index` and returns the chosen target.
    ///
    /// Free choices record their label; exclusive choices record the target of
    /// the current selection.
    pub fn resolve(
        &self,
        index: usize,
        discipline: ChoiceDiscipline,
        answers: &mut AnswerStore,
    ) -> Result<FrameIndex, QuizError> {
        let Some(choice) = self.choices.get(index) else {
            return Err(QuizError::new(
                "ENGINE_CHOICE_INDEX",
                format!(
                    "Choice index \"{}\" is out of range for frame {} ({} choices).",
                    index,
                    self.frame_index,
                    self.choices.len()
                ),
            ));
        };

        if choice.discipline != discipline {
            return Err(QuizError::new(
                "ENGINE_CHOICE_DISCIPLINE",
                format!(
                    "Choice \"{}\" of frame {} is {:?}, not {:?}.",
                    index, self.frame_index, choice.discipline, discipline
                ),
            ));
        }

        let value = match discipline {
            ChoiceDiscipline::Free => AnswerValue::Text(choice.label.clone()),
            ChoiceDiscipline::Exclusive => AnswerValue::Frame(choice.target),
        };
        if !answers.record(self.question_index, value) {
            return Err(QuizError::new(
                "ENGINE_SLOT_MISSING",
                format!("Answer slot {} was never reserved.", self.question_index),
            ));
        }
        Ok(choice.target)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalSwitch {
    pub frame_index: FrameIndex,
    pub slot: SlotIndex,
    pub comparison: AnswerValue,
    pub if_true: FrameIndex,
    pub if_false: FrameIndex,
}

impl ConditionalSwitch {
    /// Unset and unreserved slots never equal the comparison value.
    pub fn resolve(&self, answers: &AnswerStore) -> FrameIndex {
        if answers.get(self.slot) == Some(&self.comparison) {
            self.if_true
        } else {
            self.if_false
        }
    }

    fn present(&self, answers: &AnswerStore) -> Presentation {
        Presentation::PassThrough {
            target: self.resolve(answers),
        }
    }
}
