use qz_core::{ChoiceDiscipline, EngineOutput, NavigationState, QuizError, UserAction};

use super::{halted, not_started, NavigationEngine, PendingBoundary};
use crate::{Frame, RenderSurface};

impl<S: RenderSurface> NavigationEngine<S> {
    pub fn dismiss(&mut self) -> Result<EngineOutput, QuizError> {
        self.ensure_accepting_input()?;
        let Some(PendingBoundary::Dismiss { frame_index, next }) = self.pending_boundary else {
            return Err(QuizError::new(
                "ENGINE_NO_PENDING_DISMISS",
                "The active frame has no dismiss affordance.",
            ));
        };
        self.transition(frame_index, next)
    }

    /// Activates a free choice: records its label and moves to its target.
    pub fn choose(&mut self, index: usize) -> Result<EngineOutput, QuizError> {
        self.resolve_choice(index, ChoiceDiscipline::Free)
    }

    /// Changes the exclusive selection. The change itself resolves the frame.
    pub fn select(&mut self, index: usize) -> Result<EngineOutput, QuizError> {
        self.resolve_choice(index, ChoiceDiscipline::Exclusive)
    }

    pub fn apply(&mut self, action: UserAction) -> Result<EngineOutput, QuizError> {
        match action {
            UserAction::Dismiss => self.dismiss(),
            UserAction::Choose(index) => self.choose(index),
            UserAction::Select(index) => self.select(index),
        }
    }

    fn resolve_choice(
        &mut self,
        index: usize,
        discipline: ChoiceDiscipline,
    ) -> Result<EngineOutput, QuizError> {
        self.ensure_accepting_input()?;
        let Some(PendingBoundary::Choice { frame_index }) = self.pending_boundary else {
            return Err(QuizError::new(
                "ENGINE_NO_PENDING_CHOICE",
                "No pending choice is available.",
            ));
        };

        let (frame, answers) = self.graph.frame_and_answers_mut(frame_index);
        let Some(Frame::Question(question)) = frame else {
            return Err(QuizError::new(
                "ENGINE_CHOICE_FRAME_MISSING",
                format!("Pending choice frame {} is not a question.", frame_index),
            ));
        };
        let next = question.resolve(index, discipline, answers)?;
        tracing::debug!(
            frame_index,
            slot = question.question_index,
            choice = index,
            "answer recorded"
        );
        self.transition(frame_index, next)
    }

    fn ensure_accepting_input(&self) -> Result<(), QuizError> {
        match self.state {
            NavigationState::Idle => Err(not_started()),
            NavigationState::Halted => Err(halted()),
            NavigationState::Presenting { .. } => Ok(()),
        }
    }
}
