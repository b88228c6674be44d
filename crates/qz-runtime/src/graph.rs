use qz_core::{AnswerValue, FrameIndex, QuizError, SlotIndex};

use crate::{
    AnswerStore, ConditionalSwitch, Frame, Question, Statement, StatementContent, TextSource,
};

/// Append-only arena of frames plus the answer store they share.
///
/// Frames name each other by index only. Targets are not checked when they are
/// stored; a target without a frame is discovered during navigation, where it
/// ends the session.
#[derive(Debug, Clone, Default)]
pub struct FrameGraph {
    title: Option<String>,
    frames: Vec<Frame>,
    answers: AnswerStore,
    statement_count: usize,
}

impl FrameGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn create_statement(
        &mut self,
        content: impl Into<StatementContent>,
        next: FrameIndex,
    ) -> FrameIndex {
        let frame_index = self.frames.len();
        let statement_index = self.statement_count;
        self.statement_count += 1;
        self.frames.push(Frame::Statement(Statement {
            frame_index,
            statement_index,
            content: content.into(),
            next,
        }));
        tracing::trace!(frame_index, statement_index, next, "created statement");
        frame_index
    }

    pub fn create_ref_statement(
        &mut self,
        pretext: impl Into<String>,
        source: TextSource,
        index: usize,
        posttext: impl Into<String>,
        next: FrameIndex,
    ) -> FrameIndex {
        self.create_statement(
            StatementContent::reference(source, index, pretext, posttext),
            next,
        )
    }

    /// Appends a question without choices and reserves its answer slot.
    pub fn create_question(&mut self, prompt: impl Into<String>) -> FrameIndex {
        let frame_index = self.frames.len();
        let question_index = self.answers.reserve_slot();
        self.frames.push(Frame::Question(Question {
            frame_index,
            question_index,
            prompt: prompt.into(),
            choices: Vec::new(),
        }));
        tracing::trace!(frame_index, question_index, "created question");
        frame_index
    }

    pub fn create_conditional_switch(
        &mut self,
        slot: SlotIndex,
        comparison: impl Into<AnswerValue>,
        if_true: FrameIndex,
        if_false: FrameIndex,
    ) -> FrameIndex {
        let frame_index = self.frames.len();
        self.frames.push(Frame::ConditionalSwitch(ConditionalSwitch {
            frame_index,
            slot,
            comparison: comparison.into(),
            if_true,
            if_false,
        }));
        tracing::trace!(frame_index, slot, if_true, if_false, "created conditional switch");
        frame_index
    }

    pub fn add_choice(
        &mut self,
        question_frame: FrameIndex,
        label: impl Into<String>,
        target: FrameIndex,
    ) -> Result<usize, QuizError> {
        Ok(self.question_mut(question_frame)?.add_choice(label, target))
    }

    pub fn add_exclusive_choice(
        &mut self,
        question_frame: FrameIndex,
        label: impl Into<String>,
        target: FrameIndex,
    ) -> Result<usize, QuizError> {
        Ok(self
            .question_mut(question_frame)?
            .add_exclusive_choice(label, target))
    }

    fn question_mut(&mut self, frame_index: FrameIndex) -> Result<&mut Question, QuizError> {
        match self.frames.get_mut(frame_index) {
            Some(Frame::Question(question)) => Ok(question),
            Some(_) => Err(QuizError::new(
                "GRAPH_NOT_A_QUESTION",
                format!("Frame {} is not a question.", frame_index),
            )),
            None => Err(QuizError::new(
                "GRAPH_NOT_A_QUESTION",
                format!("Frame {} does not exist.", frame_index),
            )),
        }
    }

    /// `None` means the index names no frame; navigation treats that as the end.
    pub fn frame(&self, frame_index: FrameIndex) -> Option<&Frame> {
        self.frames.get(frame_index)
    }

    /// Looks a question up by its slot address.
    pub fn question_frame(&self, question_index: SlotIndex) -> Option<&Question> {
        self.frames
            .iter()
            .filter_map(Frame::as_question)
            .find(|question| question.question_index == question_index)
    }

    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn statement_count(&self) -> usize {
        self.statement_count
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn answers_mut(&mut self) -> &mut AnswerStore {
        &mut self.answers
    }

    /// Split borrow used while presenting: the frame reads, the store may be written.
    pub(crate) fn frame_and_answers_mut(
        &mut self,
        frame_index: FrameIndex,
    ) -> (Option<&Frame>, &mut AnswerStore) {
        (self.frames.get(frame_index), &mut self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qz_core::FrameKind;

    #[test]
    fn frame_indices_follow_creation_order_across_kinds() {
        let mut graph = FrameGraph::new();
        assert_eq!(graph.create_question("q0"), 0);
        assert_eq!(graph.create_statement("s", 7), 1);
        assert_eq!(graph.create_conditional_switch(0, "x", 0, 1), 2);
        assert_eq!(graph.create_question("q1"), 3);
        assert_eq!(
            graph.create_ref_statement("", TextSource::Answers, 1, "", 0),
            4
        );

        let kinds = graph.frames().map(Frame::kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                FrameKind::Question,
                FrameKind::Statement,
                FrameKind::ConditionalSwitch,
                FrameKind::Question,
                FrameKind::Statement,
            ]
        );
        for (position, frame) in graph.frames().enumerate() {
            assert_eq!(frame.frame_index(), position);
        }
        assert_eq!(graph.statement_count(), 2);
    }

    #[test]
    fn each_question_reserves_one_unset_slot() {
        let mut graph = FrameGraph::new();
        for n in 0..5 {
            graph.create_question(format!("q{}", n));
            graph.create_statement("between", 0);
            assert_eq!(graph.answers().len(), n + 1);
        }
        assert_eq!(graph.question_count(), 5);
        assert!(graph.answers().slots().iter().all(Option::is_none));
        assert_eq!(
            graph.question_frame(3).map(|question| question.frame_index),
            Some(6)
        );
    }

    #[test]
    fn forward_and_dangling_targets_are_stored_as_is() {
        let mut graph = FrameGraph::new();
        let first = graph.create_statement("first", 5);
        assert_eq!(graph.len(), 1);
        assert!(graph.frame(5).is_none());
        let Some(Frame::Statement(statement)) = graph.frame(first) else {
            panic!("expected statement");
        };
        assert_eq!(statement.next, 5);
    }

    #[test]
    fn choices_can_be_added_after_creation() {
        let mut graph = FrameGraph::new();
        let question = graph.create_question("pick");
        graph.create_statement("a", 9);
        assert_eq!(graph.add_choice(question, "A", 1).expect("add"), 0);
        assert_eq!(graph.add_exclusive_choice(question, "B", 42).expect("add"), 1);

        let error = graph.add_choice(1, "x", 0).expect_err("statement is not a question");
        assert_eq!(error.code, "GRAPH_NOT_A_QUESTION");
        let missing = graph.add_choice(10, "x", 0).expect_err("missing frame");
        assert_eq!(missing.code, "GRAPH_NOT_A_QUESTION");

        let question = graph
            .frame(question)
            .and_then(Frame::as_question)
            .expect("question frame");
        assert_eq!(question.choices.len(), 2);
        assert_eq!(question.choices[1].target, 42);
    }

    #[test]
    fn title_is_optional() {
        assert_eq!(FrameGraph::new().title(), None);
        let mut graph = FrameGraph::with_title("Example Quiz");
        assert_eq!(graph.title(), Some("Example Quiz"));
        graph.set_title("Renamed");
        assert_eq!(graph.title(), Some("Renamed"));
        assert!(graph.is_empty());
    }
}
