use qz_api::CompiledQuiz;
use qz_core::{ChoiceItem, FrameIndex};

#[derive(Debug, Clone)]
pub(crate) struct LoadedQuiz {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) compiled: CompiledQuiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundaryEvent {
    Statement,
    Question,
    Halted,
}

#[derive(Debug, Clone)]
pub(crate) struct BoundaryResult {
    pub(crate) event: BoundaryEvent,
    pub(crate) frame_index: Option<FrameIndex>,
    pub(crate) texts: Vec<String>,
    pub(crate) prompt_text: Option<String>,
    pub(crate) choices: Vec<ChoiceItem>,
    pub(crate) answers_json: String,
    pub(crate) steps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TuiCommandAction {
    NotHandled,
    Continue,
    RefreshBoundary,
    Quit,
}

pub(crate) struct TuiCommandContext<'a> {
    pub(crate) quiz: &'a LoadedQuiz,
    pub(crate) entry: FrameIndex,
}
