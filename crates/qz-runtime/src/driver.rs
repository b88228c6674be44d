use std::collections::VecDeque;

use qz_core::{EngineOutput, FrameIndex, QuizError, UserAction};

use crate::{NavigationEngine, RenderSurface};

/// Supplies the single user action each boundary waits for.
pub trait ActionSource {
    /// `None` means no action is coming; the engine stays suspended.
    fn next_action(&mut self, output: &EngineOutput) -> Result<Option<UserAction>, QuizError>;
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedActions {
    actions: VecDeque<UserAction>,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = UserAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionSource for ScriptedActions {
    fn next_action(&mut self, _output: &EngineOutput) -> Result<Option<UserAction>, QuizError> {
        Ok(self.actions.pop_front())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveOutcome {
    Halted,
    Suspended {
        frame_index: FrameIndex,
        output: EngineOutput,
    },
}

/// Starts the engine at `entry` and feeds it actions until it halts or the
/// source runs dry. A rejected action is returned as an error.
pub fn drive<S: RenderSurface>(
    engine: &mut NavigationEngine<S>,
    source: &mut dyn ActionSource,
    entry: FrameIndex,
) -> Result<DriveOutcome, QuizError> {
    let mut output = engine.start(entry)?;
    loop {
        let Some(frame_index) = output.frame_index() else {
            return Ok(DriveOutcome::Halted);
        };
        let Some(action) = source.next_action(&output)? else {
            return Ok(DriveOutcome::Suspended {
                frame_index,
                output,
            });
        };
        output = engine.apply(action)?;
    }
}
