use qz_core::{EngineOutput, FrameIndex, NavigationState, QuizError};

use crate::{AnswerStore, FrameGraph, NullSurface, Presentation, RenderSurface};

mod boundary;
#[cfg(test)]
mod tests;

/// Consecutive pass-through hops allowed before navigation gives up.
pub const DEFAULT_PASS_THROUGH_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Default)]
pub struct NavigationEngineOptions {
    pub pass_through_limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingBoundary {
    Dismiss {
        frame_index: FrameIndex,
        next: FrameIndex,
    },
    Choice {
        frame_index: FrameIndex,
    },
}

/// Single-cursor state machine over a [`FrameGraph`].
///
/// Exactly one frame is active at a time. Conditional switches are chained
/// through without becoming the active frame; an index without a frame halts
/// the session for good.
pub struct NavigationEngine<S: RenderSurface = NullSurface> {
    graph: FrameGraph,
    surface: S,
    pass_through_limit: usize,

    state: NavigationState,
    pending_boundary: Option<PendingBoundary>,
    visited_steps: usize,
}

impl NavigationEngine<NullSurface> {
    pub fn headless(graph: FrameGraph) -> Self {
        Self::new(graph, NullSurface, NavigationEngineOptions::default())
    }
}

impl<S: RenderSurface> NavigationEngine<S> {
    pub fn new(graph: FrameGraph, surface: S, options: NavigationEngineOptions) -> Self {
        Self {
            graph,
            surface,
            pass_through_limit: options
                .pass_through_limit
                .unwrap_or(DEFAULT_PASS_THROUGH_LIMIT),
            state: NavigationState::Idle,
            pending_boundary: None,
            visited_steps: 0,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn graph(&self) -> &FrameGraph {
        &self.graph
    }

    pub fn answers(&self) -> &AnswerStore {
        self.graph.answers()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of user-visible presentations so far.
    pub fn visited_steps(&self) -> usize {
        self.visited_steps
    }

    pub fn start(&mut self, entry: FrameIndex) -> Result<EngineOutput, QuizError> {
        if self.state != NavigationState::Idle {
            return Err(QuizError::new(
                "ENGINE_ALREADY_STARTED",
                "Navigation has already been started.",
            ));
        }
        tracing::debug!(entry, "starting navigation");
        self.enter(entry)
    }

    /// Returns to `Idle` and clears every recorded answer.
    pub fn reset(&mut self) {
        if self.pending_boundary.take().is_some() {
            self.surface.teardown();
        }
        self.graph.answers_mut().clear();
        self.state = NavigationState::Idle;
        self.visited_steps = 0;
    }

    /// Describes the active boundary again without side effects.
    pub fn current_output(&self) -> Result<EngineOutput, QuizError> {
        match self.state {
            NavigationState::Idle => Err(not_started()),
            NavigationState::Halted => Ok(EngineOutput::Halted),
            NavigationState::Presenting { frame_index } => self
                .graph
                .frame(frame_index)
                .and_then(|frame| frame.output(self.graph.answers()))
                .ok_or_else(|| {
                    QuizError::new(
                        "ENGINE_FRAME_MISSING",
                        format!("Presenting frame {} is no longer valid.", frame_index),
                    )
                }),
        }
    }

    fn transition(&mut self, from: FrameIndex, next: FrameIndex) -> Result<EngineOutput, QuizError> {
        self.surface.teardown();
        self.pending_boundary = None;
        tracing::debug!(from, next, "frame resolved");
        self.enter(next)
    }

    fn enter(&mut self, target: FrameIndex) -> Result<EngineOutput, QuizError> {
        let mut current = target;
        let mut hops = 0usize;

        loop {
            let Some(frame) = self.graph.frame(current) else {
                tracing::debug!(frame_index = current, "no frame at target, navigation halts");
                self.halt();
                return Ok(EngineOutput::Halted);
            };

            match frame.present(self.graph.answers(), &mut self.surface) {
                Presentation::PassThrough { target } => {
                    hops += 1;
                    if hops > self.pass_through_limit {
                        self.halt();
                        return Err(QuizError::new(
                            "ENGINE_PASS_THROUGH_GUARD",
                            format!(
                                "Passed through {} conditional frames without reaching a visible frame.",
                                self.pass_through_limit
                            ),
                        ));
                    }
                    tracing::trace!(from = current, to = target, "pass-through");
                    current = target;
                }
                Presentation::AwaitDismiss { next } => {
                    self.pending_boundary = Some(PendingBoundary::Dismiss {
                        frame_index: current,
                        next,
                    });
                    break;
                }
                Presentation::AwaitChoice => {
                    self.pending_boundary = Some(PendingBoundary::Choice {
                        frame_index: current,
                    });
                    break;
                }
            }
        }

        self.state = NavigationState::Presenting {
            frame_index: current,
        };
        self.visited_steps += 1;
        self.current_output()
    }

    fn halt(&mut self) {
        self.pending_boundary = None;
        self.state = NavigationState::Halted;
    }
}

fn not_started() -> QuizError {
    QuizError::new("ENGINE_NOT_STARTED", "Navigation has not been started.")
}

fn halted() -> QuizError {
    QuizError::new(
        "ENGINE_HALTED",
        "Navigation has halted and accepts no further input.",
    )
}
