mod answer_store;
mod content;
mod driver;
mod engine;
mod frame;
mod graph;
mod surface;

pub use answer_store::AnswerStore;
pub use content::{StatementContent, TextSource, INVALID_STATEMENT_TEXT};
pub use driver::{drive, ActionSource, DriveOutcome, ScriptedActions};
pub use engine::{NavigationEngine, NavigationEngineOptions, DEFAULT_PASS_THROUGH_LIMIT};
pub use frame::{Choice, ConditionalSwitch, Frame, Presentation, Question, Statement};
pub use graph::FrameGraph;
pub use surface::{NullSurface, RenderSurface, SurfaceEvent, TranscriptSurface};
