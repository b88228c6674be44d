use qz_compiler::compile_quiz_xml;
use qz_core::{FrameIndex, QuizError};
use qz_runtime::{NavigationEngine, NavigationEngineOptions, RenderSurface};

mod sample;

pub use qz_compiler::CompiledQuiz;
pub use sample::{build_sample_graph, SAMPLE_TITLE};

#[derive(Debug, Clone)]
pub struct CreateEngineFromXmlOptions {
    pub quiz_xml: String,
    /// Overrides the document's `entry` attribute.
    pub entry: Option<FrameIndex>,
    pub pass_through_limit: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct StartEngineOptions {
    pub entry: Option<FrameIndex>,
    pub pass_through_limit: Option<usize>,
}

pub fn compile_quiz_from_xml(quiz_xml: &str) -> Result<CompiledQuiz, QuizError> {
    compile_quiz_xml(quiz_xml)
}

/// Compiles `quiz_xml` and starts navigation on `surface`.
pub fn create_engine_from_xml<S: RenderSurface>(
    options: CreateEngineFromXmlOptions,
    surface: S,
) -> Result<NavigationEngine<S>, QuizError> {
    let compiled = compile_quiz_xml(&options.quiz_xml)?;
    start_engine(
        compiled,
        surface,
        StartEngineOptions {
            entry: options.entry,
            pass_through_limit: options.pass_through_limit,
        },
    )
}

pub fn start_engine<S: RenderSurface>(
    compiled: CompiledQuiz,
    surface: S,
    options: StartEngineOptions,
) -> Result<NavigationEngine<S>, QuizError> {
    let entry = options.entry.unwrap_or(compiled.entry);
    let mut engine = NavigationEngine::new(
        compiled.graph,
        surface,
        NavigationEngineOptions {
            pass_through_limit: options.pass_through_limit,
        },
    );
    engine.start(entry)?;
    Ok(engine)
}
