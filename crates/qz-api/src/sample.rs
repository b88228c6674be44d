use qz_compiler::CompiledQuiz;
use qz_core::QuizError;
use qz_runtime::{FrameGraph, TextSource};

pub const SAMPLE_TITLE: &str = "Example Quiz";

/// The two-question example quiz, assembled through the authoring API.
///
/// The second question's targets are computed from its own index, and the
/// closing statement loops back to the entry frame.
pub fn build_sample_graph() -> Result<CompiledQuiz, QuizError> {
    let mut graph = FrameGraph::with_title(SAMPLE_TITLE);

    graph.create_statement(SAMPLE_TITLE, 1);
    let first = graph.create_question("1) true or false?");
    graph.create_statement("True Selected", 4);
    graph.create_statement("False Selected", 4);
    graph.add_choice(first, "true", 2)?;
    graph.add_choice(first, "false", 3)?;
    // Optional: without it the second question moves to index 4, where frames 2 and 3 already lead.
    graph.create_ref_statement("Answer of \"", TextSource::Answers, 0, "\" saved", 5);

    let second = graph.create_question("2) Again, true or false?");
    graph.add_exclusive_choice(second, "true", second + 1)?;
    graph.add_exclusive_choice(second, "false", second + 2)?;
    graph.create_conditional_switch(0, "true", second + 3, second + 4);
    graph.create_conditional_switch(0, "true", second + 4, second + 5);
    graph.create_statement("True selected twice", second + 6);
    graph.create_statement("Both selected", second + 6);
    graph.create_statement("False selected twice", second + 6);

    graph.create_statement("Returning to start", 0);

    Ok(CompiledQuiz { graph, entry: 0 })
}
