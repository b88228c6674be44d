use std::fs;
use std::path::Path;

use qz_api::{build_sample_graph, compile_quiz_from_xml, SAMPLE_TITLE};
use qz_core::QuizError;

use crate::{map_cli_source_read, LoadedQuiz, QuizSourceArgs};

pub(crate) fn load_quiz(source: &QuizSourceArgs) -> Result<LoadedQuiz, QuizError> {
    if source.sample {
        return Ok(LoadedQuiz {
            id: "sample".to_string(),
            title: SAMPLE_TITLE.to_string(),
            compiled: build_sample_graph()?,
        });
    }

    let Some(path) = source.quiz_file.as_deref() else {
        return Err(QuizError::new(
            "CLI_SOURCE_MISSING",
            "Either --quiz-file or --sample is required.",
        ));
    };
    load_quiz_file(Path::new(path))
}

pub(crate) fn load_quiz_file(path: &Path) -> Result<LoadedQuiz, QuizError> {
    if !path.is_file() {
        return Err(QuizError::new(
            "CLI_SOURCE_NOT_FOUND",
            format!("Quiz file does not exist: {}", path.display()),
        ));
    }

    let raw = fs::read_to_string(path).map_err(map_cli_source_read)?;
    let compiled = compile_quiz_from_xml(&raw)?;
    let title = compiled
        .graph
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default()
        });
    tracing::debug!(path = %path.display(), frames = compiled.graph.len(), "loaded quiz file");

    Ok(LoadedQuiz {
        id: format!("file:{}", path.display()),
        title,
        compiled,
    })
}
