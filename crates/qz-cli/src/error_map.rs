use qz_core::QuizError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> QuizError {
    QuizError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: QuizError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!("ERROR_MSG_JSON:{}", json_string(&error.message));
    if let Some(span) = error.span {
        println!("ERROR_AT:{}:{}", span.start.line, span.start.column);
    }
    1
}

/// JSON-quotes a string for line-oriented output.
pub(crate) fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value.escape_default()))
}

pub(crate) fn map_tui_io(error: std::io::Error) -> QuizError {
    map_error("TUI_IO", error)
}

pub(crate) fn map_cli_source_read(error: std::io::Error) -> QuizError {
    map_error("CLI_SOURCE_READ", error)
}

pub(crate) fn map_cli_json(error: serde_json::Error) -> QuizError {
    map_error("CLI_JSON", error)
}
