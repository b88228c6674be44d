use std::io::{self, BufRead, Write};

use qz_core::{ChoiceDiscipline, ChoiceItem, EngineOutput, QuizError};
use qz_runtime::NavigationEngine;

use crate::{
    map_cli_json, map_tui_io, ConsoleSurface, TuiCommandAction, TuiCommandContext,
};

const HELP_LINE: &str = "commands: :help :answers :restart :quit";

pub(crate) type PlayEngine = NavigationEngine<ConsoleSurface>;

pub(crate) fn run_tui_line_mode(
    context: &TuiCommandContext<'_>,
    engine: &mut PlayEngine,
) -> Result<i32, QuizError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    run_tui_line_mode_with_io(context, engine, &mut reader, &mut writer)
}

pub(crate) fn run_tui_line_mode_with_io(
    context: &TuiCommandContext<'_>,
    engine: &mut PlayEngine,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, QuizError> {
    writeln!(writer, "{}", context.quiz.title).map_err(map_tui_io)?;
    writeln!(writer, "{}", HELP_LINE).map_err(map_tui_io)?;
    writeln!(writer).map_err(map_tui_io)?;

    loop {
        flush_surface(engine, writer)?;
        let output = engine.current_output()?;
        if output == EngineOutput::Halted {
            writeln!(writer, "[END]").map_err(map_tui_io)?;
            return Ok(0);
        }

        let Some(raw) = prompt_input_from("> ", reader, writer)? else {
            return Ok(0);
        };
        let mut emit = |line: String| {
            let _ = writeln!(writer, "{}", line);
        };
        match handle_tui_command(raw.as_str(), context, engine, &mut emit)? {
            TuiCommandAction::Continue | TuiCommandAction::RefreshBoundary => continue,
            TuiCommandAction::Quit => return Ok(0),
            TuiCommandAction::NotHandled => {}
        }

        if let Err(error) = apply_line(raw.trim(), &output, engine) {
            writeln!(writer, "! {}", error.message).map_err(map_tui_io)?;
        }
    }
}

/// Statements advance on an empty line or `n`; questions take a choice index.
fn apply_line(raw: &str, output: &EngineOutput, engine: &mut PlayEngine) -> Result<(), QuizError> {
    match output {
        EngineOutput::Statement { .. } => {
            if raw.is_empty() || raw.eq_ignore_ascii_case("n") {
                engine.dismiss()?;
                Ok(())
            } else {
                Err(QuizError::new(
                    "TUI_DISMISS_PARSE",
                    "Press enter to continue.",
                ))
            }
        }
        EngineOutput::Question { choices, .. } => {
            let index = raw.parse::<usize>().map_err(|_| {
                QuizError::new("TUI_CHOICE_PARSE", format!("Invalid choice index: {}", raw))
            })?;
            match discipline_of(choices, index) {
                Some(ChoiceDiscipline::Free) => engine.choose(index)?,
                Some(ChoiceDiscipline::Exclusive) => engine.select(index)?,
                None => {
                    return Err(QuizError::new(
                        "TUI_CHOICE_PARSE",
                        format!("No choice with index {}", index),
                    ))
                }
            };
            Ok(())
        }
        EngineOutput::Halted => Ok(()),
    }
}

fn discipline_of(choices: &[ChoiceItem], index: usize) -> Option<ChoiceDiscipline> {
    choices
        .iter()
        .find(|item| item.index == index)
        .map(|item| item.discipline)
}

fn flush_surface(engine: &mut PlayEngine, writer: &mut dyn Write) -> Result<(), QuizError> {
    for line in engine.surface_mut().drain_lines() {
        writeln!(writer, "{}", line).map_err(map_tui_io)?;
    }
    Ok(())
}

pub(crate) fn handle_tui_command(
    raw: &str,
    context: &TuiCommandContext<'_>,
    engine: &mut PlayEngine,
    emit: &mut dyn FnMut(String),
) -> Result<TuiCommandAction, QuizError> {
    match raw.trim() {
        ":help" => {
            emit(HELP_LINE.to_string());
            Ok(TuiCommandAction::Continue)
        }
        ":answers" => {
            let json = serde_json::to_string(engine.answers().slots()).map_err(map_cli_json)?;
            emit(format!("answers: {}", json));
            Ok(TuiCommandAction::Continue)
        }
        ":restart" => {
            engine.reset();
            engine.start(context.entry)?;
            emit("restarted".to_string());
            Ok(TuiCommandAction::RefreshBoundary)
        }
        ":quit" => {
            emit("bye".to_string());
            Ok(TuiCommandAction::Quit)
        }
        _ => Ok(TuiCommandAction::NotHandled),
    }
}

/// `None` on end of input.
pub(crate) fn prompt_input_from(
    prefix: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<Option<String>, QuizError> {
    write!(writer, "{}", prefix).map_err(map_tui_io)?;
    writer.flush().map_err(map_tui_io)?;
    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(map_tui_io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
