use std::ffi::OsString;

use clap::Parser;
use qz_api::{start_engine, StartEngineOptions};
use qz_core::QuizError;

mod action_script;
mod agent;
mod boundary_runner;
mod cli_args;
mod console_surface;
mod error_map;
mod inspect;
mod line_tui;
mod logging;
mod models;
mod source_loader;

pub(crate) use action_script::parse_action_script;
pub(crate) use boundary_runner::{collect_boundary, emit_boundary};
pub(crate) use cli_args::{
    AgentArgs, AgentCommand, Cli, InspectArgs, Mode, PlayArgs, QuizSourceArgs, RunArgs,
};
pub(crate) use console_surface::ConsoleSurface;
pub(crate) use error_map::{
    emit_error, json_string, map_cli_json, map_cli_source_read, map_tui_io,
};
pub(crate) use inspect::inspect_lines;
pub(crate) use line_tui::run_tui_line_mode;
#[cfg(test)]
pub(crate) use line_tui::{handle_tui_command, run_tui_line_mode_with_io, PlayEngine};
pub use logging::init_tracing;
pub(crate) use models::{
    BoundaryEvent, BoundaryResult, LoadedQuiz, TuiCommandAction, TuiCommandContext,
};
pub(crate) use source_loader::load_quiz;
#[cfg(test)]
pub(crate) use source_loader::load_quiz_file;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, QuizError> {
    match cli.command {
        Mode::Play(args) => run_play(args),
        Mode::Agent(args) => agent::run_agent(args),
        Mode::Inspect(args) => run_inspect(args),
    }
}

fn run_play(args: PlayArgs) -> Result<i32, QuizError> {
    let quiz = load_quiz(&args.source)?;
    let entry = args.entry.unwrap_or(quiz.compiled.entry);
    let mut engine = start_engine(
        quiz.compiled.clone(),
        ConsoleSurface::default(),
        StartEngineOptions {
            entry: Some(entry),
            pass_through_limit: args.pass_through_limit,
        },
    )?;
    tracing::info!(quiz = %quiz.id, entry, "playing quiz");

    let context = TuiCommandContext {
        quiz: &quiz,
        entry,
    };
    run_tui_line_mode(&context, &mut engine)
}

fn run_inspect(args: InspectArgs) -> Result<i32, QuizError> {
    let quiz = load_quiz(&args.source)?;
    for line in inspect_lines(&quiz) {
        println!("{}", line);
    }
    Ok(0)
}
