use qz_core::QuizError;
use qz_runtime::{
    drive, DriveOutcome, NavigationEngine, NavigationEngineOptions, ScriptedActions,
    TranscriptSurface,
};

use crate::{
    collect_boundary, emit_boundary, load_quiz, parse_action_script, AgentArgs, AgentCommand,
    RunArgs,
};

pub(super) fn run_agent(args: AgentArgs) -> Result<i32, QuizError> {
    match args.command {
        AgentCommand::Run(args) => run_actions(args),
    }
}

pub(super) fn run_actions(args: RunArgs) -> Result<i32, QuizError> {
    let actions = parse_action_script(&args.actions)?;
    let quiz = load_quiz(&args.source)?;
    let entry = args.entry.unwrap_or(quiz.compiled.entry);

    let mut engine = NavigationEngine::new(
        quiz.compiled.graph,
        TranscriptSurface::default(),
        NavigationEngineOptions {
            pass_through_limit: args.pass_through_limit,
        },
    );
    let mut source = ScriptedActions::new(actions);
    let outcome = drive(&mut engine, &mut source, entry)?;
    if outcome == DriveOutcome::Halted && source.remaining() > 0 {
        tracing::warn!(
            remaining = source.remaining(),
            "navigation halted before every action was applied"
        );
    }

    emit_boundary(collect_boundary(&engine)?);
    Ok(0)
}
