use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "qz-cli")]
#[command(about = "Quiz frame player")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Play a quiz interactively on the terminal.
    Play(PlayArgs),
    Agent(AgentArgs),
    /// List the frames of a quiz.
    Inspect(InspectArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct QuizSourceArgs {
    #[arg(long = "quiz-file", conflicts_with = "sample", required_unless_present = "sample")]
    pub(crate) quiz_file: Option<String>,
    /// Use the built-in example quiz.
    #[arg(long = "sample")]
    pub(crate) sample: bool,
}

#[derive(Debug, Args)]
pub(crate) struct PlayArgs {
    #[command(flatten)]
    pub(crate) source: QuizSourceArgs,
    #[arg(long = "entry")]
    pub(crate) entry: Option<usize>,
    #[arg(long = "pass-through-limit")]
    pub(crate) pass_through_limit: Option<usize>,
}

#[derive(Debug, Args)]
pub(crate) struct AgentArgs {
    #[command(subcommand)]
    pub(crate) command: AgentCommand,
}

#[derive(Debug, Subcommand)]
pub(crate) enum AgentCommand {
    /// Apply a scripted list of actions and report where navigation stopped.
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    pub(crate) source: QuizSourceArgs,
    #[arg(long = "entry")]
    pub(crate) entry: Option<usize>,
    /// Comma separated actions: `d` dismiss, `cN` choose N, `sN` select N.
    #[arg(long = "actions", default_value = "")]
    pub(crate) actions: String,
    #[arg(long = "pass-through-limit")]
    pub(crate) pass_through_limit: Option<usize>,
}

#[derive(Debug, Args)]
pub(crate) struct InspectArgs {
    #[command(flatten)]
    pub(crate) source: QuizSourceArgs,
}
