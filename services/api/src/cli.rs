use crate::demo::{run_demo, run_score_report, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cro_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CRO Outreach Engine",
    about = "Score e-commerce audits and draft outreach from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an audit and print the breakdown, alerts, and bullets
    Score(ScoreArgs),
    /// Run an end-to-end CLI demo covering scoring and outreach drafting
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
