use crate::demo::{run_deadline, run_demo, run_screen, DeadlineArgs, DemoArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use grievance_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Grievance Desk",
    about = "Screen real-estate complaints, compute filing deadlines, and serve the deadline API",
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
    /// Compute a filing deadline, its status, and the reminder schedule
    Deadline(DeadlineArgs),
    /// Run the jurisdiction screening questionnaire from flags
    Screen(ScreenArgs),
    /// Walk through screening, filing, reminders, and status for a sample complaint
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
        Command::Deadline(args) => run_deadline(args),
        Command::Screen(args) => run_screen(args),
        Command::Demo(args) => run_demo(args),
    }
}
