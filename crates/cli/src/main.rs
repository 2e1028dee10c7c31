use anyhow::Result;
use clap::{Parser, Subcommand};
use localbot_core::Bot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// localbot - A demo bot that runs a fixed list of maintenance tasks
#[derive(Parser)]
#[command(name = "localbot")]
#[command(about = "Runs the built-in bot tasks with timestamped logging")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (default)
    Run,
    /// Show the task execution order without running anything
    Plan,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr and stay off unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let bot = Bot::builtin();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute(&bot).await,
        Commands::Plan => commands::plan::execute(&bot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_the_bot() {
        let cli = Cli::try_parse_from(["localbot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_plan_subcommand_parses() {
        let cli = Cli::try_parse_from(["localbot", "plan"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Plan)));
    }

    #[test]
    fn test_unknown_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["localbot", "--tasks", "extra.yml"]).is_err());
    }
}
