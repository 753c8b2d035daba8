use atelier::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            atelier::cli::init::run(&path)?;
        }
        Some(Commands::Serve { host, port }) => {
            atelier::cli::serve::run(&cli.config, host, port).await?;
        }
        Some(Commands::Migrate) => {
            atelier::cli::migrate::run(&cli.config)?;
        }
        Some(Commands::Token { command }) => {
            atelier::cli::token::run(&cli.config, command)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
