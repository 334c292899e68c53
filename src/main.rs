use chain_orchestrator::cli::{self, Cli, Commands};
use chain_orchestrator::config::Config;
use chain_orchestrator::{logging, startup};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    logging::init_tracing(config.log_format);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => startup::serve(config).await,
        Commands::Invoke { event } => cli::handle_invoke(&config, event.as_deref()).await,
        Commands::Config => cli::handle_config_validate(&config),
    }
}
