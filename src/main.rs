use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linkcaster::app::AppContext;
use linkcaster::cli::{commands, BlacklistAction, Cli, Commands, RunOverrides};
use linkcaster::config::{Config, Credentials};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    if let Commands::Run {
        live,
        safe,
        cap,
        no_pacing,
    } = cli.command
    {
        RunOverrides {
            live,
            safe,
            cap,
            no_pacing,
        }
        .apply(&mut config);
    }

    let ctx = AppContext::new(config, cli.data_dir)?;

    match cli.command {
        Commands::Run { .. } => {
            commands::run(&ctx, &Credentials::from_env()).await?;
        }
        Commands::Status => {
            commands::status(&ctx)?;
        }
        Commands::History { limit } => {
            commands::history(&ctx, limit)?;
        }
        Commands::Trusted => {
            commands::trusted(&ctx)?;
        }
        Commands::Blacklist { action } => match action {
            BlacklistAction::List => commands::blacklist_list(&ctx)?,
            BlacklistAction::Add { domain } => commands::blacklist_add(&ctx, &domain)?,
            BlacklistAction::Remove { domain } => commands::blacklist_remove(&ctx, &domain)?,
        },
    }

    Ok(())
}
