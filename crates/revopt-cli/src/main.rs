use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use revopt_cli::{
    cli::{Cli, Commands},
    config::load_config,
    Overrides, RevoptConfig, Session,
};

mod commands;

fn log_level(cli: &Cli, config: Option<&RevoptConfig>) -> Level {
    cli.log_level
        .or_else(|| config.and_then(|c| c.logging.level.parse().ok()))
        .unwrap_or(Level::INFO)
}

fn run(cli: &Cli, config: RevoptConfig) -> Result<()> {
    let overrides = Overrides {
        data: cli.data.clone(),
        elasticity: cli.elasticity,
        skip_invalid_rows: cli.skip_invalid_rows,
    };
    let config = overrides.apply(config)?;
    let load = |config: RevoptConfig| Session::load(config, overrides.skip_invalid_rows);

    match &cli.command {
        Some(Commands::Dashboard {
            room,
            month,
            price,
            width,
            format,
        }) => commands::dashboard::handle(
            &load(config)?,
            room.as_deref(),
            month.as_deref(),
            *price,
            *width,
            *format,
        ),
        Some(Commands::Revenue { format }) => {
            commands::tables::handle_revenue(&load(config)?, *format)
        }
        Some(Commands::Compare { room, format }) => {
            commands::tables::handle_compare(&load(config)?, room.as_deref(), *format)
        }
        Some(Commands::Simulate {
            room,
            month,
            price,
            format,
        }) => commands::simulate::handle(&load(config)?, room, month, *price, *format),
        Some(Commands::Rooms) => commands::tables::handle_rooms(&load(config)?),
        Some(Commands::Months { room }) => commands::tables::handle_months(&load(config)?, room),
        Some(Commands::Export { out_dir, format }) => {
            commands::export::handle(&load(config)?, out_dir, format)
        }
        Some(Commands::Explore { width }) => commands::explore::handle(&load(config)?, *width),
        Some(Commands::Config) => commands::config::handle(&config),
        Some(Commands::Completions { .. }) | None => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Completions need neither config nor logging.
    if let Some(Commands::Completions { shell, out }) = &cli.command {
        if let Err(err) = commands::completions::handle(*shell, out.as_deref()) {
            eprintln!("Completions generation failed: {err:#}");
            process::exit(1);
        }
        return;
    }

    let config = load_config(cli.config.as_deref());
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&cli, config.as_ref().ok()))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
    }

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!("Loading configuration failed: {err:#}");
            process::exit(1);
        }
    };

    if cli.command.is_none() {
        info!("No subcommand provided. Use `revopt --help` for more information.");
        return;
    }

    if let Err(err) = run(&cli, config) {
        error!("{err:#}");
        process::exit(1);
    }
}
