use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dtx_cli::commands::{agenda, next, priority, recap, reset, save, status, timeline, util};
use dtx_cli::{Cli, Commands, Config};
use dtx_core::Agenda;
use dtx_store::PreferencesStore;

/// Load config and open the preferences store, ensuring the parent directory exists.
fn open_store(config_path: Option<&Path>) -> Result<(PreferencesStore, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let store =
        PreferencesStore::open(&config.database_path).context("failed to open preferences store")?;
    Ok((store, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let (store, config) = open_store(cli.config.as_deref())?;
    let agenda = Agenda::bundled().context("failed to load bundled agenda")?;
    let mut out = io::stdout().lock();

    match command {
        Commands::Timeline {
            day,
            filter,
            at,
            json,
        } => {
            let prefs = util::load_preferences(&store)?;
            let (day, at) = util::resolve_moment(*day, *at, &config)?;
            timeline::run(&mut out, &agenda, &prefs, day, (*filter).into(), at, *json)?;
        }
        Commands::Next { day, at, json } => {
            let prefs = util::load_preferences(&store)?;
            let (day, at) = util::resolve_moment(*day, *at, &config)?;
            next::run(&mut out, &agenda, &prefs, day, at, *json)?;
        }
        Commands::Agenda { json } => {
            let prefs = util::load_preferences(&store)?;
            agenda::run(&mut out, &agenda, &prefs, *json)?;
        }
        Commands::Recap { day } => {
            let prefs = util::load_preferences(&store)?;
            let (day, _) = util::resolve_moment(*day, None, &config)?;
            recap::run(&mut out, &agenda, &prefs, day)?;
        }
        Commands::Save { session } => save::run(&mut out, &store, &agenda, session)?,
        Commands::Priority { category } => priority::toggle(&mut out, &store, *category)?,
        Commands::Priorities => priority::list(&mut out, &store)?,
        Commands::Status => status::run(&mut out, &store, &agenda, &config)?,
        Commands::Reset => reset::run(&mut out, &store)?,
    }

    Ok(())
}
