//! `notelab` - command-line client for the collaborative notes backend

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::state::AppState;

mod cli;
mod commands;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    notelab_core::init_logging();

    let cli = Cli::parse();
    let state = AppState::new(cli.backend.as_deref())?;
    let app = state.app();

    let outcome = match cli.command {
        Commands::Auth(command) => commands::auth::run(app, command).await,
        Commands::Teams(command) => commands::teams::run(app, command).await,
        Commands::Topics(command) => commands::topics::run(app, command).await,
        Commands::Notes(command) => commands::notes::run(app, command).await,
        Commands::Ai(command) => commands::ai::run(app, command).await,
        Commands::Theme { action } => commands::settings::run(app, action),
    };

    if let Err(e) = &outcome {
        commands::print_error(e);
        std::process::exit(1);
    }

    Ok(())
}
