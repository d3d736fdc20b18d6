//! notestool - a menu-driven note manager for the terminal.
//!
//! Notes live in named collections, one ROT13-obfuscated file each. The
//! binary parses arguments, loads config, checks the access password, and
//! then hands the terminal to the interactive session.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod security;
mod ui;

use std::io::{self, IsTerminal};

use clap::Parser;
use log::{info, warn};
use notes_core::storage::FileStore;

use crate::app::Session;
use crate::cli::{usage, Cli};
use crate::config::{load_config, xdg_state_dir};
use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;
use crate::helpers::StdinLines;
use crate::logging::init_logging;
use crate::security::{check_access, verifier_from_config, Access};
use crate::ui::{Console, UiContext};

fn main() -> anyhow::Result<()> {
    if let Err(err) = run() {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        return Err(err);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(collection) = cli.collection() else {
        println!("{}", usage());
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;

    // Held until exit so buffered records are flushed.
    let _logger = match xdg_state_dir().and_then(|dir| init_logging(&config.log, &dir)) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("Warning: file logging disabled: {:#}", err);
            None
        }
    };

    let ctx = UiContext::from_env(cli.no_color, cli.ascii || config.ui.ascii);
    let mut input = StdinLines::new();
    let mut stdout = io::stdout();
    let mut console = Console::new(&ctx, &mut input, &mut stdout);

    let verifier = verifier_from_config(&config.security, std::env::var(PASSWORD_ENV).ok());
    if check_access(&mut console, verifier.as_ref()) == Access::Denied {
        warn!("access denied for collection {}", collection);
        let err = if io::stdin().is_terminal() {
            CliError::auth_failed("Wrong password. Access denied.")
        } else {
            CliError::auth_failed_with_hint(
                "Wrong password. Access denied.",
                format!("Hint: Set {} when piping input.", PASSWORD_ENV),
            )
        };
        return Err(err.into());
    }

    let store = match config.notes.dir.as_deref() {
        Some(dir) => FileStore::with_base_dir(dir),
        None => FileStore::new(),
    };
    info!("using {}", store.path_for(collection).display());

    let mut session = Session::open(&mut console, &store, collection, config.ui.page_size);
    session.run(&mut console);
    info!("session ended with {} notes", session.notes().len());
    Ok(())
}
