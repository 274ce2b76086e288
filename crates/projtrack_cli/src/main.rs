//! Project tracker command line front end.
//!
//! # Responsibility
//! - Drive the same store operations the UI bridge exposes, from a shell.
//! - Keep output machine-readable (pretty JSON on stdout).
//!
//! Exit codes: 0 success, 1 persistence or logging failure, 2 not found.

use clap::Parser;
use projtrack_core::{init_logging, resolve_data_path, resolve_log_level, ProjectStore};

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{execute, Outcome};

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = resolve_log_level(cli.log_level.as_deref());
        if let Err(error) = init_logging(&level, log_dir) {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    }

    // Ping never touches the data file.
    let mut store = match cli.command {
        Command::Ping => ProjectStore::empty(resolve_data_path(cli.data.as_deref())),
        _ => ProjectStore::open(resolve_data_path(cli.data.as_deref())),
    };

    let exit_code = match execute(cli.command, &mut store) {
        Ok(Outcome::Json(value)) => match serde_json::to_string_pretty(&value) {
            Ok(text) => {
                println!("{text}");
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Ok(Outcome::Text(text)) => {
            println!("{text}");
            0
        }
        Ok(Outcome::NotFound(id)) => {
            eprintln!("project not found: {id}");
            2
        }
        Err(error) => {
            log::error!(
                "event=cli_command module=cli status=error error_code={}",
                error.code()
            );
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}
