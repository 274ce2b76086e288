//! Command line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "projtrack",
    version,
    about = "Inspect and edit the project tracker data file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Data file (default: $PROJTRACK_DATA_PATH, then ./projects.json).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<String>,

    /// Log level (default: $PROJTRACK_LOG_LEVEL, then build default).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    pub log_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print all projects, or only those with an exact status.
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Print one project.
    Show { id: String },
    /// Create a project.
    Add(AddArgs),
    /// Update fields of an existing project.
    Update(UpdateArgs),
    /// Delete a project.
    Delete { id: String },
    /// Check core linkage and print its version.
    Ping,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[command(flatten)]
    pub fields: FieldArgs,
    #[arg(long, conflicts_with = "start_date")]
    pub clear_start_date: bool,
    #[arg(long, conflicts_with = "end_date")]
    pub clear_end_date: bool,
}

#[derive(Args, Debug)]
pub struct FieldArgs {
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub end_date: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub progress: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_update_with_clear_flag() {
        let cli = Cli::try_parse_from([
            "projtrack",
            "--data",
            "/tmp/p.json",
            "update",
            "abc",
            "--status",
            "Done",
            "--clear-start-date",
        ])
        .unwrap();

        assert_eq!(cli.data.as_deref(), Some("/tmp/p.json"));
        match cli.command {
            Command::Update(args) => {
                assert_eq!(args.id, "abc");
                assert_eq!(args.fields.status.as_deref(), Some("Done"));
                assert!(args.clear_start_date);
                assert!(!args.clear_end_date);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn clear_flag_conflicts_with_value() {
        let result = Cli::try_parse_from([
            "projtrack",
            "update",
            "abc",
            "--start-date",
            "2024-01-01",
            "--clear-start-date",
        ]);
        assert!(result.is_err());
    }
}
