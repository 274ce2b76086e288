//! Subcommand execution against an opened store.

use crate::cli::{AddArgs, Command, UpdateArgs};
use projtrack_core::{NewProject, ProjectPatch, ProjectStore, StoreResult};
use serde_json::Value;

/// What a command produced, for `main` to print.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Json(Value),
    NotFound(String),
    Text(String),
}

pub fn execute(command: Command, store: &mut ProjectStore) -> StoreResult<Outcome> {
    match command {
        Command::List { status: None } => {
            Ok(Outcome::Json(serde_json::to_value(store.get_all())?))
        }
        Command::List {
            status: Some(status),
        } => Ok(Outcome::Json(serde_json::to_value(store.get_by_status(&status))?)),
        Command::Show { id } => found(store.get_by_id(&id).cloned(), id),
        Command::Add(args) => {
            let created = store.create(new_project(args))?;
            Ok(Outcome::Json(serde_json::to_value(created)?))
        }
        Command::Update(args) => {
            let id = args.id.clone();
            let updated = store.update(&id, patch(args))?;
            found(updated, id)
        }
        Command::Delete { id } => {
            let removed = store.delete(&id)?;
            found(removed, id)
        }
        Command::Ping => Ok(Outcome::Text(format!(
            "projtrack_core ping={} version={}",
            projtrack_core::ping(),
            projtrack_core::core_version()
        ))),
    }
}

fn found(project: Option<projtrack_core::Project>, id: String) -> StoreResult<Outcome> {
    match project {
        Some(project) => Ok(Outcome::Json(serde_json::to_value(project)?)),
        None => Ok(Outcome::NotFound(id)),
    }
}

fn new_project(args: AddArgs) -> NewProject {
    let fields = args.fields;
    NewProject {
        name: args.name,
        description: fields.description,
        status: fields.status,
        priority: fields.priority,
        start_date: fields.start_date,
        end_date: fields.end_date,
        progress: fields.progress,
    }
}

fn patch(args: UpdateArgs) -> ProjectPatch {
    let fields = args.fields;
    let date = |clear: bool, value: Option<String>| {
        if clear {
            Some(None)
        } else {
            value.map(Some)
        }
    };
    ProjectPatch {
        name: args.name,
        description: fields.description,
        status: fields.status,
        priority: fields.priority,
        start_date: date(args.clear_start_date, fields.start_date),
        end_date: date(args.clear_end_date, fields.end_date),
        progress: fields.progress,
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, Outcome};
    use crate::cli::Cli;
    use clap::Parser;
    use projtrack_core::ProjectStore;

    fn run(store: &mut ProjectStore, args: &[&str]) -> Outcome {
        let cli = Cli::try_parse_from(std::iter::once("projtrack").chain(args.iter().copied()))
            .unwrap();
        execute(cli.command, store).unwrap()
    }

    #[test]
    fn add_update_list_delete_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProjectStore::open(dir.path().join("projects.json"));

        let Outcome::Json(created) = run(&mut store, &["add", "--name", "A", "--progress", "5"])
        else {
            panic!("add should print the record");
        };
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["status"], "Todo");
        assert_eq!(created["progress"], 5);

        let Outcome::Json(updated) = run(&mut store, &["update", id.as_str(), "--status", "Done"])
        else {
            panic!("update should print the record");
        };
        assert_eq!(updated["status"], "Done");

        let Outcome::Json(done) = run(&mut store, &["list", "--status", "Done"]) else {
            panic!("list should print records");
        };
        assert_eq!(done.as_array().unwrap().len(), 1);

        assert!(matches!(run(&mut store, &["delete", id.as_str()]), Outcome::Json(_)));
        assert_eq!(
            run(&mut store, &["show", id.as_str()]),
            Outcome::NotFound(id.clone())
        );
    }
}
