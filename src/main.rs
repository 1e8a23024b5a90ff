mod command_line;
mod config;
mod logging;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dynamodb_request_model::model::{editor, registry, Record};
use tracing::{debug, info};

use config::{Format, Settings};

/// Inspect, edit and convert DynamoDB request records.
#[derive(Parser, Debug)]
#[command(name = "ddb-model", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered record types
    Types,
    /// Print the field descriptors of a record type
    Fields {
        /// Record type name, e.g. CreateTableRequest
        type_name: String,
    },
    /// Load, edit and convert a record in one shot
    Render {
        /// Record type name, e.g. CreateReplicationGroupMemberAction
        type_name: String,
        /// JSON file holding the record (missing fields are unset)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Field assignment applied after loading, e.g. key_schema.0.key_type=HASH
        #[arg(short, long = "set", value_name = "PATH=VALUE")]
        assignments: Vec<String>,
        /// Output format (defaults to DDB_MODEL_FORMAT, then `document`)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },
    /// Edit a record interactively
    Edit {
        /// Record type name, e.g. UpdateTableRequest
        type_name: String,
        /// JSON file to start from (defaults to an empty record)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let settings = Settings::from_env()?;
    logging::init_logging(settings.log_level)?;
    debug!("Settings: {:?}", settings);

    let cli = Cli::parse();

    match cli.command {
        Command::Types => {
            for entry in registry::entries() {
                println!("{}", entry.type_name);
            }
        }
        Command::Fields { type_name } => {
            command_line::print_fields(registry::lookup(&type_name)?);
        }
        Command::Render {
            type_name,
            input,
            assignments,
            format,
        } => {
            let entry = registry::lookup(&type_name)?;
            let mut record = load(entry, input.as_ref())?;
            for assignment in &assignments {
                let (path, value) = assignment
                    .split_once('=')
                    .ok_or_else(|| anyhow!("expected PATH=VALUE, got {assignment:?}"))?;
                editor::set_path(record.as_mut(), path, value)
                    .with_context(|| format!("applying {assignment:?}"))?;
            }
            let format = format.unwrap_or(settings.format);
            println!(
                "{}",
                command_line::render(entry, record.as_ref(), format)?
            );
        }
        Command::Edit { type_name, input } => {
            let entry = registry::lookup(&type_name)?;
            let mut record = load(entry, input.as_ref())?;
            info!("Editing {}", entry.type_name);
            command_line::run(entry, record.as_mut(), settings.format)?;
        }
    }

    Ok(())
}

fn load(entry: &registry::RecordEntry, input: Option<&PathBuf>) -> Result<Box<dyn Record>> {
    match input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let record = entry
                .from_json(&json)
                .with_context(|| format!("loading {} from {}", entry.type_name, path.display()))?;
            info!("Loaded {} from {}", entry.type_name, path.display());
            Ok(record)
        }
        None => Ok(entry.new_record()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_argument_has_help() {
        let cli = Cli::command();
        for subcommand in cli.get_subcommands() {
            for arg in subcommand.get_arguments() {
                if arg.get_id() == "help" {
                    continue;
                }
                assert!(
                    arg.get_help().is_some(),
                    "{} {} has no help text",
                    subcommand.get_name(),
                    arg.get_id()
                );
            }
        }
    }

    #[test]
    fn test_parse_render_assignments() {
        let cli = Cli::parse_from([
            "ddb-model",
            "render",
            "Tag",
            "--set",
            "key=env",
            "--set",
            "value=prod",
            "--format",
            "record",
        ]);
        match cli.command {
            Command::Render {
                type_name,
                assignments,
                format,
                ..
            } => {
                assert_eq!(type_name, "Tag");
                assert_eq!(assignments, vec!["key=env", "value=prod"]);
                assert_eq!(format, Some(Format::Record));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
