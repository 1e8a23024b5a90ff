use anyhow::{anyhow, Result};
use dynamodb_request_model::model::{editor, registry::RecordEntry, ElementKind, FieldKind, Record};
use dynamodb_request_model::native::document::to_document;
use std::io::{self, Write};
use tracing::info;

use crate::config::Format;

/// Runs the interactive editor for a single record.
///
/// This function enters a loop that prompts the user for commands and executes them.
/// The supported commands are:
/// - show: Print the record as JSON
/// - fields: Print the record type's field descriptors
/// - set: Assign a value to a field path
/// - clear: Reset a field path to its unset value
/// - reset: Reset the whole record
/// - render: Convert the record and print the result
/// - exit: Exit the editor
///
/// # Arguments
///
/// * `entry` - The registry entry of the record type being edited
/// * `record` - The record being edited
/// * `format` - Default output format for `render`
///
/// # Returns
///
/// Returns `Ok(())` when the user exits, or an error if reading input fails.
pub fn run(entry: &RecordEntry, record: &mut dyn Record, format: Format) -> Result<()> {
    loop {
        let command = prompt("Enter command (show/fields/set/clear/reset/render/exit)", None)?;
        let outcome = match command.as_str() {
            "show" => show(entry, record),
            "fields" => {
                print_fields(entry);
                Ok(())
            }
            "set" => set_field(record),
            "clear" => clear_field(record),
            "reset" => {
                record.clear();
                println!("Record reset.");
                Ok(())
            }
            "render" => render_prompted(entry, record, format),
            "exit" => break,
            _ => {
                println!("Unknown command. Please try again.");
                Ok(())
            }
        };

        // Editing mistakes are reported and the session continues.
        if let Err(e) = outcome {
            println!("Error: {e}");
        }
    }
    Ok(())
}

/// Converts `record` and returns the text to print for `format`.
pub fn render(entry: &RecordEntry, record: &dyn Record, format: Format) -> Result<String> {
    info!(
        "Rendering {} ({}) as {:?}",
        entry.type_name,
        if record.is_empty() { "empty" } else { "non-empty" },
        format
    );

    match format {
        Format::Document => Ok(serde_json::to_string_pretty(&to_document(record))?),
        Format::Record => Ok(entry.to_json(record)?),
        Format::Sdk => render_sdk(entry, record),
    }
}

#[cfg(feature = "aws-sdk")]
fn render_sdk(entry: &RecordEntry, record: &dyn Record) -> Result<String> {
    Ok(entry.render_native(record)?)
}

#[cfg(not(feature = "aws-sdk"))]
fn render_sdk(_entry: &RecordEntry, _record: &dyn Record) -> Result<String> {
    Err(anyhow!("built without the `aws-sdk` feature"))
}

/// Prints the descriptor table of a record type.
pub fn print_fields(entry: &RecordEntry) {
    println!("\n--- {} ---", entry.type_name);
    for field in entry.fields {
        println!("  {:<32} {:<32} {}", field.name, field.wire_name, describe_kind(&field.kind));
    }
    println!("{}", "-".repeat(entry.type_name.len() + 8));
}

fn describe_kind(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Integer => "integer".to_string(),
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::Enumeration(values) => format!("one of {}", values.join("|")),
        FieldKind::Record(type_name) => type_name.to_string(),
        FieldKind::List(ElementKind::Text) => "list of text".to_string(),
        FieldKind::List(ElementKind::Record(type_name)) => format!("list of {type_name}"),
    }
}

fn show(entry: &RecordEntry, record: &dyn Record) -> Result<()> {
    println!("{}", entry.to_json(record)?);
    println!("Empty: {}", record.is_empty());
    Ok(())
}

fn set_field(record: &mut dyn Record) -> Result<()> {
    let path = prompt("Enter field path", Some("key_schema.0.attribute_name"))?;
    let value = prompt("Enter value (empty to unset)", None)?;
    editor::set_path(record, &path, &value)?;
    println!("{path} updated.");
    Ok(())
}

fn clear_field(record: &mut dyn Record) -> Result<()> {
    let path = prompt("Enter field path", Some("provisioned_throughput"))?;
    editor::clear_path(record, &path)?;
    println!("{path} cleared.");
    Ok(())
}

fn render_prompted(entry: &RecordEntry, record: &dyn Record, default: Format) -> Result<()> {
    let format = match prompt_optional("Enter format (document/sdk/record)", None)? {
        Some(name) => clap::ValueEnum::from_str(&name, true).map_err(|e| anyhow!(e))?,
        None => default,
    };
    println!("{}", render(entry, record, format)?);
    Ok(())
}

/// Prompts the user for input and returns the trimmed response.
///
/// # Arguments
///
/// * `message` - The message to display to the user
/// * `example` - An optional example input to display
fn prompt(message: &str, example: Option<&str>) -> Result<String> {
    let full_message = if let Some(ex) = example {
        format!("{} (e.g., {}): ", message, ex)
    } else {
        format!("{}: ", message)
    };
    print!("{}", full_message);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("exit".to_string());
    }
    Ok(input.trim().to_string())
}

fn prompt_optional(message: &str, example: Option<&str>) -> Result<Option<String>> {
    let input = prompt(message, example)?;
    Ok(if input.is_empty() { None } else { Some(input) })
}
