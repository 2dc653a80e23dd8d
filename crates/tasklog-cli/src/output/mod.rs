use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

mod rows;
pub mod table;

pub use rows::Tabular;

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a single response. Tables show objects as key/value pairs.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let rows = match serde_json::to_value(value)? {
                Value::Object(map) => map
                    .into_iter()
                    .map(|(key, value)| vec![key, value_to_cell(&value)])
                    .collect::<Vec<_>>(),
                scalar => vec![vec![String::from("value"), value_to_cell(&scalar)]],
            };
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
    }
}

/// Render a list. Tables use the item type's own columns.
pub fn render_rows<T: Serialize + Tabular>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table if items.is_empty() => Ok(String::from("(no rows)")),
        OutputFormat::Table => {
            let rows = items.iter().map(Tabular::row).collect::<Vec<_>>();
            Ok(table::render_table(T::HEADERS, &rows, table_options()))
        }
        OutputFormat::Json | OutputFormat::Raw => render(&items, format),
    }
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn output_rows<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_rows(items, format)?);
    Ok(())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}
