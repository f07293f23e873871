//! Output formatting for CLI commands.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

const CLI_SCHEMA_VERSION: &str = "cnpj.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Name as accepted by `--format`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = format_json(data, "[]");
            println!("{}", json);
        }
    }
}

/// Print a single item as JSON.
pub fn print_single<T: Serialize>(data: &T) {
    let json = format_json(data, "{}");
    println!("{}", json);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let wrapped = wrap_with_schema(value);
    let sorted = sort_json_value(wrapped);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

fn sort_json_value(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(sort_json_value).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut pairs: Vec<_> = entries.into_iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            let mut mapped = serde_json::Map::new();
            for (key, value) in pairs {
                mapped.insert(key, sort_json_value(value));
            }
            serde_json::Value::Object(mapped)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        normalized: &'static str,
        input: &'static str,
    }

    #[test]
    fn format_json_wraps_with_schema_version() {
        let rows = vec![Row {
            normalized: "12ABC34501DE35",
            input: "12.abc.345/01de-35",
        }];
        let json: serde_json::Value = serde_json::from_str(&format_json(&rows, "[]")).unwrap();
        let expected = serde_json::json!({
            "schemaVersion": "cnpj.cli.v1",
            "data": [{ "input": "12.abc.345/01de-35", "normalized": "12ABC34501DE35" }]
        });
        assert_eq!(json, expected);
    }

    #[test]
    fn format_json_sorts_keys() {
        let rows = vec![Row {
            normalized: "00000000000191",
            input: "00.000.000/0001-91",
        }];
        let json = format_json(&rows, "[]");
        let data_pos = json.find("\"data\"").unwrap();
        let schema_pos = json.find("\"schemaVersion\"").unwrap();
        let input_pos = json.find("\"input\"").unwrap();
        let normalized_pos = json.find("\"normalized\"").unwrap();
        assert!(data_pos < schema_pos);
        assert!(input_pos < normalized_pos);
    }

    #[test]
    fn output_format_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Json).unwrap(),
            "\"json\""
        );
        let parsed: OutputFormat = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(parsed, OutputFormat::Table);
        assert_eq!(parsed.as_str(), "table");
    }
}
