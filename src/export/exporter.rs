//! Tabular Export
//!
//! Renders records as CSV, JSON, JSON Lines, TSV, HTML or Markdown. Columns
//! are the union of keys across all records in first-seen order, so
//! heterogeneous records keep every field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::EngineError;
use crate::models::BetRecord;

/// One exported row
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    #[default]
    Json,
    JsonLines,
    Tsv,
    Html,
    Markdown,
}

impl ExportFormat {
    /// Parse a format name, falling back to JSON for unknown names
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown export format '{}', falling back to json", name);
            ExportFormat::Json
        })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::JsonLines => "jsonl",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonlines" | "jsonl" => Ok(ExportFormat::JsonLines),
            "tsv" => Ok(ExportFormat::Tsv),
            "html" => Ok(ExportFormat::Html),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(EngineError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::JsonLines => "jsonlines",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Serialize items into records. Non-object values land under a `value` key.
pub fn to_records<T: Serialize>(items: &[T]) -> Result<Vec<Record>, EngineError> {
    items
        .iter()
        .map(|item| -> Result<Record, EngineError> {
            Ok(match serde_json::to_value(item)? {
                Value::Object(map) => map,
                other => {
                    let mut map = Map::new();
                    map.insert("value".to_string(), other);
                    map
                }
            })
        })
        .collect()
}

/// Bet records with their derived profit column
pub fn bet_rows(bets: &[BetRecord]) -> Result<Vec<Record>, EngineError> {
    let mut rows = to_records(bets)?;
    for (row, bet) in rows.iter_mut().zip(bets) {
        row.insert("profit".to_string(), Value::from(bet.profit()));
    }
    Ok(rows)
}

fn columns(records: &[Record]) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Cell text: missing and null are empty, whole floats print without `.0`
fn cell(record: &Record, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn markdown_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('|', "\\|")
}

pub fn export_to_csv(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let keys = columns(records);
    let mut lines = vec![keys.join(",")];
    for record in records {
        let row: Vec<String> = keys.iter().map(|k| csv_escape(&cell(record, k))).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

pub fn export_to_tsv(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let keys = columns(records);
    let mut lines = vec![keys.join("\t")];
    for record in records {
        let row: Vec<String> = keys
            .iter()
            .map(|k| cell(record, k).replace('\t', " "))
            .collect();
        lines.push(row.join("\t"));
    }
    lines.join("\n")
}

/// Pretty JSON array, two-space indent
pub fn export_to_json(records: &[Record]) -> Result<String, EngineError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// One compact JSON object per line
pub fn export_to_json_lines(records: &[Record]) -> Result<String, EngineError> {
    let lines = records
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

pub fn export_to_html(records: &[Record]) -> String {
    if records.is_empty() {
        return "<table><tr><td>No data</td></tr></table>".to_string();
    }

    let keys = columns(records);
    let header: String = keys
        .iter()
        .map(|k| format!("<th>{}</th>", html_escape(k)))
        .collect();
    let body: String = records
        .iter()
        .map(|record| {
            let cells: String = keys
                .iter()
                .map(|k| format!("<td>{}</td>", html_escape(&cell(record, k))))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    format!(
        "<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        header, body
    )
}

pub fn export_to_markdown(records: &[Record]) -> String {
    if records.is_empty() {
        return "No data available".to_string();
    }

    let keys = columns(records);
    let header = format!("| {} |", keys.join(" | "));
    let separator = format!("| {} |", vec!["---"; keys.len()].join(" | "));
    let rows: Vec<String> = records
        .iter()
        .map(|record| {
            let values: Vec<String> = keys
                .iter()
                .map(|k| markdown_escape(&cell(record, k)))
                .collect();
            format!("| {} |", values.join(" | "))
        })
        .collect();

    format!("{}\n{}\n{}", header, separator, rows.join("\n"))
}

/// Render records in the requested format
pub fn export_data(records: &[Record], format: ExportFormat) -> Result<String, EngineError> {
    let output = match format {
        ExportFormat::Csv => export_to_csv(records),
        ExportFormat::Json => export_to_json(records)?,
        ExportFormat::JsonLines => export_to_json_lines(records)?,
        ExportFormat::Tsv => export_to_tsv(records),
        ExportFormat::Html => export_to_html(records),
        ExportFormat::Markdown => export_to_markdown(records),
    };
    Ok(output)
}

/// Export bets, including the derived profit column
pub fn export_bets(bets: &[BetRecord], format: ExportFormat) -> Result<String, EngineError> {
    export_data(&bet_rows(bets)?, format)
}
