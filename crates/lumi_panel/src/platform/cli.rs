use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use lumi_core::FormSnapshot;
use serde_json::Value;

use super::logging::LogDestination;

/// Launch a Lumi download job and follow its progress.
#[derive(Debug, Parser)]
#[command(name = "lumi_panel", version)]
pub struct Cli {
    /// Base URL of the Lumi backend [default: http://localhost:8080]
    #[arg(long)]
    pub server: Option<String>,

    /// RON config file [default: ./lumi_panel.ron when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with form fields, e.g. an existing lumi.json
    #[arg(long)]
    pub form: Option<PathBuf>,

    /// Form field, repeatable; applied after --form
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Apply the backend's tag and count adjustments before sending
    #[arg(long)]
    pub normalize: bool,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Status polling period in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,
}

impl Cli {
    pub fn form_snapshot(&self) -> anyhow::Result<FormSnapshot> {
        let mut form = match &self.form {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("reading form file {}", path.display()))?;
                form_from_json(&content)
                    .with_context(|| format!("parsing form file {}", path.display()))?
            }
            None => FormSnapshot::new(),
        };
        for (name, value) in &self.fields {
            form.push(name.as_str(), value.as_str());
        }
        Ok(form)
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got {raw:?}")),
    }
}

/// Flattens a JSON object into form fields. Arrays become comma-separated
/// text so a saved config round-trips through the same list parsing; an
/// array entry that itself contains a comma cannot survive that and is
/// rejected.
fn form_from_json(content: &str) -> anyhow::Result<FormSnapshot> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(map) = value else {
        bail!("form file must contain a JSON object");
    };

    let mut form = FormSnapshot::new();
    for (name, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(text) => text,
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    let entry = match item {
                        Value::String(text) => text,
                        other => other.to_string(),
                    };
                    if entry.contains(',') {
                        bail!("field {name:?}: entry {entry:?} contains a comma");
                    }
                    entries.push(entry);
                }
                entries.join(",")
            }
            other => other.to_string(),
        };
        form.push(name, text);
    }
    Ok(form)
}
