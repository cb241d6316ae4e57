//! Human and JSON output.
//!
//! In JSON mode stdout carries exactly one document per command, so status
//! lines are suppressed and warnings go to stderr.

use console::{style, StyledObject};
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        let format = if json { OutputFormat::Json } else { OutputFormat::Human };
        Self { format }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn status_line(&self, marker: StyledObject<&str>, message: impl Display) {
        if !self.is_json() {
            println!("{} {}", marker, message);
        }
    }

    pub fn success(&self, message: impl Display) {
        self.status_line(style("✓").green().bold(), message);
    }

    pub fn info(&self, message: impl Display) {
        self.status_line(style("ℹ").blue().bold(), message);
    }

    pub fn warning(&self, message: impl Display) {
        if self.is_json() {
            let output = serde_json::json!({ "status": "warning", "message": message.to_string() });
            eprintln!("{}", output);
        } else {
            eprintln!("{} {}", style("⚠").yellow().bold(), message);
        }
    }

    pub fn section(&self, title: impl Display) {
        if !self.is_json() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if !self.is_json() {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    /// Rounded table of rows; human mode only
    pub fn table<T: Tabled>(&self, rows: Vec<T>) {
        if self.is_json() {
            return;
        }
        if rows.is_empty() {
            println!("{}", style("(no matches)").dim());
            return;
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    /// Pretty-printed JSON, without an envelope
    pub fn data<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(data)?);
        Ok(())
    }

    /// The command result; JSON mode wraps it as `{"status": "success", "data": ...}`
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.is_json() {
            self.data(&serde_json::json!({ "status": "success", "data": data }))
        } else {
            self.data(&data)
        }
    }
}
