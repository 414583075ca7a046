use crate::error::Result;
use chrono::NaiveDateTime;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::ResultSink;

/// One reported value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub category: &'static str,
    pub name: String,
    pub val: String,
}

/// Results written as a JSON array to a file
#[derive(Debug, Clone)]
pub struct JsonResults {
    path: PathBuf,
    entries: Vec<ResultEntry>,
}

impl JsonResults {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }
}

impl ResultSink for JsonResults {
    fn add_date_time(&mut self, name: &str, value: NaiveDateTime) {
        self.entries.push(ResultEntry {
            category: "datetime",
            name: name.to_string(),
            val: value.format("%Y-%m-%d %H:%M:%S").to_string(),
        });
    }

    fn add_object(&mut self, name: &str, path: &Path) {
        self.entries.push(ResultEntry {
            category: "object",
            name: name.to_string(),
            val: path.display().to_string(),
        });
    }

    fn write(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        info!(
            "Wrote {} result(s) to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
