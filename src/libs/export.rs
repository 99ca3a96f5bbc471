//! Timesheet export to CSV and JSON files.
//!
//! ## CSV layout
//!
//! ```text
//! workitem,28/09,30/06,total
//! AAA-BBB,1.00 (x),0.00 (No comment),1.00
//! ```
//!
//! ## JSON layout
//!
//! The serialized [`Timesheet`]: `column_labels`, `dates` and `rows`, each row
//! carrying its `cells` in column order.

use crate::libs::error::TrackerResult;
use crate::libs::timesheet::Timesheet;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named
    /// `timesheet_<YYYYmmdd_HHMMSS>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("timesheet_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, timesheet: &Timesheet) -> TrackerResult<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(timesheet),
            ExportFormat::Json => self.export_json(timesheet),
        }
    }

    fn export_csv(&self, timesheet: &Timesheet) -> TrackerResult<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        let mut header = vec!["workitem".to_string()];
        header.extend(timesheet.column_labels.iter().cloned());
        header.push("total".to_string());
        wtr.write_record(&header)?;

        for row in &timesheet.rows {
            let mut line = vec![row.workitem.clone()];
            line.extend(row.cells.iter().map(|cell| format!("{:.2} ({})", cell.total_hours, cell.comment)));
            line.push(format!("{:.2}", row.total_hours()));
            wtr.write_record(&line)?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, timesheet: &Timesheet) -> TrackerResult<()> {
        let json = serde_json::to_string_pretty(timesheet)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
