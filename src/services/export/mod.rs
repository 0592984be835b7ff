pub mod csv_exporter;
pub mod json_exporter;
pub mod pdf_exporter;

use std::fmt;
use std::str::FromStr;

use crate::errors::ExportError;
use crate::models::domain::Quiz;

pub use csv_exporter::CsvExporter;
pub use json_exporter::JsonExporter;
pub use pdf_exporter::PdfExporter;

/// Renders a quiz into a downloadable document.
pub trait Exporter: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn file_name(&self) -> &'static str;

    fn render(&self, quiz: &Quiz) -> Result<Vec<u8>, ExportError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Csv, ExportFormat::Json];

    pub fn exporter(&self) -> &'static dyn Exporter {
        match self {
            ExportFormat::Pdf => &PdfExporter,
            ExportFormat::Csv => &CsvExporter,
            ExportFormat::Json => &JsonExporter,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "Unsupported export format '{other}', expected one of pdf, csv, json"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn export(quiz: &Quiz, format: ExportFormat) -> Result<ExportedFile, ExportError> {
    let exporter = format.exporter();
    Ok(ExportedFile {
        file_name: exporter.file_name(),
        content_type: exporter.content_type(),
        bytes: exporter.render(quiz)?,
    })
}
