// ABOUTME: Export service for rendering PRDs as canonical text or JSON
// ABOUTME: Provides the copy/download text format, file naming and writing files to disk

use std::path::{Path, PathBuf};

use prd_studio_core::{display_width, format_date, slugify_filename};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{IdeateError, Result};
use crate::types::PRD;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Json => "application/json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = IdeateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            other => Err(IdeateError::InvalidInput(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// Export result with content and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    pub format: ExportFormat,
    pub content: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Render a PRD in the canonical flat-text format used for both copy and download.
///
/// Every section line gets a `"• "` prefix, requirements included, so headers and
/// spacers are bulleted too and existing `-` markers become `"• - "`. Saved documents
/// depend on this exact layout.
pub fn serialize(prd: &PRD) -> String {
    let document = format!(
        "\n{title}\n{underline}\n\n\
         PROBLEM STATEMENT\n{problem}\n\n\
         TARGET AUDIENCE\n{audience}\n\n\
         OBJECTIVES & GOALS\n{objectives}\n\n\
         USER STORIES\n{stories}\n\n\
         FEATURES & REQUIREMENTS\n{requirements}\n\n\
         ACCEPTANCE CRITERIA\n{criteria}\n\n\
         METRICS OF SUCCESS\n{metrics}\n\n\
         RISKS & DEPENDENCIES\n{risks}\n\n\
         Generated on: {date}\n    ",
        title = prd.title,
        underline = "=".repeat(display_width(&prd.title)),
        problem = prd.problem_statement,
        audience = prd.target_audience,
        objectives = bullet_list(&prd.objectives),
        stories = bullet_list(&prd.user_stories),
        requirements = bullet_list(&prd.requirements),
        criteria = bullet_list(&prd.acceptance_criteria),
        metrics = bullet_list(&prd.metrics),
        risks = bullet_list(&prd.risks),
        date = format_date(&prd.created_at),
    );

    document.trim().to_string()
}

fn bullet_list(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("• {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Suggested download file name: slugged title plus the format's extension
pub fn export_file_name(prd: &PRD, format: ExportFormat) -> String {
    format!("{}.{}", slugify_filename(&prd.title), format.extension())
}

/// PRD Export Service
#[derive(Debug, Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Export PRD in specified format
    pub fn export(&self, prd: &PRD, format: ExportFormat) -> Result<ExportResult> {
        debug!("Exporting PRD '{}' as {}", prd.title, format);

        let content = match format {
            ExportFormat::Text => serialize(prd),
            ExportFormat::Json => serde_json::to_string_pretty(prd)?,
        };

        Ok(ExportResult {
            format,
            file_name: export_file_name(prd, format),
            mime_type: format.mime_type().to_string(),
            size_bytes: content.len(),
            content,
        })
    }

    /// Text handed to the clipboard. Same canonical format as downloads.
    pub fn copy_text(&self, prd: &PRD) -> String {
        serialize(prd)
    }

    /// Write the export into `dir` and return the path of the written file
    pub fn download(&self, prd: &PRD, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
        let export = self.export(prd, format)?;

        std::fs::create_dir_all(dir)?;
        let path = dir.join(&export.file_name);
        std::fs::write(&path, export.content.as_bytes())?;

        info!(
            "Downloaded PRD to {} ({} bytes)",
            path.display(),
            export.size_bytes
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn minimal_prd(title: &str) -> PRD {
        PRD {
            id: None,
            title: title.to_string(),
            problem_statement: "problem".to_string(),
            target_audience: "audience".to_string(),
            goals: String::new(),
            features: String::new(),
            constraints: String::new(),
            objectives: vec![],
            user_stories: vec!["story".to_string()],
            requirements: vec!["Header:".to_string(), "".to_string(), "- item".to_string()],
            acceptance_criteria: vec![],
            metrics: vec![],
            risks: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
        }
    }

    #[test]
    fn test_single_character_title_underline() {
        let text = serialize(&minimal_prd("X"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "X");
        assert_eq!(lines[1], "=");
    }

    #[test]
    fn test_requirements_are_bulleted_uniformly() {
        let text = serialize(&minimal_prd("T"));

        assert!(text.contains("FEATURES & REQUIREMENTS\n• Header:\n• \n• - item\n\n"));
    }

    #[test]
    fn test_empty_sections_render_as_empty_line() {
        let text = serialize(&minimal_prd("T"));

        assert!(text.contains("OBJECTIVES & GOALS\n\n\nUSER STORIES\n• story\n\n"));
        assert!(text.ends_with("RISKS & DEPENDENCIES\n\n\nGenerated on: 2024-02-29"));
    }

    #[test]
    fn test_document_is_trimmed() {
        let text = serialize(&minimal_prd("  Title  "));

        assert!(text.starts_with("Title  \n========="));
        assert!(!text.ends_with(char::is_whitespace));
    }

    #[test]
    fn test_export_file_names() {
        let prd = minimal_prd("PRD: Users cannot...");

        assert_eq!(export_file_name(&prd, ExportFormat::Text), "prd__users_cannot___.txt");
        assert_eq!(export_file_name(&prd, ExportFormat::Json), "prd__users_cannot___.json");
    }

    #[test]
    fn test_export_metadata() {
        let service = ExportService::new();
        let prd = minimal_prd("X");

        let text = service.export(&prd, ExportFormat::Text).unwrap();
        assert_eq!(text.mime_type, "text/plain");
        assert_eq!(text.size_bytes, text.content.len());
        assert_eq!(text.content, service.copy_text(&prd));

        let json = service.export(&prd, ExportFormat::Json).unwrap();
        assert_eq!(json.mime_type, "application/json");
        let parsed: PRD = serde_json::from_str(&json.content).unwrap();
        assert_eq!(parsed, prd);
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
