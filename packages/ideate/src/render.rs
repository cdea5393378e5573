// ABOUTME: On-screen PRD preview layout
// ABOUTME: Builds numbered, labelled and kind-aware lines per section for terminal display

use prd_studio_core::{format_date, format_time};

use crate::types::{RequirementLine, PRD};

/// One titled block of the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

/// Preview of a PRD, ready to be printed line by line.
///
/// Unlike the canonical text export, requirements are laid out by line kind and
/// acceptance criteria lose their stored check glyph in favour of the view's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub title: String,
    pub sections: Vec<ViewSection>,
    pub footer: Vec<String>,
}

const CHECK_PREFIX: &str = "✓ ";

pub fn document_view(prd: &PRD) -> DocumentView {
    let sections = vec![
        ViewSection {
            heading: "Problem Statement",
            lines: vec![prd.problem_statement.clone()],
        },
        ViewSection {
            heading: "Target Audience",
            lines: vec![prd.target_audience.clone()],
        },
        ViewSection {
            heading: "Objectives & Goals",
            lines: labelled(&prd.objectives, |i| format!("{}.", i)),
        },
        ViewSection {
            heading: "User Stories",
            lines: labelled(&prd.user_stories, |i| format!("US{}", i)),
        },
        ViewSection {
            heading: "Features & Requirements",
            lines: prd.requirement_lines().into_iter().map(requirement_line).collect(),
        },
        ViewSection {
            heading: "Acceptance Criteria",
            lines: prd
                .acceptance_criteria
                .iter()
                .map(|c| format!("[✓] {}", c.replacen(CHECK_PREFIX, "", 1)))
                .collect(),
        },
        ViewSection {
            heading: "Metrics of Success",
            lines: labelled(&prd.metrics, |i| format!("{}.", i)),
        },
        ViewSection {
            heading: "Risks & Dependencies",
            lines: labelled(&prd.risks, |i| format!("R{}", i)),
        },
    ];

    DocumentView {
        title: prd.title.clone(),
        sections,
        footer: vec![
            format!(
                "Generated on {} at {}",
                format_date(&prd.created_at),
                format_time(&prd.created_at)
            ),
            "PRD Studio • Professional Documentation".to_string(),
        ],
    }
}

fn labelled(lines: &[String], label: impl Fn(usize) -> String) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{} {}", label(i + 1), line))
        .collect()
}

fn requirement_line(line: RequirementLine<'_>) -> String {
    match line {
        RequirementLine::Bullet(text) => format!("    • {}", text),
        RequirementLine::Spacer => String::new(),
        RequirementLine::Header(text) | RequirementLine::Text(text) => text.to_string(),
    }
}
