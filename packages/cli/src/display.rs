// ABOUTME: Terminal presentation for documents, templates and session statistics
// ABOUTME: Builds comfy-table tables and the colored PRD preview

use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use prd_studio_core::format_date;
use prd_studio_ideate::{document_view, PRDTemplate, SessionStats, PRD};

/// Shorten `text` to at most `max` characters, marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn templates_table(templates: &[PRDTemplate]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Category", "Description"]);

    for template in templates {
        table.add_row(vec![
            template.id.clone(),
            template.name.clone(),
            template.category.label().to_uppercase(),
            template.description.clone(),
        ]);
    }

    table
}

pub fn documents_table(prds: &[PRD]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Title", "Created", "Requirements", "Target"]);

    for prd in prds {
        table.add_row(vec![
            prd.id.clone().unwrap_or_else(|| "—".to_string()),
            truncate(&prd.title, 40),
            format_date(&prd.created_at),
            prd.requirements.len().to_string(),
            truncate(&prd.target_audience, 30),
        ]);
    }

    table
}

pub fn format_stats(stats: &SessionStats) -> String {
    format!(
        "Total PRDs: {}  |  Per Week: {}  |  Avg Requirements: {}",
        stats.total, stats.per_week, stats.avg_requirements
    )
}

/// Print the template's default values, one field per block
pub fn print_template(template: &PRDTemplate) {
    println!("{}", format!("📋 {}", template.name).blue().bold());
    println!("{}", template.description.dimmed());
    println!("{} {}", "Category:".cyan(), template.category.label());
    println!();

    let fields = [
        ("Problem Statement", &template.template.problem_statement),
        ("Target Audience", &template.template.target_audience),
        ("Goals", &template.template.goals),
        ("Features", &template.template.features),
        ("Constraints", &template.template.constraints),
    ];
    for (label, value) in fields {
        println!("{}", label.bold());
        println!("  {}", value);
    }
}

/// Print the on-screen preview of a document
pub fn print_document(prd: &PRD) {
    let view = document_view(prd);

    println!();
    println!("{}", view.title.blue().bold());
    println!("{}", "═".repeat(view.title.chars().count()).blue());
    println!();

    for section in &view.sections {
        println!("{}", section.heading.to_uppercase().cyan().bold());
        for line in &section.lines {
            println!("  {}", line);
        }
        println!();
    }

    for line in &view.footer {
        println!("{}", line.dimmed());
    }
    println!();
}
