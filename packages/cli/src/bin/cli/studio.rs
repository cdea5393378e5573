use std::fmt;

use colored::*;
use inquire::{Confirm, InquireError, Select, Text};
use prd_studio_cli::display::{documents_table, format_stats, print_document, truncate};
use prd_studio_cli::{cancelled_as_none, copy_to_clipboard, Config, CopyOutcome};
use prd_studio_ideate::{
    validate_inputs, ExportFormat, ExportService, PRDGenerator, PRDTemplate, RawInputs,
    SessionStore, TemplateManager, PRD,
};
use tracing::debug;

/// Everything one interactive session works with
struct Studio<'a> {
    config: &'a Config,
    generator: PRDGenerator,
    templates: TemplateManager,
    exporter: ExportService,
    store: SessionStore,
}

#[derive(Clone, Copy)]
enum HomeAction {
    Create,
    Templates,
    Documents,
    Quit,
}

impl fmt::Display for HomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeAction::Create => write!(f, "Create PRD"),
            HomeAction::Templates => write!(f, "Browse Templates"),
            HomeAction::Documents => write!(f, "My Documents"),
            HomeAction::Quit => write!(f, "Quit"),
        }
    }
}

#[derive(Clone, Copy)]
enum OutputAction {
    Copy,
    Download,
    Save,
    Edit,
    Home,
}

impl fmt::Display for OutputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputAction::Copy => write!(f, "Copy"),
            OutputAction::Download => write!(f, "Download"),
            OutputAction::Save => write!(f, "Save"),
            OutputAction::Edit => write!(f, "Edit"),
            OutputAction::Home => write!(f, "Home"),
        }
    }
}

struct TemplateChoice<'t>(&'t PRDTemplate);

impl fmt::Display for TemplateChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] - {}",
            self.0.name,
            self.0.category.label(),
            self.0.description
        )
    }
}

struct DocumentChoice<'d>(&'d PRD);

impl fmt::Display for DocumentChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            truncate(&self.0.title, 50),
            self.0.id.as_deref().unwrap_or("unsaved")
        )
    }
}

pub async fn run_studio(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut studio = Studio {
        config,
        generator: PRDGenerator::new(),
        templates: TemplateManager::new(),
        exporter: ExportService::new(),
        store: SessionStore::new(),
    };

    println!("{}", "📝 PRD Studio".blue().bold());
    println!(
        "{}",
        "Answer a few questions and get a structured Product Requirement Document.".dimmed()
    );
    println!();

    loop {
        let actions = vec![
            HomeAction::Create,
            HomeAction::Templates,
            HomeAction::Documents,
            HomeAction::Quit,
        ];
        match cancelled_as_none(Select::new("What would you like to do?", actions).prompt())? {
            Some(HomeAction::Create) => studio.create(RawInputs::default()).await?,
            Some(HomeAction::Templates) => {
                if let Some(inputs) = studio.pick_template()? {
                    studio.create(inputs).await?;
                }
            }
            Some(HomeAction::Documents) => studio.documents()?,
            Some(HomeAction::Quit) | None => break,
        }
    }

    if !studio.store.is_empty() {
        println!(
            "{}",
            format!(
                "Session closed. {} saved document(s) were kept in memory only.",
                studio.store.len()
            )
            .dimmed()
        );
    }

    Ok(())
}

impl Studio<'_> {
    /// Form -> generate -> output, looping back to the form on Edit.
    /// Esc or Ctrl-C on any prompt returns to Home.
    async fn create(&mut self, initial: RawInputs) -> Result<(), Box<dyn std::error::Error>> {
        let mut inputs = initial;

        loop {
            println!();
            println!("{}", "✏️  Document Your Product Requirements".blue().bold());
            println!("{}", "Press Esc on any field to go back home.".dimmed());
            inputs = match cancelled_as_none(prompt_inputs(&inputs))? {
                Some(edited) => edited,
                None => {
                    back_home();
                    return Ok(());
                }
            };

            if let Err(e) = validate_inputs(&inputs) {
                println!("{} {}", "⚠️".yellow(), e.to_string().yellow());
                let retry = Confirm::new("Go back and fill them in?")
                    .with_default(true)
                    .prompt();
                if cancelled_as_none(retry)?.unwrap_or(false) {
                    continue;
                }
                back_home();
                return Ok(());
            }

            println!("{}", "⏳ Creating document...".cyan());
            let prd = self
                .generator
                .generate_with_delay(&inputs, self.config.generation_delay)
                .await;

            if !self.output(&prd)? {
                return Ok(());
            }
        }
    }

    /// Show a generated document and its actions. Returns true when the user wants to edit.
    fn output(&mut self, prd: &PRD) -> Result<bool, Box<dyn std::error::Error>> {
        print_document(prd);

        loop {
            let actions = vec![
                OutputAction::Copy,
                OutputAction::Download,
                OutputAction::Save,
                OutputAction::Edit,
                OutputAction::Home,
            ];
            match cancelled_as_none(Select::new("Document actions:", actions).prompt())? {
                Some(OutputAction::Copy) => self.copy(prd),
                Some(OutputAction::Download) => self.download(prd)?,
                Some(OutputAction::Save) => {
                    let saved = self.store.save(prd);
                    println!(
                        "{} {}",
                        "✅ Saved as".green(),
                        saved.id.as_deref().unwrap_or_default().cyan()
                    );
                }
                Some(OutputAction::Edit) => return Ok(true),
                Some(OutputAction::Home) | None => return Ok(false),
            }
        }
    }

    fn copy(&self, prd: &PRD) {
        let text = self.exporter.copy_text(prd);
        match copy_to_clipboard(&text) {
            CopyOutcome::Clipboard => println!("{}", "✅ Copied to clipboard".green()),
            CopyOutcome::Unavailable(reason) => {
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", text);
                println!("{}", "─".repeat(60).dimmed());
                println!(
                    "{} {}",
                    "⚠️  Clipboard unavailable, document printed above:".yellow(),
                    reason.dimmed()
                );
            }
        }
    }

    fn download(&self, prd: &PRD) -> Result<(), Box<dyn std::error::Error>> {
        let path = self
            .exporter
            .download(prd, ExportFormat::Text, &self.config.output_dir)?;
        println!("{} {}", "✅ Downloaded to".green(), path.display());
        Ok(())
    }

    fn pick_template(&self) -> Result<Option<RawInputs>, Box<dyn std::error::Error>> {
        let choices: Vec<TemplateChoice> = self
            .templates
            .get_templates()
            .iter()
            .map(TemplateChoice)
            .collect();

        let picked = cancelled_as_none(Select::new("Choose a template:", choices).prompt())?;
        Ok(picked.map(|choice| {
            debug!("Using template {}", choice.0.id);
            choice.0.template.clone()
        }))
    }

    fn documents(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!();
        println!("{}", "📂 Your PRDs".blue().bold());

        if self.store.is_empty() {
            println!("{}", "No documents yet".yellow());
            println!(
                "{}",
                "Create your first PRD and choose Save to keep it for this session.".dimmed()
            );
            return Ok(());
        }

        println!("{}", documents_table(self.store.list()));
        println!("{}", format_stats(&self.store.stats()).cyan());

        let choices: Vec<DocumentChoice> = self.store.list().iter().map(DocumentChoice).collect();
        if let Some(choice) = cancelled_as_none(
            Select::new("Download a document? (Esc to go back)", choices).prompt(),
        )? {
            self.download(choice.0)?;
        }

        Ok(())
    }
}

fn back_home() {
    println!("{}", "↩️  Back to Home".dimmed());
}

/// Ask for each field, pre-filled with the current values
fn prompt_inputs(current: &RawInputs) -> Result<RawInputs, InquireError> {
    let problem_statement = Text::new("Scenario / Problem Statement *")
        .with_initial_value(&current.problem_statement)
        .with_help_message("Describe the problem you're trying to solve")
        .prompt()?;
    let target_audience = Text::new("Target Audience / Users *")
        .with_initial_value(&current.target_audience)
        .with_help_message("Who will use this feature?")
        .prompt()?;
    let goals = Text::new("Goals / Outcomes *")
        .with_initial_value(&current.goals)
        .with_help_message("What do you want to achieve?")
        .prompt()?;
    let features = Text::new("Features Needed *")
        .with_initial_value(&current.features)
        .with_help_message("List the key features and functionality needed")
        .prompt()?;
    let constraints = Text::new("Constraints / Dependencies")
        .with_initial_value(&current.constraints)
        .with_help_message("Any technical, time, or resource constraints (optional)")
        .prompt()?;

    Ok(RawInputs {
        problem_statement,
        target_audience,
        goals,
        features,
        constraints,
    })
}
