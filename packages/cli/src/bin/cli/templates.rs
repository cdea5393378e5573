use clap::Subcommand;
use colored::*;
use prd_studio_cli::display::{print_template, templates_table};
use prd_studio_ideate::TemplateManager;

#[derive(Subcommand)]
pub enum TemplatesCommands {
    /// List all templates
    List,
    /// Show a template's default values
    Show {
        /// Template ID to show
        id: String,
    },
}

pub fn handle_templates_command(
    command: TemplatesCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let manager = TemplateManager::new();

    match command {
        TemplatesCommands::List => {
            println!("{}", "📚 PRD Templates".blue().bold());
            println!();
            println!("{}", templates_table(manager.get_templates()));
            println!(
                "{}",
                "Use 'prd-studio generate --template <ID>' to start from one".dimmed()
            );
        }
        TemplatesCommands::Show { id } => {
            let template = manager.get_template(&id)?;
            print_template(template);
        }
    }

    Ok(())
}
