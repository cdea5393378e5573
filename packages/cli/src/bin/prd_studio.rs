use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::templates::TemplatesCommands;
use prd_studio_cli::{init_tracing, Config, GenerateArgs};

#[derive(Parser)]
#[command(name = "prd-studio")]
#[command(about = "PRD Studio - turn a product idea into a structured requirements document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Studio,
    /// Generate a PRD from command-line fields
    Generate(GenerateArgs),
    /// Browse the built-in templates
    #[command(subcommand)]
    Templates(TemplatesCommands),
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Configuration error:".red().bold(), e);
            process::exit(1);
        }
    };
    init_tracing(config.log_filter.as_deref());

    let command = cli.command.unwrap_or(Commands::Studio);
    if let Err(e) = handle_command(command, &config).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(
    command: Commands,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Studio => cli::studio::run_studio(config).await,
        Commands::Generate(args) => cli::generate::handle_generate_command(args, config).await,
        Commands::Templates(templates_cmd) => {
            cli::templates::handle_templates_command(templates_cmd)
        }
    }
}
