use colored::*;
use prd_studio_cli::{resolve_inputs, Config, GenerateArgs};
use prd_studio_ideate::{ExportService, PRDGenerator, TemplateManager};

pub async fn handle_generate_command(
    args: GenerateArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args, &TemplateManager::new())?;

    let prd = PRDGenerator::new()
        .generate_with_delay(&inputs, config.generation_delay)
        .await;
    let exporter = ExportService::new();

    match &args.output {
        Some(dir) => {
            let path = exporter.download(&prd, args.format, dir)?;
            eprintln!("{} {}", "✅ Wrote".green(), path.display());
        }
        None => {
            let export = exporter.export(&prd, args.format)?;
            println!("{}", export.content);
        }
    }

    Ok(())
}
