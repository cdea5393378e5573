// ABOUTME: Argument types and input resolution for scriptable generation
// ABOUTME: Merges template defaults with flags and enforces required fields before generating

use std::path::PathBuf;

use clap::Args;
use prd_studio_ideate::{validate_inputs, ExportFormat, RawInputs, Result, TemplateManager};

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Scenario / problem statement
    #[arg(short, long)]
    pub problem: Option<String>,
    /// Target audience / users
    #[arg(short, long)]
    pub audience: Option<String>,
    /// Goals / outcomes
    #[arg(short, long)]
    pub goals: Option<String>,
    /// Features needed
    #[arg(short, long)]
    pub features: Option<String>,
    /// Constraints / dependencies (optional)
    #[arg(short, long)]
    pub constraints: Option<String>,
    /// Template ID whose values fill any field not given
    #[arg(short, long)]
    pub template: Option<String>,
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: ExportFormat,
    /// Write the document into this directory instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Form values for a generate run: template defaults overlaid with explicit flags.
///
/// Fails when a template ID is unknown or a required field ends up empty.
pub fn resolve_inputs(args: &GenerateArgs, templates: &TemplateManager) -> Result<RawInputs> {
    let mut inputs = match &args.template {
        Some(id) => templates.apply_template(id)?,
        None => RawInputs::default(),
    };

    let overrides = [
        (&args.problem, &mut inputs.problem_statement),
        (&args.audience, &mut inputs.target_audience),
        (&args.goals, &mut inputs.goals),
        (&args.features, &mut inputs.features),
        (&args.constraints, &mut inputs.constraints),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.clone();
        }
    }

    validate_inputs(&inputs)?;
    Ok(inputs)
}
