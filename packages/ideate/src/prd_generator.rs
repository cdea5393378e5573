// ABOUTME: PRD generator that expands raw form inputs into a full document
// ABOUTME: Deterministic template substitution stamped by an injectable clock

use std::sync::Arc;
use std::time::Duration;

use prd_studio_core::{Clock, SystemClock, DEFAULT_TITLE, TITLE_WORD_LIMIT};
use tracing::{debug, info};

use crate::error::Result;
use crate::types::{RawInputs, PRD};
use crate::validation::validate_inputs;

/// Substituted into the first risk when no constraints were given
pub const DEFAULT_TECHNICAL_RISK: &str = "Integration complexity with existing systems";

/// PRD generator responsible for expanding inputs into documents
#[derive(Clone)]
pub struct PRDGenerator {
    clock: Arc<dyn Clock>,
}

impl Default for PRDGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PRDGenerator {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Expand inputs into a complete PRD.
    ///
    /// Never fails. Empty fields flow into the output as-is; rejecting incomplete input
    /// is the caller's job (see [`PRDGenerator::generate_checked`]).
    pub fn generate(&self, inputs: &RawInputs) -> PRD {
        let created_at = self.clock.now();
        debug!("Expanding PRD inputs at {}", created_at);

        PRD {
            id: None,
            title: extract_title(&inputs.problem_statement),
            problem_statement: inputs.problem_statement.clone(),
            target_audience: inputs.target_audience.clone(),
            goals: inputs.goals.clone(),
            features: inputs.features.clone(),
            constraints: inputs.constraints.clone(),
            objectives: generate_objectives(&inputs.goals),
            user_stories: generate_user_stories(&inputs.target_audience, &inputs.features),
            requirements: generate_requirements(&inputs.features),
            acceptance_criteria: generate_acceptance_criteria(&inputs.features),
            metrics: generate_metrics(&inputs.goals),
            risks: generate_risks(&inputs.constraints),
            created_at,
        }
    }

    /// Like [`PRDGenerator::generate`], but refuses inputs with empty required fields
    pub fn generate_checked(&self, inputs: &RawInputs) -> Result<PRD> {
        validate_inputs(inputs)?;
        Ok(self.generate(inputs))
    }

    /// Wait `delay` before expanding, so a UI has time to show progress.
    ///
    /// The timestamp is taken when expansion runs, after the delay.
    pub async fn generate_with_delay(&self, inputs: &RawInputs, delay: Duration) -> PRD {
        if !delay.is_zero() {
            debug!("Delaying generation by {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        let prd = self.generate(inputs);
        info!("Generated PRD '{}'", prd.title);
        prd
    }
}

/// First few words of the problem statement, or a generic title when it is empty.
///
/// A whitespace-only statement still counts as provided and yields `"PRD: ..."`.
pub fn extract_title(problem_statement: &str) -> String {
    if problem_statement.is_empty() {
        return DEFAULT_TITLE.to_string();
    }

    let words: Vec<&str> = problem_statement
        .split_whitespace()
        .take(TITLE_WORD_LIMIT)
        .collect();
    format!("PRD: {}...", words.join(" "))
}

pub fn generate_objectives(goals: &str) -> Vec<String> {
    vec![
        format!("Deliver a solution that addresses: {}", goals),
        "Ensure user adoption meets target metrics".to_string(),
        "Maintain system performance and reliability".to_string(),
        "Provide measurable business value".to_string(),
    ]
}

/// `_features` is accepted for call-shape compatibility; no story interpolates it.
pub fn generate_user_stories(audience: &str, _features: &str) -> Vec<String> {
    vec![
        format!(
            "As a {}, I want to access the core functionality so that I can achieve my primary goal",
            audience
        ),
        format!(
            "As a {}, I want the system to be intuitive so that I can use it without extensive training",
            audience
        ),
        format!(
            "As a {}, I want reliable performance so that I can depend on the system for my workflow",
            audience
        ),
        "As a stakeholder, I want clear metrics and feedback so that I can measure success"
            .to_string(),
    ]
}

pub fn generate_requirements(features: &str) -> Vec<String> {
    vec![
        "Functional Requirements:".to_string(),
        format!("- Implement {}", features),
        "- Ensure responsive design across devices".to_string(),
        "- Provide user authentication and authorization".to_string(),
        "- Include error handling and validation".to_string(),
        String::new(),
        "Non-Functional Requirements:".to_string(),
        "- Page load time under 3 seconds".to_string(),
        "- 99.9% uptime availability".to_string(),
        "- WCAG 2.1 AA accessibility compliance".to_string(),
        "- Mobile-first responsive design".to_string(),
    ]
}

pub fn generate_acceptance_criteria(_features: &str) -> Vec<String> {
    [
        "✓ User can successfully complete the primary workflow",
        "✓ All form validations work correctly",
        "✓ Error messages are clear and actionable",
        "✓ Performance meets specified benchmarks",
        "✓ Mobile experience is fully functional",
        "✓ Accessibility requirements are met",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// `_goals` is accepted for call-shape compatibility; the metrics are fixed.
pub fn generate_metrics(_goals: &str) -> Vec<String> {
    [
        "User Adoption: 80% of target users actively use the feature within 30 days",
        "Performance: Average task completion time reduced by 40%",
        "Quality: Less than 2% error rate in user workflows",
        "Satisfaction: 4.5+ star rating in user feedback",
        "Business Impact: Measurable improvement in key business metrics",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn generate_risks(constraints: &str) -> Vec<String> {
    let technical = if constraints.is_empty() {
        DEFAULT_TECHNICAL_RISK
    } else {
        constraints
    };

    vec![
        format!("Technical Risk: {}", technical),
        "Timeline Risk: Dependencies on external teams or resources".to_string(),
        "User Adoption Risk: Change management and training requirements".to_string(),
        "Business Risk: Market conditions or competitive pressure".to_string(),
        "Security Risk: Data privacy and compliance considerations".to_string(),
    ]
}
