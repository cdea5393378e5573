// ABOUTME: Built-in PRD quickstart templates
// ABOUTME: Static catalog of pre-filled inputs plus lookup and application helpers

use lazy_static::lazy_static;
use tracing::debug;

use crate::error::{IdeateError, Result};
use crate::types::{PRDTemplate, RawInputs, TemplateCategory};

fn template(
    id: &str,
    name: &str,
    description: &str,
    category: TemplateCategory,
    inputs: [&str; 5],
) -> PRDTemplate {
    let [problem_statement, target_audience, goals, features, constraints] = inputs;
    PRDTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        template: RawInputs::new(problem_statement, target_audience, goals, features)
            .with_constraints(constraints),
    }
}

lazy_static! {
    static ref BUILTIN_TEMPLATES: Vec<PRDTemplate> = vec![
        template(
            "new-feature",
            "New Feature PRD",
            "Template for introducing a brand new feature to your product",
            TemplateCategory::NewFeature,
            [
                "Users are struggling with [specific pain point] because our current product lacks [capability]. This is impacting user satisfaction and potentially leading to churn.",
                "Primary users who need [specific functionality]",
                "Increase user engagement by 25% and reduce task completion time by 40%",
                "Core functionality including [feature 1], [feature 2], user interface, notifications, and analytics tracking",
                "Must integrate with existing systems, maintain current performance standards, and be accessible on mobile devices",
            ],
        ),
        template(
            "enhancement",
            "Enhancement PRD",
            "Template for improving existing features or functionality",
            TemplateCategory::Enhancement,
            [
                "The current [feature/functionality] is not meeting user expectations based on feedback and usage analytics. Users report [specific issues] which is affecting their workflow efficiency.",
                "Existing users who regularly use [current feature]",
                "Improve user satisfaction scores by 30% and reduce support tickets by 50%",
                "Enhanced user interface, improved performance, better error handling, and additional customization options",
                "Cannot break existing functionality, must maintain backward compatibility, limited development resources",
            ],
        ),
        template(
            "bug-fix",
            "Bug Fix PRD",
            "Template for critical bug fixes and stability improvements",
            TemplateCategory::BugFix,
            [
                "Critical bug identified in [system/feature] causing [specific impact] for users. This is affecting [percentage] of our user base and needs immediate attention.",
                "All users affected by the current bug",
                "Eliminate the bug completely and prevent similar issues in the future",
                "Bug identification, root cause analysis, fix implementation, testing, and monitoring",
                "Must be deployed within [timeframe], minimal disruption to users, thorough testing required",
            ],
        ),
        template(
            "mvp",
            "MVP PRD",
            "Template for building a Minimum Viable Product",
            TemplateCategory::Mvp,
            [
                "We need to validate our product hypothesis by building and testing a minimum viable product that solves [core problem] for [target users].",
                "Early adopters and potential customers who face [specific problem]",
                "Validate product-market fit, gather user feedback, and prove business viability",
                "Core essential features only: user authentication, basic functionality, feedback collection, and analytics",
                "Limited budget and timeline, focus on core value proposition, prepare for rapid iteration based on feedback",
            ],
        ),
    ];
}

/// Read-only access to the quickstart template catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateManager;

impl TemplateManager {
    pub fn new() -> Self {
        Self
    }

    /// All templates, in catalog order
    pub fn get_templates(&self) -> &'static [PRDTemplate] {
        &BUILTIN_TEMPLATES
    }

    /// Get a specific template by ID
    pub fn get_template(&self, template_id: &str) -> Result<&'static PRDTemplate> {
        debug!("Looking up template {}", template_id);
        BUILTIN_TEMPLATES
            .iter()
            .find(|t| t.id == template_id)
            .ok_or_else(|| IdeateError::TemplateNotFound(template_id.to_string()))
    }

    pub fn get_templates_by_category(&self, category: TemplateCategory) -> Vec<&'static PRDTemplate> {
        BUILTIN_TEMPLATES
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Form values seeded from a template
    pub fn apply_template(&self, template_id: &str) -> Result<RawInputs> {
        Ok(self.get_template(template_id)?.template.clone())
    }
}
