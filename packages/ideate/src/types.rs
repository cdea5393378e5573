// ABOUTME: Type definitions for PRD generation
// ABOUTME: Defines raw form inputs, the generated PRD entity, templates and requirement line kinds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text fields collected from the user before generation.
///
/// The first four fields are required at the form boundary; `constraints` is optional
/// and defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputs {
    pub problem_statement: String,
    pub target_audience: String,
    pub goals: String,
    pub features: String,
    #[serde(default)]
    pub constraints: String,
}

impl RawInputs {
    pub fn new(
        problem_statement: impl Into<String>,
        target_audience: impl Into<String>,
        goals: impl Into<String>,
        features: impl Into<String>,
    ) -> Self {
        Self {
            problem_statement: problem_statement.into(),
            target_audience: target_audience.into(),
            goals: goals.into(),
            features: features.into(),
            constraints: String::new(),
        }
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = constraints.into();
        self
    }

    /// True when every required field is non-empty
    pub fn is_ready(&self) -> bool {
        crate::validation::validate_inputs(self).is_ok()
    }
}

/// A generated Product Requirement Document.
///
/// Derived sections are produced in one pass from a single [`RawInputs`] snapshot and
/// never edited afterwards. `id` stays `None` until a session store saves a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PRD {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub problem_statement: String,
    pub target_audience: String,
    pub goals: String,
    pub features: String,
    pub constraints: String,
    pub objectives: Vec<String>,
    pub user_stories: Vec<String>,
    pub requirements: Vec<String>,
    pub acceptance_criteria: Vec<String>,
    pub metrics: Vec<String>,
    pub risks: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PRD {
    /// The raw fields this document was generated from
    pub fn inputs(&self) -> RawInputs {
        RawInputs {
            problem_statement: self.problem_statement.clone(),
            target_audience: self.target_audience.clone(),
            goals: self.goals.clone(),
            features: self.features.clone(),
            constraints: self.constraints.clone(),
        }
    }

    /// Requirements classified by how they should be displayed
    pub fn requirement_lines(&self) -> Vec<RequirementLine<'_>> {
        self.requirements
            .iter()
            .map(|line| RequirementLine::classify(line))
            .collect()
    }
}

/// Template category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    NewFeature,
    Enhancement,
    BugFix,
    Mvp,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::NewFeature,
        TemplateCategory::Enhancement,
        TemplateCategory::BugFix,
        TemplateCategory::Mvp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::NewFeature => "new-feature",
            TemplateCategory::Enhancement => "enhancement",
            TemplateCategory::BugFix => "bug-fix",
            TemplateCategory::Mvp => "mvp",
        }
    }

    /// Human-facing label, e.g. "new feature"
    pub fn label(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateCategory {
    type Err = crate::error::IdeateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                crate::error::IdeateError::InvalidInput(format!("Unknown template category: {}", s))
            })
    }
}

/// Pre-filled form values offered to seed a new document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PRDTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub template: RawInputs,
}

/// How a single requirements line is meant to be displayed.
///
/// Checked in order: bullet, spacer, header, plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementLine<'a> {
    /// Line started with `-` or `•`; holds the text after the marker and its whitespace
    Bullet(&'a str),
    /// Empty line
    Spacer,
    /// Line ending with `:`
    Header(&'a str),
    Text(&'a str),
}

impl<'a> RequirementLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('•')) {
            RequirementLine::Bullet(rest.trim_start())
        } else if line.is_empty() {
            RequirementLine::Spacer
        } else if line.ends_with(':') {
            RequirementLine::Header(line)
        } else {
            RequirementLine::Text(line)
        }
    }
}
