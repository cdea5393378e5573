// ABOUTME: Required-field checks for PRD form inputs
// ABOUTME: Generation is withheld until problem, audience, goals and features are filled in

use thiserror::Error;

use crate::types::RawInputs;

/// Required form fields, in the order the form presents them
pub const REQUIRED_FIELDS: [&str; 4] = [
    "problemStatement",
    "targetAudience",
    "goals",
    "features",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Check that every required field is non-empty.
///
/// Only the empty string counts as missing; whitespace-only values pass, matching the
/// form's own button gating.
pub fn validate_inputs(inputs: &RawInputs) -> Result<(), ValidationError> {
    let values = [
        &inputs.problem_statement,
        &inputs.target_audience,
        &inputs.goals,
        &inputs.features,
    ];

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_inputs_pass() {
        let inputs = RawInputs::new("problem", "audience", "goals", "features");
        assert!(validate_inputs(&inputs).is_ok());
    }

    #[test]
    fn test_constraints_are_optional() {
        let inputs = RawInputs::new("problem", "audience", "goals", "features");
        assert!(inputs.constraints.is_empty());
        assert!(inputs.is_ready());
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let inputs = RawInputs::new("", "audience", "", "");

        let err = validate_inputs(&inputs).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["problemStatement", "goals", "features"])
        );
        assert_eq!(
            err.to_string(),
            "Missing required fields: problemStatement, goals, features"
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let inputs = RawInputs::new(" ", "\t", "goals", "features");
        assert!(validate_inputs(&inputs).is_ok());
    }
}
