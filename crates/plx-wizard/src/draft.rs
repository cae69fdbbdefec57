//! User input collected across the wizard steps, and the per-step validators.

use std::collections::BTreeMap;

use plx_core::entities::{InfrastructureTemplate, TemplateRequest};

use crate::error::FieldError;
use crate::step::WizardStep;

const MAX_NAME_LEN: usize = 63;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    pub template: Option<InfrastructureTemplate>,
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub variables: BTreeMap<String, String>,
}

impl TemplateDraft {
    /// Field errors blocking `step`. Empty means the step is complete.
    #[must_use]
    pub fn validate(&self, step: WizardStep) -> Vec<FieldError> {
        match step {
            WizardStep::Template => self.validate_template(),
            WizardStep::Details => self.validate_details(),
            WizardStep::Parameters => self.validate_parameters(),
            WizardStep::Preview | WizardStep::Done => Vec::new(),
        }
    }

    /// Body for the preview and generate calls.
    #[must_use]
    pub fn to_request(&self) -> TemplateRequest {
        TemplateRequest {
            template_id: self
                .template
                .as_ref()
                .map(|t| t.id.clone())
                .unwrap_or_default(),
            name: self.name.trim().to_string(),
            description: non_blank(self.description.as_deref()),
            owner: non_blank(self.owner.as_deref()),
            variables: self
                .variables
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .map(|(k, v)| (k.clone(), v.trim().to_string()))
                .collect(),
        }
    }

    fn validate_template(&self) -> Vec<FieldError> {
        if self.template.is_some() {
            Vec::new()
        } else {
            vec![FieldError::new("template", "select a template")]
        }
    }

    fn validate_details(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(message) = name_problem(self.name.trim()) {
            errors.push(FieldError::new("name", message));
        }
        if self
            .owner
            .as_deref()
            .is_some_and(|o| !o.trim().is_empty() && o.trim().contains(char::is_whitespace))
        {
            errors.push(FieldError::new("owner", "must be a single team or user handle"));
        }
        errors
    }

    fn validate_parameters(&self) -> Vec<FieldError> {
        let Some(template) = &self.template else {
            return self.validate_template();
        };
        template
            .required_variables()
            .filter(|var| {
                self.variables
                    .get(&var.name)
                    .is_none_or(|value| value.trim().is_empty())
            })
            .map(|var| FieldError::new(&var.name, "required"))
            .collect()
    }
}

/// Service names become repository and resource names.
fn name_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("required".into());
    }
    if name.len() > MAX_NAME_LEN {
        return Some(format!("at most {MAX_NAME_LEN} characters"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Some("use lowercase letters, digits and hyphens only".into());
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Some("must not start or end with a hyphen".into());
    }
    None
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use plx_core::entities::TemplateVariable;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn template() -> InfrastructureTemplate {
        InfrastructureTemplate {
            id: "tpl-go".into(),
            name: "Go service".into(),
            description: None,
            category: None,
            provider: None,
            variables: vec![
                TemplateVariable {
                    name: "region".into(),
                    description: None,
                    required: true,
                    default: None,
                },
                TemplateVariable {
                    name: "replicas".into(),
                    description: None,
                    required: true,
                    default: Some("2".into()),
                },
            ],
        }
    }

    #[rstest]
    #[case("payments-api", None)]
    #[case("a1", None)]
    #[case("", Some("required"))]
    #[case("Payments", Some("use lowercase letters, digits and hyphens only"))]
    #[case("pay ments", Some("use lowercase letters, digits and hyphens only"))]
    #[case("-payments", Some("must not start or end with a hyphen"))]
    fn service_names(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(name_problem(name).as_deref(), expected);
    }

    #[test]
    fn overlong_name_is_rejected() {
        assert!(name_problem(&"a".repeat(64)).is_some());
        assert!(name_problem(&"a".repeat(63)).is_none());
    }

    #[test]
    fn parameters_report_each_missing_required_variable() {
        let draft = TemplateDraft {
            template: Some(template()),
            variables: BTreeMap::from([("region".to_string(), "  ".to_string())]),
            ..Default::default()
        };
        let errors = draft.validate(WizardStep::Parameters);
        assert_eq!(errors, vec![FieldError::new("region", "required")]);
    }

    #[test]
    fn request_drops_blank_values() {
        let draft = TemplateDraft {
            template: Some(template()),
            name: " payments ".into(),
            description: Some("  ".into()),
            owner: Some("team-payments".into()),
            variables: BTreeMap::from([
                ("region".to_string(), "eu-west-1".to_string()),
                ("extra".to_string(), String::new()),
            ]),
        };
        let request = draft.to_request();
        assert_eq!(request.template_id, "tpl-go");
        assert_eq!(request.name, "payments");
        assert_eq!(request.description, None);
        assert_eq!(request.variables.len(), 1);
    }
}
