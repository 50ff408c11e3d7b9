//! Step table for the deployment wizard

use crate::setup::form::ProjectForm;

/// Typed reference to the content shown for a step.
///
/// Resolved into a renderable payload by a
/// [`StepContentProvider`](crate::setup::content::StepContentProvider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepContent {
    Welcome,
    ProjectSetup,
    Placeholder(String),
}

/// One page of the wizard, addressed by its position in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    /// Title template using `{project}` and `{provider}`
    pub title: Option<String>,
    pub optional: bool,
    pub content: StepContent,
}

impl Step {
    pub fn new(label: impl Into<String>, content: StepContent) -> Self {
        Self {
            label: label.into(),
            title: None,
            optional: false,
            content,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Display title for the step.
    ///
    /// Falls back to `label` when the template references a form value that
    /// has not been filled in yet.
    pub fn title(&self, form: &ProjectForm) -> String {
        let Some(template) = &self.title else {
            return self.label.clone();
        };

        let provider = form.provider.map(|p| p.title()).unwrap_or_default();
        let substitutions = [("{project}", form.project_name.trim()), ("{provider}", provider)];

        // Single pass over the template so inserted values are never rescanned
        let mut title = String::with_capacity(template.len());
        let mut rest = template.as_str();
        while let Some(start) = rest.find('{') {
            title.push_str(&rest[..start]);
            rest = &rest[start..];

            match substitutions.iter().find(|(key, _)| rest.starts_with(key)) {
                Some((_, value)) if value.is_empty() => return self.label.clone(),
                Some((key, value)) => {
                    title.push_str(value);
                    rest = &rest[key.len()..];
                }
                None => {
                    title.push('{');
                    rest = &rest[1..];
                }
            }
        }
        title.push_str(rest);
        title
    }
}

/// The seven QHub deployment steps. Only the trailing "Profiles" step is optional.
pub fn builtin_steps() -> Vec<Step> {
    vec![
        Step::new("General Information", StepContent::Welcome),
        Step::new("Setup Project", StepContent::ProjectSetup),
        Step::new(
            "Authentication Setup",
            StepContent::Placeholder("Authentication setup placeholder".to_string()),
        )
        .with_title("{project} - Authentication Setup"),
        Step::new(
            "Users Setup",
            StepContent::Placeholder("Users table placeholder".to_string()),
        )
        .with_title("{project} - Users Setup"),
        Step::new(
            "Groups Setup",
            StepContent::Placeholder("Groups table placeholder".to_string()),
        )
        .with_title("{project} - Groups Setup"),
        Step::new(
            "Provider Setup",
            StepContent::Placeholder("Provider setup placeholder".to_string()),
        )
        .with_title("{provider} Setup"),
        Step::new(
            "Profiles",
            StepContent::Placeholder("Profiles setup placeholder".to_string()),
        )
        .optional(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Provider;

    #[test]
    fn test_builtin_steps_order() {
        let labels: Vec<String> = builtin_steps().into_iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "General Information",
                "Setup Project",
                "Authentication Setup",
                "Users Setup",
                "Groups Setup",
                "Provider Setup",
                "Profiles",
            ]
        );
    }

    #[test]
    fn test_only_last_step_optional() {
        let steps = builtin_steps();
        let optional: Vec<usize> = steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.optional)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(optional, vec![steps.len() - 1]);
    }

    #[test]
    fn test_title_falls_back_to_label() {
        let steps = builtin_steps();
        let form = ProjectForm::default();
        assert_eq!(steps[2].title(&form), "Authentication Setup");
        assert_eq!(steps[5].title(&form), "Provider Setup");
        assert_eq!(steps[0].title(&form), "General Information");
    }

    #[test]
    fn test_title_substitutes_form_values() {
        let steps = builtin_steps();
        let mut form = ProjectForm::default();
        form.project_name = "demo".to_string();
        form.provider = Some(Provider::DigitalOcean);
        assert_eq!(steps[2].title(&form), "demo - Authentication Setup");
        assert_eq!(steps[4].title(&form), "demo - Groups Setup");
        assert_eq!(steps[5].title(&form), "DigitalOcean Setup");
    }

    #[test]
    fn test_blank_project_name_is_not_substituted() {
        let step =
            Step::new("Users Setup", StepContent::Welcome).with_title("{project} - Users Setup");
        let mut form = ProjectForm::default();
        form.project_name = "   ".to_string();
        assert_eq!(step.title(&form), "Users Setup");
    }

    #[test]
    fn test_form_values_are_not_treated_as_placeholders() {
        let steps = builtin_steps();
        let mut form = ProjectForm::default();
        form.project_name = "{provider}".to_string();
        form.provider = Some(Provider::Aws);
        assert_eq!(steps[2].title(&form), "{provider} - Authentication Setup");

        form.provider = None;
        assert_eq!(steps[2].title(&form), "{provider} - Authentication Setup");
    }

    #[test]
    fn test_unknown_braces_are_kept() {
        let step = Step::new("Storage", StepContent::Welcome).with_title("{project} {storage}");
        let mut form = ProjectForm::default();
        form.project_name = "demo".to_string();
        assert_eq!(step.title(&form), "demo {storage}");
    }
}
