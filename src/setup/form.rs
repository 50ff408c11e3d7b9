//! Project setup form state

use crate::types::{CiCd, Provider, WizardField};

/// In-memory values collected on the "Setup Project" step.
///
/// Nothing here is validated or persisted.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub project_name: String,
    pub provider: Option<Provider>,
    pub ci_cd: Option<CiCd>,
    pub domain: String,

    // Focus and input state
    pub focused: WizardField,
    pub editing: Option<WizardField>,
    pub input_buffer: String,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Activate the focused field: text fields enter edit mode, choices cycle
    pub fn activate(&mut self) {
        if self.focused.is_text() {
            self.start_editing(self.focused);
        } else {
            self.cycle(true);
        }
    }

    pub fn start_editing(&mut self, field: WizardField) {
        self.editing = Some(field);
        self.input_buffer = match field {
            WizardField::ProjectName => self.project_name.clone(),
            WizardField::Domain => self.domain.clone(),
            WizardField::Provider | WizardField::CiCd => String::new(),
        };
    }

    pub fn finish_editing(&mut self) {
        if let Some(field) = self.editing.take() {
            let value = std::mem::take(&mut self.input_buffer);
            match field {
                WizardField::ProjectName => self.project_name = value,
                WizardField::Domain => self.domain = value,
                WizardField::Provider | WizardField::CiCd => {}
            }
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
        self.input_buffer.clear();
    }

    pub fn push_char(&mut self, c: char) {
        if self.editing.is_some() {
            self.input_buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.editing.is_some() {
            self.input_buffer.pop();
        }
    }

    /// Step the focused choice field through its options, passing through "unset"
    pub fn cycle(&mut self, forward: bool) {
        match self.focused {
            WizardField::Provider => {
                self.provider = cycle_option(Provider::all(), self.provider, forward)
            }
            WizardField::CiCd => self.ci_cd = cycle_option(CiCd::all(), self.ci_cd, forward),
            WizardField::ProjectName | WizardField::Domain => {}
        }
    }

    /// Current value of a field as display text
    pub fn value_of(&self, field: WizardField) -> String {
        match field {
            WizardField::ProjectName => self.project_name.clone(),
            WizardField::Provider => self
                .provider
                .map(|p| format!("{} ({})", p.title(), p.id()))
                .unwrap_or_default(),
            WizardField::CiCd => self.ci_cd.map(|c| c.id().to_string()).unwrap_or_default(),
            WizardField::Domain => self.domain.clone(),
        }
    }
}

fn cycle_option<T: Copy + PartialEq>(
    options: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    let position = current.and_then(|c| options.iter().position(|o| *o == c));
    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => options.len().checked_sub(1),
        (Some(i), true) => (i + 1 < options.len()).then_some(i + 1),
        (Some(i), false) => i.checked_sub(1),
    };
    next.and_then(|i| options.get(i).copied())
}
