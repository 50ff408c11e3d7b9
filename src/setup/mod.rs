//! Deployment wizard: step table, content resolution, navigation and form state

pub mod content;
pub mod error;
pub mod form;
pub mod steps;
pub mod wizard;

pub use content::{BuiltinContent, Panel, StepContentProvider};
pub use error::WizardError;
pub use form::ProjectForm;
pub use steps::{builtin_steps, Step, StepContent};
pub use wizard::{StepStatus, WizardController, WizardState};
