//! Wizard controller errors

use thiserror::Error;

/// Caller-contract violations reported by [`WizardController`](super::WizardController).
///
/// Neither variant is transient. A rejected operation leaves the wizard state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("invalid operation at step {index}: {reason}")]
    InvalidOperation { index: usize, reason: &'static str },

    #[error("step index {index} out of range (wizard has {len} steps)")]
    IndexOutOfRange { index: usize, len: usize },
}
