//! Step content resolution

use crate::setup::steps::{Step, StepContent};

/// Supplies the payload rendered for each step.
///
/// Implementations must be pure and total over `0..step_count`; the
/// controller only routes to them by index.
pub trait StepContentProvider {
    type Payload;

    fn content(&self, index: usize, step: &Step) -> Self::Payload;
}

/// Renderable payload produced by [`BuiltinContent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Welcome {
        heading: &'static str,
        intro: &'static str,
        services: &'static [&'static str],
        outro: &'static str,
    },
    ProjectSetup,
    Text(String),
}

/// Default provider for the QHub step table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl StepContentProvider for BuiltinContent {
    type Payload = Panel;

    fn content(&self, _index: usize, step: &Step) -> Panel {
        match &step.content {
            StepContent::Welcome => Panel::Welcome {
                heading: "Welcome to the QHub Deployment Wizard",
                intro: "This wizard provides an easy to administer deployment of the services \
                        QHub contains. Currently we support:",
                services: &["JupyterLab", "JupyterLab + Dask"],
                outro: "With more support to come in the near future.",
            },
            StepContent::ProjectSetup => Panel::ProjectSetup,
            StepContent::Placeholder(text) => Panel::Text(text.clone()),
        }
    }
}
