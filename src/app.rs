use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::input::{self, InputMode, WizardAction};
use crate::setup::{BuiltinContent, ProjectForm, StepContent, WizardController, WizardError};
use crate::ui;

pub struct App {
    pub config: Config,
    pub wizard: WizardController<BuiltinContent>,
    pub form: ProjectForm,
    pub should_quit: bool,
    pub show_help: bool,
    /// One-line message shown above the footer
    pub status: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let wizard = WizardController::new(config.steps(), BuiltinContent);
        info!(steps = wizard.step_count(), "wizard mounted");

        Self {
            config,
            wizard,
            form: ProjectForm::new(),
            should_quit: false,
            show_help: false,
            status: None,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        info!("wizard closed");
        Ok(())
    }

    pub fn input_mode(&self) -> InputMode {
        if self.show_help {
            InputMode::Help
        } else if self.form.is_editing() {
            InputMode::Editing
        } else if self.wizard.is_terminal() {
            InputMode::Completed
        } else if matches!(
            self.wizard.current_step().map(|s| &s.content),
            Some(StepContent::ProjectSetup)
        ) {
            InputMode::Form
        } else {
            InputMode::Navigate
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::map_key(key, self.input_mode()) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: WizardAction) {
        debug!(?action, index = self.wizard.current_index(), "action");
        match action {
            WizardAction::Next => {
                // Next is not offered once every step is done
                if !self.wizard.is_terminal() {
                    self.status = None;
                    self.wizard.advance();
                }
            }
            WizardAction::Back => {
                // Back is disabled on the first step
                if self.wizard.current_index() > 0 {
                    self.status = None;
                    let result = self.wizard.retreat();
                    self.report(result);
                }
            }
            WizardAction::Skip => {
                if self.wizard.is_optional(self.wizard.current_index()) {
                    self.status = None;
                    let result = self.wizard.skip();
                    self.report(result);
                } else {
                    self.status = Some("This step is required and cannot be skipped".to_string());
                }
            }
            WizardAction::Reset => {
                self.status = None;
                self.wizard.reset();
            }
            WizardAction::Quit => self.should_quit = true,
            WizardAction::ToggleHelp => self.show_help = !self.show_help,
            WizardAction::FocusNext => self.form.focus_next(),
            WizardAction::FocusPrev => self.form.focus_prev(),
            WizardAction::Activate => self.form.activate(),
            WizardAction::CycleNext => self.form.cycle(true),
            WizardAction::CyclePrev => self.form.cycle(false),
            WizardAction::Input(c) => self.form.push_char(c),
            WizardAction::DeleteChar => self.form.pop_char(),
            WizardAction::ConfirmEdit => self.form.finish_editing(),
            WizardAction::CancelEdit => self.form.cancel_editing(),
        }
    }

    fn report(&mut self, result: Result<(), WizardError>) {
        if let Err(err) = result {
            error!(%err, "wizard rejected navigation");
            self.status = Some(err.to_string());
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        ui::wizard_ui::render(frame, area, self);

        if self.show_help {
            ui::help::render(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Provider, WizardField};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_back_is_ignored_on_first_step() {
        let mut app = App::new(Config::default());
        app.handle_action(WizardAction::Back);
        assert_eq!(app.wizard.current_index(), 0);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_skip_required_step_is_guarded() {
        let mut app = App::new(Config::default());
        app.handle_action(WizardAction::Skip);
        assert_eq!(app.wizard.current_index(), 0);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_walk_to_completion_and_reset() {
        let mut app = App::new(Config::default());
        for _ in 0..6 {
            app.handle_action(WizardAction::Next);
        }
        app.handle_action(WizardAction::Skip);
        assert!(app.wizard.is_terminal());
        assert_eq!(app.input_mode(), InputMode::Completed);

        // Next in the completed view is not forwarded to the controller
        app.handle_action(WizardAction::Next);
        assert_eq!(app.wizard.current_index(), 7);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.current_index(), 0);
        assert!(app.wizard.state().skipped().is_empty());
    }

    #[test]
    fn test_project_form_keys() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Form);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Editing);
        for c in "demo".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.project_name, "demo");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.focused, WizardField::Provider);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.provider, Some(Provider::Local));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.current_index(), 2);
        let title = app.wizard.current_step().unwrap().title(&app.form);
        assert_eq!(title, "demo - Authentication Setup");
    }

    #[test]
    fn test_reset_keeps_form_values() {
        let mut app = App::new(Config::default());
        app.form.project_name = "kept".to_string();
        app.handle_action(WizardAction::Next);
        app.handle_action(WizardAction::Reset);
        assert_eq!(app.wizard.current_index(), 0);
        assert_eq!(app.form.project_name, "kept");
    }

    #[test]
    fn test_help_swallows_navigation() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.current_index(), 0);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
