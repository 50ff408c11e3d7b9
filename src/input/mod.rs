use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the focused part of the UI expects keys to mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Plain step navigation
    Navigate,
    /// Project setup step, form fields have focus
    Form,
    /// A text field is being edited
    Editing,
    Help,
    /// All steps done, only reset or quit make sense
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    Skip,
    Reset,
    Quit,
    ToggleHelp,
    FocusNext,
    FocusPrev,
    Activate,
    CycleNext,
    CyclePrev,
    Input(char),
    DeleteChar,
    ConfirmEdit,
    CancelEdit,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<WizardAction> {
    // Ctrl+C / Ctrl+Q quit from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(WizardAction::Quit),
            _ => None,
        };
    }

    match mode {
        InputMode::Editing => match key.code {
            KeyCode::Enter => Some(WizardAction::ConfirmEdit),
            KeyCode::Esc => Some(WizardAction::CancelEdit),
            KeyCode::Backspace => Some(WizardAction::DeleteChar),
            KeyCode::Char(c) => Some(WizardAction::Input(c)),
            _ => None,
        },
        InputMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                Some(WizardAction::ToggleHelp)
            }
            _ => None,
        },
        InputMode::Completed => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(WizardAction::Reset),
            KeyCode::Esc | KeyCode::Char('q') => Some(WizardAction::Quit),
            KeyCode::Char('?') => Some(WizardAction::ToggleHelp),
            _ => None,
        },
        InputMode::Form => match key.code {
            KeyCode::Tab | KeyCode::Down => Some(WizardAction::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(WizardAction::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(WizardAction::Activate),
            KeyCode::Char('+') => Some(WizardAction::CycleNext),
            KeyCode::Char('-') => Some(WizardAction::CyclePrev),
            _ => map_navigation(key.code),
        },
        InputMode::Navigate => match key.code {
            KeyCode::Enter => Some(WizardAction::Next),
            _ => map_navigation(key.code),
        },
    }
}

fn map_navigation(code: KeyCode) -> Option<WizardAction> {
    match code {
        KeyCode::Right | KeyCode::Char('n') => Some(WizardAction::Next),
        KeyCode::Left | KeyCode::Char('b') => Some(WizardAction::Back),
        KeyCode::Char('s') => Some(WizardAction::Skip),
        KeyCode::Char('r') => Some(WizardAction::Reset),
        KeyCode::Char('?') => Some(WizardAction::ToggleHelp),
        KeyCode::Esc | KeyCode::Char('q') => Some(WizardAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Enter), InputMode::Navigate), Some(WizardAction::Next));
        assert_eq!(map_key(key(KeyCode::Left), InputMode::Navigate), Some(WizardAction::Back));
        assert_eq!(map_key(key(KeyCode::Char('s')), InputMode::Navigate), Some(WizardAction::Skip));
        assert_eq!(map_key(key(KeyCode::Char('x')), InputMode::Navigate), None);
    }

    #[test]
    fn test_editing_captures_letters() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), InputMode::Editing),
            Some(WizardAction::Input('q'))
        );
        assert_eq!(map_key(key(KeyCode::Esc), InputMode::Editing), Some(WizardAction::CancelEdit));
        assert_eq!(map_key(key(KeyCode::Right), InputMode::Editing), None);
    }

    #[test]
    fn test_form_enter_activates_field() {
        assert_eq!(map_key(key(KeyCode::Enter), InputMode::Form), Some(WizardAction::Activate));
        assert_eq!(map_key(key(KeyCode::Tab), InputMode::Form), Some(WizardAction::FocusNext));
        assert_eq!(map_key(key(KeyCode::Right), InputMode::Form), Some(WizardAction::Next));
    }

    #[test]
    fn test_completed_only_resets_or_quits() {
        assert_eq!(map_key(key(KeyCode::Enter), InputMode::Completed), Some(WizardAction::Reset));
        assert_eq!(map_key(key(KeyCode::Right), InputMode::Completed), None);
        assert_eq!(map_key(key(KeyCode::Char('s')), InputMode::Completed), None);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, InputMode::Editing), Some(WizardAction::Quit));
    }
}
