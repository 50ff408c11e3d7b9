use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::input::InputMode;

/// Key hint bar for the current input mode
pub struct Footer {
    pub mode: InputMode,
}

impl Footer {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            InputMode::Navigate => &[
                ("→", "Next"),
                ("←", "Back"),
                ("s", "Skip"),
                ("r", "Reset"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
            InputMode::Form => &[
                ("Tab", "Field"),
                ("Enter", "Edit"),
                ("+/-", "Choice"),
                ("→", "Next"),
                ("←", "Back"),
                ("q", "Quit"),
            ],
            InputMode::Editing => &[("Enter", "Confirm"), ("Esc", "Cancel")],
            InputMode::Help => &[("Esc", "Close")],
            InputMode::Completed => &[("Enter", "Reset"), ("q", "Quit")],
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, label) in self.hints() {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default().bg(Color::Cyan).fg(Color::Black),
            ));
            spans.push(Span::styled(format!(" {}  ", label), Style::default().fg(Color::Gray)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(mode: InputMode) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Footer { mode }.render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_completed_hints() {
        let line = rendered(InputMode::Completed);
        assert!(line.contains("Reset"));
        assert!(!line.contains("Skip"));
    }

    #[test]
    fn test_editing_hints() {
        let line = rendered(InputMode::Editing);
        assert!(line.contains("Confirm"));
        assert!(line.contains("Cancel"));
    }
}
