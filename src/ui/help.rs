//! Help popup listing the wizard key bindings

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// All help content lines
fn help_content() -> Vec<Line<'static>> {
    vec![
        section("Navigation"),
        key_line("→ / n", "Next step (Finish on the last step)"),
        key_line("← / b", "Previous step"),
        key_line("s", "Skip the current step if it is optional"),
        key_line("r", "Start over from the first step"),
        Line::from(""),
        section("Setup Project"),
        key_line("Tab / ↓", "Next field"),
        key_line("S-Tab / ↑", "Previous field"),
        key_line("Enter", "Edit text field or pick next option"),
        key_line("+ / -", "Cycle provider or CI/CD option"),
        Line::from(""),
        section("General"),
        key_line("?", "Toggle this help"),
        key_line("q / Esc", "Quit (nothing is saved)"),
        key_line("Ctrl+C", "Quit from anywhere"),
    ]
}

pub fn render(frame: &mut Frame) {
    let area = frame.area();
    let content = help_content();

    let width = 60u16.min(area.width.saturating_sub(4));
    let height = (content.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let popup_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(content).block(block), popup_area);
}
