//! Wizard UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::setup::{Panel, ProjectForm, StepStatus};
use crate::types::WizardField;
use crate::ui::footer::Footer;
use crate::ui::layout::compute_layout;

/// Render the deployment wizard
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (header, steps, content, buttons, status, footer) =
        compute_layout(area, app.config.ui.sidebar_width);

    render_header(frame, header, app);
    render_steps(frame, steps, app);

    if app.wizard.is_terminal() {
        render_complete(frame, content);
    } else {
        render_content(frame, content, app);
    }

    render_buttons(frame, buttons, app);

    if let Some(message) = &app.status {
        let line = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(line, status);
    }

    frame.render_widget(Footer { mode: app.input_mode() }, footer);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let total = app.wizard.step_count();
    let progress = if app.wizard.is_terminal() {
        "Complete".to_string()
    } else {
        format!("Step {}/{}", app.wizard.current_index() + 1, total)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.config.ui.title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("- {}", progress), Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Step indicators: active, completed, skipped (not completed) and pending
fn render_steps(frame: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    for (index, step) in app.wizard.steps().iter().enumerate() {
        let (icon, style) = match app.wizard.step_status(index) {
            StepStatus::Active => (
                "▶ ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            StepStatus::Completed => ("✓ ", Style::default().fg(Color::Green)),
            StepStatus::Skipped => ("– ", Style::default().fg(Color::Yellow)),
            StepStatus::Pending => ("○ ", Style::default().fg(Color::DarkGray)),
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(icon, style),
            Span::styled(format!("{}. {}", index + 1, step.title(&app.form)), style),
        ])];

        if app.wizard.is_skipped(index) {
            lines.push(Line::from(Span::styled(
                "     skipped",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )));
        } else if step.optional {
            lines.push(Line::from(Span::styled(
                "     Optional",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        items.push(ListItem::new(lines));
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Steps ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let index = app.wizard.current_index();
    let title = app
        .wizard
        .current_step()
        .map(|s| s.title(&app.form))
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.wizard.content_for(index) {
        Ok(Panel::Welcome { heading, intro, services, outro }) => {
            render_welcome(frame, inner, heading, intro, services, outro)
        }
        Ok(Panel::ProjectSetup) => render_project_form(frame, inner, &app.form),
        Ok(Panel::Text(text)) => {
            let body = Paragraph::new(vec![Line::from(""), Line::from(text)])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(body, inner);
        }
        Err(err) => {
            let body = Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red));
            frame.render_widget(body, inner);
        }
    }
}

fn render_welcome(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    intro: &str,
    services: &[&str],
    outro: &str,
) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);

    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            heading.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let mut lines = vec![Line::from(intro.to_string()), Line::from("")];
    for service in services {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::raw(service.to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(outro.to_string()));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
}

fn render_project_form(frame: &mut Frame, area: Rect, form: &ProjectForm) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Let's get started!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for &field in WizardField::all() {
        let focused = form.focused == field;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if focused { "> " } else { "  " };

        let value = if form.editing == Some(field) {
            Span::styled(format!("{}_", form.input_buffer), Style::default().fg(Color::Yellow))
        } else {
            let value = form.value_of(field);
            if value.is_empty() {
                Span::styled("(not set)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            }
        };

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<14}", field.label()), label_style),
            value,
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_complete(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(
                "All steps completed - you're finished",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from("Press Enter to reset the wizard."),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(content, inner);
}

fn render_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let enabled = Style::default().fg(Color::Black).bg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    let spans = if app.wizard.is_terminal() {
        vec![Span::styled(" Reset ", enabled)]
    } else {
        let back_style = if app.wizard.current_index() == 0 { disabled } else { enabled };
        let next_label = if app.wizard.is_last_step() { " Finish " } else { " Next → " };

        let mut spans = vec![Span::styled(" ← Back ", back_style), Span::raw("  ")];
        if app.wizard.is_optional(app.wizard.current_index()) {
            spans.push(Span::styled(" Skip ", enabled));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(next_label, enabled));
        spans
    };

    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}
