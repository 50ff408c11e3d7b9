use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, step list, content, buttons, status and footer
pub fn compute_layout(area: Rect, sidebar_width: u16) -> (Rect, Rect, Rect, Rect, Rect, Rect) {
    // 1. Vertical Split: Header, Body, Buttons, Status, Footer
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Steps + content
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let header_area = vertical[0];
    let body_area = vertical[1];
    let buttons_area = vertical[2];
    let status_area = vertical[3];
    let footer_area = vertical[4];

    // 2. Horizontal Split of Body: step list on the left, content on the right
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width.min(area.width / 2)),
            Constraint::Min(1),
        ])
        .split(body_area);

    (
        header_area,
        body[0],
        body[1],
        buttons_area,
        status_area,
        footer_area,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 100, 30);
        let (header, steps, content, buttons, status, footer) = compute_layout(area, 34);

        assert_eq!(header.height, 1);
        assert_eq!(footer.y, 29);
        assert_eq!(status.y, 28);
        assert_eq!(buttons.y, 27);
        assert_eq!(steps.width, 34);
        assert_eq!(steps.width + content.width, 100);
        assert_eq!(content.height, 26);
    }

    #[test]
    fn test_sidebar_never_exceeds_half_width() {
        let (_, steps, content, ..) = compute_layout(Rect::new(0, 0, 40, 20), 34);
        assert_eq!(steps.width, 20);
        assert_eq!(content.width, 20);
    }
}
