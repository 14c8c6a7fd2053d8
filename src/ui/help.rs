use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::components;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Home",
        &[
            ("←/h →/l", "Previous / next slide"),
            ("0-9", "Jump to dot (type 1 2 quickly for dot 12)"),
            ("f", "Open the feedback form"),
            ("a", "Open the admin dashboard"),
            ("r", "Reload posts"),
            ("q/Esc", "Quit"),
        ],
    ),
    (
        "Feedback form",
        &[
            ("Tab/↑↓", "Move between fields"),
            ("Home/End", "Start or end of a text field"),
            ("←/→", "Pick a choice or move the cursor"),
            ("Enter", "Submit"),
            ("Esc", "Back to home"),
        ],
    ),
    (
        "Admin dashboard",
        &[
            ("j/k ↑↓", "Select a row"),
            ("n / e / d", "New, edit, delete"),
            ("f", "Cycle the status filter"),
            ("r", "Refresh"),
            ("Esc", "Back to home"),
        ],
    ),
];

pub fn render_help_view(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        components::render_header(f, *header, "Help", "");
        render_help_body(f, *body);
        components::render_navigation_footer(f, *footer, "HELP", &[("Esc", "back")], &[]);
    }
}

fn render_help_body(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", title),
            Style::default().fg(Color::Cyan),
        )));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
                Span::styled(description.to_string(), Style::default().fg(Color::White)),
            ]));
        }
    }
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
