use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, FeedbackForm, FormField, FormNotice};
use crate::ui::components::{self, FieldRow};

pub fn render_form_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Fields
            Constraint::Length(3), // Notice
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, fields, notice, footer] = &chunks[..] {
        components::render_header(f, *header, "Share your feedback", "");
        render_form_fields(f, &app.form, *fields, " Feedback ");
        render_notice(f, app, *notice);
        components::render_navigation_footer(
            f,
            *footer,
            "FORM",
            &[
                ("Tab", "next field"),
                ("←/→", "choose"),
                ("Enter", "submit"),
                ("Esc", "back"),
            ],
            &[("SENDING", app.form_submitting)],
        );
    }
}

/// Field list shared with the dashboard editor
pub fn render_form_fields(f: &mut Frame, form: &FeedbackForm, area: Rect, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let focused = form.focused_field();
    let width = usize::from(inner.width);
    let mut lines = Vec::with_capacity(FormField::ALL.len() * 2);
    for field in FormField::ALL {
        let value = form.display_value(field);
        let is_focused = field == focused;
        let row = FieldRow {
            label: field.label(),
            value: &value,
            required: field.is_required(),
            focused: is_focused,
            choice: field.is_choice(),
            cursor: if is_focused { form.cursor() } else { None },
        };
        lines.push(row.to_line(width));
        if inner.height as usize >= FormField::ALL.len() * 2 {
            lines.push(Line::from(""));
        }
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.form_notice {
        Some(FormNotice::Success(message)) => {
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Green)))
        }
        Some(FormNotice::Error(message)) => {
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red)))
        }
        None if app.form_submitting => {
            Line::from(Span::styled("Submitting...", Style::default().fg(Color::Cyan)))
        }
        None => Line::from(Span::styled(
            "Fields marked * are required.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
