use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = "  ";

/// Top bar: product name, screen name, and an optional dim suffix
pub fn render_header(f: &mut Frame, area: Rect, screen: &str, suffix: &str) {
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Feedback Desk",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default().fg(Color::DarkGray)),
            Span::styled(screen.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(suffix.to_string(), Style::default().fg(Color::DarkGray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Left),
        area,
    );
}

/// One labelled form row. Focused text rows show a block cursor.
pub struct FieldRow<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub required: bool,
    pub focused: bool,
    pub choice: bool,
    pub cursor: Option<usize>,
}

impl FieldRow<'_> {
    pub fn to_line(&self, width: usize) -> Line<'static> {
        let marker = if self.focused { "› " } else { "  " };
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<24}", self.label), label_style),
            Span::styled(
                if self.required { "* " } else { "  " }.to_string(),
                Style::default().fg(Color::Red),
            ),
        ];

        let value_width = width.saturating_sub(28).max(4);
        if self.choice {
            let arrows = if self.focused { ("◀ ", " ▶") } else { ("  ", "  ") };
            spans.push(Span::styled(arrows.0, Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                truncate_to_width(self.value, value_width.saturating_sub(4)),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(arrows.1, Style::default().fg(Color::Yellow)));
            return Line::from(spans);
        }

        match self.cursor.filter(|_| self.focused) {
            Some(cursor) => {
                let before: String = self.value.chars().take(cursor).collect();
                let after: String = self.value.chars().skip(cursor).collect();
                let before = tail_to_width(&before, value_width.saturating_sub(1));
                let remaining = value_width.saturating_sub(before.width() + 1);
                spans.push(Span::styled(before, Style::default().fg(Color::White)));
                spans.push(Span::styled(
                    "█",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
                spans.push(Span::styled(
                    truncate_to_width(&after, remaining),
                    Style::default().fg(Color::White),
                ));
            }
            None => spans.push(Span::styled(
                truncate_to_width(self.value, value_width),
                Style::default().fg(Color::White),
            )),
        }
        Line::from(spans)
    }
}

/// Cuts `text` to at most `width` display columns, ending in `…` when shortened
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut output = String::new();
    let mut used = 0;
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        output.push(character);
        used += char_width;
    }
    if width > 0 {
        output.push('…');
    }
    output
}

/// Keeps the last `width` display columns of `text`
fn tail_to_width(text: &str, width: usize) -> String {
    let mut kept: Vec<char> = Vec::new();
    let mut used = 0;
    for character in text.chars().rev() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        kept.push(character);
        used += char_width;
    }
    kept.iter().rev().collect()
}

/// Renders a footer with mode indicator, keybindings, and status
pub fn render_navigation_footer(
    f: &mut Frame,
    area: Rect,
    mode: &str,
    keybindings: &[(&str, &str)],
    status: &[(&str, bool)],
) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    for &(label, active) in status {
        spans.push(Span::raw(SEPARATOR));
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

/// Toast in the top-right corner of `area`
pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: 1.min(area.height),
    };
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("Navigation is confusing", 10), "Navigatio…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_tail_to_width() {
        assert_eq!(tail_to_width("alice@example.com", 7), "ple.com");
        assert_eq!(tail_to_width("ab", 7), "ab");
    }
}
