use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use crate::app::{App, Navigable};
use crate::services::feedback::{Feedback, FeedbackType, Recommendation};
use crate::ui::components;
use crate::ui::form::render_form_fields;
use crate::ui::utils::centered_box;

pub fn render_dashboard_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Stats
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, stats, table, footer] = &chunks[..] {
        let suffix = format!(" filter: {}", app.dashboard.filter.label());
        components::render_header(f, *header, "Feedback Management", &suffix);
        render_stats(f, app, *stats);
        render_table(f, app, *table);
        render_dashboard_footer(f, app, *footer);
        if let Some(toast) = &app.status_toast {
            components::render_status_toast(f, *header, &toast.message);
        }
    }

    if let Some(editor) = &app.dashboard.editor {
        let area = centered_box(78, 20, f.area());
        f.render_widget(Clear, area);
        let title = if editor.editing_id().is_some() {
            " Edit Feedback (Enter update, Esc cancel) "
        } else {
            " Add New Feedback (Enter submit, Esc cancel) "
        };
        render_form_fields(f, editor, area, title);
    }

    if app.dashboard.confirm_delete.is_some() {
        render_delete_modal(f);
    }
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::horizontal([Constraint::Fill(1); 3]).spacing(1).split(area);
    let stats = &app.dashboard.stats;
    let values = [
        ("Total Feedback", app.dashboard.total().to_string(), Color::Blue),
        ("Average Rating", stats.average_label(), Color::Yellow),
        ("Would Recommend", stats.recommend_label(), Color::Green),
    ];
    for ((title, value, color), card) in values.into_iter().zip(cards.iter()) {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            *card,
        );
    }
}

fn type_color(kind: FeedbackType) -> Color {
    match kind {
        FeedbackType::ProductFeedback => Color::Blue,
        FeedbackType::Complaint => Color::Red,
        FeedbackType::Suggestion => Color::Green,
        FeedbackType::CustomerService => Color::Yellow,
        FeedbackType::WebsiteExperience => Color::Magenta,
        FeedbackType::GeneralFeedback => Color::Gray,
    }
}

fn recommend_color(choice: Recommendation) -> Color {
    match choice {
        Recommendation::Yes => Color::Green,
        Recommendation::No => Color::Red,
        Recommendation::Maybe => Color::Yellow,
    }
}

fn feedback_row(record: &Feedback) -> Row<'static> {
    Row::new(vec![
        Cell::from(record.short_id()).style(Style::default().fg(Color::DarkGray)),
        Cell::from(record.full_name.clone()),
        Cell::from(record.feedback_type.table_label())
            .style(Style::default().fg(type_color(record.feedback_type))),
        Cell::from(format!("{} / 5", record.rating)),
        Cell::from(components::truncate_to_width(&record.feedback_details, 40)),
        Cell::from(record.would_recommend.code())
            .style(Style::default().fg(recommend_color(record.would_recommend))),
        Cell::from(record.created_date()),
    ])
}

fn render_table(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Feedback ")
        .border_style(Style::default().fg(Color::DarkGray));

    let records = app.dashboard.filtered();
    let message = if app.dashboard.loading && app.dashboard.records.is_empty() {
        Some(("Loading feedback...".to_string(), Color::Cyan))
    } else if let Some(error) = &app.dashboard.error {
        Some((error.clone(), Color::Red))
    } else if records.is_empty() {
        Some((
            "No feedback found. Create your first feedback entry!".to_string(),
            Color::DarkGray,
        ))
    } else {
        None
    };

    if let Some((text, color)) = message {
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color)))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        "ID",
        "Name",
        "Type",
        "Rating",
        "Details",
        "Recommend",
        "Date",
    ])
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = records.into_iter().map(feedback_row).collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Min(14),
            Constraint::Length(18),
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Length(9),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(Some(app.dashboard.selected_index()));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_delete_modal(f: &mut Frame) {
    let area = centered_box(44, 5, f.area());
    f.render_widget(Clear, area);
    let lines = vec![
        Line::from(Span::styled(
            "Delete this feedback?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" y ", Style::default().fg(Color::Black).bg(Color::Red)),
            Span::styled(" delete   ", Style::default().fg(Color::White)),
            Span::styled(" n ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::styled(" cancel", Style::default().fg(Color::White)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(Style::default().fg(Color::Red)),
        ),
        area,
    );
}

fn render_dashboard_footer(f: &mut Frame, app: &App, area: Rect) {
    components::render_navigation_footer(
        f,
        area,
        "ADMIN",
        &[
            ("↑/↓", "select"),
            ("n", "new"),
            ("e", "edit"),
            ("d", "delete"),
            ("f", "filter"),
            ("r", "refresh"),
            ("Esc", "home"),
        ],
        &[("LOADING", app.dashboard.loading)],
    );
}
