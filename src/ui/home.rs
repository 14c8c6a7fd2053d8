use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{App, RotationState};
use crate::services::posts::Post;
use crate::ui::components;
use crate::ui::utils::card_columns;

pub fn render_home_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Hero
            Constraint::Min(6),    // Carousel
            Constraint::Length(1), // Dots
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, hero, cards, dots, footer] = &chunks[..] {
        let suffix = if app.posts.is_empty() {
            String::new()
        } else {
            format!(" ({} posts)", app.posts.len())
        };
        components::render_header(f, *header, "Home", &suffix);
        render_hero(f, *hero);
        render_carousel(f, app, *cards);
        render_dots(f, app, *dots);
        render_home_footer(f, app, *footer);
        if let Some(toast) = &app.status_toast {
            components::render_status_toast(f, *header, &toast.message);
        }
    }
}

fn render_hero(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "We value your feedback",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tell us how we are doing, or browse the latest guidelines below.",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::NONE)),
        area,
    );
}

fn render_carousel(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Latest posts ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.posts_loading && app.posts.is_empty() {
        render_centered_note(f, inner, "Loading posts...", Color::Cyan);
        return;
    }
    if let Some(error) = &app.posts_error
        && app.posts.is_empty()
    {
        render_centered_note(f, inner, &format!("Could not load posts: {}", error), Color::Red);
        return;
    }
    if app.posts.is_empty() {
        render_centered_note(
            f,
            inner,
            "No guidelines available at the moment. Check back later.",
            Color::DarkGray,
        );
        return;
    }

    let can_page = app.posts.dot_count() > 0;
    let [prev, cards, next] = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(3),
    ])
    .areas(inner);

    if can_page {
        render_arrow(f, prev, "‹");
        render_arrow(f, next, "›");
    }

    let window = app.posts.visible_window();
    for (post, column) in window.iter().zip(card_columns(cards, window.len(), 2)) {
        render_post_card(f, post, column);
    }
}

fn render_arrow(f: &mut Frame, area: Rect, glyph: &str) {
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    f.render_widget(
        Paragraph::new(Span::styled(
            glyph.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        middle,
    );
}

fn render_post_card(f: &mut Frame, post: &Post, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = usize::from(inner.width);
    let mut lines = vec![Line::from(Span::styled(
        components::truncate_to_width(&post.title, width),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(category) = &post.category {
        lines.push(Line::from(Span::styled(
            components::truncate_to_width(category, width),
            Style::default().fg(Color::Magenta),
        )));
    }
    lines.push(Line::from(""));
    let budget = width.saturating_mul(usize::from(inner.height.saturating_sub(3)));
    lines.push(Line::from(Span::styled(
        post.excerpt(budget.max(20)),
        Style::default().fg(Color::Gray),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_centered_note(f: &mut Frame, area: Rect, note: &str, color: Color) {
    let [middle] = Layout::vertical([Constraint::Length(2)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    f.render_widget(
        Paragraph::new(Span::styled(note.to_string(), Style::default().fg(color)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        middle,
    );
}

fn render_dots(f: &mut Frame, app: &App, area: Rect) {
    let count = app.posts.dot_count();
    if count == 0 {
        return;
    }
    let mut spans = Vec::with_capacity(count * 2);
    for index in 0..count {
        if index == app.posts.current_index() {
            spans.push(Span::styled("━━━", Style::default().fg(Color::Blue)));
        } else {
            spans.push(Span::styled("•", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_home_footer(f: &mut Frame, app: &App, area: Rect) {
    let rotating = app.posts.state() == RotationState::Rotating;
    components::render_navigation_footer(
        f,
        area,
        "HOME",
        &[
            ("←/→", "slide"),
            ("0-9", "jump to dot"),
            ("f", "give feedback"),
            ("a", "admin"),
            ("?", "help"),
            ("q", "quit"),
        ],
        &[("AUTO", rotating)],
    );
}
