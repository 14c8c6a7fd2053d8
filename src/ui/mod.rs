mod components;
mod dashboard;
mod form;
mod help;
mod home;
mod utils;

use crate::app::{App, AppMode};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Home => home::render_home_view(f, app),
        AppMode::FeedbackForm => form::render_form_view(f, app),
        AppMode::Dashboard => dashboard::render_dashboard_view(f, app),
        AppMode::Help => help::render_help_view(f),
    }
}
