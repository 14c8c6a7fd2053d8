// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod config;
mod logging;
mod services;
mod ui;

use app::{App, AppMode, Navigable};
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use services::{ApiClient, FeedbackService, PostService};
use std::{
    io,
    time::{Duration, Instant},
};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let config = config::Config::load()?;
    let log_path = logging::init(&config.logging)?;
    tracing::info!(log = %log_path.display(), "feedback-desk starting");

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return handle_cli_args(&args, &config);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    app.init_services(&config);
    let (columns, _) = crossterm::terminal::size()?;
    app.handle_resize(columns);
    app.enter_home();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn handle_cli_args(args: &[String], config: &config::Config) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| color_eyre::eyre::eyre!("No command provided"))?;
    let program_name = args.first().map_or("feedback-desk", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" => print_help(program_name),
        "--version" | "-v" => println!("feedback-desk v{}", env!("CARGO_PKG_VERSION")),
        "posts" => {
            let service = PostService::new(ApiClient::new(&config.api)?);
            for post in service.fetch_posts()? {
                println!("{}  {}", post.id, post.title);
            }
        }
        "feedback" => {
            let service = FeedbackService::new(ApiClient::new(&config.api)?);
            for record in service.list()? {
                println!(
                    "{}  {:<20}  {:<18}  {} / 5  {:<5}  {}",
                    record.short_id(),
                    record.full_name,
                    record.feedback_type.table_label(),
                    record.rating,
                    record.would_recommend.code(),
                    record.created_date()
                );
            }
        }
        cmd_str => {
            eprintln!("Unknown command: {}", cmd_str);
            eprintln!("Run with --help for available commands.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("feedback-desk - customer feedback terminal");
    println!();
    println!("Usage: {} [command]", program_name);
    println!();
    println!("Commands:");
    println!("  posts      - Print published posts");
    println!("  feedback   - Print all feedback records");
    println!("  --help     - Show this help");
    println!("  --version  - Show version");
    println!();
    println!("Run without arguments to start interactive mode.");
    println!("Set FEEDBACK_DESK_API_URL to override the configured backend.");
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.check_api_events();
        app.tick_carousel(Instant::now());
        app.clear_expired_status_toast();

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.quit();
                        continue;
                    }

                    match app.mode {
                        AppMode::Home => handle_home_mode(app, key.code),
                        AppMode::FeedbackForm => handle_form_mode(app, key),
                        AppMode::Dashboard => handle_dashboard_mode(app, key),
                        AppMode::Help => handle_help_mode(app, key.code),
                    }
                }
                Event::Resize(columns, _) => app.handle_resize(columns),
                Event::Mouse(_) | Event::Paste(_) | Event::FocusGained | Event::FocusLost => {}
            }
        }
    }

    Ok(())
}

fn handle_home_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Right | KeyCode::Char('l') => app.next_post(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_post(),
        KeyCode::Char('f') => app.open_feedback_form(),
        KeyCode::Char('a') => app.open_dashboard(),
        KeyCode::Char('r') => app.load_posts(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char(digit) if digit.is_ascii_digit() => {
            app.jump_to_post(digit, Instant::now());
        }
        KeyCode::Char(_)
        | KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

/// Keys shared by the public form and the dashboard editor.
/// Returns false when the key was not a field edit.
fn edit_form_field(form: &mut app::FeedbackForm, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_item(),
        KeyCode::BackTab | KeyCode::Up => form.previous_item(),
        KeyCode::Left => form.shift(false),
        KeyCode::Right => form.shift(true),
        KeyCode::Home => form.jump_cursor(false),
        KeyCode::End => form.jump_cursor(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(character) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.input_char(character);
        }
        KeyCode::Char(_)
        | KeyCode::Enter
        | KeyCode::Esc
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => return false,
    }
    true
}

fn handle_form_mode(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::F(1) {
        app.open_help();
        return;
    }
    if app.form_submitting {
        return;
    }
    match key.code {
        KeyCode::Esc => app.close_feedback_form(),
        KeyCode::Enter => app.submit_public_form(),
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {
            if edit_form_field(&mut app.form, key) {
                app.form_notice = None;
            }
        }
    }
}

fn handle_delete_confirm(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter | KeyCode::Char('y') => app.confirm_delete(),
        KeyCode::Esc | KeyCode::Char('n') => app.cancel_delete(),
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_dashboard_mode(app: &mut App, key: KeyEvent) {
    if app.dashboard.confirm_delete.is_some() {
        handle_delete_confirm(app, key.code);
        return;
    }

    if let Some(editor) = app.dashboard.editor.as_mut() {
        match key.code {
            KeyCode::Esc => app.close_editor(),
            KeyCode::Enter => app.submit_editor(),
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Delete
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => {
                edit_form_field(editor, key);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_dashboard(),
        KeyCode::Up | KeyCode::Char('k') => app.dashboard.previous_item(),
        KeyCode::Down | KeyCode::Char('j') => app.dashboard.next_item(),
        KeyCode::Char('n') => app.open_new_feedback(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_feedback(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('f') => app.dashboard.cycle_filter(),
        KeyCode::Char('r') => app.refresh_dashboard(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}

fn handle_help_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => app.close_help(),
        KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
}
