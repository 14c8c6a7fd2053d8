mod carousel;
mod dashboard;
mod events;
mod form;
mod home;
mod navigation;
mod text_input;
mod types;

pub use carousel::{Breakpoints, Carousel, RotationState, VisibleCount};
pub use dashboard::Dashboard;
pub use form::{FeedbackForm, FormField};
pub use navigation::Navigable;
pub use text_input::TextInput;
pub use types::*;

use crate::config::Config;
use crate::services::posts::Post;
use crate::services::{ApiClient, FeedbackService, PostService};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// Application mode state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Home,
    FeedbackForm,
    Dashboard,
    Help,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub previous_mode: Option<AppMode>,
    pub should_quit: bool,
    pub status_toast: Option<StatusToast>,

    // Home
    pub posts: Carousel<Post>,
    pub posts_loading: bool,
    pub posts_error: Option<String>,
    pub breakpoints: Breakpoints,
    pub column_width_px: u32,
    pub rotate_interval: Duration,
    pub terminal_columns: u16,
    /// Last dot number typed and when, for multi-digit jumps
    pub dot_entry: Option<(usize, Instant)>,

    // Public form
    pub form: FeedbackForm,
    pub form_submitting: bool,
    pub form_notice: Option<FormNotice>,

    // Admin
    pub dashboard: Dashboard,

    pub feedback_service: Option<FeedbackService>,
    pub post_service: Option<PostService>,
    pub api_tx: Sender<ApiEvent>,
    pub api_rx: Receiver<ApiEvent>,
}

impl App {
    /// Creates a new application instance from configuration
    pub fn new(config: &Config) -> Self {
        let breakpoints = Breakpoints {
            small: config.carousel.small_breakpoint,
            medium: config.carousel.medium_breakpoint,
        };
        let rotate_interval = Duration::from_secs(config.carousel.rotate_secs.max(1));
        let (api_tx, api_rx) = channel();

        Self {
            mode: AppMode::Home,
            previous_mode: None,
            should_quit: false,
            status_toast: None,
            posts: Carousel::new(VisibleCount::Three, rotate_interval),
            posts_loading: false,
            posts_error: None,
            breakpoints,
            column_width_px: config.carousel.column_width_px.max(1),
            rotate_interval,
            terminal_columns: 0,
            dot_entry: None,
            form: FeedbackForm::public(),
            form_submitting: false,
            form_notice: None,
            dashboard: Dashboard::default(),
            feedback_service: None,
            post_service: None,
            api_tx,
            api_rx,
        }
    }

    /// Builds the HTTP services. A bad config leaves them unset and the
    /// screens report the problem instead of failing startup.
    pub fn init_services(&mut self, config: &Config) {
        match ApiClient::new(&config.api) {
            Ok(client) => {
                tracing::info!(base_url = client.base_url(), "api client ready");
                self.feedback_service = Some(FeedbackService::new(client.clone()));
                self.post_service = Some(PostService::new(client));
            }
            Err(error) => {
                tracing::error!(%error, "could not build api client");
                self.show_status_toast("API UNAVAILABLE");
            }
        }
    }

    /// Runs `job` on a worker thread and posts its result to the event loop
    pub(crate) fn spawn_request<F>(&self, job: F)
    where
        F: FnOnce() -> ApiEvent + Send + 'static,
    {
        let tx = self.api_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(job());
        });
    }

    pub fn open_help(&mut self) {
        if self.mode != AppMode::Help {
            self.previous_mode = Some(self.mode);
            self.mode = AppMode::Help;
        }
    }

    pub fn close_help(&mut self) {
        self.mode = self.previous_mode.take().unwrap_or(AppMode::Home);
    }

    pub fn quit(&mut self) {
        self.posts.teardown();
        self.should_quit = true;
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(Duration::from_secs(3)));
        if should_clear {
            self.status_toast = None;
        }
    }
}
