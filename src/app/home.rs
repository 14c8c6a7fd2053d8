use crate::app::{App, AppMode, ApiEvent, Carousel};
use std::time::{Duration, Instant};

/// Digits typed within this window combine into one dot number
const DOT_ENTRY_WINDOW: Duration = Duration::from_secs(1);

impl App {
    /// Mounts a fresh carousel and fetches posts for it
    pub fn enter_home(&mut self) {
        self.mode = AppMode::Home;
        let visible = self.breakpoints.visible_count(self.viewport_width());
        self.posts = Carousel::new(visible, self.rotate_interval);
        self.load_posts();
    }

    /// Releases the carousel timer before switching screens
    fn leave_home(&mut self, next: AppMode) {
        self.posts.teardown();
        self.mode = next;
    }

    pub fn load_posts(&mut self) {
        let Some(service) = self.post_service.clone() else {
            self.posts_error = Some("API client is not configured".to_string());
            return;
        };
        self.posts_loading = true;
        self.posts_error = None;
        self.spawn_request(move || ApiEvent::PostsLoaded(service.fetch_posts()));
    }

    fn viewport_width(&self) -> u32 {
        u32::from(self.terminal_columns).saturating_mul(self.column_width_px)
    }

    /// Terminal resize: re-derives how many cards fit side by side
    pub fn handle_resize(&mut self, columns: u16) {
        self.terminal_columns = columns;
        let visible = self.breakpoints.visible_count(self.viewport_width());
        if visible != self.posts.visible_count() {
            tracing::debug!(columns, visible = visible.get(), "visible card count changed");
        }
        self.posts.set_visible_count(visible);
    }

    pub fn tick_carousel(&mut self, now: Instant) {
        if self.mode == AppMode::Home {
            self.posts.tick(now);
        }
    }

    pub fn next_post(&mut self) {
        self.posts.advance();
    }

    pub fn previous_post(&mut self) {
        self.posts.retreat();
    }

    /// Pagination shortcut: `1` is the first dot. Digits typed in quick
    /// succession form a multi-digit dot number, so `1` `2` reaches dot 12.
    pub fn jump_to_post(&mut self, digit: char, now: Instant) {
        let Some(value) = digit.to_digit(10).and_then(|value| usize::try_from(value).ok()) else {
            return;
        };
        let dots = self.posts.dot_count();
        let combined = self
            .dot_entry
            .filter(|(_, typed_at)| now.saturating_duration_since(*typed_at) < DOT_ENTRY_WINDOW)
            .map(|(pending, _)| pending.saturating_mul(10).saturating_add(value))
            .filter(|number| (1..=dots).contains(number));
        let number = combined.unwrap_or(value);

        if (1..=dots).contains(&number) {
            self.posts.jump_to(number - 1);
            self.dot_entry = Some((number, now));
        } else {
            self.dot_entry = None;
        }
    }

    pub fn open_feedback_form(&mut self) {
        self.leave_home(AppMode::FeedbackForm);
    }

    pub fn open_dashboard(&mut self) {
        self.leave_home(AppMode::Dashboard);
        self.refresh_dashboard();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, RotationState, VisibleCount};
    use crate::config::Config;
    use crate::services::posts::Post;
    use std::time::{Duration, Instant};

    fn post(id: usize) -> Post {
        Post {
            id: format!("p{}", id),
            title: format!("Post {}", id),
            content: String::new(),
            category: None,
            slug: None,
        }
    }

    fn app_with_posts(count: usize) -> App {
        let mut app = App::new(&Config::default());
        app.posts.set_items((0..count).map(post).collect());
        app
    }

    #[test]
    fn test_resize_maps_columns_through_breakpoints() {
        let mut app = app_with_posts(6);
        app.handle_resize(60);
        assert_eq!(app.posts.visible_count(), VisibleCount::One);
        app.handle_resize(100);
        assert_eq!(app.posts.visible_count(), VisibleCount::Two);
        app.handle_resize(200);
        assert_eq!(app.posts.visible_count(), VisibleCount::Three);
    }

    #[test]
    fn test_narrowing_terminal_keeps_index_valid() {
        let mut app = app_with_posts(4);
        app.handle_resize(60);
        app.previous_post();
        assert_eq!(app.posts.current_index(), 3);
        app.handle_resize(200);
        assert_eq!(app.posts.current_index(), 1);
    }

    #[test]
    fn test_digit_jump_ignores_missing_dots() {
        let mut app = app_with_posts(6);
        app.handle_resize(200);
        let start = Instant::now();
        app.jump_to_post('3', start);
        assert_eq!(app.posts.current_index(), 2);
        app.jump_to_post('9', start);
        assert_eq!(app.posts.current_index(), 2);
        app.jump_to_post('0', start);
        assert_eq!(app.posts.current_index(), 2);
    }

    #[test]
    fn test_quick_digits_reach_later_dots() {
        let mut app = app_with_posts(14);
        app.handle_resize(200);
        assert_eq!(app.posts.dot_count(), 12);

        let start = Instant::now();
        app.jump_to_post('1', start);
        assert_eq!(app.posts.current_index(), 0);
        app.jump_to_post('2', start + Duration::from_millis(300));
        assert_eq!(app.posts.current_index(), 11);

        let later = start + Duration::from_secs(5);
        app.jump_to_post('1', later);
        app.jump_to_post('0', later + Duration::from_millis(200));
        assert_eq!(app.posts.current_index(), 9);
    }

    #[test]
    fn test_slow_digits_start_a_new_number() {
        let mut app = app_with_posts(14);
        app.handle_resize(200);

        let start = Instant::now();
        app.jump_to_post('1', start);
        app.jump_to_post('2', start + Duration::from_secs(2));
        assert_eq!(app.posts.current_index(), 1);

        app.jump_to_post('9', start + Duration::from_secs(4));
        app.jump_to_post('9', start + Duration::from_millis(4100));
        assert_eq!(app.posts.current_index(), 8);
    }

    #[test]
    fn test_leaving_home_releases_timer() {
        let mut app = app_with_posts(6);
        app.handle_resize(200);
        assert_eq!(app.posts.state(), RotationState::Rotating);
        app.open_feedback_form();
        assert_eq!(app.posts.state(), RotationState::Idle);
    }
}
