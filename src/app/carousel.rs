use std::time::{Duration, Instant};

/// Number of cards shown side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleCount {
    One,
    Two,
    Three,
}

impl VisibleCount {
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            VisibleCount::One => 1,
            VisibleCount::Two => 2,
            VisibleCount::Three => 3,
        }
    }
}

/// Viewport width thresholds that pick a [`VisibleCount`]
#[derive(Debug, Clone, Copy)]
pub struct Breakpoints {
    pub small: u32,
    pub medium: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 640,
            medium: 1024,
        }
    }
}

impl Breakpoints {
    #[must_use]
    pub fn visible_count(&self, viewport_width: u32) -> VisibleCount {
        if viewport_width < self.small {
            VisibleCount::One
        } else if viewport_width < self.medium {
            VisibleCount::Two
        } else {
            VisibleCount::Three
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Idle,
    Rotating,
}

/// Auto-advance countdown. Only exists while the carousel is rotating;
/// dropping it is the release.
#[derive(Debug)]
struct RotationTimer {
    interval: Duration,
    /// `None` until the first poll after arming or after a manual move
    deadline: Option<Instant>,
}

impl RotationTimer {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    fn restart(&mut self) {
        self.deadline = None;
    }

    /// Returns true when the interval has elapsed at `now`
    fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            None => {
                self.deadline = Some(now + self.interval);
                false
            }
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }
}

/// Rotating window over an ordered list of items.
///
/// `current_index` is the leftmost visible item and always stays within
/// `0..=len - visible` (or 0 when everything fits). Navigation wraps over
/// that bounded range, while [`Carousel::visible_window`] wraps over the
/// whole list.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    visible: VisibleCount,
    current_index: usize,
    interval: Duration,
    timer: Option<RotationTimer>,
    torn_down: bool,
}

impl<T> Carousel<T> {
    pub fn new(visible: VisibleCount, interval: Duration) -> Self {
        Self {
            items: Vec::new(),
            visible,
            current_index: 0,
            interval,
            timer: None,
            torn_down: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn visible_count(&self) -> VisibleCount {
        self.visible
    }

    #[must_use]
    pub fn state(&self) -> RotationState {
        if self.timer.is_some() {
            RotationState::Rotating
        } else {
            RotationState::Idle
        }
    }

    fn can_rotate(&self) -> bool {
        self.items.len() > self.visible.get()
    }

    /// Largest valid value of `current_index`
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.items.len().saturating_sub(self.visible.get())
    }

    /// Number of pagination dots; zero when the list fits on screen
    #[must_use]
    pub fn dot_count(&self) -> usize {
        if self.can_rotate() {
            self.max_index() + 1
        } else {
            0
        }
    }

    /// Replaces the whole list
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.revalidate();
    }

    pub fn set_visible_count(&mut self, visible: VisibleCount) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.revalidate();
    }

    pub fn advance(&mut self) {
        if !self.can_rotate() {
            return;
        }
        self.current_index = (self.current_index + 1) % (self.max_index() + 1);
        self.restart_timer();
    }

    pub fn retreat(&mut self) {
        if !self.can_rotate() {
            return;
        }
        self.current_index = match self.current_index.checked_sub(1) {
            Some(index) => index,
            None => self.max_index(),
        };
        self.restart_timer();
    }

    /// Moves straight to `index`, clamped into the valid range
    pub fn jump_to(&mut self, index: usize) {
        if !self.can_rotate() {
            return;
        }
        self.current_index = index.min(self.max_index());
        self.restart_timer();
    }

    /// Drives the auto-advance timer. Returns true when the carousel moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.poll(now),
            None => false,
        };
        if fired && self.can_rotate() {
            self.current_index = (self.current_index + 1) % (self.max_index() + 1);
            return true;
        }
        false
    }

    /// Items to draw, starting at `current_index` and wrapping over the list
    #[must_use]
    pub fn visible_window(&self) -> Vec<&T> {
        let len = self.items.len();
        if len == 0 {
            return Vec::new();
        }
        (0..self.visible.get().min(len))
            .filter_map(|offset| self.items.get((self.current_index + offset) % len))
            .collect()
    }

    /// Releases the timer for good. Later input changes never re-arm it.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        if self.timer.take().is_some() {
            tracing::debug!("carousel timer released on teardown");
        }
    }

    fn restart_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.restart();
        }
    }

    fn revalidate(&mut self) {
        self.current_index = self.current_index.min(self.max_index());

        let should_rotate = self.can_rotate() && !self.torn_down;
        match (should_rotate, self.timer.is_some()) {
            (true, false) => {
                self.timer = Some(RotationTimer::new(self.interval));
                tracing::debug!(
                    items = self.items.len(),
                    visible = self.visible.get(),
                    "carousel rotating"
                );
            }
            (false, true) => {
                self.timer = None;
                tracing::debug!(
                    items = self.items.len(),
                    visible = self.visible.get(),
                    "carousel idle"
                );
            }
            (true, true) | (false, false) => {}
        }
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECONDS: Duration = Duration::from_secs(5);

    fn carousel(len: usize, visible: VisibleCount) -> Carousel<usize> {
        let mut carousel = Carousel::new(visible, FIVE_SECONDS);
        carousel.set_items((0..len).collect());
        carousel
    }

    fn all_counts() -> [VisibleCount; 3] {
        [VisibleCount::One, VisibleCount::Two, VisibleCount::Three]
    }

    #[test]
    fn test_breakpoints() {
        let breakpoints = Breakpoints::default();
        assert_eq!(breakpoints.visible_count(0), VisibleCount::One);
        assert_eq!(breakpoints.visible_count(639), VisibleCount::One);
        assert_eq!(breakpoints.visible_count(640), VisibleCount::Two);
        assert_eq!(breakpoints.visible_count(1023), VisibleCount::Two);
        assert_eq!(breakpoints.visible_count(1024), VisibleCount::Three);
        assert_eq!(breakpoints.visible_count(4000), VisibleCount::Three);
    }

    #[test]
    fn test_advance_wraps_after_last_offset() {
        let mut carousel = carousel(6, VisibleCount::Three);
        for _ in 0..4 {
            carousel.advance();
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_last_offset() {
        let mut carousel = carousel(6, VisibleCount::Three);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_jump_to_sets_window() {
        let mut carousel = carousel(6, VisibleCount::Three);
        carousel.jump_to(2);
        let window: Vec<usize> = carousel.visible_window().into_iter().copied().collect();
        assert_eq!(window, vec![2, 3, 4]);
    }

    #[test]
    fn test_jump_to_clamps_out_of_range() {
        let mut carousel = carousel(6, VisibleCount::Three);
        carousel.jump_to(42);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_resize_clamps_window() {
        let mut carousel = carousel(4, VisibleCount::One);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 3);
        carousel.set_visible_count(VisibleCount::Three);
        // clamped to len - visible
        assert_eq!(carousel.current_index(), 1);
        let window: Vec<usize> = carousel.visible_window().into_iter().copied().collect();
        assert_eq!(window, vec![1, 2, 3]);
    }

    #[test]
    fn test_shrinking_list_clamps_and_goes_idle() {
        let mut carousel = carousel(6, VisibleCount::Three);
        carousel.jump_to(3);
        assert_eq!(carousel.state(), RotationState::Rotating);

        carousel.set_items(vec![0, 1]);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.state(), RotationState::Idle);
        assert_eq!(carousel.dot_count(), 0);
        assert_eq!(carousel.visible_window().len(), 2);
    }

    #[test]
    fn test_resize_reclamps_and_rearms() {
        let mut carousel = carousel(3, VisibleCount::One);
        carousel.jump_to(2);
        assert_eq!(carousel.state(), RotationState::Rotating);

        carousel.set_visible_count(VisibleCount::Three);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.state(), RotationState::Idle);

        carousel.set_visible_count(VisibleCount::Two);
        assert_eq!(carousel.state(), RotationState::Rotating);
        assert_eq!(carousel.dot_count(), 2);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut carousel: Carousel<usize> = Carousel::new(VisibleCount::Two, FIVE_SECONDS);
        carousel.advance();
        carousel.retreat();
        carousel.jump_to(3);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.visible_window().is_empty());
        assert_eq!(carousel.state(), RotationState::Idle);
        assert!(!carousel.tick(Instant::now() + FIVE_SECONDS * 10));
    }

    #[test]
    fn test_fitting_list_never_arms_timer() {
        for visible in all_counts() {
            for len in 0..=visible.get() {
                let mut carousel = carousel(len, visible);
                carousel.advance();
                carousel.retreat();
                assert_eq!(carousel.current_index(), 0);
                assert_eq!(carousel.state(), RotationState::Idle);
                assert_eq!(carousel.dot_count(), 0);
            }
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for visible in all_counts() {
            for len in 0..9 {
                let mut carousel = carousel(len, visible);
                for step in 0..25usize {
                    match step % 5 {
                        0 | 3 => carousel.advance(),
                        1 => carousel.retreat(),
                        2 => carousel.jump_to(step % 7),
                        _ => carousel.set_items((0..(len + step) % 9).collect()),
                    }
                    let bound = carousel.len().saturating_sub(visible.get());
                    assert!(carousel.current_index() <= bound);
                }
            }
        }
    }

    #[test]
    fn test_advance_then_retreat_is_identity() {
        for visible in all_counts() {
            for len in (visible.get() + 1)..9 {
                let mut carousel = carousel(len, visible);
                for start in 0..=carousel.max_index() {
                    carousel.jump_to(start);
                    carousel.advance();
                    carousel.retreat();
                    assert_eq!(carousel.current_index(), start);
                    carousel.retreat();
                    carousel.advance();
                    assert_eq!(carousel.current_index(), start);
                }
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for visible in all_counts() {
            for len in (visible.get() + 1)..9 {
                let mut carousel = carousel(len, visible);
                carousel.jump_to(1);
                for _ in 0..carousel.dot_count() {
                    carousel.advance();
                }
                assert_eq!(carousel.current_index(), 1);
            }
        }
    }

    #[test]
    fn test_tick_advances_after_interval() {
        let mut carousel = carousel(6, VisibleCount::Three);
        let start = Instant::now();

        // first poll arms the countdown
        assert!(!carousel.tick(start));
        assert!(!carousel.tick(start + Duration::from_secs(4)));
        assert!(carousel.tick(start + FIVE_SECONDS));
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.tick(start + FIVE_SECONDS * 2));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_manual_move_restarts_countdown() {
        let mut carousel = carousel(6, VisibleCount::Three);
        let start = Instant::now();
        carousel.tick(start);

        carousel.advance();
        assert!(!carousel.tick(start + FIVE_SECONDS));
        assert!(!carousel.tick(start + Duration::from_secs(9)));
        assert!(carousel.tick(start + FIVE_SECONDS * 2));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_no_tick_after_going_idle() {
        let mut carousel = carousel(6, VisibleCount::Three);
        let start = Instant::now();
        carousel.tick(start);
        carousel.set_items(vec![0, 1, 2]);
        assert!(!carousel.tick(start + FIVE_SECONDS * 3));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_teardown_is_terminal() {
        let mut carousel = carousel(6, VisibleCount::Three);
        let start = Instant::now();
        carousel.tick(start);
        carousel.teardown();
        assert_eq!(carousel.state(), RotationState::Idle);
        assert!(!carousel.tick(start + FIVE_SECONDS));

        carousel.set_items((0..10).collect());
        assert_eq!(carousel.state(), RotationState::Idle);
        assert!(!carousel.tick(start + FIVE_SECONDS * 2));
    }
}
