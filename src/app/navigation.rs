/// Wrapping cursor over a list-like UI element (table rows, form fields)
pub trait Navigable {
    fn item_count(&self) -> usize;

    fn selected_index(&self) -> usize;

    fn set_selected_index(&mut self, index: usize);

    /// Moves to the next item (wraps around to start)
    fn next_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let next = (self.selected_index() + 1) % count;
            self.set_selected_index(next);
        }
    }

    /// Moves to the previous item (wraps around to end)
    fn previous_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let prev = match self.selected_index().checked_sub(1) {
                Some(index) => index.min(count - 1),
                None => count - 1,
            };
            self.set_selected_index(prev);
        }
    }

    /// Pulls the selection back inside the list after it shrank
    fn clamp_selection(&mut self) {
        let last = self.item_count().saturating_sub(1);
        if self.selected_index() > last {
            self.set_selected_index(last);
        }
    }
}
