use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Rectangle of `width` x `height` cells centered in `area`, shrunk to fit
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Splits `area` into `count` equal columns separated by `gap` cells
pub fn card_columns(area: Rect, count: usize, gap: u16) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Fill(1); count];
    Layout::horizontal(constraints)
        .spacing(gap)
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_box(60, 20, area);
        assert_eq!(inner, Rect::new(20, 10, 60, 20));

        let small = centered_box(60, 20, Rect::new(0, 0, 30, 10));
        assert_eq!(small.width, 30);
        assert_eq!(small.height, 10);
    }

    #[test]
    fn test_card_columns() {
        let columns = card_columns(Rect::new(0, 0, 62, 10), 3, 1);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns.iter().map(|rect| rect.width).sum::<u16>(), 60);
        assert!(card_columns(Rect::new(0, 0, 62, 10), 0, 1).is_empty());
    }
}
