//! Layout helpers shared by the TUI screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rectangle taking the given percentage of the outer area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Center a column of at most `width` cells inside `r`.
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y,
        width,
        height: r.height,
    }
}

/// Whether a terminal cell lies inside a rectangle.
pub fn rect_contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x.saturating_add(r.width) && row >= r.y && row < r.y.saturating_add(r.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_column(52, area), area);
        assert_eq!(centered_column(20, area), Rect::new(10, 0, 20, 10));
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(2, 3, 4, 1);
        assert!(rect_contains(r, 2, 3));
        assert!(rect_contains(r, 5, 3));
        assert!(!rect_contains(r, 6, 3));
        assert!(!rect_contains(r, 2, 4));
    }
}
