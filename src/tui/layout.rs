//! Layout definitions for the TUI
//!
//! Header with key hints, transaction list, summary panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub summary: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Transaction list
                Constraint::Length(3), // Summary
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            list: chunks[1],
            summary: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.summary.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.list.height, 17);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(r, Rect::new(20, 7, 40, 10));

        let clamped = centered_rect_fixed(100, 50, Rect::new(0, 0, 80, 24));
        assert_eq!(clamped, Rect::new(0, 0, 80, 24));
    }
}
