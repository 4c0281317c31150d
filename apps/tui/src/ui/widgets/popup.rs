use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::widgets::Widget;

/// A rectangle of the given percentage size centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let band = |direction: Direction, percent: u16, area: Rect| {
        Layout::default()
            .direction(direction)
            .constraints([
                Constraint::Percentage((100 - percent) / 2),
                Constraint::Percentage(percent),
                Constraint::Percentage((100 - percent) / 2),
            ])
            .split(area)[1]
    };

    band(
        Direction::Horizontal,
        percent_x,
        band(Direction::Vertical, percent_y, area),
    )
}

/// Blanks the area under a popup.
pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}
