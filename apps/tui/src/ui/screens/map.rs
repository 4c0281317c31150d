use crate::app::App;
use conference_companion::map::MapState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    if let Some(error) = &app.map_error {
        render_message(f, area, &format!("Map unavailable: {error}"));
        return;
    }

    let widget = app.map_page.widget();
    match app.map_page.state() {
        MapState::NotLoaded => render_message(f, area, "Loading map..."),
        MapState::Loaded => {
            // the canvas is laid out but not drawn until it reports idle
            widget.layout(area);
            render_message(f, area, "Loading map...");
        }
        MapState::Visible => {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(1)])
                .split(area);

            widget.render(f, layout[0], Some(app.selected_marker_index));

            let selected = widget
                .title(app.selected_marker_index)
                .unwrap_or_default()
                .to_string();
            let paragraph = Paragraph::new(format!(
                "Marker {}/{}: {selected}",
                app.selected_marker_index + 1,
                widget.marker_count()
            ))
            .style(Style::default().fg(Color::Gray));
            f.render_widget(paragraph, layout[1]);
        }
    }
}

fn render_message(f: &mut Frame<'_>, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .block(Block::default().title("Venue Map").borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
