use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_tracks(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Filter Tracks")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let lines = app
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let shown = !app.exclude_tracks.contains(track);
            let style = if i == app.selected_track_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            TextLine::from(vec![
                Span::styled(if shown { "[x] " } else { "[ ] " }, style),
                Span::styled(track.clone(), style),
            ])
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
