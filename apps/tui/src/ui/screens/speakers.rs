use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_speakers(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Speakers")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let speakers = app.speakers();
    if speakers.is_empty() {
        let paragraph = Paragraph::new("No speakers loaded.")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Twitter"),
        Cell::from("Sessions"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(speakers.len(), max_visible_rows, app.selected_speaker_index);

    let rows = speakers
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, speaker)| {
            let style = if i == app.selected_speaker_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(speaker.name.clone()),
                Cell::from(speaker.twitter.clone()),
                Cell::from(speaker.sessions.len().to_string()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(35),
        Constraint::Percentage(20),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
