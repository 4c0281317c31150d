use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_session_details(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(session) = app.session_detail.as_ref() else {
        return;
    };

    let favorite = if app.is_favorite(&session.name) { " ★" } else { "" };
    let block = Block::default()
        .title(format!("Session: {}{favorite}", session.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let speakers = app
        .speakers_of(session)
        .iter()
        .map(|speaker| speaker.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("When: ", label),
            Span::raw(format!("{} - {}", session.time_start, session.time_end)),
        ]),
        TextLine::from(vec![Span::styled("Where: ", label), Span::raw(session.location.clone())]),
        TextLine::from(vec![
            Span::styled("Tracks: ", label),
            Span::raw(session.tracks.join(", ")),
        ]),
        TextLine::from(vec![
            Span::styled("Speakers: ", label),
            Span::raw(if speakers.is_empty() { "(none)".to_string() } else { speakers }),
        ]),
        TextLine::from(""),
    ];

    if let Some(description) = &session.description {
        lines.push(TextLine::from(description.clone()));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
