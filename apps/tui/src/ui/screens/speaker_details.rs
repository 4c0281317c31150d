use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_speaker_details(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(speaker) = app.selected_speaker() else {
        return;
    };

    let block = Block::default()
        .title(format!("Speaker: {}", speaker.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "(none)".to_string());

    let mut lines = vec![
        TextLine::from(format!("Title: {}", optional(&speaker.title))),
        TextLine::from(format!("Twitter: @{}", speaker.twitter)),
        TextLine::from(format!("Email: {}", optional(&speaker.email))),
        TextLine::from(format!("Location: {}", optional(&speaker.location))),
        TextLine::from(""),
        TextLine::from(speaker.about.clone()),
        TextLine::from(""),
        TextLine::from("Sessions:"),
    ];

    for session in app.sessions_of(speaker) {
        lines.push(TextLine::from(format!(
            "  {} - {}  {} ({})",
            session.time_start, session.time_end, session.name, session.location
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
