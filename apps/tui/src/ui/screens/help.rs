use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const HELP: &[&str] = &[
    "1 / 2 / 3   Schedule, Speakers, Map",
    "r           Reload conference data",
    "",
    "Schedule",
    "  ←/→       Previous / next day",
    "  /         Search session names",
    "  s         Switch between all sessions and favorites",
    "  f         Toggle favorite",
    "  t         Choose tracks to hide",
    "",
    "Map",
    "  Tab       Next marker",
    "  Enter     Open the marker label",
    "  + / -     Zoom",
    "",
    "F1 or ? to close",
    "",
    "Command line:",
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(ClearWidget, area);

    let mut lines = HELP.iter().map(|line| TextLine::from(*line)).collect::<Vec<_>>();
    for line in crate::cli::CliArgs::help_text().lines() {
        lines.push(TextLine::from(line.to_string()));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
