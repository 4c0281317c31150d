// UI module for the conference companion
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area());

    render_tabs(app, f, layout[0]);

    match app.screen {
        AppScreen::Schedule => screens::schedule::render_schedule(app, f, layout[1]),
        AppScreen::SessionDetails => {
            screens::session_details::render_session_details(app, f, layout[1]);
        }
        AppScreen::Speakers => screens::speakers::render_speakers(app, f, layout[1]),
        AppScreen::SpeakerDetails => {
            screens::speaker_details::render_speaker_details(app, f, layout[1]);
        }
        AppScreen::Tracks => screens::tracks::render_tracks(app, f, layout[1]),
        AppScreen::Map => screens::map::render_map(app, f, layout[1]),
    }

    render_status(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selected = match app.screen {
        AppScreen::Schedule | AppScreen::SessionDetails | AppScreen::Tracks => 0,
        AppScreen::Speakers | AppScreen::SpeakerDetails => 1,
        AppScreen::Map => 2,
    };

    let tabs = Tabs::new(vec!["1 Schedule", "2 Speakers", "3 Map"])
        .select(selected)
        .block(
            Block::default()
                .title("Conference Companion")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(app.status_message.as_str()).style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hints: &[(&str, &str)] = match app.screen {
        AppScreen::Schedule if app.search_active => &[("Enter", "done"), ("Esc", "clear")],
        AppScreen::Schedule => &[
            ("←/→", "day"),
            ("↑/↓", "select"),
            ("/", "search"),
            ("s", "segment"),
            ("f", "favorite"),
            ("t", "tracks"),
        ],
        AppScreen::SessionDetails => &[("f", "favorite"), ("Esc", "back")],
        AppScreen::Speakers => &[("↑/↓", "select"), ("Enter", "details")],
        AppScreen::SpeakerDetails => &[("Esc", "back")],
        AppScreen::Tracks => &[("Space", "toggle"), ("a", "show all"), ("Esc", "back")],
        AppScreen::Map => &[("Tab", "next marker"), ("Enter", "open label"), ("+/-", "zoom")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints.iter().chain(&[("r", "reload"), ("?", "help"), ("q", "quit")]) {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(": {action}  ")));
    }

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}
