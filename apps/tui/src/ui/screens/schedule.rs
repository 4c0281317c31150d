use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use conference_companion::Segment;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_schedule(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_filter_bar(app, f, layout[0]);

    let Some(day) = app.timeline.as_ref() else {
        let paragraph = Paragraph::new("Loading schedule...")
            .block(Block::default().borders(Borders::ALL))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, layout[1]);
        return;
    };

    let title = format!(
        "{} (day {}/{}, {} shown)",
        day.label(),
        app.day_index + 1,
        app.day_count(),
        day.shown_sessions
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    if day.shown_sessions == 0 {
        let paragraph = Paragraph::new("No sessions match the current filters.")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, layout[1]);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Time"),
        Cell::from("Session"),
        Cell::from("Location"),
        Cell::from("Tracks"),
        Cell::from("★"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let max_visible_rows = layout[1].height.saturating_sub(3) as usize;
    let offset = scroll_offset(day.shown_sessions, max_visible_rows, app.selected_session_index);

    let rows = day
        .visible_sessions()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, (group, session))| {
            let style = if i == app.selected_session_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(group.time.clone()),
                Cell::from(session.name.clone()),
                Cell::from(session.location.clone()),
                Cell::from(session.tracks.join(", ")),
                Cell::from(if app.is_favorite(&session.name) { "★" } else { "" }),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(45),
        Constraint::Percentage(20),
        Constraint::Percentage(25),
        Constraint::Length(2),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), layout[1]);
}

fn render_filter_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let search_style = if app.search_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if app.search_active { "_" } else { "" };

    let segment_style = |segment: Segment| {
        if app.segment == segment {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let excluded = if app.exclude_tracks.is_empty() {
        "none".to_string()
    } else {
        app.exclude_tracks.join(", ")
    };

    let line = TextLine::from(vec![
        Span::styled(format!(" {} ", Segment::All.label()), segment_style(Segment::All)),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", Segment::Favorites.label()),
            segment_style(Segment::Favorites),
        ),
        Span::raw("   Search: "),
        Span::styled(format!("{}{cursor}", app.query), search_style),
        Span::raw("   Hidden tracks: "),
        Span::styled(excluded, Style::default().fg(Color::Magenta)),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Filter"));
    f.render_widget(paragraph, area);
}
