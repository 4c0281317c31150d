use std::cell::Cell;

use conference_companion::data::LatLng;
use conference_companion::map::{MapEvent, MapWidget};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Degrees of longitude visible at zoom 0 for a typical terminal width.
const WORLD_SPAN: f64 = 360.0 * 4.0;
const MAX_ZOOM: u8 = 22;

#[derive(Debug, Clone)]
struct CanvasMarker {
    position: LatLng,
    title: String,
    label: Option<String>,
}

/// Venue map drawn on a ratatui canvas.
///
/// Coordinates are projected linearly around the center. The widget reports
/// idle once, after the first time it is laid out in a non-empty area.
#[derive(Debug, Default)]
pub struct CanvasMap {
    center: Option<LatLng>,
    zoom: u8,
    markers: Vec<CanvasMarker>,
    open_label: Option<usize>,
    laid_out: Cell<bool>,
    idle_sent: bool,
}

impl MapWidget for CanvasMap {
    type Marker = usize;

    fn initialize(&mut self, center: LatLng, zoom: u8) {
        self.center = Some(center);
        self.zoom = zoom.min(MAX_ZOOM);
    }

    fn add_marker(&mut self, position: LatLng, title: &str) -> usize {
        self.markers.push(CanvasMarker {
            position,
            title: title.to_string(),
            label: None,
        });
        self.markers.len() - 1
    }

    fn attach_label(&mut self, marker: usize, content: &str) {
        if let Some(entry) = self.markers.get_mut(marker) {
            entry.label = Some(content.to_string());
        }
    }

    fn open_label(&mut self, marker: usize) {
        if self.markers.get(marker).is_some_and(|m| m.label.is_some()) {
            self.open_label = Some(marker);
        }
    }
}

impl CanvasMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn title(&self, marker: usize) -> Option<&str> {
        self.markers.get(marker).map(|m| m.title.as_str())
    }

    pub const fn opened_label(&self) -> Option<usize> {
        self.open_label
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1);
    }

    /// Records that the map has an area to draw into.
    pub fn layout(&self, area: Rect) {
        if self.center.is_some() && area.width > 0 && area.height > 0 {
            self.laid_out.set(true);
        }
    }

    /// Yields `Idle` exactly once, after the first layout.
    pub fn poll_idle(&mut self) -> Option<MapEvent<usize>> {
        if self.laid_out.get() && !self.idle_sent {
            self.idle_sent = true;
            return Some(MapEvent::Idle);
        }
        None
    }

    /// Longitude and latitude bounds of the visible area.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let center = self.center?;
        let lng_span = WORLD_SPAN / 2_f64.powi(i32::from(self.zoom));
        // terminal cells are roughly twice as tall as they are wide
        let lat_span = lng_span / 2.0;
        Some((
            [center.lng - lng_span / 2.0, center.lng + lng_span / 2.0],
            [center.lat - lat_span / 2.0, center.lat + lat_span / 2.0],
        ))
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, selected: Option<usize>) {
        let block = Block::default()
            .title(format!("Venue Map (zoom {})", self.zoom))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);
        self.layout(inner);

        let Some((x_bounds, y_bounds)) = self.bounds() else {
            return;
        };

        f.render_widget(
            Canvas::default()
                .marker(Marker::Braille)
                .paint(|ctx| {
                    let mid_x = (x_bounds[0] + x_bounds[1]) / 2.0;
                    let mid_y = (y_bounds[0] + y_bounds[1]) / 2.0;
                    ctx.draw(&CanvasLine {
                        x1: x_bounds[0],
                        y1: mid_y,
                        x2: x_bounds[1],
                        y2: mid_y,
                        color: Color::DarkGray,
                    });
                    ctx.draw(&CanvasLine {
                        x1: mid_x,
                        y1: y_bounds[0],
                        x2: mid_x,
                        y2: y_bounds[1],
                        color: Color::DarkGray,
                    });
                    ctx.layer();

                    for (index, marker) in self.markers.iter().enumerate() {
                        let is_selected = selected == Some(index);
                        let style = if is_selected {
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Red)
                        };
                        let (x, y) = (marker.position.lng, marker.position.lat);
                        ctx.print(x, y, Span::styled("◆", style));

                        if self.open_label == Some(index) {
                            if let Some(label) = &marker.label {
                                ctx.print(
                                    x,
                                    y,
                                    TextLine::from(vec![
                                        Span::raw("  "),
                                        Span::styled(
                                            label.clone(),
                                            Style::default()
                                                .fg(Color::Black)
                                                .bg(Color::White)
                                                .add_modifier(Modifier::BOLD),
                                        ),
                                    ]),
                                );
                            }
                        }
                    }
                })
                .x_bounds(x_bounds)
                .y_bounds(y_bounds),
            inner,
        );
    }
}
