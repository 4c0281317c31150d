//! The venue map page.
//!
//! [`MapPage`] drives any [`MapWidget`]: it waits for the map points, centers
//! the widget, places one labelled marker per point and reveals itself once
//! the widget reports that its first layout has settled.

use tracing::{debug, warn};

use crate::data::models::{LatLng, Location};
use crate::data::provider::ConferenceData;
use crate::domain::CenterFallback;

pub const DEFAULT_ZOOM: u8 = 16;

/// The map implementation the page draws on.
pub trait MapWidget {
    type Marker: Copy + PartialEq + std::fmt::Debug;

    fn initialize(&mut self, center: LatLng, zoom: u8);

    fn add_marker(&mut self, position: LatLng, title: &str) -> Self::Marker;

    fn attach_label(&mut self, marker: Self::Marker, content: &str);

    fn open_label(&mut self, marker: Self::Marker);
}

/// Notifications coming back from the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent<M> {
    MarkerClicked(M),
    /// The widget finished its initial render, pan and zoom.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    NotLoaded,
    Loaded,
    Visible,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("conference data has no map locations")]
    NoLocations,

    #[error("no location is flagged as the map center")]
    NoCenter,

    #[error("conference data provider shut down before map data arrived")]
    ProviderClosed,
}

/// Picks the location the map opens on.
pub fn resolve_center(points: &[Location], fallback: CenterFallback) -> Result<&Location, MapError> {
    if let Some(center) = points.iter().find(|point| point.center) {
        return Ok(center);
    }

    match fallback {
        CenterFallback::FirstPoint => points.first().ok_or(MapError::NoLocations),
        CenterFallback::Strict if points.is_empty() => Err(MapError::NoLocations),
        CenterFallback::Strict => Err(MapError::NoCenter),
    }
}

#[derive(Debug)]
pub struct MapPage<W: MapWidget> {
    widget: W,
    state: MapState,
    fallback: CenterFallback,
    zoom: u8,
    markers: Vec<W::Marker>,
}

impl<W: MapWidget> MapPage<W> {
    pub const fn new(widget: W, fallback: CenterFallback, zoom: u8) -> Self {
        Self {
            widget,
            state: MapState::NotLoaded,
            fallback,
            zoom,
            markers: Vec::new(),
        }
    }

    /// Waits for the first map points from the provider and places them.
    pub async fn load(&mut self, provider: &ConferenceData) -> Result<(), MapError> {
        let points = provider.first_map().await.ok_or(MapError::ProviderClosed)?;
        self.place(&points)
    }

    /// Centers the widget and adds a labelled marker for every point.
    ///
    /// Only the first call has an effect.
    pub fn place(&mut self, points: &[Location]) -> Result<(), MapError> {
        if self.state != MapState::NotLoaded {
            return Ok(());
        }

        let center = resolve_center(points, self.fallback).inspect_err(|e| {
            warn!(error = %e, fallback = self.fallback.as_str(), "cannot position map");
        })?;
        self.widget.initialize(center.position(), self.zoom);

        for point in points {
            let marker = self.widget.add_marker(point.position(), &point.name);
            self.widget.attach_label(marker, &point.name);
            self.markers.push(marker);
        }

        debug!(center = %center.name, markers = self.markers.len(), "map markers placed");
        self.state = MapState::Loaded;
        Ok(())
    }

    pub fn handle_event(&mut self, event: MapEvent<W::Marker>) {
        match event {
            MapEvent::MarkerClicked(marker) => {
                if self.markers.contains(&marker) {
                    self.widget.open_label(marker);
                }
            }
            MapEvent::Idle => {
                if self.state == MapState::Loaded {
                    self.state = MapState::Visible;
                }
            }
        }
    }

    pub const fn state(&self) -> MapState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == MapState::Visible
    }

    pub fn markers(&self) -> &[W::Marker] {
        &self.markers
    }

    pub const fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }
}
