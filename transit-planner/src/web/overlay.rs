//! Map overlay descriptions.
//!
//! The browser map only draws what is described here: markers, route
//! polylines and the viewport. No business rules run client-side.

use serde::Serialize;

use crate::domain::{Coordinate, RouteOption};
use crate::selection::Selection;

/// Colours cycled across route polylines.
pub const ROUTE_COLORS: [&str; 5] = ["#2563eb", "#10b981", "#8b5cf6", "#f59e0b", "#ef4444"];

/// Initial map centre (downtown Guelph).
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(43.5448, -80.2482);
/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 13;
/// Zoom used when centring on a single stop.
pub const STOP_ZOOM: u8 = 15;
/// Fraction of the bounds' size added on every side when fitting.
pub const BOUNDS_PADDING: f64 = 0.1;

/// A latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    south: p.lat,
                    west: p.lon,
                    north: p.lat,
                    east: p.lon,
                },
                Some(b) => Bounds {
                    south: b.south.min(p.lat),
                    west: b.west.min(p.lon),
                    north: b.north.max(p.lat),
                    east: b.east.max(p.lon),
                },
            })
        })
    }

    /// Grow the box by `ratio` of its height and width on each side.
    pub fn pad(self, ratio: f64) -> Self {
        let dlat = (self.north - self.south).abs() * ratio;
        let dlon = (self.east - self.west).abs() * ratio;
        Bounds {
            south: self.south - dlat,
            west: self.west - dlon,
            north: self.north + dlat,
            east: self.east + dlon,
        }
    }
}

/// What the map should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Viewport {
    Center { center: Coordinate, zoom: u8 },
    Fit { bounds: Bounds },
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::Center {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Start,
    Destination,
}

/// A labelled pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub label: String,
}

/// A route drawn as a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub route_id: String,
    pub color: &'static str,
    pub weight: u8,
    pub opacity: f32,
    pub points: Vec<Coordinate>,
}

/// Everything the map renders for the current state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MapOverlay {
    pub markers: Vec<Marker>,
    pub polylines: Vec<Polyline>,
    pub viewport: Viewport,
}

/// Colour for the route at `index` (0-based).
pub fn route_color(index: usize) -> &'static str {
    ROUTE_COLORS[index % ROUTE_COLORS.len()]
}

fn selection_markers(selection: &Selection) -> Vec<Marker> {
    let start = selection.start().map(|s| Marker {
        kind: MarkerKind::Start,
        position: s.coordinate(),
        label: format!("Start: {}", s.name),
    });
    let end = selection.end().map(|s| Marker {
        kind: MarkerKind::Destination,
        position: s.coordinate(),
        label: format!("Destination: {}", s.name),
    });
    start.into_iter().chain(end).collect()
}

/// Markers for the selected stops, framed by the viewport.
///
/// One stop is centred at street zoom; two are fitted together.
pub fn selection_overlay(selection: &Selection) -> MapOverlay {
    let markers = selection_markers(selection);
    let viewport = match markers.as_slice() {
        [] => Viewport::default(),
        [only] => Viewport::Center {
            center: only.position,
            zoom: STOP_ZOOM,
        },
        many => fit(many.iter().map(|m| &m.position)),
    };

    MapOverlay {
        markers,
        polylines: Vec::new(),
        viewport,
    }
}

/// All routes, each in its own colour, plus the selection markers.
pub fn routes_overlay(routes: &[RouteOption], selection: &Selection) -> MapOverlay {
    let polylines: Vec<Polyline> = routes
        .iter()
        .enumerate()
        .filter(|(_, r)| r.path.len() > 1)
        .map(|(i, r)| polyline(r, i, false))
        .collect();

    with_polylines(polylines, selection)
}

/// Only the route at `index`, drawn emphasised.
pub fn highlight_overlay(route: &RouteOption, index: usize, selection: &Selection) -> MapOverlay {
    let polylines = if route.path.len() > 1 {
        vec![polyline(route, index, true)]
    } else {
        Vec::new()
    };

    with_polylines(polylines, selection)
}

fn polyline(route: &RouteOption, index: usize, highlighted: bool) -> Polyline {
    let (weight, opacity) = if highlighted { (8, 0.9) } else { (6, 0.7) };
    Polyline {
        route_id: route.id.clone(),
        color: route_color(index),
        weight,
        opacity,
        points: route.path.clone(),
    }
}

fn with_polylines(polylines: Vec<Polyline>, selection: &Selection) -> MapOverlay {
    if polylines.is_empty() {
        return selection_overlay(selection);
    }

    let viewport = fit(polylines.iter().flat_map(|p| p.points.iter()));
    MapOverlay {
        markers: selection_markers(selection),
        polylines,
        viewport,
    }
}

fn fit<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Viewport {
    Bounds::from_points(points)
        .map(|bounds| Viewport::Fit {
            bounds: bounds.pad(BOUNDS_PADDING),
        })
        .unwrap_or_default()
}
