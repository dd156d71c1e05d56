//! Normalized route options, as shown to the user.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// How a step of a route is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Walk,
    Bus,
    OnDemand,
}

impl StepKind {
    /// Single-letter icon label used on route cards.
    pub fn icon(self) -> &'static str {
        match self {
            StepKind::Walk => "W",
            StepKind::Bus => "B",
            StepKind::OnDemand => "O",
        }
    }

    /// CSS class for the step icon.
    pub fn css_class(self) -> &'static str {
        match self {
            StepKind::Walk => "walk",
            StepKind::Bus => "bus",
            StepKind::OnDemand => "eco",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepKind::Walk => "walk",
            StepKind::Bus => "bus",
            StepKind::OnDemand => "on_demand",
        })
    }
}

/// One instruction in a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    pub kind: StepKind,
    pub duration_minutes: u32,
    pub description: String,
}

impl RouteStep {
    pub fn new(kind: StepKind, duration_minutes: u32, description: impl Into<String>) -> Self {
        Self {
            kind,
            duration_minutes,
            description: description.into(),
        }
    }
}

/// A service feature advertised on a route.
///
/// Known features get a display label; anything else the backend sends is
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Feature {
    ElectricBus,
    RideSharing,
    OnDemand,
    Other(String),
}

impl Feature {
    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Feature::ElectricBus => "Electric",
            Feature::RideSharing => "Ride Share",
            Feature::OnDemand => "On Demand",
            Feature::Other(raw) => raw,
        }
    }

    /// The wire name of the feature.
    pub fn as_str(&self) -> &str {
        match self {
            Feature::ElectricBus => "electric_bus",
            Feature::RideSharing => "ride_sharing",
            Feature::OnDemand => "on_demand",
            Feature::Other(raw) => raw,
        }
    }
}

impl From<String> for Feature {
    fn from(s: String) -> Self {
        match s.as_str() {
            "electric_bus" => Feature::ElectricBus,
            "ride_sharing" => Feature::RideSharing,
            "on_demand" => Feature::OnDemand,
            _ => Feature::Other(s),
        }
    }
}

impl From<Feature> for String {
    fn from(f: Feature) -> Self {
        f.as_str().to_string()
    }
}

/// The UI-facing normalized form of a backend itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    /// `route_1`, `route_2`, ... in backend order.
    pub id: String,
    pub duration_minutes: u32,
    /// Fare, never negative.
    pub cost: f64,
    pub transfer_count: u32,
    /// Sustainability score in `0..=100`.
    pub eco_score: u8,
    pub features: BTreeSet<Feature>,
    pub steps: Vec<RouteStep>,
    /// Map path; always starts at the origin and ends at the destination.
    pub path: Vec<Coordinate>,
}
