//! Values substituted for data the backend does not send yet.

use std::ops::Range;

use crate::domain::{Coordinate, Feature};

/// Defaults and stand-ins used while normalizing itineraries.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholders {
    /// Duration used when the itinerary has none.
    pub duration_minutes: u32,
    /// Fare used when the itinerary has none.
    pub cost: f64,
    /// Transfer count used when the itinerary has none.
    pub transfer_count: u32,
    /// Eco scores are drawn uniformly from this half-open range.
    pub eco_score: Range<u8>,
    /// Features attached to every route.
    pub features: Vec<Feature>,
    /// Fixed points drawn between origin and destination.
    ///
    /// Not derived from the itinerary. Replace once the backend exposes
    /// route shapes.
    pub waypoints: Vec<Coordinate>,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            duration_minutes: 30,
            cost: 3.50,
            transfer_count: 0,
            eco_score: 75..95,
            features: vec![Feature::ElectricBus],
            waypoints: vec![
                Coordinate::new(43.5330, -80.2270),
                Coordinate::new(43.5345, -80.2285),
                Coordinate::new(43.5360, -80.2300),
            ],
        }
    }
}
