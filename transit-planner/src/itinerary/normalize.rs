//! Backend itinerary → [`RouteOption`].

use rand::Rng;

use super::placeholders::Placeholders;
use super::steps::build_steps;
use crate::backend::RawItinerary;
use crate::domain::{RouteOption, Stop};

/// Normalize itineraries using the default placeholders and thread RNG.
///
/// `None` (the backend did not answer with a list) yields no routes.
pub fn normalize(raw: Option<&[RawItinerary]>, origin: &Stop, destination: &Stop) -> Vec<RouteOption> {
    normalize_with(
        raw,
        origin,
        destination,
        &Placeholders::default(),
        &mut rand::thread_rng(),
    )
}

/// Normalize itineraries with explicit placeholders and random source.
pub fn normalize_with<R: Rng>(
    raw: Option<&[RawItinerary]>,
    origin: &Stop,
    destination: &Stop,
    placeholders: &Placeholders,
    rng: &mut R,
) -> Vec<RouteOption> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.iter()
        .enumerate()
        .map(|(i, itinerary)| {
            let mut path = Vec::with_capacity(placeholders.waypoints.len() + 2);
            path.push(origin.coordinate());
            path.extend(placeholders.waypoints.iter().copied());
            path.push(destination.coordinate());

            RouteOption {
                id: format!("route_{}", i + 1),
                duration_minutes: itinerary
                    .total_duration
                    .unwrap_or(placeholders.duration_minutes),
                cost: itinerary.total_cost.unwrap_or(placeholders.cost),
                transfer_count: itinerary
                    .transfer_count
                    .unwrap_or(placeholders.transfer_count),
                eco_score: eco_score(placeholders, rng),
                features: placeholders.features.iter().cloned().collect(),
                steps: build_steps(itinerary),
                path,
            }
        })
        .collect()
}

fn eco_score<R: Rng>(placeholders: &Placeholders, rng: &mut R) -> u8 {
    let range = placeholders.eco_score.clone();
    if range.is_empty() {
        return range.start.min(100);
    }
    rng.gen_range(range).min(100)
}
