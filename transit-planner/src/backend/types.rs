//! Wire types returned by the planning backend.

use serde::Deserialize;
use serde_json::Value;

/// An itinerary as the backend sends it.
///
/// The backend's shape is not under our control. Each summary field is read
/// independently: a missing, `null`, mistyped or negative value is treated
/// as absent so that the normalizer can substitute its default. A zero
/// duration or fare is also treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawItinerary {
    /// Total trip time in minutes.
    pub total_duration: Option<u32>,
    /// Total fare.
    pub total_cost: Option<f64>,
    /// Number of vehicle changes.
    pub transfer_count: Option<u32>,
}

impl RawItinerary {
    /// An itinerary with only a transfer count.
    pub fn with_transfers(transfer_count: u32) -> Self {
        Self {
            transfer_count: Some(transfer_count),
            ..Self::default()
        }
    }

    /// Read the summary fields out of an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).filter(|v| !v.is_null());

        Self {
            // The planner's serializer names this field `total_duration_minutes`.
            total_duration: field("total_duration")
                .or_else(|| field("total_duration_minutes"))
                .and_then(whole_minutes),
            total_cost: field("total_cost").and_then(positive_amount),
            transfer_count: field("transfer_count").and_then(count),
        }
    }
}

impl From<Value> for RawItinerary {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Decode a plan response body.
///
/// Returns `None` when the body is not a JSON array. Elements that are not
/// objects decode to an all-default itinerary rather than being dropped, so
/// route numbering follows backend order.
pub fn decode_itineraries(body: &Value) -> Option<Vec<RawItinerary>> {
    body.as_array()
        .map(|items| items.iter().map(RawItinerary::from_value).collect())
}

fn whole_minutes(v: &Value) -> Option<u32> {
    let mins = v.as_f64()?;
    if !mins.is_finite() || mins < 0.0 {
        return None;
    }
    u32::try_from(mins.round() as u64).ok().filter(|m| *m > 0)
}

fn positive_amount(v: &Value) -> Option<f64> {
    v.as_f64().filter(|x| x.is_finite() && *x > 0.0)
}

fn count(v: &Value) -> Option<u32> {
    v.as_u64().and_then(|n| u32::try_from(n).ok())
}
