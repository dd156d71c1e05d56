//! Step-by-step instructions for a route.

use crate::backend::RawItinerary;
use crate::domain::{RouteStep, StepKind};

/// Build the instructions shown under a route card.
///
/// This is a fixed template: the backend does not send per-segment data, so
/// only the transfer count influences the result. Routes with at least one
/// transfer get an extra walk and bus step.
pub fn build_steps(raw: &RawItinerary) -> Vec<RouteStep> {
    let transfers = raw.transfer_count.unwrap_or(0);

    let mut steps = vec![
        RouteStep::new(StepKind::Walk, 5, "Walk to nearest bus stop"),
        RouteStep::new(StepKind::Bus, 15, "Take bus to transfer point"),
    ];

    if transfers > 0 {
        steps.push(RouteStep::new(StepKind::Walk, 3, "Transfer to connecting bus"));
        steps.push(RouteStep::new(StepKind::Bus, 10, "Take bus to destination"));
    }

    steps.push(RouteStep::new(StepKind::Walk, 2, "Walk to final destination"));
    steps
}
