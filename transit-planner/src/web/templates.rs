//! Askama templates for the web frontend.

use askama::Template;

use crate::controller::{Status, StatusKind};
use crate::domain::{RouteOption, RouteStep, Stop};
use crate::selection::Role;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the stop pickers, results panel and map.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub status: StatusView,
    pub stop_count: usize,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Autocomplete suggestions for one of the stop inputs.
#[derive(Template)]
#[template(path = "suggestions.html")]
pub struct SuggestionsTemplate {
    pub role: Role,
    pub stops: Vec<SuggestionView>,
}

/// Route cards, or the status line when there are none.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub cards: Vec<RouteCardView>,
    pub status: StatusView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Status line view model.
#[derive(Debug, Clone)]
pub struct StatusView {
    pub class: &'static str,
    pub message: String,
}

impl StatusView {
    pub fn from_status(status: &Status) -> Self {
        let class = match status.kind {
            StatusKind::Info => "info",
            StatusKind::Error => "error",
            StatusKind::Loading => "loading",
        };
        Self {
            class,
            message: status.message.clone(),
        }
    }
}

/// One suggestion row.
#[derive(Debug, Clone)]
pub struct SuggestionView {
    pub id: i64,
    pub name: String,
}

impl SuggestionView {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.0,
            name: stop.name.clone(),
        }
    }
}

/// Route card view model.
#[derive(Debug, Clone)]
pub struct RouteCardView {
    pub route_id: String,
    /// 0-based position, used to pick the polyline colour.
    pub index: usize,
    pub title: String,
    pub duration_display: String,
    pub cost_display: String,
    pub transfers: u32,
    pub eco_display: String,
    pub features: Vec<String>,
    pub steps: Vec<StepView>,
}

impl RouteCardView {
    /// Create from a route option at `index` in the result list.
    pub fn from_route(route: &RouteOption, index: usize) -> Self {
        Self {
            route_id: route.id.clone(),
            index,
            title: format!("Option {}", index + 1),
            duration_display: format!("{} min", route.duration_minutes),
            cost_display: format!("${:.2}", route.cost),
            transfers: route.transfer_count,
            eco_display: format!("{}/100", route.eco_score),
            features: route.features.iter().map(|f| f.label().to_string()).collect(),
            steps: route.steps.iter().map(StepView::from_step).collect(),
        }
    }

    /// Cards for a whole result list, in order.
    pub fn from_routes(routes: &[RouteOption]) -> Vec<Self> {
        routes
            .iter()
            .enumerate()
            .map(|(i, r)| Self::from_route(r, i))
            .collect()
    }
}

/// One step line on a route card.
#[derive(Debug, Clone)]
pub struct StepView {
    pub icon: &'static str,
    pub icon_class: &'static str,
    pub text: String,
}

impl StepView {
    pub fn from_step(step: &RouteStep) -> Self {
        Self {
            icon: step.kind.icon(),
            icon_class: step.kind.css_class(),
            text: format!("{} ({} min)", step.description, step.duration_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RawItinerary;
    use crate::itinerary::normalize;

    fn routes() -> Vec<RouteOption> {
        let raw = [
            RawItinerary {
                total_duration: Some(42),
                total_cost: Some(3.0),
                transfer_count: Some(1),
            },
            RawItinerary::default(),
        ];
        normalize(
            Some(&raw),
            &Stop::new(1, "University Centre", 43.5326, -80.2264),
            &Stop::new(4, "Guelph Central Station", 43.5432, -80.2489),
        )
    }

    #[test]
    fn route_card_formatting() {
        let cards = RouteCardView::from_routes(&routes());

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Option 1");
        assert_eq!(cards[0].duration_display, "42 min");
        assert_eq!(cards[0].cost_display, "$3.00");
        assert_eq!(cards[0].transfers, 1);
        assert_eq!(cards[0].features, vec!["Electric"]);
        assert_eq!(cards[0].steps.len(), 6);
        assert_eq!(cards[1].title, "Option 2");
        assert_eq!(cards[1].cost_display, "$3.50");
        assert_eq!(cards[1].index, 1);
    }

    #[test]
    fn step_view() {
        let cards = RouteCardView::from_routes(&routes());
        let step = &cards[0].steps[0];

        assert_eq!(step.icon, "W");
        assert_eq!(step.icon_class, "walk");
        assert_eq!(step.text, "Walk to nearest bus stop (5 min)");
    }

    #[test]
    fn status_view_classes() {
        assert_eq!(StatusView::from_status(&Status::error("x")).class, "error");
        assert_eq!(StatusView::from_status(&Status::loading("x")).class, "loading");
        assert_eq!(StatusView::from_status(&Status::info("x")).class, "info");
    }

    #[test]
    fn route_results_render() {
        let template = RouteResultsTemplate {
            cards: RouteCardView::from_routes(&routes()),
            status: StatusView::from_status(&Status::info("Found 2 route options.")),
        };
        let html = template.render().unwrap();

        assert!(html.contains("Option 1"));
        assert!(html.contains("Option 2"));
        assert!(html.contains("$3.50"));
        assert!(html.contains("Transfer to connecting bus (3 min)"));
        assert!(html.contains("data-route-id=\"route_2\""));
    }

    #[test]
    fn empty_route_results_show_status() {
        let template = RouteResultsTemplate {
            cards: vec![],
            status: StatusView::from_status(&Status::info(
                "No routes found matching your criteria.",
            )),
        };
        let html = template.render().unwrap();

        assert!(html.contains("No routes found matching your criteria."));
        assert!(!html.contains("route-option"));
    }

    #[test]
    fn suggestions_render_with_role() {
        let template = SuggestionsTemplate {
            role: Role::End,
            stops: vec![SuggestionView::from_stop(&Stop::new(3, "Stone Road Mall", 0.0, 0.0))],
        };
        let html = template.render().unwrap();

        assert!(html.contains("Stone Road Mall"));
        assert!(html.contains("data-stop-id=\"3\""));
        assert!(html.contains("data-role=\"end\""));
    }
}
