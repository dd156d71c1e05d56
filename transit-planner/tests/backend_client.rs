//! Backend client tests against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use transit_planner::backend::{BackendClient, BackendConfig, BackendError, TransitBackend};
use transit_planner::controller::{Controller, ControllerError, PLAN_FAILED_MESSAGE};
use transit_planner::domain::{Stop, StopId};
use transit_planner::selection::Role;
use transit_planner::stops::{StopSource, sample_stops};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(BackendConfig::new(server.uri()).with_timeout(5)).unwrap()
}

fn origin() -> Stop {
    Stop::new(1, "University Centre", 43.5326, -80.2264)
}

fn destination() -> Stop {
    Stop::new(4, "Guelph Central Station", 43.5432, -80.2489)
}

#[tokio::test]
async fn fetch_stops_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stops/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "University Centre", "latitude": 43.5326, "longitude": -80.2264 },
            { "id": 7, "name": "Woodlawn at Woolwich", "latitude": 43.5701, "longitude": -80.2612 }
        ])))
        .mount(&server)
        .await;

    let stops = client_for(&server).fetch_stops().await.unwrap();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[1].id, StopId(7));
    assert_eq!(stops[1].name, "Woodlawn at Woolwich");
}

#[tokio::test]
async fn fetch_stops_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stops/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_stops().await.unwrap_err();
    assert!(matches!(err, BackendError::Status { status: 500, .. }));
}

#[tokio::test]
async fn fetch_stops_bad_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stops/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_stops().await.unwrap_err();
    assert!(matches!(err, BackendError::Json { .. }));
}

#[tokio::test]
async fn plan_sends_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plan/"))
        .and(query_param("from_lat", "43.5326"))
        .and(query_param("from_lon", "-80.2264"))
        .and(query_param("to_lat", "43.5432"))
        .and(query_param("to_lon", "-80.2489"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "total_duration_minutes": 21, "legs": [] },
            { "total_duration": 40, "total_cost": 6.5, "transfer_count": 1 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server)
        .plan(&origin(), &destination())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].total_duration, Some(21));
    assert_eq!(raw[1].total_cost, Some(6.5));
    assert_eq!(raw[1].transfer_count, Some(1));
}

#[tokio::test]
async fn plan_non_array_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plan/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "no service" })))
        .mount(&server)
        .await;

    let raw = client_for(&server)
        .plan(&origin(), &destination())
        .await
        .unwrap();
    assert!(raw.is_none());
}

#[tokio::test]
async fn controller_falls_back_when_stops_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stops/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let controller = Controller::start(client_for(&server), sample_stops()).await;
    assert_eq!(controller.stops().source(), StopSource::Fallback);
    assert_eq!(controller.stops().len(), 5);
}

#[tokio::test]
async fn controller_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stops/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "University Centre", "latitude": 43.5326, "longitude": -80.2264 },
            { "id": 4, "name": "Guelph Central Station", "latitude": 43.5432, "longitude": -80.2489 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plan/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}, { "transfer_count": 2 }])))
        .mount(&server)
        .await;

    let controller = Controller::start(client_for(&server), vec![]).await;
    assert_eq!(controller.stops().source(), StopSource::Backend);

    controller.select(Role::Start, StopId(1)).await.unwrap();
    controller.select(Role::End, StopId(4)).await.unwrap();
    let routes = controller.find_routes().await.unwrap().routes;

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].id, "route_1");
    assert_eq!(routes[0].duration_minutes, 30);
    assert_eq!(routes[0].cost, 3.50);
    assert_eq!(routes[1].steps[2].description, "Transfer to connecting bus");
    for route in &routes {
        assert!((75..95).contains(&route.eco_score));
    }
}

#[tokio::test]
async fn controller_same_stop_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plan/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let controller = Controller::start(client_for(&server), sample_stops()).await;
    controller.select(Role::Start, StopId(3)).await.unwrap();
    controller.select(Role::End, StopId(3)).await.unwrap();

    let err = controller.find_routes().await.unwrap_err();
    assert!(matches!(err, ControllerError::Selection(_)));
}

#[tokio::test]
async fn controller_plan_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plan/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let controller = Controller::start(client_for(&server), sample_stops()).await;
    controller.select(Role::Start, StopId(1)).await.unwrap();
    controller.select(Role::End, StopId(2)).await.unwrap();

    let err = controller.find_routes().await.unwrap_err();
    assert_eq!(err.to_string(), PLAN_FAILED_MESSAGE);
    assert!(!controller.is_busy());
}
