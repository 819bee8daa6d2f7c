use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use gatewing_api::{app, AppState};
use gatewing_inventory::{FlightRegistry, FlightSpec};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let specs = vec![
        FlightSpec {
            code: "GOS1".to_string(),
            destination: "New York".to_string(),
            business_seats: 20,
            economy_seats: 10,
        },
        FlightSpec {
            code: "GOS2".to_string(),
            destination: "Greensboro".to_string(),
            business_seats: 20,
            economy_seats: 10,
        },
    ];
    let registry = FlightRegistry::from_specs(&specs).expect("test fleet");
    app(AppState::new(Arc::new(registry)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_reservation(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/reservations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn reservation(flight: &str, class: &str, seat_number: i32, snack: &str) -> Value {
    json!({
        "flight": flight,
        "class": class,
        "seat_number": seat_number,
        "snack": snack,
        "date": "Jan 01, 2025",
        "time": "06:00 AM",
        "passenger": "Avery Quinn",
    })
}

#[tokio::test]
async fn test_business_reservation_is_confirmed() {
    let app = test_app();

    let (status, body) = post_reservation(&app, reservation("GOS1", "business", 1, "Cookies")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "CONFIRMED");
    assert_eq!(body["flight"], "GOS1");
    assert_eq!(body["destination"], "New York");
    assert_eq!(body["seat_number"], 1);
    assert_eq!(body["price"], 600);
    assert_eq!(body["snack"], "Cookies");
    assert_eq!(body["passenger"], "Avery Quinn");
    assert_eq!(
        body["message"],
        "Business seat 1 reserved on Jan 01, 2025 at 06:00 AM with Cookies. Total: $600"
    );
    assert!(body["reservation_id"].is_string());
}

#[tokio::test]
async fn test_economy_reservation_is_confirmed_without_snack() {
    let app = test_app();

    let (status, body) = post_reservation(&app, reservation("GOS1", "economy", 1, "None")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "CONFIRMED");
    assert_eq!(body["price"], 400);
    assert!(body.get("snack").is_none());
    assert_eq!(
        body["message"],
        "Economy seat 1 reserved on Jan 01, 2025 at 06:00 AM. Total: $400"
    );
}

#[tokio::test]
async fn test_double_booking_returns_conflict() {
    let app = test_app();

    let (status, _) = post_reservation(&app, reservation("GOS1", "business", 4, "None")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_reservation(&app, reservation("GOS1", "business", 4, "None")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Business seat 4 is already taken.");
}

#[tokio::test]
async fn test_economy_snack_is_rejected_and_seat_stays_free() {
    let app = test_app();

    let (status, body) = post_reservation(&app, reservation("GOS1", "economy", 5, "Peanuts")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Snacks are only available for Business class tickets."
    );

    // The rejected attempt must not have consumed the seat.
    let (status, _) = post_reservation(&app, reservation("GOS1", "economy", 5, "None")).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_unknown_class_is_rejected() {
    let app = test_app();

    let (status, body) = post_reservation(&app, reservation("GOS1", "first", 1, "None")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid class type.");
}

#[tokio::test]
async fn test_unknown_flight_is_not_found() {
    let app = test_app();

    let (status, body) = post_reservation(&app, reservation("GOS9", "business", 1, "None")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown flight: GOS9");
}

#[tokio::test]
async fn test_class_and_flight_code_matching_is_case_insensitive() {
    let app = test_app();

    let (status, body) = post_reservation(&app, reservation("gos1", "BUSINESS", 9, "None")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["flight"], "GOS1");
    assert_eq!(body["class"], "BUSINESS");
}

#[tokio::test]
async fn test_out_of_range_seats_are_rejected() {
    let app = test_app();

    for seat in [0, 21] {
        let (status, body) = post_reservation(&app, reservation("GOS1", "business", seat, "None")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["error"],
            format!("Business seat {} is already taken.", seat)
        );
    }

    // Both rejections left the cabin untouched.
    let (_, body) = get(&app, "/v1/flights/GOS1/seats").await;
    assert_eq!(body["business"]["available_count"], 20);
}

#[tokio::test]
async fn test_seat_map_shrinks_after_a_claim() {
    let app = test_app();

    let (status, body) = get(&app, "/v1/flights/GOS1/seats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["business"]["available_count"], 20);
    assert_eq!(body["economy"]["available_count"], 10);
    assert!(body["business"]["seat_numbers"]
        .as_array()
        .unwrap()
        .contains(&json!(12)));

    let (status, _) = post_reservation(&app, reservation("GOS1", "business", 12, "None")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/v1/flights/GOS1/seats?class=business").await;
    assert_eq!(body["business"]["available_count"], 19);
    assert!(!body["business"]["seat_numbers"]
        .as_array()
        .unwrap()
        .contains(&json!(12)));
    // Narrowed to one cabin by the query parameter.
    assert!(body.get("economy").is_none());
}

#[tokio::test]
async fn test_flight_listing_reports_both_cabins() {
    let app = test_app();

    let (status, _) = post_reservation(&app, reservation("GOS2", "economy", 2, "None")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/v1/flights").await;
    assert_eq!(status, StatusCode::OK);

    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0]["code"], "GOS1");
    assert_eq!(flights[0]["business_available"], 20);
    assert_eq!(flights[1]["code"], "GOS2");
    assert_eq!(flights[1]["economy_available"], 9);
}
