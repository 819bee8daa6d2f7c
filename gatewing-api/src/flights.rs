use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures_util::{Stream, StreamExt};
use gatewing_domain::CabinClass;
use gatewing_inventory::{CabinAvailability, Flight};
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct FlightSummary {
    code: String,
    destination: String,
    business_available: i32,
    economy_available: i32,
}

#[derive(Debug, Deserialize)]
struct SeatMapParams {
    class: Option<String>,
}

#[derive(Debug, Serialize)]
struct SeatMapResponse {
    flight: String,
    destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    business: Option<CabinAvailability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    economy: Option<CabinAvailability>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(list_flights))
        .route("/v1/flights/{code}/seats", get(seat_map))
        .route("/v1/flights/{code}/stream", get(seat_stream))
}

async fn list_flights(State(state): State<AppState>) -> Json<Vec<FlightSummary>> {
    let flights = state
        .registry
        .flights()
        .iter()
        .map(|flight| {
            let availability = flight.availability();
            FlightSummary {
                code: flight.code().to_string(),
                destination: flight.destination().to_string(),
                business_available: availability.business.available_count,
                economy_available: availability.economy.available_count,
            }
        })
        .collect();
    Json(flights)
}

fn lookup(state: &AppState, code: &str) -> Result<Arc<Flight>, AppError> {
    state
        .registry
        .get(code)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown flight: {}", code)))
}

async fn seat_map(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<SeatMapParams>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let flight = lookup(&state, &code)?;

    let class = match params.class.as_deref() {
        Some(raw) => Some(
            raw.parse::<CabinClass>()
                .map_err(|e| AppError::ValidationError(e.to_string()))?,
        ),
        None => None,
    };

    let availability = flight.availability();
    let (business, economy) = match class {
        Some(CabinClass::Business) => (Some(availability.business), None),
        Some(CabinClass::Economy) => (None, Some(availability.economy)),
        None => (Some(availability.business), Some(availability.economy)),
    };

    Ok(Json(SeatMapResponse {
        flight: flight.code().to_string(),
        destination: flight.destination().to_string(),
        business,
        economy,
    }))
}

async fn seat_stream(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let flight = lookup(&state, &code)?;
    let flight_code = flight.code().to_string();

    let rx = state.sse_tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(move |result| {
        let flight_code = flight_code.clone();
        async move {
            match result {
                Ok(event) if event.flight == flight_code => Some(Ok(Event::default()
                    .event("seat_claimed")
                    .data(serde_json::to_string(&event).unwrap()))),
                _ => None,
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
