use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use chrono::Utc;
use gatewing_domain::{ReservationOutcome, ReservationRequest, SeatClaimedEvent};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreateReservationRequest {
    flight: String,
    class: String,
    seat_number: i32,
    #[serde(default)]
    snack: Option<String>,
    date: String,
    time: String,
    #[serde(default)]
    passenger: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReservationResponse {
    reservation_id: Uuid,
    flight: String,
    destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    passenger: Option<String>,
    message: String,
    #[serde(flatten)]
    outcome: ReservationOutcome,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/reservations", post(create_reservation))
}

async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let flight = state
        .registry
        .get(&req.flight)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown flight: {}", req.flight)))?;

    let reservation = ReservationRequest {
        class: req.class,
        seat_number: req.seat_number,
        snack: req.snack,
        date: req.date,
        time: req.time,
    };

    let outcome = flight.reserve(&reservation);

    match &outcome {
        ReservationOutcome::Confirmed {
            class, seat_number, ..
        } => {
            let _ = state.sse_tx.send(SeatClaimedEvent {
                flight: flight.code().to_string(),
                class: *class,
                seat_number: *seat_number,
                claimed_at: Utc::now(),
            });

            let reservation_id = Uuid::new_v4();
            info!(
                "Reservation confirmed: {} ({} {} seat {})",
                reservation_id,
                flight.code(),
                class,
                seat_number
            );

            Ok((
                StatusCode::CREATED,
                Json(ReservationResponse {
                    reservation_id,
                    flight: flight.code().to_string(),
                    destination: flight.destination().to_string(),
                    passenger: req.passenger,
                    message: outcome.to_string(),
                    outcome: outcome.clone(),
                }),
            ))
        }
        ReservationOutcome::SeatTaken { .. } => Err(AppError::ConflictError(outcome.to_string())),
        ReservationOutcome::InvalidClass { .. } | ReservationOutcome::SnackNotAllowed => {
            Err(AppError::ValidationError(outcome.to_string()))
        }
    }
}
