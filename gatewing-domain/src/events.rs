use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::CabinClass;

/// Broadcast whenever a seat is successfully claimed, so live listeners
/// (the per-flight SSE stream) can update their seat maps.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SeatClaimedEvent {
    pub flight: String,
    pub class: CabinClass,
    pub seat_number: i32,
    pub claimed_at: DateTime<Utc>,
}
