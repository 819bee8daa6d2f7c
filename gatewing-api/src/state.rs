use std::sync::Arc;

use gatewing_domain::SeatClaimedEvent;
use gatewing_inventory::FlightRegistry;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<FlightRegistry>,
    pub sse_tx: broadcast::Sender<SeatClaimedEvent>,
}

impl AppState {
    pub fn new(registry: Arc<FlightRegistry>) -> Self {
        let (sse_tx, _) = broadcast::channel(100);
        Self { registry, sse_tx }
    }
}
