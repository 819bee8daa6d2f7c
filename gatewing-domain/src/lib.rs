pub mod events;
pub mod reservation;

pub use events::SeatClaimedEvent;
pub use reservation::{CabinClass, ReservationOutcome, ReservationRequest};
