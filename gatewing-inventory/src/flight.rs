use std::sync::Mutex;

use gatewing_domain::{CabinClass, ReservationOutcome, ReservationRequest};
use serde::Serialize;
use tracing::debug;

use crate::fares::base_fare;
use crate::pool::SeatPool;

/// A single flight: two independent cabins of numbered seats.
///
/// Each cabin has its own lock, and the availability check and the claim
/// happen inside one critical section, so two callers racing for the same
/// seat can never both win. Seat numbers do not alias across cabins.
#[derive(Debug)]
pub struct Flight {
    code: String,
    destination: String,
    business: Mutex<SeatPool>,
    economy: Mutex<SeatPool>,
}

/// Snapshot of one cabin's remaining seats.
#[derive(Debug, Clone, Serialize)]
pub struct CabinAvailability {
    pub available_count: i32,
    pub seat_numbers: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightAvailability {
    pub business: CabinAvailability,
    pub economy: CabinAvailability,
}

impl Flight {
    pub fn new(code: &str, destination: &str, business_seats: i32, economy_seats: i32) -> Self {
        Self {
            code: code.to_string(),
            destination: destination.to_string(),
            business: Mutex::new(SeatPool::new(business_seats)),
            economy: Mutex::new(SeatPool::new(economy_seats)),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    fn pool(&self, class: CabinClass) -> &Mutex<SeatPool> {
        match class {
            CabinClass::Business => &self.business,
            CabinClass::Economy => &self.economy,
        }
    }

    /// Attempt one reservation. The first failing check wins:
    /// unknown class, then the economy snack rule, then seat
    /// availability (out-of-range seat numbers are reported as taken).
    pub fn reserve(&self, req: &ReservationRequest) -> ReservationOutcome {
        let class = match req.class.parse::<CabinClass>() {
            Ok(class) => class,
            Err(_) => {
                return ReservationOutcome::InvalidClass {
                    given: req.class.clone(),
                }
            }
        };

        // Snacks are a business-class perk; enforced here rather than
        // trusted to the caller.
        if class == CabinClass::Economy && req.wants_snack() {
            return ReservationOutcome::SnackNotAllowed;
        }

        let mut pool = self.pool(class).lock().expect("seat pool lock poisoned");
        if !pool.claim(req.seat_number) {
            return ReservationOutcome::SeatTaken {
                class,
                seat_number: req.seat_number,
            };
        }
        debug!(
            "Seat claimed: {} {} seat {} ({} left)",
            self.code,
            class,
            req.seat_number,
            pool.available_count()
        );

        ReservationOutcome::Confirmed {
            class,
            seat_number: req.seat_number,
            date: req.date.clone(),
            time: req.time.clone(),
            snack: match class {
                CabinClass::Business => {
                    Some(req.snack.clone().unwrap_or_else(|| "None".to_string()))
                }
                CabinClass::Economy => None,
            },
            price: base_fare(class),
        }
    }

    /// Remaining seat numbers for one cabin, ascending.
    pub fn list_available(&self, class: CabinClass) -> Vec<i32> {
        self.pool(class)
            .lock()
            .expect("seat pool lock poisoned")
            .list_available()
    }

    pub fn available_count(&self, class: CabinClass) -> i32 {
        self.pool(class)
            .lock()
            .expect("seat pool lock poisoned")
            .available_count()
    }

    /// Per-cabin snapshot of remaining seats, for seat-map display.
    pub fn availability(&self) -> FlightAvailability {
        let snapshot = |class| {
            let pool = self.pool(class).lock().expect("seat pool lock poisoned");
            CabinAvailability {
                available_count: pool.available_count(),
                seat_numbers: pool.list_available(),
            }
        };
        FlightAvailability {
            business: snapshot(CabinClass::Business),
            economy: snapshot(CabinClass::Economy),
        }
    }
}
