use serde::{Deserialize, Serialize};

/// State of a single numbered seat. The transition is one-way; there is
/// no cancellation, so a seat never goes back to `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    Available,
    Taken,
}

/// One cabin's worth of numbered seats on a single flight.
///
/// Seat numbers are 1-based: seat `n` lives at `seats[n - 1]`. The
/// available count is maintained incrementally by `claim` and always
/// equals the number of `Available` entries.
#[derive(Debug)]
pub struct SeatPool {
    seats: Vec<SeatState>,
    available: i32,
}

impl SeatPool {
    pub fn new(capacity: i32) -> Self {
        let capacity = capacity.max(0);
        Self {
            seats: vec![SeatState::Available; capacity as usize],
            available: capacity,
        }
    }

    pub fn capacity(&self) -> i32 {
        self.seats.len() as i32
    }

    pub fn is_valid_seat(&self, seat_number: i32) -> bool {
        seat_number >= 1 && seat_number <= self.capacity()
    }

    pub fn is_available(&self, seat_number: i32) -> bool {
        self.is_valid_seat(seat_number)
            && self.seats[(seat_number - 1) as usize] == SeatState::Available
    }

    /// Claim a seat. Returns `false` and leaves the pool unchanged if the
    /// seat number is out of range or the seat is already taken; a second
    /// claim of the same seat always fails.
    pub fn claim(&mut self, seat_number: i32) -> bool {
        if !self.is_available(seat_number) {
            return false;
        }
        self.seats[(seat_number - 1) as usize] = SeatState::Taken;
        self.available -= 1;
        true
    }

    pub fn available_count(&self) -> i32 {
        self.available
    }

    /// Remaining seat numbers, ascending.
    pub fn list_available(&self) -> Vec<i32> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == SeatState::Available)
            .map(|(idx, _)| idx as i32 + 1)
            .collect()
    }
}
