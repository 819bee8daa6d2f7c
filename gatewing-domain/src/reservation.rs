use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cabin class of a seat. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    Business,
    Economy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid class type.")]
pub struct ParseCabinClassError;

impl FromStr for CabinClass {
    type Err = ParseCabinClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("business") {
            Ok(CabinClass::Business)
        } else if s.eq_ignore_ascii_case("economy") {
            Ok(CabinClass::Economy)
        } else {
            Err(ParseCabinClassError)
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CabinClass::Business => write!(f, "Business"),
            CabinClass::Economy => write!(f, "Economy"),
        }
    }
}

/// One reservation attempt as handed to the engine. Date and time are
/// opaque display strings, echoed back verbatim and never parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationRequest {
    pub class: String,
    pub seat_number: i32,
    #[serde(default)]
    pub snack: Option<String>,
    pub date: String,
    pub time: String,
}

impl ReservationRequest {
    /// The literal string "None" is the no-snack sentinel.
    pub fn wants_snack(&self) -> bool {
        matches!(self.snack.as_deref(), Some(s) if s != "None")
    }
}

/// Result of one reservation attempt. Every rejection is a normal value
/// the caller can recover from by retrying with corrected input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationOutcome {
    Confirmed {
        class: CabinClass,
        seat_number: i32,
        date: String,
        time: String,
        /// Present for business class only; economy confirmations never
        /// carry a snack, even if one was supplied.
        #[serde(skip_serializing_if = "Option::is_none")]
        snack: Option<String>,
        price: i32,
    },
    /// Covers both an already-claimed seat and an out-of-range seat
    /// number; callers cannot distinguish the two.
    SeatTaken {
        class: CabinClass,
        seat_number: i32,
    },
    InvalidClass {
        given: String,
    },
    SnackNotAllowed,
}

impl ReservationOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ReservationOutcome::Confirmed { .. })
    }
}

impl fmt::Display for ReservationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationOutcome::Confirmed {
                class: CabinClass::Business,
                seat_number,
                date,
                time,
                snack,
                price,
            } => write!(
                f,
                "Business seat {} reserved on {} at {} with {}. Total: ${}",
                seat_number,
                date,
                time,
                snack.as_deref().unwrap_or("None"),
                price
            ),
            ReservationOutcome::Confirmed {
                class: CabinClass::Economy,
                seat_number,
                date,
                time,
                price,
                ..
            } => write!(
                f,
                "Economy seat {} reserved on {} at {}. Total: ${}",
                seat_number, date, time, price
            ),
            ReservationOutcome::SeatTaken { class, seat_number } => {
                write!(f, "{} seat {} is already taken.", class, seat_number)
            }
            ReservationOutcome::InvalidClass { .. } => write!(f, "Invalid class type."),
            ReservationOutcome::SnackNotAllowed => {
                write!(f, "Snacks are only available for Business class tickets.")
            }
        }
    }
}
