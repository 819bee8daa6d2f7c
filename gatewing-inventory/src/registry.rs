use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::flight::Flight;

/// Static description of one flight, as read from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSpec {
    pub code: String,
    pub destination: String,
    pub business_seats: i32,
    pub economy_seats: i32,
}

/// Process-wide flight table. Built once at startup from configuration
/// and shared behind an `Arc`; there are no hidden singletons.
#[derive(Debug)]
pub struct FlightRegistry {
    flights: HashMap<String, Arc<Flight>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate flight code: {0}")]
    DuplicateCode(String),
    #[error("Flight {code} has no {cabin} seats")]
    EmptyCabin { code: String, cabin: &'static str },
}

impl FlightRegistry {
    pub fn from_specs(specs: &[FlightSpec]) -> Result<Self, RegistryError> {
        let mut flights = HashMap::new();
        for spec in specs {
            if spec.business_seats < 1 {
                return Err(RegistryError::EmptyCabin {
                    code: spec.code.clone(),
                    cabin: "business",
                });
            }
            if spec.economy_seats < 1 {
                return Err(RegistryError::EmptyCabin {
                    code: spec.code.clone(),
                    cabin: "economy",
                });
            }
            let key = spec.code.to_uppercase();
            if flights.contains_key(&key) {
                return Err(RegistryError::DuplicateCode(spec.code.clone()));
            }
            flights.insert(
                key,
                Arc::new(Flight::new(
                    &spec.code,
                    &spec.destination,
                    spec.business_seats,
                    spec.economy_seats,
                )),
            );
        }
        Ok(Self { flights })
    }

    /// Case-insensitive lookup by flight code.
    pub fn get(&self, code: &str) -> Option<Arc<Flight>> {
        self.flights.get(&code.to_uppercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// All flights, sorted by code for stable listings.
    pub fn flights(&self) -> Vec<Arc<Flight>> {
        let mut all: Vec<_> = self.flights.values().cloned().collect();
        all.sort_by(|a, b| a.code().cmp(b.code()));
        all
    }
}
