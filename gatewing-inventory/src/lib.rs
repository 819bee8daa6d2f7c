pub mod fares;
pub mod flight;
pub mod pool;
pub mod registry;

pub use fares::base_fare;
pub use flight::{CabinAvailability, Flight, FlightAvailability};
pub use pool::{SeatPool, SeatState};
pub use registry::{FlightRegistry, FlightSpec, RegistryError};
