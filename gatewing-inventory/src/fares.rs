use gatewing_domain::CabinClass;

pub const BUSINESS_FARE: i32 = 600;
pub const ECONOMY_FARE: i32 = 400;

/// Flat per-cabin fare in whole dollars. There is no dynamic pricing.
pub fn base_fare(class: CabinClass) -> i32 {
    match class {
        CabinClass::Business => BUSINESS_FARE,
        CabinClass::Economy => ECONOMY_FARE,
    }
}
