use crate::model::AirlinePolicy;
use bagcheck_types::{AirlineId, CabinLimits, HoldLimits, Measurement};

pub fn cabin(length: f64, width: f64, height: f64, weight: f64) -> CabinLimits {
    CabinLimits {
        length,
        width,
        height,
        weight,
    }
}

pub fn hold(sum_max: f64, weight: f64) -> HoldLimits {
    HoldLimits { sum_max, weight }
}

pub fn measure(length: f64, width: f64, height: f64, weight: f64) -> Measurement {
    Measurement {
        length,
        width,
        height,
        weight,
    }
}

/// A valid policy from `(L, W, H, kg)` cabin and `(sum, kg)` hold tuples.
pub fn policy(c: (f64, f64, f64, f64), h: (f64, f64)) -> AirlinePolicy {
    AirlinePolicy::new(
        AirlineId::new(1),
        "Test Air",
        "TA",
        cabin(c.0, c.1, c.2, c.3),
        hold(h.0, h.1),
    )
    .expect("test policy limits must be positive")
}
