use bagcheck_catalog::StaticCatalog;
use bagcheck_domain::{AirlinePolicy, RawMeasurement};
use bagcheck_types::{AirlineId, CabinLimits, HoldLimits};

/// Two-entry catalog with Air France-like limits under id 1.
pub fn catalog() -> StaticCatalog {
    let entry = |id: u32, name: &str, code: &str| {
        AirlinePolicy::new(
            AirlineId::new(id),
            name,
            code,
            CabinLimits {
                length: 55.0,
                width: 35.0,
                height: 25.0,
                weight: 12.0,
            },
            HoldLimits {
                sum_max: 158.0,
                weight: 23.0,
            },
        )
        .expect("valid policy")
    };
    StaticCatalog::new(
        vec![entry(1, "Air France", "AF"), entry(2, "Lufthansa", "LH")],
        5,
    )
    .expect("valid catalog")
}

pub fn raw(l: &str, w: &str, h: &str, kg: &str) -> RawMeasurement {
    RawMeasurement::new(l, w, h, kg)
}
