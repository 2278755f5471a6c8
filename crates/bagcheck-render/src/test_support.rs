use crate::{RenderableCheck, RenderableFinding, RenderableLimits, RenderableReport};

pub fn cabin_report(dimensions_ok: bool, weight_ok: bool) -> RenderableReport {
    let mut findings = Vec::new();
    if !dimensions_ok {
        findings.push(RenderableFinding {
            code: "axis_exceeded".to_string(),
            message: "length 60 cm exceeds the cabin maximum of 55 cm".to_string(),
            help: Some("Reduce the length of your bag by at least 5 cm.".to_string()),
        });
    }
    if !weight_ok {
        findings.push(RenderableFinding {
            code: "weight_exceeded".to_string(),
            message: "weight 12.5 kg exceeds the cabin maximum of 12 kg".to_string(),
            help: Some("Reduce the weight of your bag by at least 0.5 kg.".to_string()),
        });
    }
    RenderableReport {
        airline_name: "Air France".to_string(),
        airline_code: "AF".to_string(),
        category: "cabin".to_string(),
        compliant: dimensions_ok && weight_ok,
        dimensions: RenderableCheck { ok: dimensions_ok },
        limits: RenderableLimits::Cabin {
            length: 55.0,
            width: 35.0,
            height: 25.0,
        },
        measured: [if dimensions_ok { 55.0 } else { 60.0 }, 35.0, 25.0],
        weight: RenderableCheck { ok: weight_ok },
        weight_limit: 12.0,
        measured_weight: if weight_ok { 12.0 } else { 12.5 },
        findings,
    }
}

pub fn hold_report(dimensions_ok: bool, weight_ok: bool) -> RenderableReport {
    let mut findings = Vec::new();
    if !dimensions_ok {
        findings.push(RenderableFinding {
            code: "sum_exceeded".to_string(),
            message: "length + width + height = 170 cm exceeds the hold maximum of 158 cm"
                .to_string(),
            help: None,
        });
    }
    if !weight_ok {
        findings.push(RenderableFinding {
            code: "weight_exceeded".to_string(),
            message: "weight 25 kg exceeds the hold maximum of 23 kg".to_string(),
            help: None,
        });
    }
    RenderableReport {
        airline_name: "Air France".to_string(),
        airline_code: "AF".to_string(),
        category: "hold".to_string(),
        compliant: dimensions_ok && weight_ok,
        dimensions: RenderableCheck { ok: dimensions_ok },
        limits: RenderableLimits::Hold { sum_max: 158.0 },
        measured: if dimensions_ok {
            [70.0, 50.0, 30.0]
        } else {
            [80.0, 60.0, 30.0]
        },
        weight: RenderableCheck { ok: weight_ok },
        weight_limit: 23.0,
        measured_weight: if weight_ok { 20.0 } else { 25.0 },
        findings,
    }
}
