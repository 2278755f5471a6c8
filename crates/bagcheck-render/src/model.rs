/// Limits as shown to the traveller. Cabin and hold shapes are never merged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderableLimits {
    Cabin {
        length: f64,
        width: f64,
        height: f64,
    },
    Hold {
        sum_max: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableFinding {
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

/// One of the two independent checks (dimensions, weight).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderableCheck {
    pub ok: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub airline_name: String,
    pub airline_code: String,
    /// `cabin` or `hold`.
    pub category: String,
    pub compliant: bool,

    pub dimensions: RenderableCheck,
    pub limits: RenderableLimits,
    /// Length, width, height as entered.
    pub measured: [f64; 3],

    pub weight: RenderableCheck,
    pub weight_limit: f64,
    pub measured_weight: f64,

    pub findings: Vec<RenderableFinding>,
}

/// Advice lines for a non-compliant report; empty when compliant.
pub fn recommendations(report: &RenderableReport) -> Vec<&'static str> {
    if report.compliant {
        return Vec::new();
    }
    let mut out = Vec::new();
    if !report.dimensions.ok {
        out.push("Reduce the dimensions of your bag");
    }
    if !report.weight.ok {
        out.push("Reduce the weight of your bag");
    }
    out.push("Contact your airline for more information");
    out
}
