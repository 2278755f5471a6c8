//! Rendering of check reports for terminals and Markdown surfaces.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableCheck, RenderableFinding, RenderableLimits, RenderableReport, recommendations,
};
pub use text::render_text;

/// Numbers as a traveller would write them: no trailing `.0`, at most two decimals.
pub(crate) fn fmt_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// `55 × 35 × 25 cm` for cabin, `158 cm (sum of dimensions)` for hold.
pub(crate) fn fmt_dimension_limit(limits: &RenderableLimits) -> String {
    match *limits {
        RenderableLimits::Cabin {
            length,
            width,
            height,
        } => fmt_dimensions([length, width, height]),
        RenderableLimits::Hold { sum_max } => {
            format!("{} cm (sum of dimensions)", fmt_amount(sum_max))
        }
    }
}

pub(crate) fn fmt_dimensions([length, width, height]: [f64; 3]) -> String {
    format!(
        "{} × {} × {} cm",
        fmt_amount(length),
        fmt_amount(width),
        fmt_amount(height)
    )
}

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_drop_trailing_zero_and_float_noise() {
        assert_eq!(fmt_amount(55.0), "55");
        assert_eq!(fmt_amount(35.5), "35.5");
        assert_eq!(fmt_amount(0.1 + 0.2), "0.3");
    }

    #[test]
    fn limit_shapes_render_distinctly() {
        let cabin = RenderableLimits::Cabin {
            length: 55.0,
            width: 35.0,
            height: 25.0,
        };
        assert_eq!(fmt_dimension_limit(&cabin), "55 × 35 × 25 cm");
        let hold = RenderableLimits::Hold { sum_max: 158.0 };
        assert_eq!(fmt_dimension_limit(&hold), "158 cm (sum of dimensions)");
    }
}
