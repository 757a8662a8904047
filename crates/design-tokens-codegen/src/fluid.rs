//! Fluid value generator.
//!
//! Turns a `(min, max)` pair defined at two viewport widths into a CSS
//! `clamp()` expression that equals `min` at or below the smaller viewport,
//! `max` at or above the larger one, and is linear in between:
//!
//! ```text
//! slope     = (max - min) / (max_viewport - min_viewport)
//! intercept = min - slope * min_viewport
//! clamp(lower, intercept + slope*100 vw, upper)
//! ```
//!
//! Coefficients are rounded to [`PRECISION`] decimal places so output is
//! stable across platforms.

use design_tokens_store::{format_number, FluidToken};

/// Decimal places kept in every emitted number.
pub const PRECISION: i32 = 4;

/// Fluid generation error.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FluidError {
    #[error("min viewport {min_viewport} must be less than max viewport {max_viewport}")]
    InvalidViewportRange { min_viewport: f64, max_viewport: f64 },
}

/// The four numbers a fluid value is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidRange {
    pub min_value: f64,
    pub max_value: f64,
    pub min_viewport: f64,
    pub max_viewport: f64,
}

impl FluidRange {
    pub fn new(min_value: f64, max_value: f64, min_viewport: f64, max_viewport: f64) -> Self {
        Self {
            min_value,
            max_value,
            min_viewport,
            max_viewport,
        }
    }

    /// Change in value per unit of viewport width.
    pub fn slope(&self) -> f64 {
        (self.max_value - self.min_value) / (self.max_viewport - self.min_viewport)
    }

    /// Value the line takes at a zero-width viewport.
    pub fn intercept(&self) -> f64 {
        self.min_value - self.slope() * self.min_viewport
    }

    /// Render the range as a CSS value in `unit`.
    ///
    /// Equal bounds render as the plain value. A viewport range that is empty
    /// or inverted is an error.
    pub fn to_css(&self, unit: &str) -> Result<String, FluidError> {
        // Written so NaN viewports fail too.
        if !(self.min_viewport < self.max_viewport) {
            return Err(FluidError::InvalidViewportRange {
                min_viewport: self.min_viewport,
                max_viewport: self.max_viewport,
            });
        }

        // Bounds that print the same would give a zero-slope clamp.
        if round(self.min_value) == round(self.max_value) {
            return Ok(format!("{}{unit}", format_coefficient(self.min_value)));
        }

        let lower = self.min_value.min(self.max_value);
        let upper = self.min_value.max(self.max_value);
        let intercept = format_coefficient(self.intercept());
        let vw = round(self.slope() * 100.0);
        let (sign, vw) = if vw < 0.0 { ('-', -vw) } else { ('+', vw) };

        Ok(format!(
            "clamp({}{unit}, {intercept}{unit} {sign} {}vw, {}{unit})",
            format_coefficient(lower),
            format_number(vw),
            format_coefficient(upper),
        ))
    }
}

impl From<&FluidToken> for FluidRange {
    fn from(token: &FluidToken) -> Self {
        Self::new(
            token.min_value,
            token.max_value,
            token.min_viewport,
            token.max_viewport,
        )
    }
}

/// Compute the fluid CSS value for a single `(min, max)` pair.
pub fn clamp(
    min_value: f64,
    max_value: f64,
    min_viewport: f64,
    max_viewport: f64,
    unit: &str,
) -> Result<String, FluidError> {
    FluidRange::new(min_value, max_value, min_viewport, max_viewport).to_css(unit)
}

fn round(n: f64) -> f64 {
    let factor = 10f64.powi(PRECISION);
    (n * factor).round() / factor
}

/// Round to [`PRECISION`] places and drop trailing zeros.
pub fn format_coefficient(n: f64) -> String {
    format_number(round(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Golden values
    // =========================================================================

    #[test]
    fn test_type_scale_step() {
        assert_eq!(
            clamp(16.0, 24.0, 320.0, 1280.0, "px").unwrap(),
            "clamp(16px, 13.3333px + 0.8333vw, 24px)"
        );
    }

    #[test]
    fn test_spacing_step() {
        assert_eq!(
            clamp(8.0, 16.0, 320.0, 1280.0, "px").unwrap(),
            "clamp(8px, 5.3333px + 0.8333vw, 16px)"
        );
    }

    #[test]
    fn test_exact_coefficients() {
        assert_eq!(
            clamp(16.0, 32.0, 400.0, 1200.0, "px").unwrap(),
            "clamp(16px, 8px + 2vw, 32px)"
        );
    }

    #[test]
    fn test_rem_unit() {
        assert_eq!(
            clamp(1.0, 1.5, 20.0, 80.0, "rem").unwrap(),
            "clamp(1rem, 0.8333rem + 0.8333vw, 1.5rem)"
        );
    }

    #[test]
    fn test_shrinking_value() {
        // Larger at small viewports: bounds swap, slope term is subtracted.
        assert_eq!(
            clamp(24.0, 16.0, 320.0, 1280.0, "px").unwrap(),
            "clamp(16px, 26.6667px - 0.8333vw, 24px)"
        );
    }

    #[test]
    fn test_negative_intercept() {
        assert_eq!(
            clamp(10.0, 100.0, 400.0, 1000.0, "px").unwrap(),
            "clamp(10px, -50px + 15vw, 100px)"
        );
    }

    // =========================================================================
    // Edge cases
    // =========================================================================

    #[test]
    fn test_equal_bounds_is_scalar() {
        assert_eq!(clamp(16.0, 16.0, 320.0, 1280.0, "px").unwrap(), "16px");
    }

    #[test]
    fn test_bounds_equal_after_rounding_is_scalar() {
        assert_eq!(clamp(16.0, 16.00001, 320.0, 1280.0, "px").unwrap(), "16px");
        assert_eq!(clamp(16.00004, 16.0, 320.0, 1280.0, "px").unwrap(), "16px");
    }

    #[test]
    fn test_equal_viewports_rejected() {
        assert_eq!(
            clamp(16.0, 24.0, 768.0, 768.0, "px").unwrap_err(),
            FluidError::InvalidViewportRange {
                min_viewport: 768.0,
                max_viewport: 768.0,
            }
        );
    }

    #[test]
    fn test_equal_viewports_rejected_even_for_equal_bounds() {
        assert!(clamp(16.0, 16.0, 768.0, 768.0, "px").is_err());
    }

    #[test]
    fn test_inverted_viewports_rejected() {
        assert!(clamp(16.0, 24.0, 1280.0, 320.0, "px").is_err());
    }

    #[test]
    fn test_nan_viewport_rejected() {
        assert!(clamp(16.0, 24.0, f64::NAN, 1280.0, "px").is_err());
    }

    // =========================================================================
    // Line properties
    // =========================================================================

    #[test]
    fn test_line_hits_both_bounds() {
        let range = FluidRange::new(16.0, 24.0, 320.0, 1280.0);
        let at = |vp: f64| range.intercept() + range.slope() * vp;
        assert!((at(320.0) - 16.0).abs() < 1e-9);
        assert!((at(1280.0) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_fluid_token() {
        let token = FluidToken {
            min_value: 8.0,
            max_value: 16.0,
            min_viewport: 320.0,
            max_viewport: 1280.0,
            unit: "px".into(),
        };
        assert_eq!(
            FluidRange::from(&token),
            FluidRange::new(8.0, 16.0, 320.0, 1280.0)
        );
    }

    #[test]
    fn test_format_coefficient() {
        assert_eq!(format_coefficient(13.333333), "13.3333");
        assert_eq!(format_coefficient(0.83336), "0.8334");
        assert_eq!(format_coefficient(2.00000001), "2");
        assert_eq!(format_coefficient(-0.00001), "0");
    }
}
