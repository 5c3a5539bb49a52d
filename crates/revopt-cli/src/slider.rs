use revopt_core::{Price, RevoptError, RevoptResult};
use serde::Serialize;

/// Bounded, stepped input for the proposed price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            min: 500.0,
            max: 5000.0,
            step: 10.0,
        }
    }
}

impl Slider {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Initial position for a recommended price: clamped, not snapped.
    pub fn clamp_default(&self, recommended: Price) -> Price {
        recommended.clamp(Price(self.min), Price(self.max))
    }

    /// Clamp into bounds and move to the nearest step counted from `min`.
    ///
    /// NaN and infinities are rejected rather than clamped.
    pub fn snap(&self, value: Price) -> RevoptResult<Price> {
        if !value.is_finite() {
            return Err(RevoptError::Validation(format!(
                "price must be a finite number, got {}",
                value.value()
            )));
        }
        let clamped = value.value().clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        Ok(Price((self.min + steps * self.step).min(self.max)))
    }
}
