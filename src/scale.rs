use d3rs::scale::{LinearScale, Scale as D3Scale};

use crate::error::ConfigurationError;

/// Linear mapping between domain values and track percentages (0..=100).
///
/// Built once from the domain bounds; there is no way to change the bounds of an
/// existing scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    min: f64,
    max: f64,
    range: f64,
}

impl Scale {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigurationError> {
        let range = max - min;
        // Also rejects NaN bounds and infinite spans.
        if !(min < max) || !range.is_finite() {
            return Err(ConfigurationError::InvalidDomain { min, max });
        }
        Ok(Self { min, max, range })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the domain, `max - min`.
    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn to_percent(&self, value: f64) -> f64 {
        (value - self.min) / self.range * 100.0
    }

    /// Round-number tick values covering the domain, roughly `count` of them.
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        LinearScale::new()
            .domain(self.min, self.max)
            .range(0.0, 100.0)
            .ticks(count)
    }
}
