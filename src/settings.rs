use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::format::ValueFormatter;
use crate::scale::Scale;

pub const DEFAULT_FROM: f64 = 40.0;
pub const DEFAULT_TO: f64 = 60.0;
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_HEIGHT: f64 = 75.0;
pub const DEFAULT_WIDTH: f64 = 200.0;

/// Spacing of the default axis ticks, in domain units.
pub const DEFAULT_TICK_SPACING: f64 = 10.0;
/// Past this many default ticks the axis switches to nice ticks instead.
const MAX_DEFAULT_TICKS: usize = 1000;
const NICE_TICK_COUNT: usize = 10;

/// A marked position along the axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub is_labeled: bool,
}

impl AxisTick {
    pub fn new(value: f64, is_labeled: bool) -> Self {
        Self { value, is_labeled }
    }

    pub fn labeled(value: f64) -> Self {
        Self::new(value, true)
    }

    pub fn unlabeled(value: f64) -> Self {
        Self::new(value, false)
    }
}

/// One tick every [`DEFAULT_TICK_SPACING`] units from `scale.min()`; every other
/// tick carries a label.
pub fn default_ticks(scale: &Scale) -> Vec<AxisTick> {
    let steps = (scale.range() / DEFAULT_TICK_SPACING).floor();
    if steps > MAX_DEFAULT_TICKS as f64 {
        return scale
            .nice_ticks(NICE_TICK_COUNT)
            .into_iter()
            .map(AxisTick::labeled)
            .collect();
    }

    (0..=steps as usize)
        .map(|i| AxisTick::new(scale.min() + i as f64 * DEFAULT_TICK_SPACING, i % 2 == 0))
        .collect()
}

/// Creation-time overrides for a slider. Anything left as `None` uses the default.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub step_size: Option<f64>,
    #[serde(skip)]
    pub formatter: Option<ValueFormatter>,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub axis_ticks: Option<Vec<AxisTick>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from JSON. The formatter cannot be expressed in JSON and is
    /// always left unset.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("failed to parse slider settings")
    }

    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn with_range(mut self, from: f64, to: f64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_axis_ticks(mut self, ticks: Vec<AxisTick>) -> Self {
        self.axis_ticks = Some(ticks);
        self
    }
}
