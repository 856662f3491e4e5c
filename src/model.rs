use crate::drag::DragState;
use crate::error::ConfigurationError;
use crate::format::ValueFormatter;
use crate::resolver::apply_step;
use crate::scale::Scale;
use crate::settings::{
    default_ticks, AxisTick, Settings, DEFAULT_FROM, DEFAULT_HEIGHT, DEFAULT_MAX, DEFAULT_MIN,
    DEFAULT_TO, DEFAULT_WIDTH,
};

/// Complete slider state: configuration plus committed values and the drag in flight.
///
/// Only [`activate`] creates a model and only [`crate::update`] changes one, which
/// keeps `min <= from <= to <= max` true whenever no drag is running.
#[derive(Clone, Debug)]
pub struct SliderModel {
    pub(crate) from: f64,
    pub(crate) to: f64,
    pub(crate) drag_state: DragState,
    scale: Scale,
    step_size: Option<f64>,
    formatter: ValueFormatter,
    height: f64,
    width: f64,
    axis_ticks: Vec<AxisTick>,
}

impl SliderModel {
    /// Committed lower value. Mid-drag, see [`crate::resolve_from`] for the live one.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Committed upper value. Mid-drag, see [`crate::resolve_to`] for the live one.
    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn min(&self) -> f64 {
        self.scale.min()
    }

    pub fn max(&self) -> f64 {
        self.scale.max()
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag_state
    }

    pub fn step_size(&self) -> Option<f64> {
        self.step_size
    }

    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn axis_ticks(&self) -> &[AxisTick] {
        &self.axis_ticks
    }
}

/// Builds a model from settings, filling in defaults for every absent field.
pub fn activate(settings: Settings) -> Result<SliderModel, ConfigurationError> {
    let min = settings.min.unwrap_or(DEFAULT_MIN);
    let max = settings.max.unwrap_or(DEFAULT_MAX);
    let scale = Scale::new(min, max)?;

    if let Some(step) = settings.step_size {
        if !(step > 0.0) || !step.is_finite() {
            return Err(ConfigurationError::InvalidStepSize(step));
        }
    }

    let from = settings.from.unwrap_or(DEFAULT_FROM);
    let to = settings.to.unwrap_or(DEFAULT_TO);
    check_in_domain("from", from, &scale)?;
    check_in_domain("to", to, &scale)?;
    if from > to {
        return Err(ConfigurationError::CrossedHandles { from, to });
    }
    // Start on the step grid, otherwise the first release moves an untouched handle.
    let from = snap_to_grid(settings.step_size, from, &scale);
    let to = snap_to_grid(settings.step_size, to, &scale);

    let axis_ticks = settings
        .axis_ticks
        .unwrap_or_else(|| default_ticks(&scale));

    tracing::debug!(min, max, from, to, ticks = axis_ticks.len(), "range slider activated");

    Ok(SliderModel {
        from,
        to,
        drag_state: DragState::Idle,
        scale,
        step_size: settings.step_size,
        formatter: settings
            .formatter
            .unwrap_or_else(|| default_formatter(settings.step_size)),
        height: settings.height.unwrap_or(DEFAULT_HEIGHT),
        width: settings.width.unwrap_or(DEFAULT_WIDTH),
        axis_ticks,
    })
}

fn snap_to_grid(step_size: Option<f64>, value: f64, scale: &Scale) -> f64 {
    apply_step(step_size, value, 0.0).max(scale.min()).min(scale.max())
}

fn default_formatter(step_size: Option<f64>) -> ValueFormatter {
    match step_size {
        Some(step) => ValueFormatter::for_step(step),
        None => ValueFormatter::numeric(),
    }
}

fn check_in_domain(name: &'static str, value: f64, scale: &Scale) -> Result<(), ConfigurationError> {
    if scale.min() <= value && value <= scale.max() {
        Ok(())
    } else {
        Err(ConfigurationError::ValueOutOfDomain {
            name,
            value,
            min: scale.min(),
            max: scale.max(),
        })
    }
}
