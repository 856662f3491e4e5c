//! Drawable description of a slider, derived from the model.

use crate::drag::Handle;
use crate::model::SliderModel;
use crate::resolver::resolve;

/// Highlighted part of the track, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSpan {
    pub start: f64,
    pub end: f64,
}

impl BarSpan {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    /// Position along the track, in percent.
    pub position: f64,
    pub label: Option<String>,
}

/// Everything a renderer needs to draw one frame. Positions are percentages of
/// the track width.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderProjection {
    pub from_handle: f64,
    pub to_handle: f64,
    pub bar: BarSpan,
    pub ticks: Vec<TickMark>,
    pub from_label: String,
    pub to_label: String,
    pub dragging: Option<Handle>,
    pub width: f64,
    pub height: f64,
}

impl RenderProjection {
    pub fn handle_position(&self, handle: Handle) -> f64 {
        match handle {
            Handle::From => self.from_handle,
            Handle::To => self.to_handle,
        }
    }
}

/// Projects the model, using live resolved values so a drag in progress shows.
pub fn render(model: &SliderModel) -> RenderProjection {
    let scale = model.scale();
    let formatter = model.formatter();
    let from = resolve(model, Handle::From);
    let to = resolve(model, Handle::To);
    let from_handle = scale.to_percent(from);
    let to_handle = scale.to_percent(to);

    let ticks = model
        .axis_ticks()
        .iter()
        .map(|tick| TickMark {
            value: tick.value,
            position: scale.to_percent(tick.value),
            label: tick.is_labeled.then(|| formatter.format(tick.value)),
        })
        .collect();

    RenderProjection {
        from_handle,
        to_handle,
        bar: BarSpan {
            start: from_handle,
            end: to_handle,
        },
        ticks,
        from_label: formatter.format(from),
        to_label: formatter.format(to),
        dragging: model.drag_state().handle(),
        width: model.width(),
        height: model.height(),
    }
}
