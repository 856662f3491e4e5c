//! Live from/to values during a drag.
//!
//! Everything here is recomputed from the model on demand: the renderer calls it
//! on every pointer move and the reducer calls it once more at commit.

use crate::drag::{DragTrack, Handle};
use crate::model::SliderModel;

/// Live value of the upper handle.
///
/// Clamped to `[from, max]` using the committed `from`, so the handles never cross.
pub fn resolve_to(model: &SliderModel) -> f64 {
    match model.drag_state.track_for(Handle::To) {
        None => model.to,
        Some(track) => {
            let candidate = apply_step(model.step_size(), model.to, drag_delta(model, track));
            clamp(candidate, model.from, model.max())
        }
    }
}

/// Live value of the lower handle, clamped to `[min, to]`.
pub fn resolve_from(model: &SliderModel) -> f64 {
    match model.drag_state.track_for(Handle::From) {
        None => model.from,
        Some(track) => {
            let candidate = apply_step(model.step_size(), model.from, drag_delta(model, track));
            clamp(candidate, model.min(), model.to)
        }
    }
}

/// Live value of either handle; what the renderer draws.
pub fn resolve(model: &SliderModel, handle: Handle) -> f64 {
    match handle {
        Handle::From => resolve_from(model),
        Handle::To => resolve_to(model),
    }
}

/// Adds `delta` to `base`, snapping the sum to the nearest multiple of `step_size`.
pub fn apply_step(step_size: Option<f64>, base: f64, delta: f64) -> f64 {
    match step_size {
        Some(step) => step * ((base + delta) / step).round(),
        None => base + delta,
    }
}

/// Pointer travel converted to domain units. A track without usable width
/// contributes no movement.
fn drag_delta(model: &SliderModel, track: &DragTrack) -> f64 {
    let width = model.width();
    if !(width > 0.0) || !width.is_finite() {
        return 0.0;
    }
    let delta = track.dx() * model.scale().range() / width;
    if delta.is_finite() {
        delta
    } else {
        0.0
    }
}

fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}
