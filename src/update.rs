use serde::{Deserialize, Serialize};

use crate::drag::{DragState, Handle, PointerPosition};
use crate::model::SliderModel;
use crate::resolver::{resolve_from, resolve_to};

/// Input accepted by [`update`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    PointerDown(Handle, PointerPosition),
    PointerMove(PointerPosition),
    PointerUp(PointerPosition),
    /// Ends the current drag without committing it.
    Cancel,
}

/// Global pointer listeners the host must keep attached for this model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Subscriptions {
    pub pointer_move: bool,
    pub pointer_up: bool,
}

impl Subscriptions {
    pub fn any(&self) -> bool {
        self.pointer_move || self.pointer_up
    }
}

/// Applies one event and returns the next model.
pub fn update(mut model: SliderModel, event: SliderEvent) -> SliderModel {
    match event {
        SliderEvent::PointerDown(handle, pos) => {
            if !model.drag_state.is_dragging() {
                tracing::debug!(?handle, x = pos.x, "slider drag started");
            }
            model.drag_state = model.drag_state.pointer_down(handle, pos);
        }
        SliderEvent::PointerMove(pos) => {
            if model.drag_state.is_dragging() {
                tracing::trace!(x = pos.x, "slider drag moved");
            }
            model.drag_state = model.drag_state.pointer_move(pos);
        }
        SliderEvent::PointerUp(pos) => {
            if !model.drag_state.is_dragging() {
                return model;
            }
            model.drag_state = model.drag_state.pointer_move(pos);
            // Both values are resolved against the same pre-commit model.
            let to = resolve_to(&model);
            let from = resolve_from(&model);
            model.to = to;
            model.from = from;
            model.drag_state = DragState::Idle;
            tracing::debug!(from, to, "slider drag committed");
        }
        SliderEvent::Cancel => {
            if model.drag_state.is_dragging() {
                tracing::debug!("slider drag cancelled");
            }
            model.drag_state = DragState::Idle;
        }
    }
    model
}

/// Pointer listeners are needed exactly while a handle is being dragged.
pub fn subscriptions_needed(model: &SliderModel) -> Subscriptions {
    let dragging = model.drag_state().is_dragging();
    Subscriptions {
        pointer_move: dragging,
        pointer_up: dragging,
    }
}
