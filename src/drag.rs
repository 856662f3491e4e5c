//! Drag state machine for the two slider handles.

use serde::{Deserialize, Serialize};

/// One of the two draggable handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    From,
    To,
}

/// Pointer position in pixels, relative to any fixed origin.
///
/// Only horizontal deltas matter to the slider; `y` is carried so hosts can pass
/// raw pointer coordinates through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer positions recorded for an in-flight drag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragTrack {
    pub start: PointerPosition,
    pub current: PointerPosition,
}

impl DragTrack {
    fn at(pos: PointerPosition) -> Self {
        Self {
            start: pos,
            current: pos,
        }
    }

    /// Horizontal pointer travel since the drag started, in pixels.
    pub fn dx(&self) -> f64 {
        self.current.x - self.start.x
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    DraggingFrom(DragTrack),
    DraggingTo(DragTrack),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn handle(&self) -> Option<Handle> {
        match self {
            Self::Idle => None,
            Self::DraggingFrom(_) => Some(Handle::From),
            Self::DraggingTo(_) => Some(Handle::To),
        }
    }

    /// Track of the drag on `handle`, if that handle is the one being dragged.
    pub fn track_for(&self, handle: Handle) -> Option<&DragTrack> {
        match (self, handle) {
            (Self::DraggingFrom(track), Handle::From) | (Self::DraggingTo(track), Handle::To) => {
                Some(track)
            }
            _ => None,
        }
    }

    /// Starts a drag on `handle`. Ignored while another drag is in progress.
    pub fn pointer_down(self, handle: Handle, pos: PointerPosition) -> Self {
        match self {
            Self::Idle => match handle {
                Handle::From => Self::DraggingFrom(DragTrack::at(pos)),
                Handle::To => Self::DraggingTo(DragTrack::at(pos)),
            },
            dragging => dragging,
        }
    }

    pub fn pointer_move(self, pos: PointerPosition) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::DraggingFrom(track) => Self::DraggingFrom(DragTrack {
                current: pos,
                ..track
            }),
            Self::DraggingTo(track) => Self::DraggingTo(DragTrack {
                current: pos,
                ..track
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_while_dragging_keeps_first_drag() {
        let p = PointerPosition::new(10.0, 0.0);
        let state = DragState::Idle
            .pointer_down(Handle::From, p)
            .pointer_down(Handle::To, PointerPosition::new(50.0, 0.0));
        assert_eq!(state.handle(), Some(Handle::From));
        assert_eq!(state.track_for(Handle::From).map(|t| t.start), Some(p));
    }

    #[test]
    fn move_preserves_start() {
        let state = DragState::Idle
            .pointer_down(Handle::To, PointerPosition::new(10.0, 5.0))
            .pointer_move(PointerPosition::new(30.0, 8.0))
            .pointer_move(PointerPosition::new(25.0, 2.0));
        let track = state.track_for(Handle::To).copied().unwrap();
        assert_eq!(track.start.x, 10.0);
        assert_eq!(track.dx(), 15.0);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let state = DragState::Idle.pointer_move(PointerPosition::new(3.0, 3.0));
        assert_eq!(state, DragState::Idle);
    }
}
