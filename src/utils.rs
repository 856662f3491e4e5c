use gpui::{Pixels, Point};

use crate::drag::PointerPosition;

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Window-space GPUI point as a slider pointer position.
pub fn pointer_position(point: Point<Pixels>) -> PointerPosition {
    PointerPosition::new(point.x.as_f32() as f64, point.y.as_f32() as f64)
}
