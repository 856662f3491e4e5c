use crate::drag::Handle;
use crate::projection::RenderProjection;

/// Pixel-space interaction logic for the slider, kept apart from the GPUI view
/// so it can be tested without a window.
pub struct SliderController;

impl SliderController {
    /// Converts a track percentage to a pixel offset from the left edge of the track.
    pub fn percent_to_px(percent: f64, track_width: f32) -> f32 {
        if track_width <= 0.0 {
            return 0.0;
        }
        let w = track_width as f64;
        (w * percent / 100.0).clamp(0.0, w) as f32
    }

    /// Picks the handle under `local_x` (pixels from the left edge of the track).
    ///
    /// Returns `None` when neither handle is within `tolerance` pixels. Stacked
    /// handles are split by the side the pointer is on; exactly on top of them,
    /// the handle that still has room to move wins.
    pub fn handle_at(
        projection: &RenderProjection,
        local_x: f32,
        track_width: f32,
        tolerance: f32,
    ) -> Option<Handle> {
        let from_px = Self::percent_to_px(projection.from_handle, track_width);
        let to_px = Self::percent_to_px(projection.to_handle, track_width);
        let d_from = (local_x - from_px).abs();
        let d_to = (local_x - to_px).abs();

        if d_from.min(d_to) > tolerance {
            return None;
        }

        if (to_px - from_px).abs() < f32::EPSILON {
            return Some(if local_x < from_px {
                Handle::From
            } else if local_x > to_px {
                Handle::To
            } else if projection.to_handle >= 100.0 {
                Handle::From
            } else {
                Handle::To
            });
        }

        if d_from <= d_to {
            Some(Handle::From)
        } else {
            Some(Handle::To)
        }
    }
}
