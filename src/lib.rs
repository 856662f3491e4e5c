//! gpui_range_slider: a two-handle range slider model with a GPUI view on top

pub mod drag;
pub mod error;
pub mod format;
pub mod model;
pub mod projection;
pub mod resolver;
pub mod scale;
pub mod settings;
pub mod slider_view;
pub mod theme;
pub mod update;
pub mod utils;
pub mod view_controller;

pub use drag::{DragState, DragTrack, Handle, PointerPosition};
pub use error::ConfigurationError;
pub use format::{TimeUnit, ValueFormatter};
pub use model::{activate, SliderModel};
pub use projection::{render, BarSpan, RenderProjection, TickMark};
pub use resolver::{apply_step, resolve, resolve_from, resolve_to};
pub use scale::Scale;
pub use settings::{AxisTick, Settings};
pub use slider_view::{RangeSliderView, SliderChanged};
pub use update::{subscriptions_needed, update, SliderEvent, Subscriptions};
