// RangeSliderView implementation

use crate::drag::Handle;
use crate::model::SliderModel;
use crate::projection::{self, RenderProjection};
use crate::theme::SliderTheme;
use crate::update::{subscriptions_needed, update, SliderEvent};
use crate::utils::{pointer_position, PixelsExt};
use crate::view_controller::SliderController;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

/// How far from a handle's centre, in pixels, a press still grabs it.
const HANDLE_HIT_TOLERANCE: f32 = 10.0;
const TICK_LENGTH: f32 = 6.0;

/// Emitted whenever a drag is committed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderChanged {
    pub from: f64,
    pub to: f64,
}

/// GPUI host for a [`SliderModel`].
///
/// Pointer-down is taken from the slider's own element. Moves and releases are
/// taken from the whole window, and only while a handle is being dragged.
pub struct RangeSliderView {
    model: SliderModel,
    pub theme: SliderTheme,

    track_bounds: Rc<RefCell<Bounds<Pixels>>>,
    listening: bool,
}

impl EventEmitter<SliderChanged> for RangeSliderView {}

impl RangeSliderView {
    pub fn new(model: SliderModel, _cx: &mut Context<Self>) -> Self {
        Self {
            model,
            theme: SliderTheme::default(),
            track_bounds: Rc::new(RefCell::new(Bounds::default())),
            listening: false,
        }
    }

    pub fn model(&self) -> &SliderModel {
        &self.model
    }

    pub fn set_model(&mut self, model: SliderModel, cx: &mut Context<Self>) {
        self.model = model;
        self.sync_listeners();
        cx.notify();
    }

    /// Whether window-wide pointer listeners are currently wanted.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Drops the drag in progress, keeping the committed values.
    pub fn cancel_drag(&mut self, cx: &mut Context<Self>) {
        self.dispatch(SliderEvent::Cancel, cx);
    }

    pub fn dispatch(&mut self, event: SliderEvent, cx: &mut Context<Self>) {
        let was_dragging = self.model.drag_state().is_dragging();
        self.model = update(self.model.clone(), event);
        self.sync_listeners();

        if was_dragging && matches!(event, SliderEvent::PointerUp(_)) {
            cx.emit(SliderChanged {
                from: self.model.from(),
                to: self.model.to(),
            });
        }
        cx.notify();
    }

    fn sync_listeners(&mut self) {
        let wanted = subscriptions_needed(&self.model).any();
        if wanted != self.listening {
            if wanted {
                tracing::trace!("attaching window pointer listeners");
            } else {
                tracing::trace!("releasing window pointer listeners");
            }
            self.listening = wanted;
        }
    }

    fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let bounds = *self.track_bounds.borrow();
        if bounds.is_empty() {
            return;
        }

        let local_x = (event.position.x - bounds.origin.x).as_f32();
        let projection = projection::render(&self.model);
        if let Some(handle) = SliderController::handle_at(
            &projection,
            local_x,
            bounds.size.width.as_f32(),
            HANDLE_HIT_TOLERANCE,
        ) {
            self.dispatch(
                SliderEvent::PointerDown(handle, pointer_position(event.position)),
                cx,
            );
        }
    }

    fn handle_global_mouse_move(&mut self, event: &MouseMoveEvent, cx: &mut Context<Self>) {
        if !self.model.drag_state().is_dragging() {
            return;
        }
        let pos = pointer_position(event.position);
        // Button released outside the window: the release was never delivered.
        if event.pressed_button != Some(MouseButton::Left) {
            self.dispatch(SliderEvent::PointerUp(pos), cx);
        } else {
            self.dispatch(SliderEvent::PointerMove(pos), cx);
        }
    }

    fn handle_global_mouse_up(&mut self, event: &MouseUpEvent, cx: &mut Context<Self>) {
        if event.button == MouseButton::Left && self.model.drag_state().is_dragging() {
            self.dispatch(SliderEvent::PointerUp(pointer_position(event.position)), cx);
        }
    }

    /// Registered during paint, so the listeners live for exactly one frame and
    /// disappear on the first frame after the drag ends.
    fn attach_pointer_listeners(view: &Entity<Self>, window: &mut Window) {
        let move_view = view.clone();
        window.on_mouse_event(move |event: &MouseMoveEvent, phase, _window, cx| {
            if phase.bubble() {
                move_view.update(cx, |this, cx| this.handle_global_mouse_move(event, cx));
            }
        });

        let up_view = view.clone();
        window.on_mouse_event(move |event: &MouseUpEvent, phase, _window, cx| {
            if phase.bubble() {
                up_view.update(cx, |this, cx| this.handle_global_mouse_up(event, cx));
            }
        });
    }

    fn paint_slider(
        projection: &RenderProjection,
        theme: &SliderTheme,
        bounds: Bounds<Pixels>,
        window: &mut Window,
        cx: &mut App,
    ) {
        let width = bounds.size.width.as_f32();
        let track_y = bounds.origin.y + theme.handle_size;
        let x_at =
            |percent: f64| bounds.origin.x + px(SliderController::percent_to_px(percent, width));

        // 1. Track and highlighted bar
        let track = Bounds::new(
            point(bounds.origin.x, track_y - theme.track_thickness / 2.0),
            size(bounds.size.width, theme.track_thickness),
        );
        window.paint_quad(gpui::fill(track, theme.track));

        let bar_left = x_at(projection.bar.start);
        let bar_right = x_at(projection.bar.end);
        let bar = Bounds::new(
            point(bar_left, track.origin.y),
            size(bar_right - bar_left, theme.track_thickness),
        );
        window.paint_quad(gpui::fill(bar, theme.bar));

        // 2. Ticks and labels
        let tick_top = track_y + theme.handle_size / 2.0 + px(2.0);
        let font_size = theme.tick_label_size;
        let font = TextStyle::default().font();

        for tick in &projection.ticks {
            let x = x_at(tick.position);
            window.paint_quad(gpui::fill(
                Bounds::new(point(x, tick_top), size(px(1.0), px(TICK_LENGTH))),
                theme.tick,
            ));

            let Some(text) = &tick.label else {
                continue;
            };
            let run = TextRun {
                len: text.len(),
                font: font.clone(),
                color: theme.tick_label,
                background_color: None,
                underline: None,
                strikethrough: None,
            };
            if let Ok(lines) =
                window
                    .text_system()
                    .shape_text(text.clone().into(), font_size, &[run], None, None)
            {
                for line in lines {
                    let origin =
                        point(x - line.width() / 2.0, tick_top + px(TICK_LENGTH + 2.0));
                    let _ = line.paint(origin, font_size, TextAlign::Left, None, window, cx);
                }
            }
        }

        // 3. Handles, active one last so it stays on top
        let mut handles = [Handle::From, Handle::To];
        if projection.dragging == Some(Handle::From) {
            handles.reverse();
        }
        for handle in handles {
            let centre = x_at(projection.handle_position(handle));
            let color = if projection.dragging == Some(handle) {
                theme.handle_active
            } else {
                theme.handle
            };
            let knob = Bounds::new(
                point(centre - theme.handle_size / 2.0, track_y - theme.handle_size / 2.0),
                size(theme.handle_size, theme.handle_size),
            );
            window.paint_quad(
                gpui::fill(knob, color).corner_radii(Corners::all(theme.handle_size / 2.0)),
            );
        }
    }
}

impl Render for RangeSliderView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let projection = projection::render(&self.model);
        let theme = self.theme.clone();
        let bounds_rc = self.track_bounds.clone();
        let dragging = self.listening;
        let view = cx.entity();

        div()
            .w(px(projection.width as f32))
            .h(px(projection.height as f32))
            .bg(theme.background)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .child(
                canvas(
                    |_bounds, _window, _cx| {},
                    move |bounds, (), window, cx| {
                        *bounds_rc.borrow_mut() = bounds;
                        if dragging {
                            Self::attach_pointer_listeners(&view, window);
                        }
                        Self::paint_slider(&projection, &theme, bounds, window, cx);
                    },
                )
                .size_full(),
            )
    }
}
