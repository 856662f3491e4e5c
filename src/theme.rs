use gpui::*;

#[derive(Clone, Debug)]
pub struct SliderTheme {
    pub background: Hsla,
    pub track: Hsla,
    pub bar: Hsla,
    pub handle: Hsla,
    pub handle_active: Hsla,
    pub tick: Hsla,
    pub tick_label: Hsla,
    pub tick_label_size: Pixels,
    pub track_thickness: Pixels,
    pub handle_size: Pixels,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self {
            background: gpui::black(),
            track: gpui::white().alpha(0.2),
            bar: gpui::blue(),
            handle: gpui::white().alpha(0.9),
            handle_active: gpui::white(),
            tick: gpui::white().alpha(0.4),
            tick_label: gpui::white().alpha(0.8),
            tick_label_size: px(11.0),
            track_thickness: px(4.0),
            handle_size: px(14.0),
        }
    }
}
