use eyre::{Result, WrapErr};
use gpui::prelude::*;
use gpui::*;
use gpui_range_slider::{
    activate, AxisTick, RangeSliderView, Settings, SliderChanged, SliderModel, TimeUnit,
    ValueFormatter,
};

struct DemoApp {
    percent: Entity<RangeSliderView>,
    hours: Entity<RangeSliderView>,
    last_change: Option<SliderChanged>,
}

impl DemoApp {
    fn new(percent: SliderModel, hours: SliderModel, cx: &mut Context<Self>) -> Self {
        let percent = cx.new(|cx| RangeSliderView::new(percent, cx));
        let hours = cx.new(|cx| RangeSliderView::new(hours, cx));

        for slider in [&percent, &hours] {
            cx.subscribe(slider, |this, _slider, event: &SliderChanged, cx| {
                this.last_change = Some(*event);
                cx.notify();
            })
            .detach();
        }

        Self {
            percent,
            hours,
            last_change: None,
        }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let status = match self.last_change {
            Some(change) => format!("last commit: {} .. {}", change.from, change.to),
            None => "drag a handle".to_string(),
        };

        div()
            .size_full()
            .p_4()
            .gap_4()
            .flex()
            .flex_col()
            .bg(gpui::black())
            .text_color(gpui::white())
            .child(self.percent.clone())
            .child(self.hours.clone())
            .child(status)
    }
}

fn main() -> Result<()> {
    let percent = activate(Settings::new().with_step_size(5.0).with_size(400.0, 60.0))
        .wrap_err("percent slider settings")?;

    // One day, in seconds, ticked every three hours.
    let day = 86_400.0;
    let ticks = (0..=8)
        .map(|i| AxisTick::new(i as f64 * 3.0 * 3600.0, i % 2 == 0))
        .collect();
    let hours = activate(
        Settings::new()
            .with_domain(0.0, day)
            .with_range(8.0 * 3600.0, 17.0 * 3600.0)
            .with_step_size(900.0)
            .with_size(400.0, 60.0)
            .with_axis_ticks(ticks)
            .with_formatter(ValueFormatter::timestamp(TimeUnit::Seconds, 0.0, day)),
    )
    .wrap_err("hours slider settings")?;

    Application::new().run(move |cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(percent, hours, cx))
        })
        .expect("failed to open window");
    });
    Ok(())
}
