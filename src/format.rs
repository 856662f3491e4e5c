//! Value formatters for tick and handle labels.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    fn to_seconds(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value,
            TimeUnit::Milliseconds => value / 1000.0,
            TimeUnit::Microseconds => value / 1_000_000.0,
            TimeUnit::Nanoseconds => value / 1_000_000_000.0,
        }
    }
}

/// Turns a slider value into display text.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl ValueFormatter {
    pub fn new(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Shortest plain rendering: `40.0` becomes `"40"`, `2.5` stays `"2.5"`.
    pub fn numeric() -> Self {
        Self::new(|value| format!("{}", value))
    }

    /// Like [`numeric`](Self::numeric), but rounded to the decimals of `step`
    /// so snapped values such as `0.1 * 3.0` print as `"0.3"`.
    pub fn for_step(step: f64) -> Self {
        let scale = 10f64.powi(step_decimals(step));
        // `+ 0.0` turns a rounded -0 into 0.
        Self::new(move |value| format!("{}", (value * scale).round() / scale + 0.0))
    }

    pub fn fixed(decimals: usize) -> Self {
        Self::new(move |value| format!("{:.*}", decimals, value))
    }

    /// Formats values as UTC timestamps. The granularity follows the span of
    /// `[min, max]` so that neighbouring ticks stay distinguishable.
    pub fn timestamp(unit: TimeUnit, min: f64, max: f64) -> Self {
        let format = DateFormat::for_span(unit.to_seconds((max - min).abs()));
        Self::new(move |value| format_timestamp(value, format, unit))
    }

    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::numeric()
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// Fractional digits needed to write `step`, capped at 10.
fn step_decimals(step: f64) -> i32 {
    const MAX_DECIMALS: i32 = 10;
    (0..MAX_DECIMALS)
        .find(|&decimals| {
            let shifted = step * 10f64.powi(decimals);
            (shifted - shifted.round()).abs() <= 1e-9 * shifted.abs().max(1.0)
        })
        .unwrap_or(MAX_DECIMALS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

impl DateFormat {
    fn for_span(span_sec: f64) -> Self {
        const MINUTE: f64 = 60.0;
        const HOUR: f64 = 3600.0;
        const DAY: f64 = 24.0 * HOUR;
        const MONTH: f64 = 30.0 * DAY;
        const YEAR: f64 = 365.0 * DAY;

        if span_sec > YEAR * 2.0 {
            Self::Year
        } else if span_sec > MONTH * 2.0 {
            Self::MonthYear
        } else if span_sec > DAY * 1.5 {
            Self::DayMonth
        } else if span_sec > MINUTE * 5.0 {
            Self::HourMin
        } else {
            Self::HourMinSec
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::MonthYear => "%b %Y",
            Self::DayMonth => "%d %b",
            Self::HourMin => "%H:%M",
            Self::HourMinSec => "%H:%M:%S",
        }
    }
}

fn format_timestamp(value: f64, format: DateFormat, unit: TimeUnit) -> String {
    let seconds = unit.to_seconds(value) as i64;
    match Utc.timestamp_opt(seconds, 0) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.format(format.pattern()).to_string()
        }
        chrono::LocalResult::None => format!("{:.2}", value),
    }
}
