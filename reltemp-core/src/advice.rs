//! Rule-based clothing advice.
//!
//! Rules are evaluated independently, in a fixed order, and every rule that
//! fires contributes one message. If none fires, a single default message is
//! returned so the list is never empty.

use crate::model::{HighLow, TemperaturePoint};

pub const WIDE_SWING: &str = "wide intraday swing — wear layers";
pub const COLD_MORNING_EVENING: &str = "mornings/evenings cold — bring a jacket";
pub const COLDER_THAN_USUAL: &str = "colder than usual — dress warmly";
pub const WARM_DAYTIME: &str = "daytime will be warm — bring a light layer to adjust";
pub const WARMER_THAN_USUAL: &str = "warmer than usual — light clothing is fine";
pub const RISING: &str = "temperature will rise — wear adjustable clothing";
pub const NORMAL: &str = "normal clothing will be comfortable today";

/// Intraday range above which layers are recommended.
const WIDE_RANGE: f64 = 10.0;
/// Intraday range above which the colder/warmer rules pick their layered message.
const LAYERED_RANGE: f64 = 8.0;
/// Deviation from the recent average high or low that counts as unusual.
const UNUSUAL_DIFF: f64 = 3.0;
/// Gap between today's high and now that counts as a rising day.
const RISE_EXPECTED: f64 = 8.0;

/// Advice for today, given today's extremes, the recent averaged extremes and the current reading.
pub fn clothing_advice(today: HighLow, recent: HighLow, current: TemperaturePoint) -> Vec<String> {
    let mut advice = Vec::new();

    let range = today.range();
    let high_diff = today.high - recent.high;
    let low_diff = today.low - recent.low;

    if range > WIDE_RANGE {
        advice.push(WIDE_SWING);
    }

    // Colder and warmer are separate checks; a day with lower lows and higher highs gets both.
    if high_diff < -UNUSUAL_DIFF || low_diff < -UNUSUAL_DIFF {
        advice.push(if range > LAYERED_RANGE {
            COLD_MORNING_EVENING
        } else {
            COLDER_THAN_USUAL
        });
    }

    if high_diff > UNUSUAL_DIFF || low_diff > UNUSUAL_DIFF {
        advice.push(if range > LAYERED_RANGE {
            WARM_DAYTIME
        } else {
            WARMER_THAN_USUAL
        });
    }

    if today.high - current > RISE_EXPECTED {
        advice.push(RISING);
    }

    if advice.is_empty() {
        advice.push(NORMAL);
    }

    advice.into_iter().map(str::to_owned).collect()
}
