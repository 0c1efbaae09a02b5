//! Arithmetic means over trailing windows.

use crate::error::CoreError;
use crate::model::{HighLow, TemperaturePoint, WeatherSeries};
use crate::series::window_slice;

/// Mean of `values`.
///
/// An empty input is reported as [`CoreError::EmptyWindow`] instead of producing NaN.
pub fn average(values: &[f64]) -> Result<f64, CoreError> {
    if values.is_empty() {
        return Err(CoreError::EmptyWindow);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean hourly temperature over the `hours_ago` samples preceding the latest one.
pub fn average_hourly(
    series: &WeatherSeries,
    hours_ago: usize,
) -> Result<TemperaturePoint, CoreError> {
    average(window_slice(series.hourly(), hours_ago))
}

/// Mean daily high and mean daily low over the `days_ago` days preceding today.
pub fn average_daily_high_low(
    series: &WeatherSeries,
    days_ago: usize,
) -> Result<HighLow, CoreError> {
    let window = window_slice(series.daily(), days_ago);
    let highs: Vec<f64> = window.iter().map(|d| d.high).collect();
    let lows: Vec<f64> = window.iter().map(|d| d.low).collect();

    Ok(HighLow {
        high: average(&highs)?,
        low: average(&lows)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_of_hours() -> WeatherSeries {
        WeatherSeries::new(vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0], vec![])
    }

    #[test]
    fn average_of_single_value_is_that_value() {
        assert_eq!(average(&[7.5]), Ok(7.5));
    }

    #[test]
    fn average_ignores_order() {
        let a = average(&[1.0, 4.0, 9.0, -2.0]).unwrap();
        let b = average(&[9.0, -2.0, 4.0, 1.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, 3.0);
    }

    #[test]
    fn average_of_empty_window_is_an_error() {
        assert_eq!(average(&[]), Err(CoreError::EmptyWindow));
    }

    #[test]
    fn average_hourly_uses_trailing_window() {
        let series = week_of_hours();
        assert_eq!(average_hourly(&series, 3), Ok(18.0));
        assert_eq!(average_hourly(&series, 2), Ok(19.0));
    }

    #[test]
    fn average_hourly_window_of_indices_three_to_five() {
        // window [3, 5): the two samples before the latest
        let series = WeatherSeries::new(vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0], vec![]);
        assert_eq!(window_slice(series.hourly(), 2), &[16.0, 18.0]);
        assert_eq!(average_hourly(&series, 2), Ok(17.0));
    }

    #[test]
    fn average_hourly_clamps_to_available_history() {
        let series = week_of_hours();
        assert_eq!(average_hourly(&series, 168), Ok(15.0));
    }

    #[test]
    fn average_hourly_zero_hours_is_empty_window() {
        assert_eq!(average_hourly(&week_of_hours(), 0), Err(CoreError::EmptyWindow));
    }

    #[test]
    fn average_hourly_single_sample_is_empty_window() {
        let series = WeatherSeries::new(vec![21.0], vec![]);
        assert_eq!(average_hourly(&series, 24), Err(CoreError::EmptyWindow));
    }

    #[test]
    fn average_daily_high_low_averages_independently() {
        let series = WeatherSeries::new(
            vec![0.0],
            vec![
                HighLow::new(30.0, 0.0),
                HighLow::new(20.0, 10.0),
                HighLow::new(24.0, 14.0),
                HighLow::new(99.0, 99.0),
            ],
        );
        assert_eq!(average_daily_high_low(&series, 2), Ok(HighLow::new(22.0, 12.0)));
        assert_eq!(
            average_daily_high_low(&series, 7),
            Ok(HighLow::new(74.0 / 3.0, 8.0))
        );
    }

    #[test]
    fn average_daily_high_low_without_history_is_empty_window() {
        let series = WeatherSeries::new(vec![0.0], vec![HighLow::new(20.0, 10.0)]);
        assert_eq!(average_daily_high_low(&series, 3), Err(CoreError::EmptyWindow));
    }
}
