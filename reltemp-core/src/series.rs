//! Read-only access to the latest sample and to trailing windows of a [`WeatherSeries`].

use crate::error::CoreError;
use crate::model::{HighLow, TemperaturePoint, WeatherSeries};

/// Current temperature: the last hourly sample.
pub fn latest_hourly(series: &WeatherSeries) -> Result<TemperaturePoint, CoreError> {
    series.hourly().last().copied().ok_or(CoreError::EmptySeries)
}

/// Today's extremes: the last daily pair.
pub fn latest_daily_high_low(series: &WeatherSeries) -> Result<HighLow, CoreError> {
    series.daily().last().copied().ok_or(CoreError::EmptySeries)
}

/// Up to `count_back` elements immediately before the last one.
///
/// The last element is never included. When fewer than `count_back` prior
/// elements exist the window starts at index 0.
pub fn window_slice<T>(sequence: &[T], count_back: usize) -> &[T] {
    let Some(current) = sequence.len().checked_sub(1) else {
        return &[];
    };
    let start = current.saturating_sub(count_back);
    &sequence[start..current]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_hourly_is_last_element() {
        let series = WeatherSeries::new(vec![3.0, 4.5, -1.25], vec![]);
        assert_eq!(latest_hourly(&series), Ok(-1.25));
    }

    #[test]
    fn latest_hourly_errors_on_empty() {
        let series = WeatherSeries::new(vec![], vec![HighLow::new(10.0, 2.0)]);
        assert_eq!(latest_hourly(&series), Err(CoreError::EmptySeries));
    }

    #[test]
    fn latest_daily_is_last_pair() {
        let series = WeatherSeries::new(
            vec![1.0],
            vec![HighLow::new(10.0, 2.0), HighLow::new(14.0, 6.0)],
        );
        assert_eq!(latest_daily_high_low(&series), Ok(HighLow::new(14.0, 6.0)));
    }

    #[test]
    fn latest_daily_errors_on_empty() {
        let series = WeatherSeries::new(vec![1.0], vec![]);
        assert_eq!(latest_daily_high_low(&series), Err(CoreError::EmptySeries));
    }

    #[test]
    fn window_excludes_latest_sample() {
        let seq = [10, 12, 14, 16, 18, 20, 22];
        assert_eq!(window_slice(&seq, 3), &[16, 18, 20]);
        assert_eq!(window_slice(&seq, 1), &[20]);
    }

    #[test]
    fn window_clamps_to_start() {
        let seq = [1, 2, 3];
        assert_eq!(window_slice(&seq, 10), &[1, 2]);
    }

    #[test]
    fn window_length_is_min_of_count_and_history() {
        let seq: Vec<u32> = (0..8).collect();
        for n in 0..12 {
            let window = window_slice(&seq, n);
            assert_eq!(window.len(), n.min(seq.len() - 1));
            assert!(!window.contains(&7));
        }
    }

    #[test]
    fn window_degenerate_inputs_are_empty() {
        let empty: [f64; 0] = [];
        assert!(window_slice(&empty, 5).is_empty());
        assert!(window_slice(&[1.0], 5).is_empty());
        assert!(window_slice(&[1.0, 2.0], 0).is_empty());
    }
}
