use chrono::Local;
use reltemp_core::{ComparisonRecord, Location, LocationSource, Report};
use std::fmt;

/// Human-readable rendering of a report. Rounding to one decimal happens here only.
pub struct ReportView<'a>(pub &'a Report);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "{}", location_line(&report.location, report.location_source))?;
        writeln!(f)?;
        writeln!(f, "Now: {:.1}°C", report.current_temperature)?;
        if let Some(today) = report.today {
            writeln!(f, "Today: high {:.1}°C | low {:.1}°C", today.high, today.low)?;
        }

        writeln!(f)?;
        writeln!(f, "What to wear")?;
        for advice in &report.advice {
            writeln!(f, "  - {advice}")?;
        }

        writeln!(f)?;
        writeln!(f, "Compared with")?;
        for record in &report.comparisons {
            writeln!(f, "{}", comparison_line(record))?;
        }

        let updated = report.fetched_at.with_timezone(&Local);
        writeln!(f, "\nUpdated {}", updated.format("%Y-%m-%d %H:%M"))
    }
}

fn location_line(location: &Location, source: LocationSource) -> String {
    let coords = format!("{:.4}, {:.4}", location.latitude, location.longitude);

    match (source, location.name.as_deref()) {
        (LocationSource::Detected, Some(name)) => format!("{name} [{coords}]"),
        (LocationSource::Detected, None) => format!("Given location [{coords}]"),
        (LocationSource::Default, Some(name)) => format!("{name} (default) [{coords}]"),
        (LocationSource::Default, None) => format!("Default location [{coords}]"),
    }
}

fn comparison_line(record: &ComparisonRecord) -> String {
    let sign = if record.change_magnitude >= 0.0 {
        "+"
    } else {
        ""
    };
    let high_low = record
        .average_high_low
        .map(|hl| format!(", high {:.1}°C / low {:.1}°C", hl.high, hl.low))
        .unwrap_or_default();

    format!(
        "  {:<11} {:<16} {sign}{:.1}°C  (avg {:.1}°C{high_low})",
        record.period_label,
        record.direction_label,
        record.change_magnitude,
        record.average_temperature,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reltemp_core::{ChangeTier, HighLow};

    fn sample() -> Report {
        Report {
            location: Location::tokyo(),
            location_source: LocationSource::Default,
            current_temperature: 18.04,
            today: Some(HighLow::new(22.0, 12.5)),
            comparisons: vec![ComparisonRecord {
                period_label: "yesterday".into(),
                average_temperature: 15.0,
                average_high_low: Some(HighLow::new(21.0, 11.0)),
                change_magnitude: 3.04,
                tier: ChangeTier::Moderate,
                direction_label: "slightly warmer".into(),
            }],
            advice: vec!["normal clothing will be comfortable today".into()],
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn renders_rounded_values_and_advice() {
        let text = ReportView(&sample()).to_string();

        assert!(text.starts_with("Tokyo (default) [35.6762, 139.6503]\n"));
        assert!(text.contains("Now: 18.0°C"));
        assert!(text.contains("Today: high 22.0°C | low 12.5°C"));
        assert!(text.contains("  - normal clothing will be comfortable today"));
        assert!(text.contains("+3.0°C"));
        assert!(text.contains("(avg 15.0°C, high 21.0°C / low 11.0°C)"));
        assert!(text.contains("\nUpdated "));
    }

    #[test]
    fn omits_missing_today_and_period_extremes() {
        let mut r = sample();
        r.today = None;
        r.comparisons[0].average_high_low = None;

        let text = ReportView(&r).to_string();
        assert!(!text.contains("Today:"));
        assert!(text.contains("(avg 15.0°C)"));
    }

    #[test]
    fn negative_change_has_no_plus_sign() {
        let mut r = sample();
        r.comparisons[0].change_magnitude = -6.0;
        let text = ReportView(&r).to_string();
        assert!(text.contains("-6.0°C"));
        assert!(!text.contains("+-6.0"));
    }

    #[test]
    fn detected_location_without_name() {
        let line = location_line(&Location::new(1.5, -2.25), LocationSource::Detected);
        assert_eq!(line, "Given location [1.5000, -2.2500]");
    }
}
