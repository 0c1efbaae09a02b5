//! Signed temperature change and its severity tier.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of |delta| for the minimal tier.
const MINIMAL_BELOW: f64 = 2.0;
/// Upper bound (exclusive) of |delta| for the moderate tier.
const MODERATE_BELOW: f64 = 5.0;
/// Upper bound (exclusive) of |delta| for the significant tier.
const SIGNIFICANT_BELOW: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeTier {
    Minimal,
    Moderate,
    Significant,
    Extreme,
}

impl ChangeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeTier::Minimal => "minimal",
            ChangeTier::Moderate => "moderate",
            ChangeTier::Significant => "significant",
            ChangeTier::Extreme => "extreme",
        }
    }

    fn direction_label(&self, warmer: bool) -> &'static str {
        match (self, warmer) {
            (ChangeTier::Minimal, _) => "about the same",
            (ChangeTier::Moderate, true) => "slightly warmer",
            (ChangeTier::Moderate, false) => "slightly colder",
            (ChangeTier::Significant, true) => "warmer",
            (ChangeTier::Significant, false) => "colder",
            (ChangeTier::Extreme, true) => "much warmer",
            (ChangeTier::Extreme, false) => "much colder",
        }
    }
}

impl std::fmt::Display for ChangeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeAssessment {
    pub magnitude: f64,
    pub tier: ChangeTier,
    pub direction_label: &'static str,
}

/// `current - past`. NaN in either input yields NaN.
pub fn relative_change(current: f64, past: f64) -> f64 {
    current - past
}

/// Buckets `delta` by absolute size. A value on a boundary belongs to the higher tier.
///
/// NaN compares false against every bound and ends up `Extreme` / "much colder".
pub fn classify_change(delta: f64) -> ChangeAssessment {
    let abs = delta.abs();
    let tier = if abs < MINIMAL_BELOW {
        ChangeTier::Minimal
    } else if abs < MODERATE_BELOW {
        ChangeTier::Moderate
    } else if abs < SIGNIFICANT_BELOW {
        ChangeTier::Significant
    } else {
        ChangeTier::Extreme
    };

    ChangeAssessment {
        magnitude: delta,
        tier,
        direction_label: tier.direction_label(delta > 0.0),
    }
}
