//! Deviation classification.
//!
//! A signed percent deviation between a theoretical and a measured value is sorted into a
//! bucket per parameter kind, and each bucket carries fixed engineering commentary. Everything
//! here is pure: the same inputs always give the same explanation.

pub mod commentary;

use std::fmt;

use serde::Serialize;
use studio_core::stats::percent_deviation;

pub use commentary::Commentary;

/// Parameter being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Thrust,
    Isp,
    Pressure,
    Temperature,
    Efficiency,
    /// Any parameter without dedicated thresholds.
    Generic,
}

impl ParameterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterKind::Thrust => "thrust",
            ParameterKind::Isp => "isp",
            ParameterKind::Pressure => "pressure",
            ParameterKind::Temperature => "temperature",
            ParameterKind::Efficiency => "efficiency",
            ParameterKind::Generic => "generic",
        }
    }

    /// `(upper, lower)` bounds of the nominal band in percent. Deviations strictly above
    /// `upper` or strictly below `lower` leave it.
    pub fn thresholds(self) -> Option<(f64, f64)> {
        match self {
            ParameterKind::Thrust => Some((5.0, -5.0)),
            ParameterKind::Isp => Some((2.0, -3.0)),
            ParameterKind::Pressure => Some((5.0, -5.0)),
            ParameterKind::Temperature => Some((10.0, -10.0)),
            ParameterKind::Efficiency => Some((5.0, -10.0)),
            ParameterKind::Generic => None,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a deviation falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Higher,
    Lower,
    Nominal,
    /// The single bucket used for [`ParameterKind::Generic`].
    Variation,
}

impl Severity {
    /// Classify `deviation_percent` for `kind`. NaN compares false against both bounds and
    /// therefore lands in [`Severity::Nominal`].
    pub fn classify(kind: ParameterKind, deviation_percent: f64) -> Self {
        match kind.thresholds() {
            None => Severity::Variation,
            Some((upper, _)) if deviation_percent > upper => Severity::Higher,
            Some((_, lower)) if deviation_percent < lower => Severity::Lower,
            Some(_) => Severity::Nominal,
        }
    }
}

/// Classified deviation with its commentary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationExplanation {
    pub kind: ParameterKind,
    pub severity: Severity,
    /// Human-readable severity, e.g. `WITHIN EXPECTED RANGE`.
    pub label: &'static str,
    pub deviation_percent: f64,
    /// Deviation formatted with sign and one decimal, e.g. `+3.2%`.
    pub deviation: String,
    pub reasons: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub physics_notes: &'static [&'static str],
}

/// Explain a signed percent deviation for the given parameter.
pub fn explain(kind: ParameterKind, deviation_percent: f64) -> DeviationExplanation {
    let severity = Severity::classify(kind, deviation_percent);
    let text = commentary_for(kind, severity);
    DeviationExplanation {
        kind,
        severity,
        label: text.label,
        deviation_percent,
        deviation: format!("{deviation_percent:+.1}%"),
        reasons: text.reasons,
        recommendations: text.recommendations,
        physics_notes: text.physics_notes,
    }
}

/// Explain the deviation of `experimental` from `theoretical`. A zero theoretical value gives
/// a zero deviation.
pub fn explain_difference(
    theoretical: f64,
    experimental: f64,
    kind: ParameterKind,
) -> DeviationExplanation {
    explain(kind, percent_deviation(theoretical, experimental))
}

fn commentary_for(kind: ParameterKind, severity: Severity) -> &'static Commentary {
    use crate::commentary::*;
    use ParameterKind::*;
    use Severity::*;
    match (kind, severity) {
        (Thrust, Higher) => &THRUST_HIGHER,
        (Thrust, Lower) => &THRUST_LOWER,
        (Isp, Higher) => &ISP_HIGHER,
        (Isp, Lower) => &ISP_LOWER,
        (Pressure, Higher) => &PRESSURE_HIGHER,
        (Pressure, Lower) => &PRESSURE_LOWER,
        (Temperature, Higher) => &TEMPERATURE_HIGHER,
        (Temperature, Lower) => &TEMPERATURE_LOWER,
        (Efficiency, Higher) => &EFFICIENCY_HIGHER,
        (Efficiency, Lower) => &EFFICIENCY_LOWER,
        (Thrust, _) => &THRUST_NOMINAL,
        (Isp, _) => &ISP_NOMINAL,
        (Pressure, _) => &PRESSURE_NOMINAL,
        (Temperature, _) => &TEMPERATURE_NOMINAL,
        (Efficiency, _) => &EFFICIENCY_NOMINAL,
        (Generic, _) => &GENERIC,
    }
}

/// Letter grade over a set of deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "B+")]
    BPlus,
    C,
    D,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::BPlus => "B+",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallAssessment {
    pub grade: Grade,
    pub verdict: &'static str,
    pub summary: &'static str,
    pub action: &'static str,
    pub mean_abs_deviation: f64,
}

/// Grade the mean absolute deviation: A+ below 2 %, B+ below 5 %, C below 10 %, D otherwise.
/// Non-finite entries are skipped; an empty set has a mean of zero.
pub fn overall_assessment(deviations: &[f64]) -> OverallAssessment {
    let magnitudes: Vec<f64> = deviations
        .iter()
        .filter(|d| d.is_finite())
        .map(|d| d.abs())
        .collect();
    let mean_abs_deviation = studio_core::stats::mean(&magnitudes);

    let (grade, verdict, summary, action) = if mean_abs_deviation < 2.0 {
        (
            Grade::APlus,
            "EXCELLENT",
            "Engine performance matches theoretical predictions exceptionally well.",
            "Ready for flight operations",
        )
    } else if mean_abs_deviation < 5.0 {
        (
            Grade::BPlus,
            "GOOD",
            "Minor deviations observed but within acceptable engineering limits.",
            "Continue with monitoring",
        )
    } else if mean_abs_deviation < 10.0 {
        (
            Grade::C,
            "REQUIRES ATTENTION",
            "Significant deviations detected requiring investigation.",
            "Review design and testing parameters",
        )
    } else {
        (
            Grade::D,
            "NEEDS IMPROVEMENT",
            "Large discrepancies between theoretical and experimental values.",
            "Major redesign or parameter adjustment needed",
        )
    };

    OverallAssessment {
        grade,
        verdict,
        summary,
        action,
        mean_abs_deviation,
    }
}

/// Coarse rating of the overall efficiency (percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    Acceptable,
    NeedsImprovement,
}

impl PerformanceRating {
    pub fn from_overall_efficiency(percent: f64) -> Self {
        if percent > 95.0 {
            PerformanceRating::Excellent
        } else if percent > 90.0 {
            PerformanceRating::Good
        } else if percent > 85.0 {
            PerformanceRating::Acceptable
        } else {
            PerformanceRating::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceRating::Excellent => "Excellent",
            PerformanceRating::Good => "Good",
            PerformanceRating::Acceptable => "Acceptable",
            PerformanceRating::NeedsImprovement => "Needs improvement",
        }
    }
}
