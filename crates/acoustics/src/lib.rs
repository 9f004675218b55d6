//! Combustion chamber acoustic modes.
//!
//! Frequencies follow the closed-form cylinder solutions for the first longitudinal,
//! tangential, and radial modes. Growth rates are fixed per mode and scaled by chamber
//! pressure; the resulting classification is static (no mode coupling, no time evolution).

use std::f64::consts::PI;

use serde::Serialize;
use studio_catalog::{Catalog, CatalogError, Propellant, PropellantFamily};
use studio_core::stats::safe_divide;

/// Growth rate above which a mode is considered unstable.
pub const DANGEROUS_GROWTH_RATE: f64 = 0.10;
/// Growth rate above which a mode is flagged for monitoring.
pub const MARGINAL_GROWTH_RATE: f64 = 0.05;
/// Chamber pressure the growth-rate scaling is normalised to (bar).
pub const REFERENCE_PRESSURE_BAR: f64 = 35.0;

/// First-order chamber modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModeKind {
    #[serde(rename = "1L")]
    FirstLongitudinal,
    #[serde(rename = "1T")]
    FirstTangential,
    #[serde(rename = "1R")]
    FirstRadial,
}

impl ModeKind {
    pub const ALL: [ModeKind; 3] = [
        ModeKind::FirstLongitudinal,
        ModeKind::FirstTangential,
        ModeKind::FirstRadial,
    ];

    /// Conventional short label (`1L`, `1T`, `1R`).
    pub fn label(self) -> &'static str {
        match self {
            ModeKind::FirstLongitudinal => "1L",
            ModeKind::FirstTangential => "1T",
            ModeKind::FirstRadial => "1R",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ModeKind::FirstLongitudinal => "First Longitudinal Mode",
            ModeKind::FirstTangential => "First Tangential Mode",
            ModeKind::FirstRadial => "First Radial Mode",
        }
    }

    /// Growth rate at the reference pressure.
    pub fn base_growth_rate(self) -> f64 {
        match self {
            ModeKind::FirstLongitudinal => 0.05,
            ModeKind::FirstTangential => 0.12,
            ModeKind::FirstRadial => 0.03,
        }
    }

    pub fn mitigation(self) -> &'static str {
        match self {
            ModeKind::FirstLongitudinal => "Add acoustic damping or change L*",
            ModeKind::FirstTangential => "Baffles or change injector pattern",
            ModeKind::FirstRadial => "Usually not concerning",
        }
    }

    fn risk(self, frequency_hz: f64) -> Risk {
        match self {
            ModeKind::FirstLongitudinal if frequency_hz < 800.0 => Risk::Medium,
            ModeKind::FirstLongitudinal => Risk::Low,
            ModeKind::FirstTangential if frequency_hz < 3_000.0 => Risk::High,
            ModeKind::FirstTangential => Risk::Medium,
            ModeKind::FirstRadial => Risk::Low,
        }
    }
}

/// Qualitative risk attached to a mode by its frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Risk {
    Low,
    Medium,
    High,
}

/// One analysed mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcousticMode {
    pub kind: ModeKind,
    pub frequency_hz: f64,
    pub growth_rate: f64,
    pub risk: Risk,
}

impl AcousticMode {
    pub fn is_dangerous(&self) -> bool {
        self.growth_rate > DANGEROUS_GROWTH_RATE
    }
}

/// Overall stability category derived from the largest growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StabilityMargin {
    Excellent,
    Good,
    Poor,
}

impl StabilityMargin {
    pub fn from_max_growth(max_growth: f64) -> Self {
        if max_growth < 0.05 {
            StabilityMargin::Excellent
        } else if max_growth < DANGEROUS_GROWTH_RATE {
            StabilityMargin::Good
        } else {
            StabilityMargin::Poor
        }
    }

    /// Nominal margin score (percent).
    pub fn value(self) -> u8 {
        match self {
            StabilityMargin::Excellent => 95,
            StabilityMargin::Good => 80,
            StabilityMargin::Poor => 50,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StabilityMargin::Excellent => "Excellent",
            StabilityMargin::Good => "Good",
            StabilityMargin::Poor => "Poor",
        }
    }
}

/// Result of an acoustic analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcousticReport {
    pub speed_of_sound_m_s: f64,
    pub modes: Vec<AcousticMode>,
    pub dangerous_modes: Vec<ModeKind>,
    pub recommendations: Vec<String>,
    pub stability_margin: StabilityMargin,
}

impl AcousticReport {
    pub fn mode(&self, kind: ModeKind) -> Option<&AcousticMode> {
        self.modes.iter().find(|mode| mode.kind == kind)
    }

    /// First longitudinal frequency (Hz); zero when the mode is missing.
    pub fn longitudinal_frequency_hz(&self) -> f64 {
        self.mode(ModeKind::FirstLongitudinal)
            .map(|mode| mode.frequency_hz)
            .unwrap_or(0.0)
    }

    pub fn max_growth_rate(&self) -> f64 {
        self.modes
            .iter()
            .map(|mode| mode.growth_rate)
            .fold(0.0, f64::max)
    }

    /// Stability summary such as `Good (80%)`.
    pub fn stability_summary(&self) -> String {
        format!(
            "{} ({}%)",
            self.stability_margin.label(),
            self.stability_margin.value()
        )
    }
}

/// Speed of sound in the combustion products (m/s), a coarse per-family value.
pub fn speed_of_sound(propellant: &Propellant) -> f64 {
    match propellant.family {
        PropellantFamily::Hydrogen => 1_400.0,
        PropellantFamily::Kerosene => 1_200.0,
        _ => 1_300.0,
    }
}

/// Analyse the first longitudinal, tangential, and radial modes of a cylindrical chamber.
pub fn analyze_modes(
    pc_bar: f64,
    chamber_length_m: f64,
    chamber_diameter_m: f64,
    propellant: &Propellant,
) -> AcousticReport {
    let a = speed_of_sound(propellant);
    let pressure_factor = (pc_bar.max(0.0) / REFERENCE_PRESSURE_BAR).powf(0.8);

    let modes: Vec<AcousticMode> = ModeKind::ALL
        .iter()
        .map(|&kind| {
            let frequency_hz = match kind {
                ModeKind::FirstLongitudinal => safe_divide(a, 2.0 * chamber_length_m, 0.0),
                ModeKind::FirstTangential => safe_divide(1.84 * a, PI * chamber_diameter_m, 0.0),
                ModeKind::FirstRadial => safe_divide(3.83 * a, PI * chamber_diameter_m, 0.0),
            };
            AcousticMode {
                kind,
                frequency_hz,
                growth_rate: kind.base_growth_rate() * pressure_factor,
                risk: kind.risk(frequency_hz),
            }
        })
        .collect();

    let dangerous_modes = modes
        .iter()
        .filter(|mode| mode.is_dangerous())
        .map(|mode| mode.kind)
        .collect();

    let max_growth = modes
        .iter()
        .map(|mode| mode.growth_rate)
        .fold(0.0, f64::max);

    AcousticReport {
        speed_of_sound_m_s: a,
        recommendations: recommendations(&modes),
        stability_margin: StabilityMargin::from_max_growth(max_growth),
        dangerous_modes,
        modes,
    }
}

/// Keyed variant of [`analyze_modes`].
pub fn analyze_acoustic_modes(
    catalog: &Catalog,
    pc_bar: f64,
    chamber_length_m: f64,
    chamber_diameter_m: f64,
    propellant: &str,
) -> Result<AcousticReport, CatalogError> {
    let propellant = catalog.propellant(propellant)?;
    Ok(analyze_modes(
        pc_bar,
        chamber_length_m,
        chamber_diameter_m,
        propellant,
    ))
}

fn recommendations(modes: &[AcousticMode]) -> Vec<String> {
    let mut out: Vec<String> = modes
        .iter()
        .filter_map(|mode| {
            if mode.growth_rate > DANGEROUS_GROWTH_RATE {
                Some(format!(
                    "{} mode unstable: {}",
                    mode.kind.label(),
                    mode.kind.mitigation()
                ))
            } else if mode.growth_rate > MARGINAL_GROWTH_RATE {
                Some(format!(
                    "{} mode marginal: Monitor during testing",
                    mode.kind.label()
                ))
            } else {
                None
            }
        })
        .collect();
    if out.is_empty() {
        out.push("All acoustic modes stable".to_string());
    }
    out
}
