//! Serialisable results bundle.

use serde::Serialize;
use studio_acoustics::{AcousticReport, ModeKind, StabilityMargin};
use studio_catalog::{NozzleFamily, PropellantClass};
use studio_core::units::{m_to_mm, n_to_kn};
use studio_diagnostics::{DeviationExplanation, OverallAssessment, PerformanceRating};

use crate::{ASSUMED_HEAT_FLUX_W_M2, Deviations, EngineSession};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSection {
    pub theoretical_thrust_kn: f64,
    pub experimental_thrust_kn: f64,
    pub theoretical_isp_s: f64,
    pub experimental_isp_s: f64,
    pub mass_flow_kg_s: f64,
    pub characteristic_velocity_m_s: f64,
    pub thrust_coefficient: f64,
    pub specific_heat_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermalSection {
    /// First temperature sample of the synthetic record (K).
    pub combustion_temperature_k: f64,
    pub erosion_rate_mm_s: f64,
    pub assumed_heat_flux_w_m2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropulsionSection {
    pub architecture: &'static str,
    pub family: &'static str,
    /// Burn rate for solids, regression rate for hybrids, zero otherwise.
    pub surface_rate_mm_s: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralSection {
    pub throat_diameter_mm: f64,
    pub chamber_diameter_mm: f64,
    pub exit_diameter_mm: f64,
    pub chamber_length_mm: f64,
    pub nozzle_length_mm: f64,
    pub safety_factor_throat: f64,
    pub safety_factor_chamber: f64,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilitySection {
    pub pressure_cv_percent: f64,
    pub thrust_cv_percent: f64,
    pub acoustic_margin: StabilityMargin,
    pub acoustic_margin_percent: u8,
    pub dangerous_modes: Vec<ModeKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencySection {
    pub combustion_percent: f64,
    pub nozzle_percent: f64,
    pub overall_percent: f64,
    pub total_percent: f64,
    pub rating: PerformanceRating,
}

/// Engine cycle overview taken from the catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleSummary {
    pub name: String,
    pub efficiency: f64,
    pub description: String,
    pub complexity: String,
    pub throttle_range: String,
    pub examples: String,
}

/// Nozzle design overview taken from the catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NozzleSummary {
    pub name: String,
    pub family: NozzleFamily,
    pub divergence_efficiency_percent: f64,
    pub length_factor: f64,
    pub manufacturing_cost: String,
    pub application: String,
    pub cooling_complexity: String,
}

/// Propellant overview, with grain or fuel data for solids and hybrids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropellantSummary {
    pub name: String,
    pub family: &'static str,
    pub optimal_of: f64,
    pub characteristic_velocity_m_s: f64,
    pub toxicity: String,
    pub handling: String,
    pub flight_heritage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burn_rate_mm_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propellant_density_kg_m3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regression_rate_mm_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_density_kg_m3: Option<f64>,
}

/// Everything a presentation or export layer needs from one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsBundle {
    pub performance: PerformanceSection,
    pub thermal: ThermalSection,
    pub propulsion: PropulsionSection,
    pub structural: StructuralSection,
    pub stability: StabilitySection,
    pub efficiencies: EfficiencySection,
    pub deviations: Deviations,
    pub explanations: Vec<DeviationExplanation>,
    pub acoustic: AcousticReport,
    pub assessment: OverallAssessment,
    pub cycle: CycleSummary,
    pub nozzle: NozzleSummary,
    pub propellant: PropellantSummary,
}

impl ResultsBundle {
    pub fn from_session(session: &EngineSession) -> Self {
        let theoretical = session.theoretical();
        let series = session.series();
        let geometry = session.geometry();
        let efficiencies = session.efficiencies();
        let acoustic = session.acoustic();
        let propellant = session.propellant();

        let performance = PerformanceSection {
            theoretical_thrust_kn: n_to_kn(theoretical.thrust_n),
            experimental_thrust_kn: n_to_kn(series.mean_thrust()),
            theoretical_isp_s: theoretical.isp_s,
            experimental_isp_s: series.mean_isp(),
            mass_flow_kg_s: theoretical.mass_flow_kg_s,
            characteristic_velocity_m_s: theoretical.characteristic_velocity_m_s,
            thrust_coefficient: theoretical.thrust_coefficient,
            specific_heat_ratio: theoretical.gamma,
        };

        let thermal = ThermalSection {
            combustion_temperature_k: series.temperature_k.first().copied().unwrap_or(0.0),
            erosion_rate_mm_s: m_to_mm(session.erosion_rate()),
            assumed_heat_flux_w_m2: ASSUMED_HEAT_FLUX_W_M2,
        };

        let propulsion = PropulsionSection {
            architecture: propellant.architecture(),
            family: propellant.family.label(),
            surface_rate_mm_s: theoretical.surface_rate_mm_s(),
        };

        let safety = session.safety_factors();
        let structural = StructuralSection {
            throat_diameter_mm: m_to_mm(geometry.throat_diameter_m),
            chamber_diameter_mm: m_to_mm(geometry.chamber_diameter_m),
            exit_diameter_mm: m_to_mm(geometry.exit_diameter_m),
            chamber_length_mm: m_to_mm(geometry.chamber_length_m),
            nozzle_length_mm: m_to_mm(geometry.nozzle_length_m),
            safety_factor_throat: safety.throat,
            safety_factor_chamber: safety.chamber,
            material: session.material().name.clone(),
        };

        let stability = StabilitySection {
            pressure_cv_percent: session.stability().pressure_cv_percent,
            thrust_cv_percent: session.stability().thrust_cv_percent,
            acoustic_margin: acoustic.stability_margin,
            acoustic_margin_percent: acoustic.stability_margin.value(),
            dangerous_modes: acoustic.dangerous_modes.clone(),
        };

        let efficiency_section = EfficiencySection {
            combustion_percent: efficiencies.combustion_percent(),
            nozzle_percent: efficiencies.nozzle_percent(),
            overall_percent: efficiencies.overall_percent,
            total_percent: efficiencies.total_percent,
            rating: PerformanceRating::from_overall_efficiency(efficiencies.overall_percent),
        };

        Self {
            performance,
            thermal,
            propulsion,
            structural,
            stability,
            efficiencies: efficiency_section,
            deviations: *session.deviations(),
            explanations: session.explanations().to_vec(),
            acoustic: acoustic.clone(),
            assessment: session.assessment().clone(),
            cycle: CycleSummary::from_session(session),
            nozzle: NozzleSummary::from_session(session),
            propellant: PropellantSummary::from_session(session),
        }
    }
}

impl CycleSummary {
    pub fn from_session(session: &EngineSession) -> Self {
        let cycle = session.cycle();
        Self {
            name: cycle.name.clone(),
            efficiency: cycle.efficiency,
            description: cycle.description.clone(),
            complexity: cycle.complexity.clone(),
            throttle_range: cycle.throttle_range.clone(),
            examples: cycle.examples.clone(),
        }
    }
}

impl NozzleSummary {
    pub fn from_session(session: &EngineSession) -> Self {
        let nozzle = session.nozzle();
        Self {
            name: nozzle.name.clone(),
            family: nozzle.family,
            divergence_efficiency_percent: nozzle.divergence_efficiency * 100.0,
            length_factor: nozzle.length_factor,
            manufacturing_cost: nozzle.manufacturing_cost.clone(),
            application: nozzle.application.clone(),
            cooling_complexity: nozzle.cooling_complexity.clone(),
        }
    }
}

impl PropellantSummary {
    pub fn from_session(session: &EngineSession) -> Self {
        let propellant = session.propellant();
        let theoretical = session.theoretical();
        let mut summary = Self {
            name: propellant.name.clone(),
            family: propellant.family.label(),
            optimal_of: propellant.optimal_of,
            characteristic_velocity_m_s: propellant.c_star,
            toxicity: propellant.toxicity.clone(),
            handling: propellant.handling.clone(),
            flight_heritage: propellant.flight_heritage.clone(),
            burn_rate_mm_s: None,
            propellant_density_kg_m3: None,
            regression_rate_mm_s: None,
            fuel_density_kg_m3: None,
        };
        match propellant.class {
            PropellantClass::Solid(grain) => {
                summary.burn_rate_mm_s = theoretical.burn_rate_mm_s;
                summary.propellant_density_kg_m3 = Some(grain.density_kg_m3);
            }
            PropellantClass::Hybrid(fuel) => {
                summary.regression_rate_mm_s = theoretical.regression_rate_mm_s;
                summary.fuel_density_kg_m3 = Some(fuel.fuel_density_kg_m3);
            }
            PropellantClass::Liquid | PropellantClass::Monopropellant => {}
        }
        summary
    }
}

