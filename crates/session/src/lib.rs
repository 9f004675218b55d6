//! Engine analysis session.
//!
//! [`EngineSession::new`] runs the whole pipeline once: catalog lookups, geometry sizing,
//! theoretical performance, efficiencies, acoustic modes, the synthetic test record, and the
//! summary statistics and explanations derived from it. The session is read-only afterwards;
//! a different operating point needs a new session.

pub mod results;
pub mod series;

use serde::Serialize;
use studio_acoustics::{AcousticReport, analyze_modes};
use studio_catalog::{Catalog, CatalogError, Cycle, Material, Nozzle, Propellant, PropellantClass};
use studio_config::{ConfigError, OperatingParameters};
use studio_core::constants::G0;
use studio_core::geometry::diameter_from_area;
use studio_core::stats::{coefficient_of_variation, percent_deviation, safe_divide};
use studio_core::units::bar_to_pa;
use studio_diagnostics::{
    DeviationExplanation, OverallAssessment, ParameterKind, explain_difference,
    overall_assessment,
};
use studio_performance::{ballistics, combustion, erosion, nozzle_efficiency};
use thiserror::Error;
use tracing::{debug, info, warn};

pub use results::{CycleSummary, NozzleSummary, PropellantSummary, ResultsBundle};
pub use series::{ExperimentalSeries, SAMPLE_COUNT};

/// Fixed thrust coefficient used to size the throat.
pub const THRUST_COEFFICIENT: f64 = 1.5;
/// Chamber-to-throat diameter ratio.
pub const CHAMBER_TO_THROAT_DIAMETER: f64 = 2.5;
/// Chamber length-to-diameter ratio.
pub const CHAMBER_LENGTH_TO_DIAMETER: f64 = 1.5;
/// Nozzle length-to-exit-diameter ratio.
pub const NOZZLE_LENGTH_TO_EXIT_DIAMETER: f64 = 2.0;
/// Wall heat flux assumed for the erosion estimate (W/m²).
pub const ASSUMED_HEAT_FLUX_W_M2: f64 = 5.0e6;
/// Thermal stress assumed at the throat (Pa); the chamber sees 70 % of it.
pub const ASSUMED_THERMAL_STRESS_PA: f64 = 100.0e6;
/// Oxidizer mass flux assumed for hybrid regression (kg/m²s).
pub const ASSUMED_HYBRID_OXIDIZER_FLUX: f64 = 200.0;

const SOLID_MASS_FLOW_FACTOR: f64 = 0.95;
const SOLID_ISP_FACTOR: f64 = 0.92;
const HYBRID_ISP_FACTOR: f64 = 0.94;

/// Errors surfaced when constructing a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid operating parameters: {0}")]
    InvalidParameters(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Sized engine dimensions (SI units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub throat_area_m2: f64,
    pub throat_diameter_m: f64,
    pub chamber_diameter_m: f64,
    pub chamber_length_m: f64,
    pub exit_area_m2: f64,
    pub exit_diameter_m: f64,
    pub nozzle_length_m: f64,
}

impl Geometry {
    /// Size the engine from target thrust, chamber pressure, and area ratio.
    pub fn size(thrust_n: f64, chamber_pressure_bar: f64, expansion_ratio: f64) -> Self {
        let throat_area_m2 = safe_divide(
            thrust_n,
            bar_to_pa(chamber_pressure_bar) * THRUST_COEFFICIENT,
            0.0,
        );
        let throat_diameter_m = diameter_from_area(throat_area_m2);
        let chamber_diameter_m = throat_diameter_m * CHAMBER_TO_THROAT_DIAMETER;
        let exit_area_m2 = throat_area_m2 * expansion_ratio;
        let exit_diameter_m = diameter_from_area(exit_area_m2);
        Self {
            throat_area_m2,
            throat_diameter_m,
            chamber_diameter_m,
            chamber_length_m: chamber_diameter_m * CHAMBER_LENGTH_TO_DIAMETER,
            exit_area_m2,
            exit_diameter_m,
            nozzle_length_m: exit_diameter_m * NOZZLE_LENGTH_TO_EXIT_DIAMETER,
        }
    }
}

/// Ideal performance at the operating point, after propellant-class corrections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theoretical {
    pub gamma: f64,
    pub characteristic_velocity_m_s: f64,
    pub mass_flow_kg_s: f64,
    pub thrust_n: f64,
    pub isp_s: f64,
    pub thrust_coefficient: f64,
    /// Grain burn rate (mm/s), solids only.
    pub burn_rate_mm_s: Option<f64>,
    /// Fuel regression rate (mm/s), hybrids only.
    pub regression_rate_mm_s: Option<f64>,
}

impl Theoretical {
    /// Burn or regression rate, whichever applies; zero for liquids.
    pub fn surface_rate_mm_s(&self) -> f64 {
        self.burn_rate_mm_s.or(self.regression_rate_mm_s).unwrap_or(0.0)
    }
}

/// Efficiency figures. Fractions for the component efficiencies, percent for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Efficiencies {
    pub combustion: f64,
    pub nozzle: f64,
    /// Mean experimental thrust over theoretical thrust (%).
    pub overall_percent: f64,
    /// Combustion × nozzle efficiency (%).
    pub total_percent: f64,
}

impl Efficiencies {
    pub fn combustion_percent(&self) -> f64 {
        self.combustion * 100.0
    }

    pub fn nozzle_percent(&self) -> f64 {
        self.nozzle * 100.0
    }
}

/// Mean experimental value vs theoretical, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviations {
    pub thrust: f64,
    pub isp: f64,
    pub mass_flow: f64,
    pub pressure: f64,
}

impl Deviations {
    pub fn as_array(&self) -> [f64; 4] {
        [self.thrust, self.isp, self.mass_flow, self.pressure]
    }
}

/// Material yield strength over the assumed thermal stress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SafetyFactors {
    pub throat: f64,
    pub chamber: f64,
}

impl SafetyFactors {
    pub fn for_material(material: &Material) -> Self {
        Self {
            throat: safe_divide(material.yield_strength_pa, ASSUMED_THERMAL_STRESS_PA, 0.0),
            chamber: safe_divide(
                material.yield_strength_pa,
                ASSUMED_THERMAL_STRESS_PA * 0.7,
                0.0,
            ),
        }
    }
}

/// Coefficients of variation of the sampled signals (%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stability {
    pub pressure_cv_percent: f64,
    pub thrust_cv_percent: f64,
}

/// One fully evaluated operating point.
#[derive(Debug, Clone)]
pub struct EngineSession {
    params: OperatingParameters,
    propellant: Propellant,
    material: Material,
    cycle: Cycle,
    nozzle: Nozzle,
    geometry: Geometry,
    theoretical: Theoretical,
    efficiencies: Efficiencies,
    acoustic: AcousticReport,
    series: ExperimentalSeries,
    deviations: Deviations,
    erosion_rate: f64,
    safety_factors: SafetyFactors,
    stability: Stability,
    explanations: Vec<DeviationExplanation>,
    assessment: OverallAssessment,
}

impl EngineSession {
    /// Validate `params`, resolve its catalog keys, and run the full analysis.
    ///
    /// Zero or negative thrust and chamber pressure still produce a session; quantities
    /// divided by them fall back to zero.
    pub fn new(catalog: &Catalog, params: OperatingParameters) -> Result<Self, SessionError> {
        params.validate()?;

        let propellant = catalog.propellant(&params.propellant)?.clone();
        let material = catalog.material(&params.material)?.clone();
        let cycle = catalog.cycle(&params.cycle)?.clone();
        let nozzle = catalog.nozzle(&params.nozzle)?.clone();

        info!(
            propellant = %propellant.name,
            thrust_n = params.thrust_n,
            pc_bar = params.chamber_pressure_bar,
            of_ratio = params.of_ratio,
            seed = params.noise_seed,
            "starting engine session"
        );

        let pc = params.chamber_pressure_bar;
        let of = params.of_ratio;
        let gamma = combustion::gamma(&propellant, of);
        let c_star = combustion::characteristic_velocity(&propellant, pc, of);

        let geometry = Geometry::size(params.thrust_n, pc, params.expansion_ratio);
        debug!(?geometry, gamma, c_star, "sized engine geometry");

        let pc_pa = bar_to_pa(pc);
        let mut mass_flow_kg_s = safe_divide(pc_pa * geometry.throat_area_m2, c_star, 0.0);
        let thrust_n = pc_pa * geometry.throat_area_m2 * THRUST_COEFFICIENT;
        let mut isp_s = safe_divide(thrust_n, mass_flow_kg_s * G0, 0.0);
        if geometry.throat_area_m2 <= 0.0 || mass_flow_kg_s <= 0.0 {
            warn!(
                thrust_n = params.thrust_n,
                pc_bar = pc,
                throat_area_m2 = geometry.throat_area_m2,
                "degenerate operating point; ratios against theory default to zero"
            );
        }

        let combustion_efficiency =
            combustion::combustion_efficiency(&propellant, pc, of, params.injector);
        let nozzle_eff = nozzle_efficiency(params.expansion_ratio, pc);

        let acoustic = analyze_modes(
            pc,
            geometry.chamber_length_m,
            geometry.chamber_diameter_m,
            &propellant,
        );
        if !acoustic.dangerous_modes.is_empty() {
            warn!(modes = ?acoustic.dangerous_modes, "acoustic modes above growth threshold");
        }

        let mut burn_rate_mm_s = None;
        let mut regression_rate_mm_s = None;
        match propellant.class {
            PropellantClass::Solid(_) => {
                mass_flow_kg_s *= SOLID_MASS_FLOW_FACTOR;
                isp_s *= SOLID_ISP_FACTOR;
                burn_rate_mm_s = Some(ballistics::solid_burn_rate(&propellant, pc));
            }
            PropellantClass::Hybrid(_) => {
                isp_s *= HYBRID_ISP_FACTOR;
                regression_rate_mm_s = Some(ballistics::hybrid_regression_rate(
                    &propellant,
                    ASSUMED_HYBRID_OXIDIZER_FLUX,
                    pc,
                ));
            }
            PropellantClass::Liquid | PropellantClass::Monopropellant => {}
        }

        let theoretical = Theoretical {
            gamma,
            characteristic_velocity_m_s: c_star,
            mass_flow_kg_s,
            thrust_n,
            isp_s,
            thrust_coefficient: THRUST_COEFFICIENT,
            burn_rate_mm_s,
            regression_rate_mm_s,
        };

        let series = series::generate(&series::SeriesInputs {
            burn_time_s: params.burn_time_s,
            thrust_n,
            chamber_pressure_bar: pc,
            mass_flow_kg_s,
            combustion_temp_k: propellant.combustion_temp_k,
            combustion_efficiency,
            nozzle_efficiency: nozzle_eff,
            longitudinal_frequency_hz: acoustic.longitudinal_frequency_hz(),
            noise_seed: params.noise_seed,
        });

        let mean_thrust = series.mean_thrust();
        let mean_isp = series.mean_isp();
        let mean_pressure = series.mean_chamber_pressure();

        let deviations = Deviations {
            thrust: percent_deviation(thrust_n, mean_thrust),
            isp: percent_deviation(isp_s, mean_isp),
            mass_flow: percent_deviation(mass_flow_kg_s, series.mean_mass_flow()),
            pressure: percent_deviation(pc, mean_pressure),
        };

        let efficiencies = Efficiencies {
            combustion: combustion_efficiency,
            nozzle: nozzle_eff,
            overall_percent: safe_divide(mean_thrust, thrust_n, 0.0) * 100.0,
            total_percent: combustion_efficiency * nozzle_eff * 100.0,
        };

        let erosion_rate = erosion::erosion_rate(
            pc,
            &material,
            ASSUMED_HEAT_FLUX_W_M2,
            &propellant.name,
        );
        let safety_factors = SafetyFactors::for_material(&material);
        let stability = Stability {
            pressure_cv_percent: coefficient_of_variation(&series.chamber_pressure_bar),
            thrust_cv_percent: coefficient_of_variation(&series.thrust_n),
        };

        let explanations = vec![
            explain_difference(thrust_n, mean_thrust, ParameterKind::Thrust),
            explain_difference(isp_s, mean_isp, ParameterKind::Isp),
            explain_difference(pc, mean_pressure, ParameterKind::Pressure),
        ];
        let assessment = overall_assessment(&deviations.as_array());

        info!(
            grade = %assessment.grade,
            thrust_deviation = deviations.thrust,
            isp_deviation = deviations.isp,
            "engine session complete"
        );

        Ok(Self {
            params,
            propellant,
            material,
            cycle,
            nozzle,
            geometry,
            theoretical,
            efficiencies,
            acoustic,
            series,
            deviations,
            erosion_rate,
            safety_factors,
            stability,
            explanations,
            assessment,
        })
    }

    pub fn params(&self) -> &OperatingParameters {
        &self.params
    }

    pub fn propellant(&self) -> &Propellant {
        &self.propellant
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    pub fn nozzle(&self) -> &Nozzle {
        &self.nozzle
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn theoretical(&self) -> &Theoretical {
        &self.theoretical
    }

    pub fn efficiencies(&self) -> &Efficiencies {
        &self.efficiencies
    }

    pub fn series(&self) -> &ExperimentalSeries {
        &self.series
    }

    pub fn deviations(&self) -> &Deviations {
        &self.deviations
    }

    /// Explanations for thrust, specific impulse, and chamber pressure, in that order.
    pub fn explanations(&self) -> &[DeviationExplanation] {
        &self.explanations
    }

    pub fn explanation(&self, kind: ParameterKind) -> Option<&DeviationExplanation> {
        self.explanations.iter().find(|e| e.kind == kind)
    }

    pub fn acoustic(&self) -> &AcousticReport {
        &self.acoustic
    }

    /// Throat erosion rate at the assumed heat flux, in the material table's units (m/s).
    pub fn erosion_rate(&self) -> f64 {
        self.erosion_rate
    }

    pub fn safety_factors(&self) -> &SafetyFactors {
        &self.safety_factors
    }

    pub fn stability(&self) -> &Stability {
        &self.stability
    }

    pub fn assessment(&self) -> &OverallAssessment {
        &self.assessment
    }

    /// Assemble the serialisable results bundle.
    pub fn results(&self) -> ResultsBundle {
        ResultsBundle::from_session(self)
    }
}

/// Run one independent session per parameter set.
pub fn compare(
    catalog: &Catalog,
    params: &[OperatingParameters],
) -> Vec<Result<EngineSession, SessionError>> {
    params
        .iter()
        .cloned()
        .map(|p| EngineSession::new(catalog, p))
        .collect()
}
