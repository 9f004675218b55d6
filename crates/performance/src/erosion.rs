//! Throat erosion estimate.

use studio_catalog::Material;

/// Heat flux the erosion correlation is normalised to (W/m²).
pub const REFERENCE_HEAT_FLUX_W_M2: f64 = 5.0e6;
/// Chamber pressure the erosion correlation is normalised to (bar).
pub const REFERENCE_PRESSURE_BAR: f64 = 35.0;

/// Oxidizer class inferred from the propellant key; oxidizer-rich combustion erodes faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oxidizer {
    LiquidOxygen,
    NitrogenTetroxide,
    Other,
}

impl Oxidizer {
    /// Classify from the propellant name ("LOX" wins over "NTO" when both appear).
    pub fn from_propellant_name(name: &str) -> Self {
        if name.contains("LOX") {
            Oxidizer::LiquidOxygen
        } else if name.contains("NTO") {
            Oxidizer::NitrogenTetroxide
        } else {
            Oxidizer::Other
        }
    }

    pub fn erosion_factor(self) -> f64 {
        match self {
            Oxidizer::LiquidOxygen => 1.2,
            Oxidizer::NitrogenTetroxide => 1.3,
            Oxidizer::Other => 1.0,
        }
    }
}

/// Erosion rate in the material's coefficient units (m/s for the bundled tables).
pub fn erosion_rate(
    pc_bar: f64,
    material: &Material,
    heat_flux_w_m2: f64,
    propellant_name: &str,
) -> f64 {
    let pressure_factor = (pc_bar.max(0.0) / REFERENCE_PRESSURE_BAR).powf(1.5);
    let heat_flux_factor = (heat_flux_w_m2 / REFERENCE_HEAT_FLUX_W_M2).powf(0.8);
    let oxidizer_factor = Oxidizer::from_propellant_name(propellant_name).erosion_factor();
    let temp_factor = 1.0 + 0.001 * (heat_flux_w_m2 / 1.0e6);

    material.erosion_rate * pressure_factor * heat_flux_factor * oxidizer_factor * temp_factor
}
