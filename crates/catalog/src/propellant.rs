//! Runtime propellant records and their conversion from catalog configuration.

use serde::Serialize;
use studio_config::{PropellantConfig, PropellantFamily};

use crate::CatalogError;

/// Solid grain ballistics (Vieille's law, reference burn rate quoted at 70 bar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolidGrain {
    pub burn_rate_mm_s: f64,
    pub pressure_exponent: f64,
    pub density_kg_m3: f64,
}

/// Hybrid fuel regression data (Marxman form, reference rate quoted at 200 kg/m²s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HybridFuel {
    pub regression_rate_mm_s: f64,
    pub flux_exponent: f64,
    pub fuel_density_kg_m3: f64,
}

/// Closed classification that drives every family-specific branch in the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "class", rename_all = "kebab-case")]
pub enum PropellantClass {
    /// Bipropellant liquid with a non-zero optimal mixture ratio.
    Liquid,
    /// Single-component propellant; no mixture ratio.
    Monopropellant,
    /// Cast solid grain.
    Solid(SolidGrain),
    /// Solid fuel grain burned with a liquid or gaseous oxidizer.
    Hybrid(HybridFuel),
}

/// Immutable propellant reference record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Propellant {
    pub name: String,
    pub family: PropellantFamily,
    pub optimal_of: f64,
    /// Specific-heat ratio for lean, near-optimal, and rich mixtures.
    pub gamma_range: [f64; 3],
    pub c_star: f64,
    pub combustion_temp_k: f64,
    pub density_impulse: f64,
    pub toxicity: String,
    pub handling: String,
    pub cost: String,
    pub flight_heritage: String,
    pub class: PropellantClass,
}

impl Propellant {
    pub fn is_solid(&self) -> bool {
        matches!(self.class, PropellantClass::Solid(_))
    }

    pub fn is_hybrid(&self) -> bool {
        matches!(self.class, PropellantClass::Hybrid(_))
    }

    /// True when the combination has no mixture ratio (solids and monopropellants).
    pub fn has_fixed_composition(&self) -> bool {
        self.optimal_of == 0.0
    }

    /// Short description of the motor/engine architecture implied by the class.
    pub fn architecture(&self) -> &'static str {
        match self.class {
            PropellantClass::Solid(_) => "Solid motor",
            PropellantClass::Hybrid(_) => "Hybrid engine",
            PropellantClass::Monopropellant => "Monopropellant thruster",
            PropellantClass::Liquid => "Liquid engine",
        }
    }
}

/// Convert a catalog entry into its runtime representation, enforcing the family rules.
pub fn from_config(config: &PropellantConfig) -> Result<Propellant, CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidRecord {
        name: config.name.clone(),
        reason: reason.to_string(),
    };

    if !(config.c_star.is_finite() && config.c_star > 0.0) {
        return Err(invalid("c_star must be strictly positive"));
    }
    if config.gamma_range.iter().any(|g| !g.is_finite() || *g <= 0.0) {
        return Err(invalid("gamma_range entries must be strictly positive"));
    }
    if !config.optimal_of.is_finite() || config.optimal_of < 0.0 {
        return Err(invalid("optimal_of must be finite and non-negative"));
    }

    let class = match config.family {
        PropellantFamily::Solid => {
            if config.optimal_of != 0.0 {
                return Err(invalid("solid propellants must have optimal_of = 0"));
            }
            let grain = config
                .solid
                .ok_or_else(|| invalid("solid propellants require a `solid` block"))?;
            if !(grain.burn_rate_mm_s > 0.0 && grain.pressure_exponent.is_finite()) {
                return Err(invalid("solid burn rate must be positive"));
            }
            PropellantClass::Solid(SolidGrain {
                burn_rate_mm_s: grain.burn_rate_mm_s,
                pressure_exponent: grain.pressure_exponent,
                density_kg_m3: grain.density_kg_m3,
            })
        }
        PropellantFamily::Hybrid => {
            if config.optimal_of <= 0.0 {
                return Err(invalid("hybrid propellants require optimal_of > 0"));
            }
            let fuel = config
                .hybrid
                .ok_or_else(|| invalid("hybrid propellants require a `hybrid` block"))?;
            if !(fuel.regression_rate_mm_s > 0.0 && fuel.flux_exponent.is_finite()) {
                return Err(invalid("hybrid regression rate must be positive"));
            }
            PropellantClass::Hybrid(HybridFuel {
                regression_rate_mm_s: fuel.regression_rate_mm_s,
                flux_exponent: fuel.flux_exponent,
                fuel_density_kg_m3: fuel.fuel_density_kg_m3,
            })
        }
        PropellantFamily::Monopropellant => {
            if config.optimal_of != 0.0 {
                return Err(invalid("monopropellants must have optimal_of = 0"));
            }
            PropellantClass::Monopropellant
        }
        _ => {
            if config.optimal_of <= 0.0 {
                return Err(invalid("liquid bipropellants require optimal_of > 0"));
            }
            PropellantClass::Liquid
        }
    };

    if config.solid.is_some() && !matches!(class, PropellantClass::Solid(_)) {
        return Err(invalid("`solid` block is only valid for the solid family"));
    }
    if config.hybrid.is_some() && !matches!(class, PropellantClass::Hybrid(_)) {
        return Err(invalid("`hybrid` block is only valid for the hybrid family"));
    }

    Ok(Propellant {
        name: config.name.clone(),
        family: config.family,
        optimal_of: config.optimal_of,
        gamma_range: config.gamma_range,
        c_star: config.c_star,
        combustion_temp_k: config.combustion_temp_k,
        density_impulse: config.density_impulse,
        toxicity: config.toxicity.clone(),
        handling: config.handling.clone(),
        cost: config.cost.clone(),
        flight_heritage: config.flight_heritage.clone(),
        class,
    })
}
