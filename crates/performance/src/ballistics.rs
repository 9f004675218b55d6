//! Solid burn rate (Vieille's law) and hybrid regression rate (simplified Marxman form).

use studio_catalog::{Propellant, PropellantClass};

/// Pressure at which solid grain burn rates are quoted (bar).
pub const SOLID_REFERENCE_PRESSURE_BAR: f64 = 70.0;
/// Oxidizer mass flux at which hybrid regression rates are quoted (kg/m²s).
pub const HYBRID_REFERENCE_FLUX: f64 = 200.0;
/// Chamber-pressure exponent of the hybrid regression model.
pub const HYBRID_PRESSURE_EXPONENT: f64 = 0.0;

/// Linear burn rate `r = a·Pc^n` (mm/s); zero for anything but a solid grain.
///
/// `a` is back-derived from the reference rate, written here as `r_ref·(Pc/70)^n` so the
/// reference point reproduces the tabulated value exactly.
pub fn solid_burn_rate(propellant: &Propellant, pc_bar: f64) -> f64 {
    let PropellantClass::Solid(grain) = propellant.class else {
        return 0.0;
    };
    let n = grain.pressure_exponent;
    grain.burn_rate_mm_s * (pc_bar.max(0.0) / SOLID_REFERENCE_PRESSURE_BAR).powf(n)
}

/// Fuel regression rate `r = a·G^m·Pc^0` (mm/s); zero for anything but a hybrid.
pub fn hybrid_regression_rate(
    propellant: &Propellant,
    oxidizer_flux: f64,
    pc_bar: f64,
) -> f64 {
    let PropellantClass::Hybrid(fuel) = propellant.class else {
        return 0.0;
    };
    let m = fuel.flux_exponent;
    let flux_term = (oxidizer_flux.max(0.0) / HYBRID_REFERENCE_FLUX).powf(m);
    let pressure_term = pc_bar.max(0.0).powf(HYBRID_PRESSURE_EXPONENT);
    fuel.regression_rate_mm_s * flux_term * pressure_term
}
