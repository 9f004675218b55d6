//! Thermochemistry corrections: specific-heat ratio, characteristic velocity, and combustion
//! efficiency as functions of the operating point.

use studio_catalog::{Propellant, PropellantClass, PropellantFamily};
use studio_config::InjectorType;
use studio_core::stats::safe_divide;

/// Reference chamber pressure for the c* pressure correction (bar).
pub const C_STAR_REFERENCE_PRESSURE_BAR: f64 = 20.0;
/// Reference flame temperature for the c* temperature correction (K).
pub const C_STAR_REFERENCE_TEMP_K: f64 = 3_500.0;
/// Lower bound on the c* mixture-ratio factor so far off-design mixtures stay physical.
pub const C_STAR_OF_FACTOR_FLOOR: f64 = 0.1;

pub const MIN_COMBUSTION_EFFICIENCY: f64 = 0.85;
pub const MAX_COMBUSTION_EFFICIENCY: f64 = 0.995;

/// Specific-heat ratio picked from the lean/near-optimal/rich entries of the gamma triple.
pub fn gamma(propellant: &Propellant, of_ratio: f64) -> f64 {
    let [lean, nominal, rich] = propellant.gamma_range;
    if propellant.has_fixed_composition() {
        return nominal;
    }
    let optimal = propellant.optimal_of;
    if of_ratio < optimal * 0.8 {
        lean
    } else if of_ratio < optimal * 1.2 {
        nominal
    } else {
        rich
    }
}

/// Characteristic velocity (m/s) with pressure, mixture-ratio, and flame-temperature corrections.
pub fn characteristic_velocity(propellant: &Propellant, pc_bar: f64, of_ratio: f64) -> f64 {
    let pressure_factor = if pc_bar <= 0.0 {
        1.0
    } else {
        (pc_bar / C_STAR_REFERENCE_PRESSURE_BAR).powf(0.05)
    };

    let of_factor = if propellant.has_fixed_composition() {
        1.0
    } else {
        let deviation = (of_ratio - propellant.optimal_of) / propellant.optimal_of;
        (1.0 - 0.02 * deviation * deviation).max(C_STAR_OF_FACTOR_FLOOR)
    };

    let temp_factor = 1.0 + 0.0001 * (propellant.combustion_temp_k - C_STAR_REFERENCE_TEMP_K);

    propellant.c_star * pressure_factor * of_factor * temp_factor
}

/// Baseline combustion efficiency for the propellant family before operating-point effects.
pub fn base_combustion_efficiency(propellant: &Propellant) -> f64 {
    match propellant.class {
        PropellantClass::Solid(_) => 0.99,
        PropellantClass::Hybrid(_) => 0.96,
        _ => match propellant.family {
            PropellantFamily::Hydrogen => 0.985,
            PropellantFamily::Hypergolic => 0.99,
            _ => 0.98,
        },
    }
}

/// Mixing factor for the injector element pattern.
pub fn injector_factor(injector: InjectorType) -> f64 {
    match injector {
        InjectorType::Coaxial => 1.00,
        InjectorType::LikeOnLike => 0.98,
        InjectorType::Impinging => 0.97,
        InjectorType::Swirl => 0.96,
        InjectorType::Other => 0.97,
    }
}

/// Combustion efficiency, clamped to `[0.85, 0.995]`.
///
/// Solids ignore both the mixture-ratio penalty and the injector factor: their composition is
/// fixed at casting and there is no injector.
pub fn combustion_efficiency(
    propellant: &Propellant,
    pc_bar: f64,
    of_ratio: f64,
    injector: InjectorType,
) -> f64 {
    let base = base_combustion_efficiency(propellant);

    let (of_factor, mixing_factor) = match propellant.class {
        PropellantClass::Solid(_) => (1.0, 1.0),
        _ => {
            let deviation =
                safe_divide((of_ratio - propellant.optimal_of).abs(), propellant.optimal_of, 0.0);
            (1.0 - 0.03 * deviation.powf(1.5), injector_factor(injector))
        }
    };

    let pressure_factor = 1.0 + 0.001 * (pc_bar - C_STAR_REFERENCE_PRESSURE_BAR);

    let efficiency = base * of_factor * pressure_factor * mixing_factor;
    if efficiency.is_nan() {
        return MIN_COMBUSTION_EFFICIENCY;
    }
    efficiency.clamp(MIN_COMBUSTION_EFFICIENCY, MAX_COMBUSTION_EFFICIENCY)
}
