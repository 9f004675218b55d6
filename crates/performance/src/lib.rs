//! Closed-form performance formulas.
//!
//! Each submodule works on reference records directly. The functions re-exported at the crate
//! root take a [`Catalog`] and a key instead, and fail with [`CatalogError`] when the key is
//! not in the tables.

pub mod ballistics;
pub mod combustion;
pub mod erosion;
pub mod nozzle;

use studio_catalog::{Catalog, CatalogError};
use studio_config::InjectorType;

pub use ballistics::{HYBRID_REFERENCE_FLUX, SOLID_REFERENCE_PRESSURE_BAR};
pub use erosion::Oxidizer;
pub use nozzle::{NozzleLosses, nozzle_efficiency};

/// Specific-heat ratio for `propellant` at `of_ratio`.
pub fn gamma(catalog: &Catalog, propellant: &str, of_ratio: f64) -> Result<f64, CatalogError> {
    Ok(combustion::gamma(catalog.propellant(propellant)?, of_ratio))
}

/// Corrected characteristic velocity (m/s).
pub fn characteristic_velocity(
    catalog: &Catalog,
    propellant: &str,
    pc_bar: f64,
    of_ratio: f64,
) -> Result<f64, CatalogError> {
    Ok(combustion::characteristic_velocity(
        catalog.propellant(propellant)?,
        pc_bar,
        of_ratio,
    ))
}

/// Combustion efficiency in `[0.85, 0.995]`.
pub fn combustion_efficiency(
    catalog: &Catalog,
    propellant: &str,
    pc_bar: f64,
    of_ratio: f64,
    injector: InjectorType,
) -> Result<f64, CatalogError> {
    Ok(combustion::combustion_efficiency(
        catalog.propellant(propellant)?,
        pc_bar,
        of_ratio,
        injector,
    ))
}

/// Throat erosion rate for a material/propellant pair at the given heat flux (W/m²).
pub fn erosion_rate(
    catalog: &Catalog,
    pc_bar: f64,
    material: &str,
    heat_flux_w_m2: f64,
    propellant: &str,
) -> Result<f64, CatalogError> {
    let material = catalog.material(material)?;
    let propellant = catalog.propellant(propellant)?;
    Ok(erosion::erosion_rate(
        pc_bar,
        material,
        heat_flux_w_m2,
        &propellant.name,
    ))
}

/// Solid grain burn rate (mm/s); zero for non-solids.
pub fn solid_burn_rate(
    catalog: &Catalog,
    propellant: &str,
    pc_bar: f64,
) -> Result<f64, CatalogError> {
    Ok(ballistics::solid_burn_rate(
        catalog.propellant(propellant)?,
        pc_bar,
    ))
}

/// Hybrid fuel regression rate (mm/s); zero for non-hybrids.
pub fn hybrid_regression_rate(
    catalog: &Catalog,
    propellant: &str,
    oxidizer_flux: f64,
    pc_bar: f64,
) -> Result<f64, CatalogError> {
    Ok(ballistics::hybrid_regression_rate(
        catalog.propellant(propellant)?,
        oxidizer_flux,
        pc_bar,
    ))
}
