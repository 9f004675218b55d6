//! Reference tables for propellants, wall materials, engine cycles, and nozzle designs.
//!
//! A [`Catalog`] is built once (from the bundled YAML tables or from user files) and then
//! only read. Sessions borrow it, so any number of analyses can share one instance.

pub mod propellant;

use std::collections::BTreeMap;
use std::path::Path;

use studio_config::ConfigError;
use thiserror::Error;
use tracing::debug;

pub use propellant::{HybridFuel, Propellant, PropellantClass, SolidGrain};
pub use studio_config::{
    CycleConfig as Cycle, MaterialConfig as Material, NozzleConfig as Nozzle, NozzleFamily,
    PropellantFamily,
};

/// Errors surfaced when building or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("propellant '{0}' not found in catalog")]
    UnknownPropellant(String),
    #[error("material '{0}' not found in catalog")]
    UnknownMaterial(String),
    #[error("engine cycle '{0}' not found in catalog")]
    UnknownCycle(String),
    #[error("nozzle type '{0}' not found in catalog")]
    UnknownNozzle(String),
    #[error("invalid catalog record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },
    #[error("duplicate catalog entry '{0}'")]
    Duplicate(String),
    #[error("failed to load catalog: {0}")]
    Config(#[from] ConfigError),
}

/// Immutable collection of every reference table used by the engine formulas.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    propellants: BTreeMap<String, Propellant>,
    materials: BTreeMap<String, Material>,
    cycles: BTreeMap<String, Cycle>,
    nozzles: BTreeMap<String, Nozzle>,
}

impl Catalog {
    /// Catalog assembled from the tables bundled with `studio_config`.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_configs(
            &studio_config::builtin_propellants()?,
            studio_config::builtin_materials()?,
            studio_config::builtin_cycles()?,
            studio_config::builtin_nozzles()?,
        )
    }

    /// Build a catalog from a directory holding `propellants`, `materials`, `cycles`, and
    /// `nozzles` tables (`.yaml`, `.yml`, or a sub-directory of `.toml` files). Tables that are
    /// absent fall back to the bundled ones.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let propellants = match locate(dir, "propellants") {
            Some(path) => studio_config::load_propellants(path)?,
            None => studio_config::builtin_propellants()?,
        };
        let materials = match locate(dir, "materials") {
            Some(path) => studio_config::load_materials(path)?,
            None => studio_config::builtin_materials()?,
        };
        let cycles = match locate(dir, "cycles") {
            Some(path) => studio_config::load_cycles(path)?,
            None => studio_config::builtin_cycles()?,
        };
        let nozzles = match locate(dir, "nozzles") {
            Some(path) => studio_config::load_nozzles(path)?,
            None => studio_config::builtin_nozzles()?,
        };
        Self::from_configs(&propellants, materials, cycles, nozzles)
    }

    /// Validate and index configuration records.
    pub fn from_configs(
        propellants: &[studio_config::PropellantConfig],
        materials: Vec<Material>,
        cycles: Vec<Cycle>,
        nozzles: Vec<Nozzle>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();
        for config in propellants {
            let record = propellant::from_config(config)?;
            insert_unique(&mut catalog.propellants, record.name.clone(), record)?;
        }
        for material in materials {
            if !(material.yield_strength_pa > 0.0) {
                return Err(CatalogError::InvalidRecord {
                    name: material.name,
                    reason: "yield strength must be strictly positive".to_string(),
                });
            }
            insert_unique(&mut catalog.materials, material.name.clone(), material)?;
        }
        for cycle in cycles {
            insert_unique(&mut catalog.cycles, cycle.name.clone(), cycle)?;
        }
        for nozzle in nozzles {
            insert_unique(&mut catalog.nozzles, nozzle.name.clone(), nozzle)?;
        }
        debug!(
            propellants = catalog.propellants.len(),
            materials = catalog.materials.len(),
            cycles = catalog.cycles.len(),
            nozzles = catalog.nozzles.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Look up a propellant by name (exact match first, then case-insensitive).
    pub fn propellant(&self, name: &str) -> Result<&Propellant, CatalogError> {
        find(&self.propellants, name).ok_or_else(|| CatalogError::UnknownPropellant(name.into()))
    }

    pub fn material(&self, name: &str) -> Result<&Material, CatalogError> {
        find(&self.materials, name).ok_or_else(|| CatalogError::UnknownMaterial(name.into()))
    }

    pub fn cycle(&self, name: &str) -> Result<&Cycle, CatalogError> {
        find(&self.cycles, name).ok_or_else(|| CatalogError::UnknownCycle(name.into()))
    }

    pub fn nozzle(&self, name: &str) -> Result<&Nozzle, CatalogError> {
        find(&self.nozzles, name).ok_or_else(|| CatalogError::UnknownNozzle(name.into()))
    }

    pub fn propellants(&self) -> impl Iterator<Item = &Propellant> {
        self.propellants.values()
    }

    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    pub fn cycles(&self) -> impl Iterator<Item = &Cycle> {
        self.cycles.values()
    }

    pub fn nozzles(&self) -> impl Iterator<Item = &Nozzle> {
        self.nozzles.values()
    }
}

fn insert_unique<T>(
    map: &mut BTreeMap<String, T>,
    key: String,
    value: T,
) -> Result<(), CatalogError> {
    if map.contains_key(&key) {
        return Err(CatalogError::Duplicate(key));
    }
    map.insert(key, value);
    Ok(())
}

fn find<'a, T>(map: &'a BTreeMap<String, T>, name: &str) -> Option<&'a T> {
    map.get(name).or_else(|| {
        let upper = name.to_uppercase();
        map.iter()
            .find(|(key, _)| key.to_uppercase() == upper)
            .map(|(_, value)| value)
    })
}

fn locate(dir: &Path, stem: &str) -> Option<std::path::PathBuf> {
    ["yaml", "yml"]
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .chain(std::iter::once(dir.join(stem)))
        .find(|path| path.exists())
}
