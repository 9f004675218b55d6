//! Configuration models and loaders for the Rocket Engine Studio.
//!
//! Reference catalogs ship as YAML documents compiled into the crate; user catalogs and
//! operating-point files can be loaded from YAML or TOML with the same record shapes.

mod params;

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use params::{InjectorType, OperatingParameters, load_operating_parameters};

const BUILTIN_PROPELLANTS: &str = include_str!("../catalog/propellants.yaml");
const BUILTIN_MATERIALS: &str = include_str!("../catalog/materials.yaml");
const BUILTIN_CYCLES: &str = include_str!("../catalog/cycles.yaml");
const BUILTIN_NOZZLES: &str = include_str!("../catalog/nozzles.yaml");

/// Chemical family a propellant combination belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropellantFamily {
    Kerosene,
    Hydrocarbon,
    Methane,
    Hydrogen,
    Hypergolic,
    Green,
    Experimental,
    Monopropellant,
    Solid,
    Hybrid,
}

impl PropellantFamily {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PropellantFamily::Kerosene => "Kerosene",
            PropellantFamily::Hydrocarbon => "Hydrocarbon",
            PropellantFamily::Methane => "Methane",
            PropellantFamily::Hydrogen => "Hydrogen",
            PropellantFamily::Hypergolic => "Hypergolic",
            PropellantFamily::Green => "Green",
            PropellantFamily::Experimental => "Experimental",
            PropellantFamily::Monopropellant => "Monopropellant",
            PropellantFamily::Solid => "Solid",
            PropellantFamily::Hybrid => "Hybrid",
        }
    }
}

/// Propellant entry as it appears in catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct PropellantConfig {
    pub name: String,
    pub family: PropellantFamily,
    pub optimal_of: f64,
    pub gamma_range: [f64; 3],
    pub c_star: f64,
    pub combustion_temp_k: f64,
    pub density_impulse: f64,
    pub toxicity: String,
    pub handling: String,
    pub cost: String,
    pub flight_heritage: String,
    #[serde(default)]
    pub solid: Option<SolidGrainConfig>,
    #[serde(default)]
    pub hybrid: Option<HybridFuelConfig>,
}

/// Ballistic data for solid grains (Vieille's law, referenced to 70 bar).
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SolidGrainConfig {
    pub burn_rate_mm_s: f64,
    pub pressure_exponent: f64,
    pub density_kg_m3: f64,
}

/// Regression data for hybrid fuels (Marxman form, referenced to 200 kg/m²s).
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct HybridFuelConfig {
    pub regression_rate_mm_s: f64,
    pub flux_exponent: f64,
    pub fuel_density_kg_m3: f64,
}

/// Structural and thermal properties of a wall material.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MaterialConfig {
    pub name: String,
    pub density_kg_m3: f64,
    pub conductivity_w_mk: f64,
    pub specific_heat_j_kgk: f64,
    pub yield_strength_pa: f64,
    pub ultimate_strength_pa: f64,
    pub youngs_modulus_pa: f64,
    pub poisson_ratio: f64,
    pub thermal_expansion_per_k: f64,
    pub max_temp_k: f64,
    pub creep_limit_k: f64,
    pub erosion_rate: f64,
    pub cost: String,
}

/// Engine power cycle descriptor.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CycleConfig {
    pub name: String,
    pub description: String,
    pub efficiency: f64,
    pub complexity: String,
    pub cost: String,
    pub reliability: String,
    pub throttle_range: String,
    pub examples: String,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub disadvantages: Vec<String>,
}

/// Nozzle contour family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NozzleFamily {
    Conical,
    Bell,
    ConvergentDivergent,
    Aerospike,
    DualBell,
    ExpansionDeflection,
}

/// Nozzle design descriptor.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NozzleConfig {
    pub name: String,
    pub family: NozzleFamily,
    pub divergence_efficiency: f64,
    pub manufacturing_cost: String,
    pub length_factor: f64,
    pub weight_factor: f64,
    pub cooling_complexity: String,
    pub application: String,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid operating parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

/// Propellant combinations bundled with the crate.
pub fn builtin_propellants() -> Result<Vec<PropellantConfig>, ConfigError> {
    Ok(serde_yaml::from_str(BUILTIN_PROPELLANTS)?)
}

/// Wall materials bundled with the crate.
pub fn builtin_materials() -> Result<Vec<MaterialConfig>, ConfigError> {
    Ok(serde_yaml::from_str(BUILTIN_MATERIALS)?)
}

/// Engine cycles bundled with the crate.
pub fn builtin_cycles() -> Result<Vec<CycleConfig>, ConfigError> {
    Ok(serde_yaml::from_str(BUILTIN_CYCLES)?)
}

/// Nozzle designs bundled with the crate.
pub fn builtin_nozzles() -> Result<Vec<NozzleConfig>, ConfigError> {
    Ok(serde_yaml::from_str(BUILTIN_NOZZLES)?)
}

/// Load propellant records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_propellants<P: AsRef<Path>>(path: P) -> Result<Vec<PropellantConfig>, ConfigError> {
    load_records(path)
}

/// Load material records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_materials<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialConfig>, ConfigError> {
    load_records(path)
}

/// Load cycle records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_cycles<P: AsRef<Path>>(path: P) -> Result<Vec<CycleConfig>, ConfigError> {
    load_records(path)
}

/// Load nozzle records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_nozzles<P: AsRef<Path>>(path: P) -> Result<Vec<NozzleConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

pub(crate) fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
