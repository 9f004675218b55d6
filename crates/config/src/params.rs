use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use studio_core::constants::DEFAULT_NOISE_SEED;

use crate::{ConfigError, is_toml};

/// Injector element geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InjectorType {
    #[default]
    Coaxial,
    LikeOnLike,
    Impinging,
    Swirl,
    /// Any element pattern without a dedicated mixing factor.
    Other,
}

impl InjectorType {
    pub fn as_str(self) -> &'static str {
        match self {
            InjectorType::Coaxial => "coaxial",
            InjectorType::LikeOnLike => "like-on-like",
            InjectorType::Impinging => "impinging",
            InjectorType::Swirl => "swirl",
            InjectorType::Other => "other",
        }
    }
}

impl FromStr for InjectorType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "coaxial" => InjectorType::Coaxial,
            "like-on-like" | "like_on_like" => InjectorType::LikeOnLike,
            "impinging" => InjectorType::Impinging,
            "swirl" => InjectorType::Swirl,
            _ => InjectorType::Other,
        })
    }
}

impl From<String> for InjectorType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(injector) => injector,
            Err(never) => match never {},
        }
    }
}

impl From<InjectorType> for String {
    fn from(value: InjectorType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for InjectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-chosen inputs for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingParameters {
    /// Target thrust (N).
    pub thrust_n: f64,
    /// Chamber pressure (bar).
    pub chamber_pressure_bar: f64,
    /// Oxidizer-to-fuel mass ratio; zero for solids and monopropellants.
    pub of_ratio: f64,
    /// Burn duration (s).
    pub burn_time_s: f64,
    /// Propellant catalog key.
    pub propellant: String,
    /// Nozzle exit-to-throat area ratio.
    pub expansion_ratio: f64,
    /// Material catalog key.
    pub material: String,
    #[serde(default)]
    pub injector: InjectorType,
    /// Engine cycle catalog key.
    pub cycle: String,
    /// Nozzle catalog key.
    pub nozzle: String,
    /// Seed for the synthetic measurement noise.
    #[serde(default = "default_noise_seed")]
    pub noise_seed: u64,
}

fn default_noise_seed() -> u64 {
    DEFAULT_NOISE_SEED
}

impl Default for OperatingParameters {
    fn default() -> Self {
        Self {
            thrust_n: 1_550.0,
            chamber_pressure_bar: 35.0,
            of_ratio: 2.5,
            burn_time_s: 180.0,
            propellant: "RP-1/LOX".to_string(),
            expansion_ratio: 40.0,
            material: "Copper (OFHC)".to_string(),
            injector: InjectorType::Coaxial,
            cycle: "Gas Generator".to_string(),
            nozzle: "Bell (NASA-SP)".to_string(),
            noise_seed: DEFAULT_NOISE_SEED,
        }
    }
}

impl OperatingParameters {
    /// Check that every numeric input is finite.
    ///
    /// Zero and negative values are accepted; the analysis guards its own degenerate divisions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("thrust_n", self.thrust_n)?;
        require_finite("chamber_pressure_bar", self.chamber_pressure_bar)?;
        require_finite("of_ratio", self.of_ratio)?;
        require_finite("burn_time_s", self.burn_time_s)?;
        require_finite("expansion_ratio", self.expansion_ratio)?;
        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            field,
            reason: format!("must be finite, got {value}"),
        })
    }
}

/// Load and validate a single operating point from a TOML or YAML file.
pub fn load_operating_parameters<P: AsRef<Path>>(
    path: P,
) -> Result<OperatingParameters, ConfigError> {
    let path = path.as_ref();
    let params: OperatingParameters = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    params.validate()?;
    Ok(params)
}
