//! Rocket engine performance analysis.
//!
//! The workspace crates are re-exported here so front-ends (the `engine` CLI, tests, other
//! tools) can depend on one library: reference tables in [`catalog`], closed-form formulas in
//! [`performance`], acoustic modes in [`acoustics`], deviation commentary in [`diagnostics`],
//! the end-to-end analysis in [`session`], and file output in [`export`].

pub use studio_acoustics as acoustics;
pub use studio_catalog as catalog;
pub use studio_config as config;
pub use studio_core::{constants, geometry, stats, units};
pub use studio_diagnostics as diagnostics;
pub use studio_export as export;
pub use studio_performance as performance;
pub use studio_session as session;

pub use studio_catalog::Catalog;
pub use studio_config::OperatingParameters;
pub use studio_session::{EngineSession, ResultsBundle, SessionError};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
