//! Nozzle efficiency from boundary-layer and divergence losses.

/// Efficiency of a perfectly contoured nozzle before losses.
pub const IDEAL_NOZZLE_EFFICIENCY: f64 = 0.98;
/// Floor applied to the final nozzle efficiency.
pub const MIN_NOZZLE_EFFICIENCY: f64 = 0.90;

/// Individual loss terms subtracted from the ideal efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleLosses {
    pub boundary_layer: f64,
    pub divergence: f64,
}

/// Divergence loss bracketed by expansion ratio.
pub fn divergence_loss(expansion_ratio: f64) -> f64 {
    if expansion_ratio < 30.0 {
        0.01
    } else if expansion_ratio < 60.0 {
        0.02
    } else {
        0.03
    }
}

/// Boundary-layer loss growing with the square root of chamber pressure.
pub fn boundary_layer_loss(pc_bar: f64) -> f64 {
    0.015 * (pc_bar.max(0.0) / 50.0).sqrt()
}

/// Loss breakdown for an operating point.
pub fn losses(expansion_ratio: f64, pc_bar: f64) -> NozzleLosses {
    NozzleLosses {
        boundary_layer: boundary_layer_loss(pc_bar),
        divergence: divergence_loss(expansion_ratio),
    }
}

/// Nozzle efficiency, floored at 0.90.
pub fn nozzle_efficiency(expansion_ratio: f64, pc_bar: f64) -> f64 {
    let losses = losses(expansion_ratio, pc_bar);
    (IDEAL_NOZZLE_EFFICIENCY - losses.boundary_layer - losses.divergence)
        .max(MIN_NOZZLE_EFFICIENCY)
}
