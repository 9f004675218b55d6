//! Canned engineering commentary, one entry per (parameter, bucket) pair.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Commentary {
    pub label: &'static str,
    pub reasons: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub physics_notes: &'static [&'static str],
}

const THRUST_PHYSICS: &[&str] = &[
    "Theoretical assumes 100% combustion efficiency",
    "Experimental includes real-world losses",
    "Nozzle divergence losses not in ideal theory",
    "Boundary layer effects reduce actual thrust",
];

pub const THRUST_HIGHER: Commentary = Commentary {
    label: "HIGHER THAN EXPECTED",
    reasons: &[
        "Pressure measurement calibration error (±3-5%)",
        "Combustion more efficient than predicted",
        "Fuel-rich mixture increasing chamber pressure",
        "Nozzle expansion better than design",
        "Instrumentation thermal drift",
    ],
    recommendations: &[
        "Re-calibrate pressure transducers",
        "Verify mixture ratio measurements",
        "Check for combustion instability",
        "Review theoretical assumptions",
    ],
    physics_notes: THRUST_PHYSICS,
};

pub const THRUST_LOWER: Commentary = Commentary {
    label: "LOWER THAN EXPECTED",
    reasons: &[
        "Combustion inefficiencies (2-8% typical)",
        "Nozzle boundary layer losses (3-5%)",
        "Heat losses to chamber walls (2-4%)",
        "Incomplete fuel atomization",
        "Injector pattern deficiencies",
        "Film cooling flow rate too high",
    ],
    recommendations: &[
        "Optimize injector design",
        "Increase chamber L* for complete combustion",
        "Review cooling flow distribution",
        "Check for propellant vaporization issues",
    ],
    physics_notes: THRUST_PHYSICS,
};

pub const THRUST_NOMINAL: Commentary = Commentary {
    label: "WITHIN EXPECTED RANGE",
    reasons: &[
        "Normal manufacturing tolerances (±2-3%)",
        "Expected test-to-test variability",
        "Measurement system accuracy limits",
        "Environmental condition variations",
    ],
    recommendations: &[
        "Continue monitoring",
        "Document test conditions",
        "Establish statistical baseline",
    ],
    physics_notes: THRUST_PHYSICS,
};

pub const ISP_HIGHER: Commentary = Commentary {
    label: "EXCELLENT ISP",
    reasons: &[
        "Superior nozzle expansion efficiency",
        "Better-than-predicted combustion",
        "Optimal mixture ratio achieved",
        "Reduced boundary layer losses",
    ],
    recommendations: &[
        "Document operating conditions",
        "Consider slight mixture optimization",
        "Verify measurement accuracy",
    ],
    physics_notes: &[
        "ISP highly sensitive to nozzle efficiency",
        "Small improvements in combustion yield large ISP gains",
        "Nozzle contour optimization critical",
    ],
};

pub const ISP_LOWER: Commentary = Commentary {
    label: "ISP BELOW EXPECTED",
    reasons: &[
        "Nozzle over/under expansion",
        "Combustion chamber heat losses",
        "Two-phase flow in nozzle",
        "Injector mixing deficiencies",
        "Film cooling mass flow too high",
    ],
    recommendations: &[
        "Review nozzle expansion ratio",
        "Optimize cooling flow distribution",
        "Improve injector atomization",
        "Consider chamber insulation",
    ],
    physics_notes: &[
        "1% heat loss = ~0.5% ISP loss",
        "Film cooling can reduce ISP by 2-5%",
        "Nozzle divergence angle critical for efficiency",
    ],
};

pub const ISP_NOMINAL: Commentary = Commentary {
    label: "NOMINAL ISP",
    reasons: &[
        "Expected performance for design",
        "Normal test scatter",
        "Within measurement accuracy",
    ],
    recommendations: &["Continue current design", "Monitor trend over multiple tests"],
    physics_notes: &[
        "ISP within ±2% of theoretical is excellent",
        "Real engines typically 3-8% below ideal",
        "Measurement uncertainty ±1-2% typical",
    ],
};

pub const PRESSURE_HIGHER: Commentary = Commentary {
    label: "HIGHER PRESSURE",
    reasons: &[
        "Pressure transducer calibration error",
        "Combustion more vigorous than predicted",
        "Fuel-rich mixture increasing chamber temperature",
        "Nozzle throat erosion (increased throat area)",
        "Coolant flow restriction causing backpressure",
    ],
    recommendations: &[
        "Re-calibrate pressure sensors",
        "Verify mixture ratio",
        "Check for nozzle throat erosion",
        "Review cooling system flow rates",
    ],
    physics_notes: &[
        "Chamber pressure highly sensitive to throat area",
        "1% throat erosion = ~2% pressure increase",
        "Combustion efficiency affects gas generation rate",
    ],
};

pub const PRESSURE_LOWER: Commentary = Commentary {
    label: "LOWER PRESSURE",
    reasons: &[
        "Nozzle throat larger than designed",
        "Combustion efficiency lower than predicted",
        "Fuel-lean mixture reducing gas generation",
        "Pressure measurement location effects",
        "Gas leakage in chamber",
    ],
    recommendations: &[
        "Measure actual throat diameter",
        "Improve injector mixing",
        "Check for chamber leaks",
        "Optimize mixture ratio",
    ],
    physics_notes: &[
        "Pressure ∝ mdot / throat_area",
        "Incomplete combustion reduces gas moles",
        "Measurement port location affects readings",
    ],
};

pub const PRESSURE_NOMINAL: Commentary = Commentary {
    label: "NORMAL PRESSURE",
    reasons: &[
        "Within expected measurement accuracy",
        "Normal combustion variability",
        "Manufacturing tolerances within spec",
    ],
    recommendations: &["Continue monitoring", "Document pressure trends"],
    physics_notes: &[
        "±5% pressure variation normal for rocket engines",
        "Pressure stability more important than absolute value",
        "Transient pressure spikes more concerning than steady deviation",
    ],
};

pub const TEMPERATURE_HIGHER: Commentary = Commentary {
    label: "HIGHER TEMPERATURE",
    reasons: &[
        "Optical pyrometer calibration error",
        "Combustion more complete than predicted",
        "Fuel-rich mixture increasing flame temperature",
        "Radiation from soot or particles",
        "Measurement viewing hot spots",
    ],
    recommendations: &[
        "Calibrate temperature sensors",
        "Verify optical alignment",
        "Check for combustion deposits",
        "Review mixture ratio",
    ],
    physics_notes: &[
        "Temperature measurements highly location-dependent",
        "Optical measurements see radiation, not gas temperature",
        "Soot radiation can double apparent temperature",
    ],
};

pub const TEMPERATURE_LOWER: Commentary = Commentary {
    label: "LOWER TEMPERATURE",
    reasons: &[
        "Heat losses to chamber walls",
        "Incomplete combustion",
        "Film cooling effects on measurement",
        "Fuel-lean mixture",
        "Sensor radiative cooling",
    ],
    recommendations: &[
        "Improve chamber insulation",
        "Optimize injector for better mixing",
        "Relocate temperature sensors",
        "Increase combustion efficiency",
    ],
    physics_notes: &[
        "Actual gas temperature 200-500K higher than measured",
        "Boundary layer effects cool measurements",
        "Radiation losses significant at high temperatures",
    ],
};

pub const TEMPERATURE_NOMINAL: Commentary = Commentary {
    label: "NORMAL TEMPERATURE",
    reasons: &[
        "Within measurement accuracy limits",
        "Expected thermal gradients",
        "Normal combustion temperature scatter",
    ],
    recommendations: &["Monitor temperature distribution", "Check for hot spots"],
    physics_notes: &[
        "Temperature measurements ±10% accuracy typical",
        "Gas temperature non-uniform in chamber",
        "Wall temperature ≠ gas temperature",
    ],
};

pub const EFFICIENCY_HIGHER: Commentary = Commentary {
    label: "HIGHER EFFICIENCY",
    reasons: &[
        "Combustion more complete than predicted",
        "Nozzle expansion better than design",
        "Injector mixing superior to expectations",
        "Lower-than-expected boundary layer losses",
        "Measurement systematic error",
    ],
    recommendations: &[
        "Document successful parameters",
        "Verify measurement accuracy",
        "Consider slight design optimization",
    ],
    physics_notes: &[
        "Small design improvements yield large efficiency gains",
        "Boundary layer transition affects efficiency significantly",
        "Injector optimization critical for combustion efficiency",
    ],
};

pub const EFFICIENCY_LOWER: Commentary = Commentary {
    label: "LOWER EFFICIENCY",
    reasons: &[
        "Combustion inefficiencies",
        "Nozzle boundary layer losses",
        "Heat losses to chamber walls",
        "Two-phase flow in nozzle",
        "Injector pattern deficiencies",
    ],
    recommendations: &[
        "Optimize injector design",
        "Increase chamber L*",
        "Improve nozzle contour",
        "Reduce cooling flow if possible",
    ],
    physics_notes: &[
        "Efficiency = f(combustion, nozzle, injector)",
        "Each 1% combustion loss = ~0.7% overall efficiency loss",
        "Nozzle losses typically 3-8% in real engines",
    ],
};

pub const EFFICIENCY_NOMINAL: Commentary = Commentary {
    label: "EXPECTED EFFICIENCY",
    reasons: &[
        "Within expected range for this engine class",
        "Normal manufacturing tolerances",
        "Typical real-world losses accounted for",
    ],
    recommendations: &["Continue current design", "Monitor efficiency trends"],
    physics_notes: &[
        "Real engines typically 5-15% below theoretical maximum",
        "Efficiency improves with scale (larger engines more efficient)",
        "Testing refines efficiency predictions",
    ],
};

pub const GENERIC: Commentary = Commentary {
    label: "PARAMETER VARIATION",
    reasons: &[
        "Measurement system accuracy limits",
        "Environmental condition variations",
        "Test-to-test variability",
        "Data acquisition timing effects",
    ],
    recommendations: &[
        "Verify measurement calibration",
        "Repeat test for confirmation",
        "Check data acquisition setup",
    ],
    physics_notes: &[
        "All measurements have inherent uncertainty",
        "Rocket testing has significant test-to-test variation",
        "Multiple data points needed for statistical confidence",
    ],
};
