use std::f64::consts::PI;

use rocket_engine_studio::Catalog;
use rocket_engine_studio::acoustics::{
    ModeKind, Risk, StabilityMargin, analyze_acoustic_modes, analyze_modes, speed_of_sound,
};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

#[test]
fn kerosene_chamber_frequencies() {
    let report = analyze_acoustic_modes(&catalog(), 35.0, 1.0, 0.5, "RP-1/LOX").expect("report");
    assert_eq!(report.speed_of_sound_m_s, 1_200.0);
    assert_eq!(report.modes.len(), 3);

    let l1 = report.mode(ModeKind::FirstLongitudinal).expect("1L");
    assert!((l1.frequency_hz - 600.0).abs() < 1e-9);
    assert_eq!(l1.risk, Risk::Medium);

    let t1 = report.mode(ModeKind::FirstTangential).expect("1T");
    let expected_t1 = 1.84 * 1_200.0 / (PI * 0.5);
    assert!((t1.frequency_hz - expected_t1).abs() < 1e-9);
    assert!((t1.frequency_hz - 1_405.7).abs() < 0.5);
    assert_eq!(t1.risk, Risk::High);

    let r1 = report.mode(ModeKind::FirstRadial).expect("1R");
    assert!((r1.frequency_hz - 3.83 * 1_200.0 / (PI * 0.5)).abs() < 1e-9);
    assert_eq!(r1.risk, Risk::Low);

    assert_eq!(report.longitudinal_frequency_hz(), l1.frequency_hz);
}

#[test]
fn speed_of_sound_by_family() {
    let catalog = catalog();
    let lh2 = catalog.propellant("LH2/LOX").expect("LH2/LOX");
    let mmh = catalog.propellant("MMH/NTO").expect("MMH/NTO");
    assert_eq!(speed_of_sound(lh2), 1_400.0);
    assert_eq!(speed_of_sound(mmh), 1_300.0);
}

#[test]
fn reference_pressure_flags_tangential_mode() {
    let report = analyze_acoustic_modes(&catalog(), 35.0, 0.4, 0.2, "RP-1/LOX").expect("report");
    let t1 = report.mode(ModeKind::FirstTangential).expect("1T");
    assert!((t1.growth_rate - 0.12).abs() < 1e-12);
    assert!(t1.is_dangerous());
    assert_eq!(report.dangerous_modes, vec![ModeKind::FirstTangential]);
    assert_eq!(report.stability_margin, StabilityMargin::Poor);
    assert_eq!(report.stability_summary(), "Poor (50%)");
    assert_eq!(
        report.recommendations,
        vec!["1T mode unstable: Baffles or change injector pattern".to_string()]
    );
    assert!((report.max_growth_rate() - 0.12).abs() < 1e-12);
}

#[test]
fn moderate_pressure_leaves_tangential_marginal() {
    let report = analyze_acoustic_modes(&catalog(), 20.0, 0.4, 0.2, "LH2/LOX").expect("report");
    assert!(report.dangerous_modes.is_empty());
    assert_eq!(report.stability_margin, StabilityMargin::Good);
    assert_eq!(report.stability_summary(), "Good (80%)");
    assert_eq!(
        report.recommendations,
        vec!["1T mode marginal: Monitor during testing".to_string()]
    );
}

#[test]
fn low_pressure_is_stable() {
    let catalog = catalog();
    let prop = catalog.propellant("HTPB/AP").expect("HTPB/AP");
    let report = analyze_modes(10.0, 0.3, 0.15, prop);
    assert_eq!(report.stability_margin, StabilityMargin::Excellent);
    assert_eq!(report.stability_margin.value(), 95);
    assert_eq!(report.recommendations, vec!["All acoustic modes stable".to_string()]);
}

#[test]
fn growth_rates_scale_with_pressure() {
    let catalog = catalog();
    let prop = catalog.propellant("RP-1/LOX").expect("RP-1/LOX");
    let low = analyze_modes(20.0, 0.4, 0.2, prop);
    let high = analyze_modes(70.0, 0.4, 0.2, prop);
    for kind in ModeKind::ALL {
        let lo = low.mode(kind).expect("mode").growth_rate;
        let hi = high.mode(kind).expect("mode").growth_rate;
        assert!(hi > lo, "{}", kind.label());
        // Frequencies depend on geometry only.
        assert_eq!(
            low.mode(kind).expect("mode").frequency_hz,
            high.mode(kind).expect("mode").frequency_hz
        );
    }
}

#[test]
fn degenerate_geometry_yields_zero_frequency() {
    let catalog = catalog();
    let prop = catalog.propellant("RP-1/LOX").expect("RP-1/LOX");
    let report = analyze_modes(35.0, 0.0, 0.0, prop);
    for mode in &report.modes {
        assert_eq!(mode.frequency_hz, 0.0, "{}", mode.kind.label());
    }
}

#[test]
fn unknown_propellant_is_an_error() {
    assert!(analyze_acoustic_modes(&catalog(), 35.0, 1.0, 0.5, "Unobtainium").is_err());
}
