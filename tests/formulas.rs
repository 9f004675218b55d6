use rocket_engine_studio::Catalog;
use rocket_engine_studio::catalog::{CatalogError, PropellantFamily, propellant};
use rocket_engine_studio::config::{InjectorType, PropellantConfig};
use rocket_engine_studio::performance::{self, ballistics, combustion, erosion, nozzle};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

fn liquid(name: &str, optimal_of: f64, combustion_temp_k: f64) -> PropellantConfig {
    PropellantConfig {
        name: name.to_string(),
        family: PropellantFamily::Hydrocarbon,
        optimal_of,
        gamma_range: [1.15, 1.20, 1.25],
        c_star: 1_700.0,
        combustion_temp_k,
        density_impulse: 3_000.0,
        toxicity: "Low".to_string(),
        handling: "Easy".to_string(),
        cost: "Low".to_string(),
        flight_heritage: "None".to_string(),
        solid: None,
        hybrid: None,
    }
}

#[test]
fn gamma_uses_mid_value_for_fixed_composition() {
    let catalog = catalog();
    for name in ["Hydrazine (N2H4)", "HTPB/AP", "Hydrogen Peroxide (98%)"] {
        let prop = catalog.propellant(name).expect("propellant");
        let mid = prop.gamma_range[1];
        for of in [0.0, 0.5, 2.5, 100.0] {
            assert_eq!(combustion::gamma(prop, of), mid, "{name} at O/F {of}");
        }
    }
}

#[test]
fn gamma_brackets_mixture_ratio() {
    let catalog = catalog();
    let prop = catalog.propellant("RP-1/LOX").expect("RP-1/LOX");
    let [lean, mid, rich] = prop.gamma_range;
    assert_eq!(combustion::gamma(prop, 1.0), lean);
    assert_eq!(combustion::gamma(prop, 2.3), mid);
    assert_eq!(combustion::gamma(prop, 2.3 * 1.2), rich);
    assert_eq!(performance::gamma(&catalog, "rp-1/lox", 2.3).expect("keyed"), mid);
}

#[test]
fn c_star_matches_base_at_reference_point() {
    let record = propellant::from_config(&liquid("Reference Mix", 2.0, 3_500.0)).expect("record");
    let c_star = combustion::characteristic_velocity(&record, 20.0, 2.0);
    assert!((c_star - 1_700.0).abs() < 1e-9, "c* = {c_star}");
}

#[test]
fn c_star_rp1_reference_applies_only_temperature_factor() {
    let c_star = performance::characteristic_velocity(&catalog(), "RP-1/LOX", 20.0, 2.3)
        .expect("RP-1/LOX c*");
    let expected = 1_800.0 * (1.0 + 0.0001 * (3_700.0 - 3_500.0));
    assert!((c_star - expected).abs() < 1e-9, "c* = {c_star}, expected {expected}");
}

#[test]
fn c_star_stays_positive_for_extreme_inputs() {
    let catalog = catalog();
    for prop in catalog.propellants() {
        for pc in [-10.0, 0.0, 1.0, 35.0, 500.0] {
            for of in [0.0, 0.01, prop.optimal_of, 40.0, 1.0e4] {
                let c_star = combustion::characteristic_velocity(prop, pc, of);
                assert!(
                    c_star.is_finite() && c_star > 0.0,
                    "{} at Pc {pc}, O/F {of}: {c_star}",
                    prop.name
                );
            }
        }
    }
}

#[test]
fn combustion_efficiency_is_clamped() {
    let catalog = catalog();
    let injectors = [
        InjectorType::Coaxial,
        InjectorType::LikeOnLike,
        InjectorType::Impinging,
        InjectorType::Swirl,
        InjectorType::Other,
    ];
    for prop in catalog.propellants() {
        for pc in [0.1, 20.0, 35.0, 300.0, 1.0e5] {
            for of in [0.0, 0.1, prop.optimal_of, 50.0] {
                for injector in injectors {
                    let eta = combustion::combustion_efficiency(prop, pc, of, injector);
                    assert!(
                        (0.85..=0.995).contains(&eta),
                        "{} Pc {pc} O/F {of} {injector}: {eta}",
                        prop.name
                    );
                }
            }
        }
    }
}

#[test]
fn solids_ignore_injector_and_mixture_ratio() {
    let catalog = catalog();
    let prop = catalog.propellant("HTPB/AP").expect("HTPB/AP");
    let coaxial = combustion::combustion_efficiency(prop, 50.0, 0.0, InjectorType::Coaxial);
    let swirl = combustion::combustion_efficiency(prop, 50.0, 7.0, InjectorType::Swirl);
    assert_eq!(coaxial, swirl);
    // 0.99 * (1 + 0.001 * 30) exceeds the ceiling.
    assert_eq!(coaxial, 0.995);

    let low = combustion::combustion_efficiency(prop, 10.0, 0.0, InjectorType::Swirl);
    assert!((low - 0.99 * 0.99).abs() < 1e-12, "eta = {low}");
}

#[test]
fn nozzle_efficiency_is_floored() {
    for eps in [1.0, 25.0, 45.0, 100.0, 1_000.0] {
        for pc in [-5.0, 0.0, 35.0, 1.0e6] {
            let eta = nozzle::nozzle_efficiency(eps, pc);
            assert!(eta >= 0.90, "eps {eps} Pc {pc}: {eta}");
            assert!(eta <= 0.98);
        }
    }
}

#[test]
fn nozzle_divergence_brackets() {
    assert_eq!(nozzle::divergence_loss(25.0), 0.01);
    assert_eq!(nozzle::divergence_loss(30.0), 0.02);
    assert_eq!(nozzle::divergence_loss(59.9), 0.02);
    assert_eq!(nozzle::divergence_loss(60.0), 0.03);
    assert_eq!(nozzle::boundary_layer_loss(-10.0), 0.0);

    let eta = nozzle::nozzle_efficiency(25.0, 50.0);
    assert!((eta - (0.98 - 0.015 - 0.01)).abs() < 1e-12, "eta = {eta}");
}

#[test]
fn erosion_scales_with_oxidizer() {
    let catalog = catalog();
    let copper = catalog.material("Copper (OFHC)").expect("copper");
    let lox = erosion::erosion_rate(35.0, copper, 5.0e6, "RP-1/LOX");
    let nto = erosion::erosion_rate(35.0, copper, 5.0e6, "MMH/NTO");
    let other = erosion::erosion_rate(35.0, copper, 5.0e6, "HTPB/AP");

    let base = copper.erosion_rate * (1.0 + 0.001 * 5.0);
    assert!((other - base).abs() < 1e-15);
    assert!((lox - base * 1.2).abs() < 1e-15);
    assert!((nto - base * 1.3).abs() < 1e-15);

    let keyed = performance::erosion_rate(&catalog, 35.0, "copper (ofhc)", 5.0e6, "RP-1/LOX")
        .expect("keyed erosion");
    assert_eq!(keyed, lox);
}

#[test]
fn erosion_is_zero_without_chamber_pressure() {
    let catalog = catalog();
    let copper = catalog.material("Copper (OFHC)").expect("copper");
    assert_eq!(erosion::erosion_rate(0.0, copper, 5.0e6, "RP-1/LOX"), 0.0);
    assert_eq!(erosion::erosion_rate(-10.0, copper, 5.0e6, "RP-1/LOX"), 0.0);
}

#[test]
fn solid_burn_rate_reproduces_reference() {
    let catalog = catalog();
    let rate = performance::solid_burn_rate(&catalog, "HTPB/AP", 70.0).expect("burn rate");
    assert_eq!(rate, 8.0);

    let prop = catalog.propellant("HTPB/AP").expect("HTPB/AP");
    let higher = ballistics::solid_burn_rate(prop, 140.0);
    assert!((higher - 8.0 * 2f64.powf(0.3)).abs() < 1e-9);

    let liquid = catalog.propellant("LH2/LOX").expect("LH2/LOX");
    assert_eq!(ballistics::solid_burn_rate(liquid, 70.0), 0.0);
}

#[test]
fn hybrid_regression_reproduces_reference_at_any_pressure() {
    let catalog = catalog();
    for pc in [-5.0, 0.0, 5.0, 35.0, 250.0] {
        let rate = performance::hybrid_regression_rate(&catalog, "HTPB/N2O", 200.0, pc)
            .expect("regression rate");
        assert_eq!(rate, 1.2, "Pc {pc}");
    }
    let solid = catalog.propellant("APCP").expect("APCP");
    assert_eq!(ballistics::hybrid_regression_rate(solid, 200.0, 35.0), 0.0);
}

#[test]
fn unknown_keys_are_lookup_errors() {
    let catalog = catalog();
    assert!(matches!(
        performance::gamma(&catalog, "Unobtainium/LOX", 2.0),
        Err(CatalogError::UnknownPropellant(_))
    ));
    assert!(matches!(
        performance::erosion_rate(&catalog, 35.0, "Adamantium", 5.0e6, "RP-1/LOX"),
        Err(CatalogError::UnknownMaterial(_))
    ));
}
