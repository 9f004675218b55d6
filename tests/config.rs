use std::fs;

use rocket_engine_studio::config::{
    ConfigError, InjectorType, OperatingParameters, load_operating_parameters,
};
use tempfile::tempdir;

#[test]
fn defaults_describe_reference_engine() {
    let params = OperatingParameters::default();
    assert_eq!(params.propellant, "RP-1/LOX");
    assert_eq!(params.thrust_n, 1_550.0);
    assert_eq!(params.chamber_pressure_bar, 35.0);
    assert_eq!(params.injector, InjectorType::Coaxial);
    assert_eq!(params.noise_seed, 42);
    params.validate().expect("defaults are valid");
}

#[test]
fn toml_parameters_load_with_defaulted_fields() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("methalox.toml");
    fs::write(
        &path,
        r#"
thrust_n = 2500.0
chamber_pressure_bar = 60.0
of_ratio = 3.4
burn_time_s = 90.0
propellant = "Methane/LOX (CH4/LOX)"
expansion_ratio = 25.0
material = "Inconel 718"
cycle = "Expander Cycle"
nozzle = "Dual-Bell"
"#,
    )
    .expect("write params");

    let params = load_operating_parameters(&path).expect("load params");
    assert_eq!(params.thrust_n, 2_500.0);
    assert_eq!(params.cycle, "Expander Cycle");
    assert_eq!(params.injector, InjectorType::Coaxial);
    assert_eq!(params.noise_seed, 42);
}

#[test]
fn yaml_parameters_load_with_injector_and_seed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("motor.yaml");
    fs::write(
        &path,
        r#"
thrust_n: 5000.0
chamber_pressure_bar: 70.0
of_ratio: 0.0
burn_time_s: 20.0
propellant: HTPB/AP
expansion_ratio: 12.0
material: Tungsten-Copper (W-Cu)
injector: Like_On_Like
cycle: Pressure Fed
nozzle: Conical (15°)
noise_seed: 7
"#,
    )
    .expect("write params");

    let params = load_operating_parameters(&path).expect("load params");
    assert_eq!(params.injector, InjectorType::LikeOnLike);
    assert_eq!(params.noise_seed, 7);
    assert_eq!(params.of_ratio, 0.0);
}

#[test]
fn injector_names_parse_leniently() {
    let cases = [
        ("coaxial", InjectorType::Coaxial),
        ("  Swirl ", InjectorType::Swirl),
        ("IMPINGING", InjectorType::Impinging),
        ("like-on-like", InjectorType::LikeOnLike),
        ("pintle", InjectorType::Other),
    ];
    for (text, expected) in cases {
        let parsed: InjectorType = text.parse().expect("infallible");
        assert_eq!(parsed, expected, "{text:?}");
    }
    assert_eq!(InjectorType::LikeOnLike.to_string(), "like-on-like");
}

#[test]
fn validation_rejects_non_finite_inputs() {
    let cases: [(&str, fn(&mut OperatingParameters)); 5] = [
        ("thrust_n", |p| p.thrust_n = f64::NAN),
        ("chamber_pressure_bar", |p| p.chamber_pressure_bar = f64::NEG_INFINITY),
        ("burn_time_s", |p| p.burn_time_s = f64::NAN),
        ("expansion_ratio", |p| p.expansion_ratio = f64::INFINITY),
        ("of_ratio", |p| p.of_ratio = f64::INFINITY),
    ];
    for (field, mutate) in cases {
        let mut params = OperatingParameters::default();
        mutate(&mut params);
        match params.validate() {
            Err(ConfigError::InvalidParameter { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected invalid {field}, got {other:?}"),
        }
    }
}

#[test]
fn validation_accepts_zero_and_negative_inputs() {
    let params = OperatingParameters {
        thrust_n: 0.0,
        chamber_pressure_bar: -1.0,
        of_ratio: -0.5,
        burn_time_s: 0.0,
        expansion_ratio: 0.0,
        ..OperatingParameters::default()
    };
    params.validate().expect("finite inputs are valid");
}

#[test]
fn loader_validates_and_reports_parse_errors() {
    let dir = tempdir().expect("temp dir");

    let invalid = dir.path().join("invalid.toml");
    let mut text = toml_for(&OperatingParameters::default());
    text = text.replace("thrust_n = 1550.0", "thrust_n = inf");
    fs::write(&invalid, text).expect("write invalid");
    assert!(matches!(
        load_operating_parameters(&invalid),
        Err(ConfigError::InvalidParameter { field: "thrust_n", .. })
    ));

    let garbled = dir.path().join("garbled.toml");
    fs::write(&garbled, "thrust_n = [").expect("write garbled");
    assert!(matches!(load_operating_parameters(&garbled), Err(ConfigError::Toml(_))));

    let missing = dir.path().join("missing.yaml");
    assert!(matches!(load_operating_parameters(&missing), Err(ConfigError::Io(_))));
}

fn toml_for(params: &OperatingParameters) -> String {
    format!(
        "thrust_n = {:.1}\nchamber_pressure_bar = {:.1}\nof_ratio = {:.1}\nburn_time_s = {:.1}\n\
         propellant = \"{}\"\nexpansion_ratio = {:.1}\nmaterial = \"{}\"\ncycle = \"{}\"\n\
         nozzle = \"{}\"\n",
        params.thrust_n,
        params.chamber_pressure_bar,
        params.of_ratio,
        params.burn_time_s,
        params.propellant,
        params.expansion_ratio,
        params.material,
        params.cycle,
        params.nozzle
    )
}
