use std::fs;

use rocket_engine_studio::export::json::{self, Metadata};
use rocket_engine_studio::export::plot::{self, PlotOptions};
use rocket_engine_studio::export::{self, ExportError, report};
use rocket_engine_studio::session::{ExperimentalSeries, SAMPLE_COUNT};
use rocket_engine_studio::{Catalog, EngineSession, OperatingParameters};

fn session() -> EngineSession {
    let catalog = Catalog::builtin().expect("builtin catalog");
    EngineSession::new(&catalog, OperatingParameters::default()).expect("session")
}

#[test]
fn json_document_carries_metadata_and_results() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("results.json");
    let session = session();
    let meta = Metadata {
        generator: "tests",
        version: rocket_engine_studio::version(),
        params: session.params(),
    };
    json::write_results(&path, &session.results(), &meta).expect("write json");

    let text = fs::read_to_string(&path).expect("read json");
    let doc: serde_json::Value = serde_json::from_str(&text).expect("parse json");
    assert_eq!(doc["generator"], "tests");
    assert!(doc["generated_at"].as_str().expect("timestamp").ends_with('Z'));
    assert_eq!(doc["parameters"]["propellant"], "RP-1/LOX");
    assert_eq!(doc["parameters"]["injector"], "coaxial");

    let results = &doc["results"];
    let thrust_kn = results["performance"]["theoretical_thrust_kn"]
        .as_f64()
        .expect("thrust");
    assert!((thrust_kn - 1.55).abs() < 1e-9);
    assert_eq!(results["explanations"].as_array().expect("explanations").len(), 3);
    assert_eq!(results["explanations"][0]["kind"], "thrust");
    assert_eq!(results["acoustic"]["modes"][1]["kind"], "1T");
    let grade = results["assessment"]["grade"].as_str().expect("grade");
    assert_eq!(grade, session.assessment().grade.to_string());
}

#[test]
fn csv_has_header_and_one_row_per_sample() {
    let session = session();
    let mut buffer = Vec::new();
    export::csv::write_series(&mut buffer, session.series()).expect("write csv");

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), export::csv::HEADER.to_vec());

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(rows.len(), SAMPLE_COUNT);
    let last_time: f64 = rows[SAMPLE_COUNT - 1][0].parse().expect("time");
    assert!((last_time - 180.0).abs() < 1e-6);
    let first_thrust: f64 = rows[0][1].parse().expect("thrust");
    assert!((first_thrust - session.series().thrust_n[0]).abs() < 1e-5);
}

#[test]
fn csv_writer_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("series.csv");
    let writer = export::writer_for_path(&path).expect("writer");
    export::csv::write_series(writer, session().series()).expect("write csv");
    let text = fs::read_to_string(&path).expect("read csv");
    assert!(text.starts_with("time_s,thrust_n,chamber_pressure_bar"));
    assert_eq!(text.lines().count(), SAMPLE_COUNT + 1);
}

#[test]
fn summary_lists_every_section() {
    let session = session();
    let mut out = Vec::new();
    report::write_summary(&mut out, &session).expect("write summary");
    let text = String::from_utf8(out).expect("utf8");

    for heading in [
        "Performance",
        "Thermal",
        "Propulsion",
        "Structural",
        "Stability",
        "Efficiencies",
        "Deviations",
        "Explanations",
        "Assessment",
    ] {
        assert!(text.contains(&format!("\n{heading}\n")), "missing section {heading}");
    }
    assert!(text.contains("RP-1/LOX | Gas Generator | Bell (NASA-SP) | Copper (OFHC)"));
    assert!(text.contains("LOWER THAN EXPECTED"));
    assert!(text.contains(&format!("Grade {}", session.assessment().grade)));
}

#[test]
fn plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("trace.png");
    let options = PlotOptions {
        width: 400,
        height: 300,
        ..PlotOptions::default()
    };
    plot::render_series(&path, session().series(), &options).expect("render");

    let metadata = fs::metadata(&path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn plot_rejects_empty_series() {
    let dir = tempfile::tempdir().expect("tempdir");
    let empty = ExperimentalSeries {
        time_s: Vec::new(),
        thrust_n: Vec::new(),
        chamber_pressure_bar: Vec::new(),
        mass_flow_kg_s: Vec::new(),
        isp_s: Vec::new(),
        temperature_k: Vec::new(),
    };
    let err = plot::render_series(&dir.path().join("empty.png"), &empty, &PlotOptions::default())
        .expect_err("empty series");
    assert!(matches!(err, ExportError::EmptySeries));
}
