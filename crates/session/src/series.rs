//! Synthetic "experimental" time series.
//!
//! The theoretical operating point is perturbed with fixed sinusoids (instability, chugging,
//! chamber pressure oscillation, acoustic coupling) plus Gaussian noise from a seeded
//! generator, so identical inputs always produce identical samples.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Serialize;
use studio_core::constants::G0;
use studio_core::stats::{linspace, mean, safe_divide};

/// Number of samples over the burn.
pub const SAMPLE_COUNT: usize = 1_000;
/// Feed-system efficiency folded into the experimental thrust level.
pub const INJECTOR_EFFICIENCY: f64 = 0.98;

/// Inputs to the generator, all taken from the theoretical solution.
#[derive(Debug, Clone, Copy)]
pub struct SeriesInputs {
    pub burn_time_s: f64,
    pub thrust_n: f64,
    pub chamber_pressure_bar: f64,
    pub mass_flow_kg_s: f64,
    pub combustion_temp_k: f64,
    pub combustion_efficiency: f64,
    pub nozzle_efficiency: f64,
    pub longitudinal_frequency_hz: f64,
    pub noise_seed: u64,
}

/// Uniformly sampled test record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentalSeries {
    pub time_s: Vec<f64>,
    pub thrust_n: Vec<f64>,
    pub chamber_pressure_bar: Vec<f64>,
    pub mass_flow_kg_s: Vec<f64>,
    pub isp_s: Vec<f64>,
    pub temperature_k: Vec<f64>,
}

impl ExperimentalSeries {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    pub fn mean_thrust(&self) -> f64 {
        mean(&self.thrust_n)
    }

    pub fn mean_chamber_pressure(&self) -> f64 {
        mean(&self.chamber_pressure_bar)
    }

    pub fn mean_mass_flow(&self) -> f64 {
        mean(&self.mass_flow_kg_s)
    }

    pub fn mean_isp(&self) -> f64 {
        mean(&self.isp_s)
    }

    /// Iterate samples as `(t, thrust, pressure, mass flow, isp, temperature)` rows.
    pub fn rows(&self) -> impl Iterator<Item = [f64; 6]> + '_ {
        (0..self.len()).map(move |i| {
            [
                self.time_s[i],
                self.thrust_n[i],
                self.chamber_pressure_bar[i],
                self.mass_flow_kg_s[i],
                self.isp_s[i],
                self.temperature_k[i],
            ]
        })
    }
}

fn sine(amplitude: f64, frequency_hz: f64, t: f64) -> f64 {
    amplitude * (2.0 * PI * frequency_hz * t).sin()
}

fn normal_draws(rng: &mut StdRng, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.sample::<f64, _>(StandardNormal)).collect()
}

/// Generate [`SAMPLE_COUNT`] samples spanning `[0, burn_time_s]`.
///
/// Noise is drawn in three blocks from one generator seeded with `noise_seed`: thrust first,
/// then chamber pressure, then mass flow.
pub fn generate(inputs: &SeriesInputs) -> ExperimentalSeries {
    let time_s = linspace(0.0, inputs.burn_time_s, SAMPLE_COUNT);
    let mut rng = StdRng::seed_from_u64(inputs.noise_seed);
    let thrust_noise = normal_draws(&mut rng, SAMPLE_COUNT);
    let pressure_noise = normal_draws(&mut rng, SAMPLE_COUNT);
    let mass_flow_noise = normal_draws(&mut rng, SAMPLE_COUNT);

    let total_efficiency =
        inputs.combustion_efficiency * inputs.nozzle_efficiency * INJECTOR_EFFICIENCY;
    let base_thrust = inputs.thrust_n * total_efficiency;
    let f1l = inputs.longitudinal_frequency_hz;

    let thrust_n: Vec<f64> = time_s
        .iter()
        .zip(&thrust_noise)
        .map(|(&t, &n)| {
            let variation = sine(0.02, 100.0, t)
                + sine(0.01, 500.0, t)
                + 0.001 * safe_divide(t, inputs.burn_time_s, 0.0)
                + 0.005 * n
                + sine(0.003, f1l, t);
            base_thrust * (1.0 + variation)
        })
        .collect();

    let chamber_pressure_bar: Vec<f64> = time_s
        .iter()
        .zip(&pressure_noise)
        .map(|(&t, &n)| inputs.chamber_pressure_bar * (1.0 + sine(0.03, 50.0, t) + 0.01 * n))
        .collect();

    let mass_flow_kg_s: Vec<f64> = time_s
        .iter()
        .zip(&mass_flow_noise)
        .map(|(&t, &n)| {
            inputs.mass_flow_kg_s * 1.02 * (1.0 + sine(0.005, 200.0, t) + 0.002 * n)
        })
        .collect();

    let isp_s = thrust_n
        .iter()
        .zip(&mass_flow_kg_s)
        .map(|(&f, &mdot)| safe_divide(f, mdot * G0, 0.0))
        .collect();

    let temperature_k = time_s
        .iter()
        .map(|&t| inputs.combustion_temp_k * total_efficiency * (1.0 + sine(0.01, 80.0, t)))
        .collect();

    ExperimentalSeries {
        time_s,
        thrust_n,
        chamber_pressure_bar,
        mass_flow_kg_s,
        isp_s,
        temperature_k,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> SeriesInputs {
        SeriesInputs {
            burn_time_s: 12.0,
            thrust_n: 2_000.0,
            chamber_pressure_bar: 40.0,
            mass_flow_kg_s: 0.75,
            combustion_temp_k: 3_600.0,
            combustion_efficiency: 0.97,
            nozzle_efficiency: 0.93,
            longitudinal_frequency_hz: 1_234.5,
            noise_seed: 42,
        }
    }

    #[test]
    fn samples_match_perturbation_model() {
        let inputs = inputs();
        let series = generate(&inputs);
        assert_eq!(series.len(), SAMPLE_COUNT);

        let mut rng = StdRng::seed_from_u64(inputs.noise_seed);
        let mut draw = |count: usize| -> Vec<f64> {
            (0..count).map(|_| rng.sample::<f64, _>(StandardNormal)).collect()
        };
        let thrust_noise = draw(SAMPLE_COUNT);
        let pressure_noise = draw(SAMPLE_COUNT);
        let mass_flow_noise = draw(SAMPLE_COUNT);

        let total = inputs.combustion_efficiency * inputs.nozzle_efficiency * 0.98;
        let f1l = inputs.longitudinal_frequency_hz;
        let last = SAMPLE_COUNT - 1;
        assert_eq!(series.time_s[last], inputs.burn_time_s);

        for i in [0, 1, 437, last] {
            let t = series.time_s[i];

            let thrust_variation = 0.02 * (2.0 * PI * 100.0 * t).sin()
                + 0.01 * (2.0 * PI * 500.0 * t).sin()
                + 0.001 * (t / inputs.burn_time_s)
                + 0.005 * thrust_noise[i]
                + 0.003 * (2.0 * PI * f1l * t).sin();
            let thrust = inputs.thrust_n * total * (1.0 + thrust_variation);
            assert_eq!(series.thrust_n[i], thrust, "thrust at sample {i}");

            let pressure = inputs.chamber_pressure_bar
                * (1.0 + 0.03 * (2.0 * PI * 50.0 * t).sin() + 0.01 * pressure_noise[i]);
            assert_eq!(series.chamber_pressure_bar[i], pressure, "pressure at sample {i}");

            let mass_flow = inputs.mass_flow_kg_s
                * 1.02
                * (1.0 + 0.005 * (2.0 * PI * 200.0 * t).sin() + 0.002 * mass_flow_noise[i]);
            assert_eq!(series.mass_flow_kg_s[i], mass_flow, "mass flow at sample {i}");

            assert_eq!(series.isp_s[i], thrust / (mass_flow * G0), "isp at sample {i}");

            let temperature =
                inputs.combustion_temp_k * total * (1.0 + 0.01 * (2.0 * PI * 80.0 * t).sin());
            assert_eq!(series.temperature_k[i], temperature, "temperature at sample {i}");
        }
    }

    #[test]
    fn zero_burn_time_has_no_drift() {
        let series = generate(&SeriesInputs {
            burn_time_s: 0.0,
            ..inputs()
        });
        assert!(series.time_s.iter().all(|t| *t == 0.0));
        assert!(series.thrust_n.iter().all(|f| f.is_finite()));
    }
}
