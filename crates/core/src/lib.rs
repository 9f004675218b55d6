//! Core units, constants, and shared numeric primitives for the Rocket Engine Studio workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Pascals per bar.
    pub const PA_PER_BAR: f64 = 1.0e5;
    /// Seed used for synthetic measurement noise unless a caller overrides it.
    pub const DEFAULT_NOISE_SEED: u64 = 42;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::PA_PER_BAR;

    /// Convert bar to pascals.
    #[inline]
    pub fn bar_to_pa(v: f64) -> f64 {
        v * PA_PER_BAR
    }

    /// Convert metres to millimetres.
    #[inline]
    pub fn m_to_mm(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert newtons to kilonewtons.
    #[inline]
    pub fn n_to_kn(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Circle geometry used when sizing throats, chambers, and exits.
pub mod geometry {
    use std::f64::consts::PI;

    /// Diameter of a circle with the given area. Non-positive areas map to zero.
    #[inline]
    pub fn diameter_from_area(area_m2: f64) -> f64 {
        if area_m2 <= 0.0 {
            return 0.0;
        }
        (4.0 * area_m2 / PI).sqrt()
    }
}

/// Guarded arithmetic and summary statistics over sampled signals.
pub mod stats {
    /// Divide `numerator` by `denominator`, returning `default` when the denominator is zero
    /// or the quotient is not finite.
    #[inline]
    pub fn safe_divide(numerator: f64, denominator: f64, default: f64) -> f64 {
        if denominator == 0.0 {
            return default;
        }
        let quotient = numerator / denominator;
        if quotient.is_finite() { quotient } else { default }
    }

    /// Signed percentage deviation of `actual` from `reference`; zero when the reference is zero.
    #[inline]
    pub fn percent_deviation(reference: f64, actual: f64) -> f64 {
        safe_divide(actual - reference, reference, 0.0) * 100.0
    }

    /// Arithmetic mean; zero for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        safe_divide(values.iter().sum::<f64>(), values.len() as f64, 0.0)
    }

    /// Population standard deviation; zero for an empty slice.
    pub fn std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mu = mean(values);
        let variance =
            values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }

    /// Coefficient of variation in percent (`std / mean × 100`), zero when the mean is zero.
    pub fn coefficient_of_variation(values: &[f64]) -> f64 {
        safe_divide(std_dev(values), mean(values), 0.0) * 100.0
    }

    /// `count` evenly spaced samples over `[start, end]`, both ends included.
    pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                (0..count)
                    .map(|i| if i + 1 == count { end } else { start + step * i as f64 })
                    .collect()
            }
        }
    }
}
