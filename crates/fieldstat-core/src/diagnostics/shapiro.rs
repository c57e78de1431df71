//! Shapiro-Wilk test for normality
//!
//! Royston's AS R94 formulation: approximate normal-order-statistic
//! weights with polynomial-corrected tails, the W statistic as the squared
//! correlation between the ordered sample and those weights, and a
//! normalizing transformation of W to a standard-normal deviate for the
//! p-value. Valid for sample sizes between 3 and 5000.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::errors::{StatsError, StatsResult};
use crate::tests::filter_nan;

/// Smallest sample the W statistic is defined for
pub const SHAPIRO_MIN_N: usize = 3;
/// Largest sample the p-value approximation is calibrated for
pub const SHAPIRO_MAX_N: usize = 5000;

/// Result of the Shapiro-Wilk test
#[derive(Debug, Clone)]
pub struct ShapiroWilkResult {
    /// W statistic in (0, 1]; closer to 1 is closer to normal
    pub statistic: f64,
    /// Upper-tail p-value of the normalized W
    pub p_value: f64,
    /// Number of observations used
    pub n: usize,
}

// Polynomial coefficients from Royston (1995), highest degree first.
// End-weight corrections in 1/sqrt(n); both have a zero constant term,
// the whole correction vanishes as n grows:
const C1: [f64; 6] = [-2.706056, 4.434685, -2.071190, -0.147981, 0.221157, 0.0];
const C2: [f64; 6] = [-3.582633, 5.682633, -1.752461, -0.293762, 0.042981, 0.0];
// Normalization of ln(1 - W), in n for 4 <= n <= 11:
const C3: [f64; 4] = [-0.0006714, 0.025054, -0.39978, 0.5440];
const C4: [f64; 4] = [-0.0020322, 0.062767, -0.77857, 1.3822];
// and in ln(n) for n >= 12:
const C5: [f64; 4] = [0.0038915, -0.083751, -0.31082, -1.5861];
const C6: [f64; 3] = [0.0030302, -0.082676, -0.4803];

/// Horner evaluation, coefficients highest degree first
fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * x + c)
}

/// Shapiro-Wilk test for normality
///
/// NaN observations are filtered before testing. Sample sizes outside
/// [3, 5000] are typed errors so callers can report the check as
/// inapplicable rather than skipping it.
pub fn shapiro_wilk(data: &[f64]) -> StatsResult<ShapiroWilkResult> {
    let mut xs = filter_nan(data);
    let n = xs.len();

    if n < SHAPIRO_MIN_N {
        return Err(StatsError::InsufficientDataMsg(
            "Shapiro-Wilk test requires at least 3 observations".into(),
        ));
    }
    if n > SHAPIRO_MAX_N {
        return Err(StatsError::SampleTooLarge {
            test: "Shapiro-Wilk",
            n,
            max: SHAPIRO_MAX_N,
        });
    }

    xs.sort_by(f64::total_cmp);

    let nf = n as f64;
    let mean = xs.iter().sum::<f64>() / nf;
    let ssq: f64 = xs.iter().map(|x| (x - mean) * (x - mean)).sum();
    if ssq <= 0.0 {
        return Err(StatsError::ZeroVariance {
            context: "Shapiro-Wilk sample",
        });
    }

    let normal =
        Normal::new(0.0, 1.0).map_err(|e| StatsError::InvalidInput(e.to_string()))?;

    // Blom scores: m_i = Phi^-1((i - 3/8) / (n + 1/4))
    let m: Vec<f64> = (1..=n)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / (nf + 0.25)))
        .collect();
    let summ2: f64 = m.iter().map(|v| v * v).sum();

    let weights = shapiro_weights(&m, summ2, n);
    let w_num: f64 = weights.iter().zip(&xs).map(|(a, x)| a * x).sum();
    let statistic = (w_num * w_num / ssq).min(1.0);

    let p_value = shapiro_p_value(statistic, n, &normal);

    Ok(ShapiroWilkResult {
        statistic,
        p_value,
        n,
    })
}

/// Antisymmetric weight vector for the ordered sample
fn shapiro_weights(m: &[f64], summ2: f64, n: usize) -> Vec<f64> {
    let mut a = vec![0.0; n];

    if n == 3 {
        a[0] = -std::f64::consts::FRAC_1_SQRT_2;
        a[2] = std::f64::consts::FRAC_1_SQRT_2;
        return a;
    }

    let rsn = 1.0 / (n as f64).sqrt();
    let a_n = poly(&C1, rsn) + m[n - 1] / summ2.sqrt();
    a[n - 1] = a_n;
    a[0] = -a_n;

    // Interior weights are the rescaled scores; the outermost one or two
    // pairs carry Royston's polynomial correction
    let (inner, phi) = if n > 5 {
        let a_n1 = poly(&C2, rsn) + m[n - 2] / summ2.sqrt();
        a[n - 2] = a_n1;
        a[1] = -a_n1;
        let phi = (summ2 - 2.0 * m[n - 1] * m[n - 1] - 2.0 * m[n - 2] * m[n - 2])
            / (1.0 - 2.0 * a_n * a_n - 2.0 * a_n1 * a_n1);
        (2, phi)
    } else {
        let phi = (summ2 - 2.0 * m[n - 1] * m[n - 1]) / (1.0 - 2.0 * a_n * a_n);
        (1, phi)
    };

    let scale = phi.sqrt();
    for i in inner..(n - inner) {
        a[i] = m[i] / scale;
    }
    a
}

/// Map W to an upper-tail p-value via Royston's normalizing transforms
fn shapiro_p_value(w: f64, n: usize, normal: &Normal) -> f64 {
    if n == 3 {
        // exact small-sample distribution
        let stqr = (0.75_f64.sqrt()).asin();
        let p = 6.0 / std::f64::consts::PI * ((w.sqrt()).asin() - stqr);
        return p.clamp(0.0, 1.0);
    }

    let y = (1.0 - w).ln();
    let z = if n <= 11 {
        let nf = n as f64;
        let gamma = -2.273 + 0.459 * nf;
        let mu = poly(&C3, nf);
        let sigma = poly(&C4, nf).exp();
        (-(gamma - y).ln() - mu) / sigma
    } else {
        let ln_n = (n as f64).ln();
        let mu = poly(&C5, ln_n);
        let sigma = poly(&C6, ln_n).exp();
        (y - mu) / sigma
    };

    (1.0 - normal.cdf(z)).clamp(0.0, 1.0)
}
