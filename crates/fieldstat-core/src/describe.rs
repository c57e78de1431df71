//! Basic sample moments shared across the test and diagnostic modules.

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample variance (denominator n - 1). Returns NaN for n < 2.
pub fn sample_variance(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Standard error of the mean: s / sqrt(n). Returns NaN for n < 2.
pub fn std_error(xs: &[f64]) -> f64 {
    sample_variance(xs).sqrt() / (xs.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_variance() {
        // deviations -2, 0, 2 -> ss = 8, var = 8/2 = 4
        assert_eq!(sample_variance(&[2.0, 4.0, 6.0]), 4.0);
        assert!(sample_variance(&[1.0]).is_nan());
    }

    #[test]
    fn test_std_error() {
        let se = std_error(&[2.0, 4.0, 6.0]);
        assert!((se - 2.0 / 3.0_f64.sqrt()).abs() < 1e-12);
    }
}
