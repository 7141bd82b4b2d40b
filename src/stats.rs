//! Numeric helpers for the rank-based qualification formula.

use std::f64::consts::PI;

const WINITZKI_A: f64 = 0.147;

/// Inverse error function, using Winitzki's closed-form approximation.
///
/// Accurate to roughly two parts in a thousand over the open interval
/// (-1, 1). Returns infinities of the matching sign at or beyond ±1.
pub fn inv_erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    if x.abs() >= 1.0 {
        return sign * f64::INFINITY;
    }

    let ln = (1.0 - x * x).ln();
    let t = 2.0 / (PI * WINITZKI_A) + ln / 2.0;
    sign * ((t * t - ln / WINITZKI_A).sqrt() - t).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 5e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(inv_erf(0.0), 0.0);
    }

    #[test]
    fn matches_known_values() {
        // erf(0.5), erf(1.0) and erf(1.5)
        assert_close(inv_erf(0.520_499_877_8), 0.5);
        assert_close(inv_erf(0.842_700_792_9), 1.0);
        assert_close(inv_erf(0.966_105_146_5), 1.5);
    }

    #[test]
    fn is_odd() {
        for x in [0.1, 0.35, 0.7, 0.93] {
            assert_eq!(inv_erf(-x), -inv_erf(x));
        }
    }

    #[test]
    fn is_monotonic() {
        let values: Vec<f64> = (-9..=9).map(|i| inv_erf(i as f64 / 10.0)).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn saturates_at_bounds() {
        assert_eq!(inv_erf(1.0), f64::INFINITY);
        assert_eq!(inv_erf(-1.0), f64::NEG_INFINITY);
    }
}
