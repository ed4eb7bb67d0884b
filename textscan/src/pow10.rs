// SPDX-License-Identifier: Apache-2.0

//! Decimal scaling helpers.
//!
//! The crate is `no_std`, so `powf`/`log10` are not available. Powers of ten up
//! to 1e22 are exact in an `f64`; larger magnitudes are reached by repeated
//! scaling with the largest exact entry.

const EXACT: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];
const MAX_EXACT: u32 = 22;

/// `10^exp` as an `f64`. Saturates to infinity or zero outside the `f64` range.
pub(crate) fn pow10(exp: i32) -> f64 {
    let mut remaining = exp.unsigned_abs();
    let mut scale = 1.0f64;
    while remaining > MAX_EXACT {
        scale *= EXACT[MAX_EXACT as usize];
        remaining -= MAX_EXACT;
        if scale.is_infinite() {
            break;
        }
    }
    if !scale.is_infinite() {
        scale *= EXACT[remaining as usize];
    }
    if exp < 0 {
        1.0 / scale
    } else {
        scale
    }
}

/// `log10(x)` truncated toward zero, for finite `x > 0`.
pub(crate) fn truncated_log10(x: f64) -> i32 {
    debug_assert!(x > 0.0 && x.is_finite());
    if x >= 1.0 {
        let mut exp = 0;
        while exp < 308 && pow10(exp + 1) <= x {
            exp += 1;
        }
        exp
    } else {
        let mut exp = 0;
        while exp < 324 && pow10(-(exp + 1)) >= x {
            exp += 1;
        }
        -exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10_exact_range() {
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(3), 1000.0);
        assert_eq!(pow10(22), 1e22);
        assert_eq!(pow10(-1), 0.1);
        assert_eq!(pow10(-6), 1e-6);
    }

    #[test]
    fn test_pow10_saturates() {
        assert!(pow10(400).is_infinite());
        assert!(pow10(i32::MAX).is_infinite());
        assert_eq!(pow10(-400), 0.0);
        assert_eq!(pow10(i32::MIN), 0.0);
        let big = pow10(38);
        assert!((big / 1e38 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_truncated_log10() {
        assert_eq!(truncated_log10(1.0), 0);
        assert_eq!(truncated_log10(9.99), 0);
        assert_eq!(truncated_log10(10.0), 1);
        assert_eq!(truncated_log10(1234567.0), 6);
        assert_eq!(truncated_log10(0.5), 0);
        assert_eq!(truncated_log10(0.05), -1);
        assert_eq!(truncated_log10(0.0005), -3);
        assert_eq!(truncated_log10(3.4e38), 38);
    }
}
