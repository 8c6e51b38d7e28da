//! Numeric helpers: bounding and linear remapping.

use std::ops::{Add, Div, Mul, Sub};

/// Restrict `v` to the range `[lo, hi]`.
///
/// Returns `lo` if `v < lo`, `hi` if `v > hi`, and `v` otherwise.
///
/// Unlike [`Ord::clamp`] this never panics when `lo > hi`; the comparisons are
/// simply applied in order, so the result is well-defined but not meaningful.
/// Works for floats as well: a NaN `v` compares false against both bounds and
/// is returned unchanged.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if hi < v {
        hi
    } else {
        v
    }
}

/// Linearly remap `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Computes `(x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min`.
/// The multiplication happens before the division, so integer results are
/// truncated only once. Inputs outside the source range extrapolate.
///
/// # Panics
///
/// For integer types, panics on division by zero when `in_min == in_max`
/// (and on overflow in debug builds). Float types produce a non-finite value
/// in that case instead.
#[inline]
pub fn map_value<T>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!(clamp(7, 0, 10), 7);
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        // lo > hi: the lower bound is checked first.
        assert_eq!(clamp(5, 10, 0), 10);
        assert_eq!(clamp(20, 10, 0), 0);
    }

    #[test]
    fn test_clamp_floats() {
        assert_eq!(clamp(1.5_f64, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.25_f32, 0.0, 1.0), 0.0);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_clamp_random_stays_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let a: i64 = rng.gen_range(-1_000..1_000);
            let b: i64 = rng.gen_range(-1_000..1_000);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let v: i64 = rng.gen_range(-2_000..2_000);

            let clamped = clamp(v, lo, hi);
            assert!(lo <= clamped && clamped <= hi);
            if lo <= v && v <= hi {
                assert_eq!(clamped, v);
            }
        }
    }

    #[test]
    fn test_map_value_endpoints() {
        assert_eq!(map_value(0, 0, 1023, 0, 255), 0);
        assert_eq!(map_value(1023, 0, 1023, 0, 255), 255);
        assert_eq!(map_value(512, 0, 1024, 0, 100), 50);
        assert_eq!(map_value(-1.0_f64, -1.0, 1.0, 10.0, 20.0), 10.0);
        assert_eq!(map_value(1.0_f64, -1.0, 1.0, 10.0, 20.0), 20.0);
    }

    #[test]
    fn test_map_value_inverted_output_range() {
        assert_eq!(map_value(0, 0, 10, 100, 0), 100);
        assert_eq!(map_value(10, 0, 10, 100, 0), 0);
        assert_eq!(map_value(5, 0, 10, 100, 0), 50);
    }

    #[test]
    fn test_map_value_extrapolates() {
        assert_eq!(map_value(20, 0, 10, 0, 100), 200);
        assert_eq!(map_value(-10, 0, 10, 0, 100), -100);
    }

    #[test]
    #[should_panic]
    fn test_map_value_empty_input_range_panics_for_integers() {
        let in_min = std::hint::black_box(3);
        map_value(5, in_min, 3, 0, 10);
    }

    #[test]
    fn test_map_value_empty_input_range_floats_non_finite() {
        assert!(!map_value(5.0_f64, 3.0, 3.0, 0.0, 10.0).is_finite());
    }

    #[test]
    fn test_map_value_random_monotonic() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let in_min: f64 = rng.gen_range(-100.0..100.0);
            let in_max = in_min + rng.gen_range(0.5..100.0);
            let out_min: f64 = rng.gen_range(-100.0..100.0);
            let out_max: f64 = rng.gen_range(-100.0..100.0);

            let a: f64 = rng.gen_range(in_min..in_max);
            let b: f64 = rng.gen_range(in_min..in_max);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            let mapped_lo = map_value(lo, in_min, in_max, out_min, out_max);
            let mapped_hi = map_value(hi, in_min, in_max, out_min, out_max);
            if out_max >= out_min {
                assert!(mapped_lo <= mapped_hi + 1e-9);
            } else {
                assert!(mapped_lo + 1e-9 >= mapped_hi);
            }
        }
    }
}
