//! Boundary search on monotonically increasing angle functions.
//!
//! Every searched quantity (elongation, sidereal longitude, sidereal sum)
//! increases with time, so a segment boundary is an ascending zero of
//! `normalize_to_pm180(f(t) - target)`. Step-scan for a sign bracket,
//! then bisect.

/// Find the nearest ascending zero of `f` from `jd_start`.
///
/// `step` sets the scan direction and granularity (negative scans into
/// the past). Returns `None` if no ascending bracket is found within
/// `max_steps`.
pub(crate) fn find_ascending_zero(
    f: &dyn Fn(f64) -> f64,
    jd_start: f64,
    step: f64,
    max_steps: usize,
    bisect_iters: usize,
    tol_days: f64,
) -> Option<f64> {
    let mut t_prev = jd_start;
    let mut g_prev = f(t_prev);

    for i in 1..=max_steps {
        let t = jd_start + step * i as f64;
        let g = f(t);

        let (mut lo, g_lo, mut hi, g_hi) = if step > 0.0 {
            (t_prev, g_prev, t, g)
        } else {
            (t, g, t_prev, g_prev)
        };

        // An ascending crossing goes negative -> non-negative with a
        // small combined magnitude; the +180/-180 wrap jump does not.
        if g_lo < 0.0 && g_hi >= 0.0 && g_hi - g_lo < 180.0 {
            for _ in 0..bisect_iters {
                if hi - lo < tol_days {
                    break;
                }
                let mid = (lo + hi) / 2.0;
                if f(mid) < 0.0 {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            return Some((lo + hi) / 2.0);
        }

        t_prev = t;
        g_prev = g;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_vedic::normalize_to_pm180;

    #[test]
    fn finds_forward_crossing() {
        // f(t) = 10 deg/day, target 25 deg -> crossing at t = 2.5
        let f = |t: f64| normalize_to_pm180(10.0 * t - 25.0);
        let root = find_ascending_zero(&f, 0.0, 0.5, 20, 50, 1e-9).unwrap();
        assert!((root - 2.5).abs() < 1e-6, "root = {root}");
    }

    #[test]
    fn finds_backward_crossing() {
        let f = |t: f64| normalize_to_pm180(10.0 * t - 25.0);
        let root = find_ascending_zero(&f, 5.0, -0.5, 20, 50, 1e-9).unwrap();
        assert!((root - 2.5).abs() < 1e-6, "root = {root}");
    }

    #[test]
    fn skips_wrap_discontinuity() {
        // Crossing of the wrapped angle at t = 2.5 (target 25 deg); the
        // +-180 jump at t = 20.5 must not be reported as a root.
        let f = |t: f64| normalize_to_pm180(10.0 * t - 25.0);
        let root = find_ascending_zero(&f, 19.0, 0.5, 40, 50, 1e-9).unwrap();
        // Next true ascending crossing after 19.0 is at 25 + 360 = 38.5
        assert!((root - 38.5).abs() < 1e-6, "root = {root}");
    }

    #[test]
    fn none_when_out_of_range() {
        let f = |t: f64| normalize_to_pm180(10.0 * t - 25.0);
        assert!(find_ascending_zero(&f, 0.0, 0.1, 5, 50, 1e-9).is_none());
    }
}
