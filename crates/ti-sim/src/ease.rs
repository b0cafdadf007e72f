//! Quadratic ease-in-out curve.

/// Smooth interpolation over `[0, 1]`.
///
/// `2t²` below the midpoint, `1 - 2(1-t)²` above it. Continuous and
/// monotone, with fixed points at 0, 0.5, and 1.
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_points() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn symmetric_about_midpoint() {
        for i in 0..=50 {
            let t = i as f64 / 100.0;
            let lo = ease_in_out(t);
            let hi = ease_in_out(1.0 - t);
            assert!((lo + hi - 1.0).abs() < 1e-12, "asymmetry at t={t}");
        }
    }

    proptest! {
        #[test]
        fn monotone_and_bounded(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let elo = ease_in_out(lo);
            let ehi = ease_in_out(hi);
            prop_assert!(elo <= ehi);
            prop_assert!((0.0..=1.0).contains(&elo));
            prop_assert!((0.0..=1.0).contains(&ehi));
        }
    }
}
