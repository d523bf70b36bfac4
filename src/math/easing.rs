/// Overshooting ease, the y-polynomial of `cubic-bezier(0.34, 1.56, 0.64, 1)`.
///
/// Evaluated directly at `t` (not solved for x), so it is an approximation of
/// the CSS timing function with the same overshoot character.
#[must_use]
pub fn elastic_ease(t: f64) -> f64 {
    const P1: f64 = 1.56;
    const P2: f64 = 1.0;
    const P3: f64 = 1.0;

    let mt = 1.0 - t;
    3.0 * mt * mt * t * P1 + 3.0 * mt * t * t * P2 + t * t * t * P3
}

/// Hermite smooth step, `t^2 * (3 - 2t)`.
#[must_use]
pub fn smooth_step(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn elastic_endpoints() {
        assert_abs_diff_eq!(elastic_ease(0.0), 0.0);
        assert_abs_diff_eq!(elastic_ease(1.0), 1.0);
    }

    #[test]
    fn elastic_overshoots() {
        let peak = (1..100)
            .map(|i| elastic_ease(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn smooth_step_is_symmetric() {
        assert_abs_diff_eq!(smooth_step(0.5), 0.5);
        assert_abs_diff_eq!(smooth_step(0.25) + smooth_step(0.75), 1.0, epsilon = 1e-12);
    }
}
