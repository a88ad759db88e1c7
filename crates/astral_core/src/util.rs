//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-15 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed shortest arc from `from` to `to`, in (-180, 180].
pub fn signed_arc(from: f64, to: f64) -> f64 {
    let d = normalize_360(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_wraps_full_turn() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn signed_arc_wraps_through_zero() {
        assert!((signed_arc(355.0, 5.0) - 10.0).abs() < 1e-12);
        assert!((signed_arc(5.0, 355.0) + 10.0).abs() < 1e-12);
        assert!((signed_arc(0.0, 180.0) - 180.0).abs() < 1e-12);
    }
}
