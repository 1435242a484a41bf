//! Derived workout metrics. Callers must validate `distance > 0` (and
//! `duration > 0` for speed) before calling.

/// Minutes per kilometer.
pub fn pace(distance: f64, duration: f64) -> f64 {
    duration / distance
}

/// Kilometers per hour, from a duration in minutes.
pub fn speed(distance: f64, duration: f64) -> f64 {
    distance / (duration / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_is_minutes_per_km() {
        assert_eq!(pace(5.0, 30.0), 6.0);
        assert_eq!(pace(4.2, 25.0), 25.0 / 4.2);
    }

    #[test]
    fn speed_is_km_per_hour() {
        assert_eq!(speed(20.0, 60.0), 20.0);
        assert_eq!(speed(12.5, 37.0), 12.5 / (37.0 / 60.0));
    }

    #[test]
    fn no_rounding_is_applied() {
        let p = pace(3.0, 10.0);
        assert_eq!(p, 10.0 / 3.0);
        assert_ne!(p, 3.3);
    }
}
