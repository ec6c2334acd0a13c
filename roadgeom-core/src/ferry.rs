//! Ferry travel-time estimation.

// Regression fit of crossing duration against crossing length, derived from
// surveyed ferry routes that declare a duration.
const INTERCEPT_H: f64 = 0.249_072_674_744_747_6;
const SLOPE_H_PER_KM: f64 = 0.020_789_13;

// Declared durations outside the corridor between these two lines are bogus
// survey data and are replaced with the regression estimate.
const UPPER_BOUND_INTERCEPT_H: f64 = 4.0;
const UPPER_BOUND_SLOPE_H_PER_KM: f64 = 0.037;
const LOWER_BOUND_INTERCEPT_H: f64 = -2.0;
const LOWER_BOUND_SLOPE_H_PER_KM: f64 = 0.015;

/// Estimated ferry crossing duration in hours.
///
/// `declared` is the duration tag attached to the feature, already validated
/// upstream to parse as decimal hours when non-empty; an empty string means
/// the tag is missing. Declared values far off the regression corridor are
/// discarded in favor of the fit.
///
/// # Panics
///
/// Panics when a non-empty `declared` does not parse as hours, or when the
/// resulting duration is indistinguishable from zero. Both are upstream
/// contract violations: the duration divides the road length later, so
/// continuing would corrupt the ferry speed.
pub fn ferry_duration_hours(declared: &str, road_len_km: f64) -> f64 {
    let duration_h = declared_or_fit(declared, road_len_km);
    assert!(
        duration_h.abs() > 1e-5,
        "ferry duration {duration_h} h is indistinguishable from zero"
    );
    duration_h
}

fn declared_or_fit(declared: &str, road_len_km: f64) -> f64 {
    let fit = INTERCEPT_H + SLOPE_H_PER_KM * road_len_km;
    if declared.is_empty() {
        return fit;
    }

    let Ok(duration_h) = declared.parse::<f64>() else {
        panic!("unparsable ferry duration tag {declared:?}");
    };

    if duration_h > UPPER_BOUND_INTERCEPT_H + UPPER_BOUND_SLOPE_H_PER_KM * road_len_km {
        return fit;
    }
    if duration_h < LOWER_BOUND_INTERCEPT_H + LOWER_BOUND_SLOPE_H_PER_KM * road_len_km {
        return fit;
    }
    duration_h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tag_uses_regression_fit() {
        let duration = ferry_duration_hours("", 10.0);
        assert!((duration - 0.456_964_0).abs() < 1e-4, "got {duration}");
    }

    #[test]
    fn declared_inside_corridor_is_trusted() {
        assert_eq!(ferry_duration_hours("1.5", 10.0), 1.5);
    }

    #[test]
    fn declared_above_upper_bound_falls_back_to_fit() {
        // Upper bound at 10 km is 4.37 h.
        let duration = ferry_duration_hours("10.0", 10.0);
        assert!((duration - 0.456_964_0).abs() < 1e-4, "got {duration}");
    }

    #[test]
    fn declared_below_lower_bound_falls_back_to_fit() {
        // Lower bound at 400 km is 4.0 h.
        let duration = ferry_duration_hours("3.0", 400.0);
        let fit = 0.249_072_674_744_747_6 + 0.020_789_13 * 400.0;
        assert!((duration - fit).abs() < 1e-9, "got {duration}");
    }

    #[test]
    #[should_panic(expected = "unparsable ferry duration")]
    fn unparsable_tag_panics() {
        ferry_duration_hours("00:45", 10.0);
    }

    #[test]
    #[should_panic(expected = "indistinguishable from zero")]
    fn near_zero_duration_panics() {
        ferry_duration_hours("0.000001", 1.0);
    }
}
