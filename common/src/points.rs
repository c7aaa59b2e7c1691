//! Point math shared by the reward granting paths and the public aggregations.

/// Point range granted for reporting waste.
pub const REPORT_REWARD_RANGE: (f64, f64) = (10.0, 20.0);
/// Point range granted for collecting waste.
pub const COLLECT_REWARD_RANGE: (f64, f64) = (20.0, 50.0);
/// Leaderboard levels are capped here.
pub const MAX_REWARD_LEVEL: i64 = 10;
/// Kilograms of CO2 offset per kilogram of collected waste.
pub const CO2_PER_KG: f64 = 0.5;

/// Maps a waste quantity onto a point range.
///
/// Quantities are assumed to lie in [0, 1000] kg; values outside that band are
/// not clamped. Rounds to the nearest integer, ties away from zero.
pub fn reward_points(quantity: f64, min_reward: f64, max_reward: f64) -> i32 {
    let reward_range = max_reward - min_reward;
    (min_reward + (quantity / 1000.0) * reward_range).round() as i32
}

/// Pulls the numeric quantity out of a free-text amount such as "12kg" or
/// "approximately 3.5 liters". Letters and whitespace are stripped from both
/// ends only; anything that still fails to parse yields `None`.
pub fn parse_quantity(amount: &str) -> Option<f64> {
    amount
        .trim_matches(|c: char| c.is_ascii_alphabetic() || c.is_whitespace())
        .parse::<f64>()
        .ok()
}

/// Leaderboard level for a point total. Zero points is level 0, the curve is
/// logarithmic and monotonic, and it saturates at [`MAX_REWARD_LEVEL`].
pub fn reward_level(points: i64) -> i64 {
    if points <= 0 {
        return 0;
    }
    let level = (1.0 + points as f64 / 100.0).log2().floor() as i64;
    level.min(MAX_REWARD_LEVEL)
}

/// CO2 offset in kilograms for a collected waste weight, rounded to one
/// decimal place.
pub fn co2_offset(waste_kg: f64) -> f64 {
    (waste_kg * CO2_PER_KG * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_earns_the_minimum() {
        assert_eq!(reward_points(0.0, 10.0, 20.0), 10);
        assert_eq!(reward_points(0.0, 20.0, 50.0), 20);
    }

    #[test]
    fn full_quantity_earns_the_maximum() {
        assert_eq!(reward_points(1000.0, 10.0, 20.0), 20);
        assert_eq!(reward_points(1000.0, 20.0, 50.0), 50);
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(reward_points(500.0, 10.0, 20.0), 15);
    }

    #[test]
    fn same_quantity_maps_independently_per_range() {
        let quantity = parse_quantity("12kg").unwrap();
        let report = reward_points(quantity, REPORT_REWARD_RANGE.0, REPORT_REWARD_RANGE.1);
        let collect = reward_points(quantity, COLLECT_REWARD_RANGE.0, COLLECT_REWARD_RANGE.1);
        assert_eq!(report, 10);
        assert_eq!(collect, 20);
        assert_ne!(
            reward_points(500.0, REPORT_REWARD_RANGE.0, REPORT_REWARD_RANGE.1),
            reward_points(500.0, COLLECT_REWARD_RANGE.0, COLLECT_REWARD_RANGE.1)
        );
    }

    #[test]
    fn quantities_are_parsed_from_free_text() {
        assert_eq!(parse_quantity("12kg"), Some(12.0));
        assert_eq!(parse_quantity(" approximately 3.5 liters "), Some(3.5));
        assert_eq!(parse_quantity("500"), Some(500.0));
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
        // only the ends are stripped, embedded garbage does not parse
        assert_eq!(parse_quantity("1a2"), None);
    }

    #[test]
    fn level_curve_starts_at_zero_and_saturates() {
        assert_eq!(reward_level(0), 0);
        assert_eq!(reward_level(-5), 0);
        assert_eq!(reward_level(100), 1);

        let mut previous = 0;
        for points in (0..500_000).step_by(1000) {
            let level = reward_level(points);
            assert!(level >= previous, "level dropped at {} points", points);
            assert!(level <= MAX_REWARD_LEVEL);
            previous = level;
        }
        assert_eq!(reward_level(i64::MAX / 2), MAX_REWARD_LEVEL);
    }

    #[test]
    fn offset_is_half_the_weight_rounded_to_one_decimal() {
        assert_eq!(co2_offset(0.0), 0.0);
        assert_eq!(co2_offset(12.0), 6.0);
        assert_eq!(co2_offset(3.33), 1.7);
    }
}
