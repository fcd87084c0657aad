//! Property-based checks of the workout formulas

use fittrack::{build_workout, Training};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_running_distance_and_speed(
        action in 0u32..100_000u32,
        duration in 0.1f64..10.0f64,
        weight in 30.0f64..200.0f64
    ) {
        let run = build_workout("RUN", &[f64::from(action), duration, weight]).unwrap();

        let distance = f64::from(action) * 0.65 / 1000.0;
        prop_assert!((run.distance_km() - distance).abs() < 1e-9);
        prop_assert!((run.mean_speed_kmh() - distance / duration).abs() < 1e-9);
    }

    #[test]
    fn test_swimming_speed_ignores_action(
        action_a in 0u32..10_000u32,
        action_b in 0u32..10_000u32,
        duration in 0.1f64..5.0f64,
        pool_length in 10.0f64..100.0f64,
        laps in 1u32..200u32
    ) {
        let a = build_workout("SWM", &[f64::from(action_a), duration, 70.0, pool_length, f64::from(laps)]).unwrap();
        let b = build_workout("SWM", &[f64::from(action_b), duration, 70.0, pool_length, f64::from(laps)]).unwrap();

        prop_assert_eq!(a.mean_speed_kmh(), b.mean_speed_kmh());
        let expected = pool_length * f64::from(laps) / 1000.0 / duration;
        prop_assert!((a.mean_speed_kmh() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_walking_slow_speed_uses_weight_term_only(
        action in 0u32..18_000u32,
        weight in 30.0f64..200.0f64,
        height in 150.0f64..210.0f64
    ) {
        // Below 11.7 km/h over one hour, so speed squared stays under 137, below any height here
        let walk = build_workout("WLK", &[f64::from(action), 1.0, weight, height]).unwrap();
        prop_assert!((walk.calories_kcal() - 0.035 * weight * 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_walking_calories_floor_speed_over_height(
        action in 0u32..60_000u32,
        duration in 0.25f64..3.0f64,
        weight in 30.0f64..200.0f64,
        height in 150.0f64..210.0f64
    ) {
        let walk = build_workout("WLK", &[f64::from(action), duration, weight, height]).unwrap();

        let speed = walk.mean_speed_kmh();
        let expected = (0.035 * weight + (speed * speed / height).floor() * 0.029 * weight)
            * duration
            * 60.0;
        prop_assert!((walk.calories_kcal() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_message_always_three_decimals(
        action in 0u32..100_000u32,
        duration in 0.01f64..10.0f64,
        weight in 30.0f64..200.0f64
    ) {
        let message = build_workout("RUN", &[f64::from(action), duration, weight])
            .unwrap()
            .summary()
            .message();

        let numbers: Vec<&str> = message
            .split(|c: char| c == ' ' || c == ';')
            .filter(|token| token.contains('.') && token.chars().next().map_or(false, |c| c.is_ascii_digit() || c == '-'))
            .map(|token| token.trim_end_matches('.'))
            .collect();

        prop_assert_eq!(numbers.len(), 4);
        for number in numbers {
            let decimals = number.split('.').nth(1).unwrap_or("");
            prop_assert_eq!(decimals.len(), 3);
        }
    }
}
