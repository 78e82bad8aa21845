//! Vehicle range derating and travel-time estimates.
//!
//! The optimizer takes an already-derated range; these helpers compute it
//! from the nominal range and the current vehicle conditions.

/// Average road speed used for time estimates, in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Range lost per kilogram of load, as a fraction.
const LOAD_DERATE_PER_KG: f64 = 0.1 / 1000.0;

/// Temperature above which range starts to drop, in °C.
const TEMPERATURE_THRESHOLD_C: f64 = 25.0;

/// Range lost per degree above the threshold, as a fraction.
const TEMPERATURE_DERATE_PER_C: f64 = 0.2 / 100.0;

/// Conditions that reduce a vehicle's nominal range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeConditions {
    /// State of charge, 0 to 100.
    pub battery_percentage: f64,
    /// Carried load in kilograms.
    pub load_kg: f64,
    /// Ambient temperature in °C.
    pub temperature_c: f64,
}

impl RangeConditions {
    pub fn new(battery_percentage: f64, load_kg: f64, temperature_c: f64) -> Self {
        Self {
            battery_percentage,
            load_kg,
            temperature_c,
        }
    }
}

impl Default for RangeConditions {
    /// Full battery, no load, at the temperature threshold.
    fn default() -> Self {
        Self::new(100.0, 0.0, TEMPERATURE_THRESHOLD_C)
    }
}

/// Range available under `conditions`.
///
/// Scales `nominal_range` by the state of charge, then loses 10% per
/// 1000 kg of load and 20% per 100 °C above 25 °C. Never negative.
///
/// # Examples
///
/// ```
/// use u_evroute::range::{effective_range, RangeConditions};
///
/// let conditions = RangeConditions::new(80.0, 500.0, 35.0);
/// // 400 × 0.8 × 0.95 × 0.98
/// assert!((effective_range(400.0, &conditions) - 297.92).abs() < 1e-9);
/// ```
pub fn effective_range(nominal_range: f64, conditions: &RangeConditions) -> f64 {
    let charge = conditions.battery_percentage / 100.0;
    let load_factor = 1.0 - conditions.load_kg * LOAD_DERATE_PER_KG;
    let heat = (conditions.temperature_c - TEMPERATURE_THRESHOLD_C).max(0.0);
    let temperature_factor = 1.0 - heat * TEMPERATURE_DERATE_PER_C;

    (nominal_range * charge * load_factor * temperature_factor).max(0.0)
}

/// Minutes needed to drive `distance` at `average_speed_kmh`.
pub fn estimated_minutes(distance: f64, average_speed_kmh: f64) -> f64 {
    distance / average_speed_kmh * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conditions_keep_nominal() {
        assert_eq!(effective_range(250.0, &RangeConditions::default()), 250.0);
    }

    #[test]
    fn test_battery_scales_linearly() {
        let half = RangeConditions {
            battery_percentage: 50.0,
            ..Default::default()
        };
        assert!((effective_range(300.0, &half) - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_cold_is_not_penalized() {
        let cold = RangeConditions {
            temperature_c: -10.0,
            ..Default::default()
        };
        assert_eq!(effective_range(100.0, &cold), 100.0);
    }

    #[test]
    fn test_load_and_heat_compound() {
        let conditions = RangeConditions::new(100.0, 1000.0, 75.0);
        // 0.9 × 0.9
        assert!((effective_range(100.0, &conditions) - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_load_clamps_to_zero() {
        let conditions = RangeConditions::new(100.0, 20_000.0, 25.0);
        assert_eq!(effective_range(100.0, &conditions), 0.0);
    }

    #[test]
    fn test_estimated_minutes() {
        assert!((estimated_minutes(15.0, DEFAULT_AVERAGE_SPEED_KMH) - 30.0).abs() < 1e-12);
        assert!((estimated_minutes(120.0, 60.0) - 120.0).abs() < 1e-12);
        assert_eq!(estimated_minutes(0.0, DEFAULT_AVERAGE_SPEED_KMH), 0.0);
    }
}
