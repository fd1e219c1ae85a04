//! Weather simulator
//!
//! Two distinct mutations: `tick` regenerates the whole reading, `refresh`
//! nudges the temperature by one degree and re-rolls the condition.

use chrono::{DateTime, Local};
use rand::Rng;

use agrihub_core::{Condition, WeatherReading};

pub const TICK_TEMP_RANGE: (i32, i32) = (22, 26);
pub const TICK_HUMIDITY_RANGE: (i32, i32) = (55, 64);
pub const TICK_WIND_RANGE: (i32, i32) = (10, 15);
pub const TICK_RAIN_RANGE: (i32, i32) = (0, 29);

/// Temperature bounds enforced by `refresh`
pub const REFRESH_TEMP_MIN: i32 = 22;
pub const REFRESH_TEMP_MAX: i32 = 28;

/// A fresh random reading
pub fn generate<R: Rng>(rng: &mut R) -> WeatherReading {
    WeatherReading {
        temperature_c: rng.gen_range(TICK_TEMP_RANGE.0..=TICK_TEMP_RANGE.1),
        humidity_pct: rng.gen_range(TICK_HUMIDITY_RANGE.0..=TICK_HUMIDITY_RANGE.1),
        wind_kmh: rng.gen_range(TICK_WIND_RANGE.0..=TICK_WIND_RANGE.1),
        rain_pct: rng.gen_range(TICK_RAIN_RANGE.0..=TICK_RAIN_RANGE.1),
        condition: random_condition(rng),
    }
}

fn random_condition<R: Rng>(rng: &mut R) -> Condition {
    Condition::ALL[rng.gen_range(0..Condition::ALL.len())]
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSimulator {
    reading: WeatherReading,
    refreshing: bool,
    updated_at: DateTime<Local>,
}

impl WeatherSimulator {
    /// Start with a generated reading
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            reading: generate(rng),
            refreshing: false,
            updated_at: Local::now(),
        }
    }

    pub fn reading(&self) -> &WeatherReading {
        &self.reading
    }

    pub fn updated_at(&self) -> DateTime<Local> {
        self.updated_at
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Regenerate every field
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.reading = generate(rng);
        self.updated_at = Local::now();
    }

    /// Mark a manual refresh as in flight. Returns false if one already is.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    /// Move temperature by exactly one degree, clamp, and re-roll condition
    pub fn refresh<R: Rng>(&mut self, rng: &mut R) {
        let delta = if rng.gen_bool(0.5) { 1 } else { -1 };
        self.reading.temperature_c =
            (self.reading.temperature_c + delta).clamp(REFRESH_TEMP_MIN, REFRESH_TEMP_MAX);
        self.reading.condition = random_condition(rng);
        self.refreshing = false;
        self.updated_at = Local::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tick_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sim = WeatherSimulator::new(&mut rng);
        for _ in 0..500 {
            sim.tick(&mut rng);
            let r = sim.reading();
            assert!((22..=26).contains(&r.temperature_c));
            assert!((55..=65).contains(&r.humidity_pct));
            assert!((10..=15).contains(&r.wind_kmh));
            assert!((0..=30).contains(&r.rain_pct));
        }
    }

    #[test]
    fn test_tick_covers_all_conditions() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(format!("{:?}", generate(&mut rng).condition));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_refresh_moves_by_one_and_stays_bounded() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sim = WeatherSimulator::new(&mut rng);
        for _ in 0..1000 {
            let before = sim.reading().temperature_c;
            sim.refresh(&mut rng);
            let after = sim.reading().temperature_c;
            assert!((REFRESH_TEMP_MIN..=REFRESH_TEMP_MAX).contains(&after));
            let moved = (after - before).abs();
            // Only a clamp at the bounds can swallow the step
            assert!(moved == 1 || after == REFRESH_TEMP_MIN || after == REFRESH_TEMP_MAX);
        }
    }

    #[test]
    fn test_refresh_keeps_other_fields() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sim = WeatherSimulator::new(&mut rng);
        let before = *sim.reading();
        sim.refresh(&mut rng);
        let after = sim.reading();
        assert_eq!(before.humidity_pct, after.humidity_pct);
        assert_eq!(before.wind_kmh, after.wind_kmh);
        assert_eq!(before.rain_pct, after.rain_pct);
    }

    #[test]
    fn test_begin_refresh_guard() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sim = WeatherSimulator::new(&mut rng);
        assert!(sim.begin_refresh());
        assert!(!sim.begin_refresh());
        sim.refresh(&mut rng);
        assert!(!sim.is_refreshing());
        assert!(sim.begin_refresh());
    }
}
