/*
 * Parameters Module
 *
 * This module defines HerdParams, the lifecycle tunables of the herd, and
 * DisplaySettings, the host-only switches. Both can be modified through the
 * UI; the application compares HerdParams against a snapshot taken before
 * the UI pass so it only pushes changes to the herd when something moved.
 */

use crate::error::ParamsError;

// Lifecycle parameters of the herd
#[derive(Clone, Debug, PartialEq)]
pub struct HerdParams {
    pub births_per_tick: usize,
    pub birth_survival_rate: f32,
    pub tick_survival_rate: f32,
    pub initial_population: usize,
}

impl Default for HerdParams {
    fn default() -> Self {
        Self {
            births_per_tick: 1,
            birth_survival_rate: 0.1,
            // Culling is disabled unless someone turns it on
            tick_survival_rate: 1.0,
            initial_population: 0,
        }
    }
}

impl HerdParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(0.0..=1.0).contains(&self.birth_survival_rate) {
            return Err(ParamsError::BirthSurvivalRate(self.birth_survival_rate));
        }
        if !(0.0..=1.0).contains(&self.tick_survival_rate) {
            return Err(ParamsError::TickSurvivalRate(self.tick_survival_rate));
        }
        Ok(())
    }

    // Check if any lifecycle parameter changed since the snapshot was taken
    pub fn detect_changes(&self, snapshot: &HerdParams) -> bool {
        self.births_per_tick != snapshot.births_per_tick
            || self.birth_survival_rate != snapshot.birth_survival_rate
            || self.tick_survival_rate != snapshot.tick_survival_rate
    }

    // Get parameter ranges for UI sliders
    pub fn get_births_per_tick_range() -> std::ops::RangeInclusive<usize> {
        0..=20
    }

    pub fn get_rate_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }
}

// Host-only switches, the herd never sees these
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplaySettings {
    pub show_black_hole: bool,
    pub pause_simulation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = HerdParams::default();
        assert_eq!(params.births_per_tick, 1);
        assert_eq!(params.birth_survival_rate, 0.1);
        assert_eq!(params.tick_survival_rate, 1.0);
        assert_eq!(params.initial_population, 0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rates_outside_unit_interval_are_rejected() {
        let params = HerdParams {
            birth_survival_rate: 1.5,
            ..HerdParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::BirthSurvivalRate(1.5)));

        let params = HerdParams {
            tick_survival_rate: -0.1,
            ..HerdParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::TickSurvivalRate(-0.1)));

        let params = HerdParams {
            tick_survival_rate: f32::NAN,
            ..HerdParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn change_detection_follows_snapshots() {
        let mut params = HerdParams::default();
        let snapshot = params.clone();
        assert!(!params.detect_changes(&snapshot));

        params.birth_survival_rate = 0.5;
        assert!(params.detect_changes(&snapshot));

        let snapshot = params.clone();
        assert!(!params.detect_changes(&snapshot));

        // Not a lifecycle knob
        params.initial_population = 10;
        assert!(!params.detect_changes(&snapshot));
    }
}
