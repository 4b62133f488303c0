/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and herd statistics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Population size
 * - Births and deaths, for the last tick and in total
 */

use std::time::Duration;

use crate::herd::TickSummary;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub population: usize,
    pub ticks: u64,
    pub last_tick: TickSummary,
    pub total_births: u64,
    pub total_deaths: u64,
}

impl DebugInfo {
    // Fold the outcome of one herd tick into the counters
    pub fn record(&mut self, summary: TickSummary, population: usize) {
        self.ticks += 1;
        self.last_tick = summary;
        self.total_births += summary.births as u64;
        self.total_deaths += summary.deaths as u64;
        self.population = population;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_totals() {
        let mut info = DebugInfo::default();
        info.record(TickSummary { births: 2, deaths: 0 }, 2);
        info.record(TickSummary { births: 1, deaths: 3 }, 0);

        assert_eq!(info.ticks, 2);
        assert_eq!(info.total_births, 3);
        assert_eq!(info.total_deaths, 3);
        assert_eq!(info.population, 0);
        assert_eq!(info.last_tick, TickSummary { births: 1, deaths: 3 });
    }
}
