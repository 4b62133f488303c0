/*
 * UI Module
 *
 * This module contains the control panel built with nannou_egui. It exposes
 * the herd's lifecycle parameters, the display switches and live statistics.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{DisplaySettings, HerdParams};

// Update the UI and return whether any lifecycle parameter changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut HerdParams,
    display: &mut DisplaySettings,
    debug_info: &DebugInfo,
) -> bool {
    // Take a snapshot of current parameter values for change detection
    let snapshot = params.clone();

    let ctx = egui.begin_frame();

    egui::Window::new("Herd")
        .default_pos([10.0, 200.0])
        .show(&ctx, |ui| {
            ui.collapsing("Lifecycle", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.births_per_tick, HerdParams::get_births_per_tick_range())
                        .text("Births per tick"),
                );
                ui.add(
                    egui::Slider::new(&mut params.birth_survival_rate, HerdParams::get_rate_range())
                        .text("Birth survival rate"),
                );
                ui.add(
                    egui::Slider::new(&mut params.tick_survival_rate, HerdParams::get_rate_range())
                        .text("Tick survival rate"),
                );
            });

            ui.collapsing("Statistics", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Population: {}", debug_info.population));
                ui.label(format!(
                    "Last tick: +{} / -{}",
                    debug_info.last_tick.births, debug_info.last_tick.deaths
                ));
                ui.label(format!("Total births: {}", debug_info.total_births));
                ui.label(format!("Total deaths: {}", debug_info.total_deaths));
            });

            ui.checkbox(&mut display.show_black_hole, "Show Black Hole");
            ui.checkbox(&mut display.pause_simulation, "Pause Simulation");
        });

    params.detect_changes(&snapshot)
}
