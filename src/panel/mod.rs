//! Debug panel for live-tuning the water parameters.
//!
//! The panel edits a copy of the current snapshot and hands the whole copy back
//! to the [`ConfigStore`], so the frame loop only ever sees complete configs.

mod integration;
mod stats;

pub use integration::{EguiFrameOutput, EguiIntegration};
pub use stats::{FpsTracker, PanelStats, ProbeReading};

use crate::color::Rgb;
use crate::frame::ConfigStore;
use crate::params::bounds::{self, ParamRange};

/// Panel window state
#[derive(Debug, Clone)]
pub struct DebugPanel {
    visible: bool,
    width: f32,
}

impl DebugPanel {
    pub const TITLE: &'static str = "Raging Sea";

    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            width: 340.0,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::debug!("Debug panel {}", if self.visible { "shown" } else { "hidden" });
    }

    /// Draw the panel; returns whether the store received a new config
    pub fn show(&mut self, ctx: &egui::Context, store: &mut ConfigStore, stats: &PanelStats) -> bool {
        if !self.visible {
            return false;
        }

        let mut draft = store.snapshot();
        let mut reset = false;

        egui::Window::new(Self::TITLE)
            .default_width(self.width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Colors");
                color_row(ui, "depth color", &mut draft.colors.depth_color);
                color_row(ui, "surface color", &mut draft.colors.surface_color);
                slider(ui, "color offset", &mut draft.colors.color_offset, bounds::COLOR_OFFSET);
                slider(
                    ui,
                    "color multiplier",
                    &mut draft.colors.color_multiplier,
                    bounds::COLOR_MULTIPLIER,
                );

                ui.separator();
                ui.heading("Big waves");
                let waves = &mut draft.waves;
                slider(ui, "elevation", &mut waves.big_elevation, bounds::BIG_WAVES_ELEVATION);
                slider(ui, "frequency x", &mut waves.big_frequency_x, bounds::BIG_WAVES_FREQUENCY_X);
                slider(ui, "frequency z", &mut waves.big_frequency_z, bounds::BIG_WAVES_FREQUENCY_Z);
                slider(ui, "speed", &mut waves.big_speed, bounds::BIG_WAVES_SPEED);

                ui.separator();
                ui.heading("Small waves");
                slider(ui, "elevation", &mut waves.small_elevation, bounds::SMALL_WAVES_ELEVATION);
                slider(ui, "frequency", &mut waves.small_frequency, bounds::SMALL_WAVES_FREQUENCY);
                slider(ui, "speed", &mut waves.small_speed, bounds::SMALL_WAVES_SPEED);
                ui.add(
                    egui::Slider::new(&mut waves.small_iterations, 0..=bounds::SMALL_ITERATIONS_MAX)
                        .text("iterations"),
                );

                ui.separator();
                stats_grid(ui, stats);

                ui.horizontal(|ui| {
                    reset = ui.button("Reset").clicked();
                    ui.weak("H hides this panel");
                });
            });

        if reset {
            return store.reset();
        }
        store.replace(draft.clamped())
    }
}

impl Default for DebugPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

fn slider(ui: &mut egui::Ui, label: &str, value: &mut f32, range: ParamRange) -> egui::Response {
    ui.add(
        egui::Slider::new(value, range.as_range())
            .step_by(range.step)
            .text(label),
    )
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut Rgb) {
    ui.horizontal(|ui| {
        let mut bytes = color.to_bytes();
        if ui.color_edit_button_srgb(&mut bytes).changed() {
            *color = Rgb::from_bytes(bytes);
        }
        ui.label(label);
        ui.monospace(color.to_hex());
    });
}

fn stats_grid(ui: &mut egui::Ui, stats: &PanelStats) {
    egui::Grid::new("water_stats").num_columns(2).show(ui, |ui| {
        ui.label("fps");
        ui.monospace(format!("{:.1}", stats.fps));
        ui.end_row();

        ui.label("frame");
        ui.monospace(stats.frame_index.to_string());
        ui.end_row();

        ui.label("config rev");
        ui.monospace(stats.revision.to_string());
        ui.end_row();

        ui.label(format!("elevation @ ({}, {})", stats.probe.x, stats.probe.z));
        ui.monospace(format!("{:+.4}", stats.probe.elevation));
        ui.end_row();

        ui.label("mix strength");
        ui.monospace(format!("{:.3}", stats.probe.mix_strength));
        ui.end_row();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaterConfig;

    fn stats() -> PanelStats {
        PanelStats {
            fps: 60.0,
            frame_index: 0,
            revision: 0,
            probe: ProbeReading {
                x: 0.0,
                z: 0.0,
                elevation: 0.0,
                mix_strength: 0.4,
            },
        }
    }

    fn run_panel(panel: &mut DebugPanel, store: &mut ConfigStore) -> bool {
        let ctx = egui::Context::default();
        let mut changed = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            changed |= panel.show(ctx, store, &stats());
        });
        changed
    }

    #[test]
    fn test_idle_panel_leaves_config_alone() {
        let mut panel = DebugPanel::default();
        let mut store = ConfigStore::default();

        assert!(!run_panel(&mut panel, &mut store));
        assert_eq!(store.revision(), 0);
        assert_eq!(store.snapshot(), WaterConfig::default());
    }

    #[test]
    fn test_hidden_panel_draws_nothing() {
        let mut panel = DebugPanel::new(false);
        let mut store = ConfigStore::default();
        store.update(|c| c.waves.big_elevation = 7.0);
        let revision = store.revision();

        assert!(!run_panel(&mut panel, &mut store));
        // Out-of-range value set in code is not clamped by a hidden panel
        assert_eq!(store.snapshot().waves.big_elevation, 7.0);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_visible_panel_pulls_values_into_bounds() {
        let mut panel = DebugPanel::default();
        let mut store = ConfigStore::default();
        store.update(|c| c.waves.big_elevation = 7.0);

        assert!(run_panel(&mut panel, &mut store));
        assert_eq!(store.snapshot().waves.big_elevation, 1.0);
    }

    #[test]
    fn test_toggle() {
        let mut panel = DebugPanel::default();
        assert!(panel.visible());
        panel.toggle();
        assert!(!panel.visible());
    }
}
