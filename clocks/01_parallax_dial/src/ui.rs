//! UI module - egui settings window and angle readout

use clock_core::{ClockReading, HandKind, InteractionMode, SceneLayout, SweepMode};
use nannou_egui::egui;

/// Snapshot of the clock settings shown in the panel
pub struct PanelState {
    pub interaction: InteractionMode,
    pub sweep: SweepMode,
    pub layout: SceneLayout,
    pub last_click: Option<i32>,
}

/// Changes requested through the panel
#[derive(Default)]
pub struct PanelResult {
    pub interaction: Option<InteractionMode>,
    pub sweep: Option<SweepMode>,
}

/// Draw the settings window
pub fn draw_settings_panel(ctx: &egui::Context, state: &PanelState) -> PanelResult {
    let mut result = PanelResult::default();
    let mut interaction = state.interaction;
    let mut sweep = state.sweep;

    egui::Window::new("Settings")
        .collapsible(true)
        .resizable(false)
        .default_width(200.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ctx, |ui| {
            ui.label("Pointer");
            // Parallax needs the hand group, which the flat layout lacks
            ui.add_enabled_ui(state.layout.supports_group_offset(), |ui| {
                ui.radio_value(&mut interaction, InteractionMode::Parallax, "Parallax");
                ui.radio_value(&mut interaction, InteractionMode::Both, "Both");
            });
            ui.radio_value(&mut interaction, InteractionMode::ClickToAngle, "Click to angle");

            ui.separator();
            ui.label("Hands");
            ui.radio_value(&mut sweep, SweepMode::Literal, "Literal smoothing");
            ui.radio_value(&mut sweep, SweepMode::Continuous, "Continuous sweep");

            if state.interaction.click_to_angle() {
                ui.separator();
                match state.last_click {
                    Some(angle) => ui.label(format!("Last click: {}°", angle)),
                    None => ui.label("Click the dial to measure an angle"),
                };
            }

            ui.separator();
            ui.label("Press I / S to cycle");
        });

    if interaction != state.interaction {
        result.interaction = Some(interaction);
    }
    if sweep != state.sweep {
        result.sweep = Some(sweep);
    }
    result
}

/// Draw the time and hand angle readout (bottom left)
pub fn draw_readout_panel(ctx: &egui::Context, reading: &ClockReading) {
    egui::Window::new("Hands")
        .collapsible(true)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
        .show(ctx, |ui| {
            ui.heading(reading.sample.format_time());
            for kind in HandKind::ALL {
                let degrees = reading.angles.get(kind);
                ui.monospace(format!("{:<6} {:>7.2}°", kind.to_string(), degrees));
            }
        });
}
