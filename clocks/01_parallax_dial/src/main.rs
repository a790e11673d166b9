//! Parallax Dial Clock
//!
//! A classic twelve-tick dial whose ticks and hands drift apart as the
//! pointer moves, giving the face a sense of depth. Clicks can report the
//! pointer's angle around the dial instead.

mod drawing;
mod ui;

use clock_core::{
    init_logging, Clock, ClockOptions, ClockReading, InteractionMode, Point, DEFAULT_LOG_FILTER,
};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::drawing::{draw_scene, draw_status_banner};
use crate::ui::{draw_readout_panel, draw_settings_panel, PanelState};

const CLOCK_NAME: &str = "parallax_dial";

fn main() {
    init_logging(DEFAULT_LOG_FILTER);
    nannou::app(model).update(update).run();
}

/// Application state
struct Model {
    /// The clock and its scene graph
    clock: Clock,
    /// Time and angles from the last frame
    reading: Option<ClockReading>,
    /// Angle reported by the last click
    last_click: Option<i32>,
    /// Message to display (if any)
    status: Option<String>,
    /// egui integration
    egui: Egui,
}

impl Model {
    fn cycle_interaction(&mut self) {
        let next = self.clock.interaction().next();
        self.set_interaction(next);
    }

    fn set_interaction(&mut self, mode: InteractionMode) {
        match self.clock.set_interaction(mode) {
            Ok(()) => {
                log::info!("interaction mode: {}", mode);
                self.status = None;
            }
            Err(e) => {
                log::warn!("cannot switch to {}: {}", mode, e);
                self.status = Some(e.to_string());
            }
        }
    }
}

/// Options from the config file, or defaults
fn load_options() -> ClockOptions {
    match clock_core::load_config::<ClockOptions>(CLOCK_NAME) {
        Ok(Some(options)) => {
            log::info!("loaded {}.toml", CLOCK_NAME);
            options
        }
        Ok(None) => ClockOptions::default(),
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            ClockOptions::default()
        }
    }
}

fn model(app: &App) -> Model {
    let mut options = load_options();

    // Create window
    let window_id = app
        .new_window()
        .title("Parallax Dial Clock")
        .size(
            options.viewport.width.round() as u32,
            options.viewport.height.round() as u32,
        )
        .view(view)
        .key_pressed(key_pressed)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    // Pointer events arrive in backing-store pixels
    options.resolution = window.scale_factor();

    let (clock, error) = Clock::new_or_fallback(options);

    Model {
        clock,
        reading: None,
        last_click: None,
        status: error.map(|e| e.to_string()),
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    // Hands are recomputed from the wall clock every frame
    model.reading = Some(model.clock.update());

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let state = PanelState {
        interaction: model.clock.interaction(),
        sweep: model.clock.sweep_mode(),
        layout: model.clock.scene().layout(),
        last_click: model.last_click,
    };
    let result = draw_settings_panel(&ctx, &state);
    if let Some(reading) = model.reading {
        draw_readout_panel(&ctx, &reading);
    }

    // Apply UI results after the egui frame is done
    drop(ctx);

    if let Some(mode) = result.interaction {
        model.set_interaction(mode);
    }
    if let Some(sweep) = result.sweep {
        log::info!("sweep mode: {}", sweep);
        model.clock.set_sweep_mode(sweep);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw_scene(&draw, model.clock.scene(), &model.clock.options().style, window_rect);

    if let Some(ref message) = model.status {
        draw_status_banner(&draw, message, window_rect);
    }

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

/// Convert a nannou point (centered, y up) to backing-store pixels
/// (top-left origin, y down) at the resolution the clock was built with
fn to_device(window_rect: Rect, resolution: f32, pos: Point2) -> Point {
    Point::new(
        (pos.x - window_rect.left()) * resolution,
        (window_rect.top() - pos.y) * resolution,
    )
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // I cycles the interaction mode
        Key::I => model.cycle_interaction(),
        // S toggles the sweep mode
        Key::S => {
            let sweep = model.clock.sweep_mode().toggled();
            log::info!("sweep mode: {}", sweep);
            model.clock.set_sweep_mode(sweep);
        }
        Key::Escape => model.status = None,
        _ => {}
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let device = to_device(app.window_rect(), model.clock.options().resolution, pos);
    model.clock.pointer_moved(device);
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().wants_pointer_input() {
        return;
    }
    let resolution = model.clock.options().resolution;
    let device = to_device(app.window_rect(), resolution, app.mouse.position());
    if let Some(angle) = model.clock.pointer_clicked(device) {
        model.last_click = Some(angle);
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_device_uses_clock_resolution() {
        let rect = Rect::from_w_h(800.0, 600.0);
        assert_eq!(to_device(rect, 1.0, pt2(0.0, 0.0)), Point::new(400.0, 300.0));
        assert_eq!(to_device(rect, 2.0, pt2(-400.0, 300.0)), Point::ZERO);
        assert_eq!(to_device(rect, 2.0, pt2(50.0, -100.0)), Point::new(900.0, 800.0));
    }

    #[test]
    fn test_device_point_round_trips_through_clock() {
        let options = ClockOptions::for_viewport(800.0, 600.0, 2.0);
        let (mut clock, error) = Clock::new_or_fallback(options);
        assert!(error.is_none());
        // 50 logical pixels right of center
        let device = to_device(Rect::from_w_h(800.0, 600.0), 2.0, pt2(50.0, 0.0));
        assert!(clock.pointer_moved(device));
        let ring = clock.scene().tick_ring().position();
        assert!(ring.abs_diff_eq(Point::new(-0.5, 0.0), 1e-4));
    }
}
