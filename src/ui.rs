/*
 * UI Module
 *
 * This module contains functions for creating and updating the control
 * panel using nannou_egui. Every field of SimulationParams is exposed here;
 * parameter change detection (in-place vs. regenerate-triggering) is
 * handled by the SimulationParams struct itself.
 */

use nannou_egui::{egui, Egui};

use crate::app::FieldPhase;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and report (should_regenerate, structural_changed, ui_changed)
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    phase: FieldPhase,
) -> (bool, bool, bool) {
    let mut should_regenerate = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Particle Web Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(egui::Slider::new(&mut params.particle_count, SimulationParams::get_particle_count_range()).text("Particle Count"));
                ui.checkbox(&mut params.flat, "Flat (2D) Mode");

                if ui.button("Regenerate").clicked() {
                    should_regenerate = true;
                }
            });

            ui.collapsing("Links", |ui| {
                ui.add(egui::Slider::new(&mut params.min_distance, SimulationParams::get_min_distance_range()).text("Min Distance"));
                ui.checkbox(&mut params.limit_connections, "Limit Connections");
                ui.add(egui::Slider::new(&mut params.max_connections, SimulationParams::get_max_connections_range()).text("Max Connections"));

                ui.horizontal(|ui| {
                    ui.color_edit_button_rgb(&mut params.tint);
                    ui.label("Tint");
                });
            });

            ui.collapsing("Display", |ui| {
                ui.checkbox(&mut params.show_points, "Show Points");
                ui.checkbox(&mut params.show_lines, "Show Lines");
                ui.checkbox(&mut params.animate, "Rotate Scene");
                ui.checkbox(&mut params.zoom_enabled, "Enable Zoom");

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Active Particles: {}", debug_info.active_particles));
                ui.label(format!("Links: {}", debug_info.link_count));
                ui.label(format!("Phase: {:?}", phase));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (structural_changed, ui_changed) = params.detect_changes();

    (should_regenerate, structural_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    camera_zoom: f32,
    domain_size: f32,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Active Particles: {}", debug_info.active_particles),
        format!("Links: {}", debug_info.link_count),
        format!("Zoom: {:.2}x", camera_zoom),
        format!("Domain: {:.0}x{:.0}x{:.0}", domain_size, domain_size, domain_size),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
