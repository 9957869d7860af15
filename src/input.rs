/*
 * Input Module
 *
 * This module handles user input events for the particle web.
 * It processes mouse movements, clicks, and wheel events for camera
 * control, plus particle selection for camera following.
 *
 * Features:
 * - Camera panning with mouse drag
 * - Camera zooming with mouse wheel (gated by the zoom toggle)
 * - Particle selection and camera following, available once the
 *   population ramp has completed
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::{FieldPhase, Model};
use crate::renderer;
use crate::POINT_SIZE;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let new_pos = Vec2::new(pos.x, pos.y);

    // Update camera drag if we're dragging
    if model.camera.is_dragging {
        model.camera.drag(new_pos);
    }

    // Always update the stored mouse position
    model.mouse_position = new_pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        // Check if the click is on the UI before handling it
        if !model.egui.ctx().is_pointer_over_area() {
            let window_rect = app.window_rect();
            let rotation = renderer::group_rotation(model.params.animate, app.time);

            // Convert mouse position from screen space to projected world space
            let world_pos = model.camera.screen_to_world(model.mouse_position, window_rect);

            // Check if we clicked on a particle
            let mut clicked_particle = None;
            let selection_radius = POINT_SIZE * 2.0;

            for i in 0..model.field.active() {
                let projected = renderer::project(model.field.positions[i], rotation);
                let distance_squared = (projected - world_pos).length_squared();

                if distance_squared <= selection_radius * selection_radius {
                    clicked_particle = Some(i);
                    break;
                }
            }

            // Following is only available once the ramp has completed
            if let Some(index) = clicked_particle.filter(|_| model.phase == FieldPhase::Steady) {
                model.selected_particle = Some(index);
                model.camera.follow_mode = true;
            } else {
                // We didn't pick a particle, start camera drag
                model.camera.start_drag(model.mouse_position);

                // If we were following a particle, stop following
                if model.camera.follow_mode {
                    model.camera.follow_mode = false;
                }
            }
        }
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.camera.end_drag();
    }
}

// Mouse wheel event handler for zooming
pub fn mouse_wheel(app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if !model.params.zoom_enabled {
        return;
    }

    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            // Handle trackpad pinch gestures and mouse wheel
            let window_rect = app.window_rect();
            model.camera.zoom(vec2(x, y), model.mouse_position, window_rect);
        },
        MouseScrollDelta::PixelDelta(pos) => {
            // Handle pixel delta (less common)
            let window_rect = app.window_rect();
            model.camera.zoom(vec2(pos.x as f32, pos.y as f32) * 0.01, model.mouse_position, window_rect);
        },
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
