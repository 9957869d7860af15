/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update
 * logic. All simulation state is owned by the Model and passed by reference
 * through the frame loop; there are no module-level globals.
 *
 * Per-frame sequence (fixed order):
 * 1. refresh debug metrics and run the control panel
 * 2. apply structural parameter changes (regenerate the field)
 * 3. ramp the active count one step toward the target
 * 4. integrate motion and reflect at the domain walls
 * 5. rebuild the link geometry (which resets connection counters first)
 * 6. publish draw ranges and dirty flags for the renderer
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::links::{self, LinkGeometry};
use crate::params::SimulationParams;
use crate::particle::ParticleField;
use crate::physics;
use crate::renderer;
use crate::input;
use crate::ui;
use crate::{DOMAIN_SIZE, MAX_PARTICLES};

// Lifecycle of the particle field as a whole. Generating is entered on any
// structural change, Ramping while the population fades in, Steady once the
// active count has reached the target. Camera follow is only available in
// the Steady phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    Generating,
    Ramping,
    Steady,
}

// Main model for the application
pub struct Model {
    pub field: ParticleField,
    pub links: LinkGeometry,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
    pub selected_particle: Option<usize>,
    pub phase: FieldPhase,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window
    let window_id = app
        .new_window()
        .title("Particle Web")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Create the particle field and the preallocated link geometry. The
    // geometry is sized once for the worst case and never reallocated.
    let field = ParticleField::new(MAX_PARTICLES, DOMAIN_SIZE, params.flat);
    let links = LinkGeometry::new(MAX_PARTICLES);

    Model {
        field,
        links,
        params,
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        mouse_position: Vec2::ZERO,
        selected_particle: None,
        phase: FieldPhase::Generating,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Run the control panel and detect parameter changes
    let (should_regenerate, structural_changed, _ui_changed) = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.phase,
    );

    // Out-of-range values from external mutation get clamped, not rejected
    model.params.sanitize();

    // Structural changes rebuild the particle distribution from scratch and
    // restart the ramp; in-place changes are simply read on this frame
    if should_regenerate || structural_changed {
        model.field.regenerate(model.params.flat);
        model.links.clear();
        model.selected_particle = None;
        model.camera.follow_mode = false;
        model.phase = FieldPhase::Generating;
    }

    if !model.params.pause_simulation {
        // Grow the population one particle per frame toward the target
        physics::ramp_tick(&mut model.field, model.params.particle_count);

        // Integrate motion and reflect at the walls
        physics::integrate_and_reflect(&mut model.field);

        // Rebuild the proximity graph for this frame
        let link_count = links::build_links(
            &mut model.field,
            model.params.min_distance,
            model.params.limit_connections,
            model.params.max_connections,
            &mut model.links,
        );

        model.debug_info.link_count = link_count;
        model.debug_info.active_particles = model.field.active();

        model.phase = if model.field.active() < model.params.particle_count {
            FieldPhase::Ramping
        } else {
            FieldPhase::Steady
        };
    }

    // Camera follow is gated on the ramp having completed; losing steady
    // state (e.g. the target was raised) drops the follow target
    if model.phase != FieldPhase::Steady {
        model.camera.follow_mode = false;
    }
    if model.camera.follow_mode {
        if let Some(index) = model.selected_particle.filter(|&i| i < model.field.active()) {
            let rotation = renderer::group_rotation(model.params.animate, app.time);
            let target = renderer::project(model.field.positions[index], rotation);
            model.camera.follow(target);
        } else {
            model.camera.follow_mode = false;
        }
    }
}
