/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle web. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection so the app knows whether a change applies in place or forces
 * a field regeneration.
 *
 * Two update classes:
 * - In-place fields (min_distance, limit_connections, max_connections,
 *   particle_count, tint, display and camera toggles) take effect on the
 *   very next frame with no regeneration.
 * - Structural fields (flat) invalidate the particle distribution and
 *   trigger a synchronous regenerate when changed.
 */

use crate::MAX_PARTICLES;

pub struct SimulationParams {
    pub min_distance: f32,
    pub limit_connections: bool,
    pub max_connections: u32,
    pub particle_count: usize,
    pub flat: bool,
    pub tint: [f32; 3],
    pub show_points: bool,
    pub show_lines: bool,
    pub animate: bool,
    pub zoom_enabled: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    min_distance: f32,
    limit_connections: bool,
    max_connections: u32,
    particle_count: usize,
    flat: bool,
    tint: [f32; 3],
    show_points: bool,
    show_lines: bool,
    animate: bool,
    zoom_enabled: bool,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            min_distance: 150.0,
            limit_connections: false,
            max_connections: 20,
            particle_count: 200,
            flat: true,
            tint: [1.0, 1.0, 1.0],
            show_points: true,
            show_lines: true,
            animate: false,
            zoom_enabled: true,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            min_distance: self.min_distance,
            limit_connections: self.limit_connections,
            max_connections: self.max_connections,
            particle_count: self.particle_count,
            flat: self.flat,
            tint: self.tint,
            show_points: self.show_points,
            show_lines: self.show_lines,
            animate: self.animate,
            zoom_enabled: self.zoom_enabled,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns a tuple of (structural_changed, any_ui_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut structural_changed = false;
        let mut ui_changed = false;

        if let Some(prev) = &self.previous_values {
            // Flat mode invalidates the particle distribution
            if self.flat != prev.flat {
                structural_changed = true;
                ui_changed = true;
            }

            // Everything else applies in place on the next frame
            if self.min_distance != prev.min_distance ||
               self.limit_connections != prev.limit_connections ||
               self.max_connections != prev.max_connections ||
               self.particle_count != prev.particle_count ||
               self.tint != prev.tint ||
               self.show_points != prev.show_points ||
               self.show_lines != prev.show_lines ||
               self.animate != prev.animate ||
               self.zoom_enabled != prev.zoom_enabled ||
               self.show_debug != prev.show_debug ||
               self.pause_simulation != prev.pause_simulation {
                ui_changed = true;
            }
        }

        (structural_changed, ui_changed)
    }

    // Clamp out-of-range values to their valid ranges. The UI sliders
    // already enforce these, but external callers mutating the store
    // directly get the documented clamp rather than an error.
    pub fn sanitize(&mut self) {
        if self.min_distance < 0.0 {
            self.min_distance = 0.0;
        }
        if self.particle_count > MAX_PARTICLES {
            self.particle_count = MAX_PARTICLES;
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_min_distance_range() -> std::ops::RangeInclusive<f32> {
        10.0..=300.0
    }

    pub fn get_max_connections_range() -> std::ops::RangeInclusive<u32> {
        0..=30
    }

    pub fn get_particle_count_range() -> std::ops::RangeInclusive<usize> {
        0..=MAX_PARTICLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_toggle_is_structural() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.flat = !params.flat;

        let (structural, ui) = params.detect_changes();
        assert!(structural);
        assert!(ui);
    }

    #[test]
    fn distance_change_applies_in_place() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.min_distance = 42.0;

        let (structural, ui) = params.detect_changes();
        assert!(!structural);
        assert!(ui);
    }

    #[test]
    fn no_change_without_snapshot_diff() {
        let mut params = SimulationParams::default();
        params.take_snapshot();

        let (structural, ui) = params.detect_changes();
        assert!(!structural);
        assert!(!ui);
    }

    #[test]
    fn sanitize_clamps_invalid_values() {
        let mut params = SimulationParams::default();
        params.min_distance = -5.0;
        params.particle_count = MAX_PARTICLES + 100;

        params.sanitize();

        assert_eq!(params.min_distance, 0.0);
        assert_eq!(params.particle_count, MAX_PARTICLES);
    }
}
