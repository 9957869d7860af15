/*
 * Camera Module
 *
 * This module defines the Camera struct that handles zooming and panning
 * in the visualization. It provides coordinate transformations between
 * projected world space and screen space, plus a follow mode that eases
 * the view toward a selected particle.
 */

use nannou::prelude::*;

pub struct Camera {
    pub position: Vec2,
    pub zoom: f32,
    pub drag_start: Option<Vec2>,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
    pub follow_mode: bool,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            drag_start: None,
            min_zoom: 0.1,
            max_zoom: 5.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
            follow_mode: false,
        }
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        // Apply zoom and translation
        let zoomed = (point - self.position) * self.zoom;
        // Convert to screen coordinates
        zoomed + window_rect.xy()
    }

    // Convert a point from screen space to world space
    pub fn screen_to_world(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        // Convert from screen coordinates
        let centered = point - window_rect.xy();
        // Apply inverse zoom and translation
        centered / self.zoom + self.position
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll_delta: Vec2, cursor_position: Vec2, window_rect: Rect) {
        // Calculate zoom factor based on scroll amount
        let zoom_factor = 1.0 + scroll_delta.y * 0.1;

        // Calculate cursor position in world space before zoom
        let cursor_world_before = self.screen_to_world(cursor_position, window_rect);

        // Apply zoom, clamping to min/max values
        self.zoom = (self.zoom * zoom_factor).clamp(self.min_zoom, self.max_zoom);

        // Calculate cursor position in world space after zoom
        let cursor_world_after = self.screen_to_world(cursor_position, window_rect);

        // Adjust camera position to keep cursor over the same world point
        self.position += cursor_world_before - cursor_world_after;
    }

    // Start dragging the camera
    pub fn start_drag(&mut self, position: Vec2) {
        // Only set the drag start position, don't move the camera yet
        self.drag_start = Some(position);
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Update camera position while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            // Calculate drag delta from the last position (not the start position)
            let delta = position - self.last_cursor_pos;

            // Only apply movement if there's actually a change
            if delta.length_squared() > 0.0 {
                self.position -= delta / self.zoom;
                self.last_cursor_pos = position;
            }
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.drag_start = None;
        self.is_dragging = false;
    }

    // Ease the camera toward a followed target point
    pub fn follow(&mut self, target: Vec2) {
        if self.follow_mode {
            self.position += (target - self.position) * 0.1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_screen_round_trip() {
        let mut camera = Camera::new();
        camera.position = vec2(100.0, -50.0);
        camera.zoom = 2.0;
        let rect = Rect::from_w_h(800.0, 600.0);

        let world = vec2(33.0, 77.0);
        let screen = camera.world_to_screen(world, rect);
        let back = camera.screen_to_world(screen, rect);

        assert!((back - world).length() < 1e-3);
    }

    #[test]
    fn follow_eases_toward_target() {
        let mut camera = Camera::new();
        camera.follow_mode = true;

        camera.follow(vec2(100.0, 0.0));
        assert!((camera.position.x - 10.0).abs() < 1e-6);

        // Follow mode off leaves the camera alone
        camera.follow_mode = false;
        camera.follow(vec2(-100.0, 0.0));
        assert!((camera.position.x - 10.0).abs() < 1e-6);
    }
}
