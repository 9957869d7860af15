/*
 * Renderer Module
 *
 * This module is the rendering collaborator for the simulation core: it
 * consumes the published link geometry (valid prefix only, per the draw
 * range) and the active particle slice, and draws them with nannou's
 * immediate-mode API. A thin fixed-focal projection flattens the rotated
 * 3D scene before the 2D camera transform is applied.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::{DOMAIN_SIZE, POINT_SIZE};

// Distance from the eye to the projection plane; large relative to the
// domain so perspective stays subtle
const FOCAL_LENGTH: f32 = 1750.0;

// Scene rotation applied to the whole particle group when the animate
// toggle is on
pub fn group_rotation(animate: bool, time: f32) -> (f32, f32) {
    if animate {
        ((time * 0.5).sin(), (time * 0.5).cos())
    } else {
        (0.0, 0.0)
    }
}

// Rotate a point around the X and Z axes, then perspective-project it onto
// the viewing plane
pub fn project(point: Vec3, rotation: (f32, f32)) -> Vec2 {
    let (rx, rz) = rotation;

    // Rotate around X
    let (sin_x, cos_x) = rx.sin_cos();
    let y1 = point.y * cos_x - point.z * sin_x;
    let z1 = point.y * sin_x + point.z * cos_x;

    // Rotate around Z
    let (sin_z, cos_z) = rz.sin_cos();
    let x2 = point.x * cos_z - y1 * sin_z;
    let y2 = point.x * sin_z + y1 * cos_z;

    // Perspective divide; the domain is far inside the focal distance so
    // the denominator stays positive
    let scale = FOCAL_LENGTH / (FOCAL_LENGTH - z1).max(1.0);
    vec2(x2 * scale, y2 * scale)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Get the window rectangle
    let window_rect = app.window_rect();

    let rotation = group_rotation(model.params.animate, app.time);
    let camera = &model.camera;

    // Draw the domain bounds as a dim wireframe cube
    let half = DOMAIN_SIZE / 2.0;
    let corners: [Vec3; 8] = [
        vec3(-half, -half, -half),
        vec3(half, -half, -half),
        vec3(half, half, -half),
        vec3(-half, half, -half),
        vec3(-half, -half, half),
        vec3(half, -half, half),
        vec3(half, half, half),
        vec3(-half, half, half),
    ];
    const CUBE_EDGES: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];

    for &(a, b) in CUBE_EDGES.iter() {
        let start = camera.world_to_screen(project(corners[a], rotation), window_rect);
        let end = camera.world_to_screen(project(corners[b], rotation), window_rect);
        draw.line()
            .start(pt2(start.x, start.y))
            .end(pt2(end.x, end.y))
            .weight(1.0)
            .color(rgba(0.06, 0.06, 0.06, 1.0));
    }

    let [tint_r, tint_g, tint_b] = model.params.tint;

    // Draw the link segments from the published buffers, valid prefix only
    if model.params.show_lines {
        let geo = &model.links;
        let mut vertex = 0;
        while vertex + 1 < geo.draw_range() {
            let base = vertex * 3;
            let a = vec3(geo.positions[base], geo.positions[base + 1], geo.positions[base + 2]);
            let b = vec3(geo.positions[base + 3], geo.positions[base + 4], geo.positions[base + 5]);

            // Both endpoints carry the same greyscale alpha
            let alpha = geo.colors[base];

            let start = camera.world_to_screen(project(a, rotation), window_rect);
            let end = camera.world_to_screen(project(b, rotation), window_rect);

            draw.line()
                .start(pt2(start.x, start.y))
                .end(pt2(end.x, end.y))
                .weight(1.0)
                .color(rgba(tint_r * alpha, tint_g * alpha, tint_b * alpha, 1.0));

            vertex += 2;
        }
    }

    // Draw the active particles as constant-size points (no size attenuation)
    if model.params.show_points {
        for i in 0..model.field.active() {
            let screen = camera.world_to_screen(project(model.field.positions[i], rotation), window_rect);
            draw.ellipse()
                .x_y(screen.x, screen.y)
                .w_h(POINT_SIZE, POINT_SIZE)
                .color(rgba(tint_r, tint_g, tint_b, 1.0));
        }
    }

    // Highlight the selected particle
    if let Some(index) = model.selected_particle {
        if index < model.field.active() {
            let screen = camera.world_to_screen(project(model.field.positions[index], rotation), window_rect);
            draw.ellipse()
                .x_y(screen.x, screen.y)
                .w_h(POINT_SIZE * 4.0, POINT_SIZE * 4.0)
                .no_fill()
                .stroke(YELLOW)
                .stroke_weight(1.0);
        }
    }

    // Draw debug info
    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, camera.zoom, DOMAIN_SIZE);
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // The published attributes have been consumed for this frame
    model.links.positions_dirty.set(false);
    model.links.colors_dirty.set(false);

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
