/*
 * Particle Web
 *
 * An interactive visualization of a bounded particle population whose near
 * neighbors are joined by line segments, recomputed every frame. The
 * population fades in one particle per frame, bounces off the domain walls,
 * and is tuned live from an egui control panel.
 */

use plexus::app;

fn main() {
    nannou::app(app::model)
        .update(app::update)
        .run();
}
