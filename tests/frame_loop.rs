/*
 * Frame Loop Integration Tests
 *
 * Exercises the per-frame pipeline (ramp -> integrate -> rebuild links)
 * across many frames, without the windowed host.
 */

use nannou::prelude::*;

use plexus::links::{build_links, LinkGeometry};
use plexus::particle::ParticleField;
use plexus::physics::{integrate_and_reflect, ramp_tick};
use plexus::{DOMAIN_SIZE, MAX_PARTICLES};

fn run_frame(
    field: &mut ParticleField,
    geo: &mut LinkGeometry,
    target: usize,
    min_distance: f32,
) -> usize {
    ramp_tick(field, target);
    integrate_and_reflect(field);
    build_links(field, min_distance, false, 0, geo)
}

#[test]
fn population_fades_in_one_particle_per_frame() {
    let mut field = ParticleField::new(MAX_PARTICLES, DOMAIN_SIZE, true);
    let mut geo = LinkGeometry::new(MAX_PARTICLES);

    for frame in 1..=400 {
        run_frame(&mut field, &mut geo, 400, 150.0);
        assert_eq!(field.active(), frame);
    }

    // Steady after the ramp completes
    run_frame(&mut field, &mut geo, 400, 150.0);
    assert_eq!(field.active(), 400);
}

#[test]
fn draw_range_tracks_link_count_every_frame() {
    let mut field = ParticleField::new(MAX_PARTICLES, DOMAIN_SIZE, true);
    let mut geo = LinkGeometry::new(MAX_PARTICLES);

    for _ in 0..100 {
        let links = run_frame(&mut field, &mut geo, 300, 150.0);
        assert_eq!(geo.draw_range(), links * 2);
        assert!(geo.positions_dirty.get());
        assert!(geo.colors_dirty.get());

        // Renderer consumes the attributes
        geo.positions_dirty.set(false);
        geo.colors_dirty.set(false);
    }
}

#[test]
fn particles_stay_near_domain_over_long_runs() {
    let mut field = ParticleField::new(200, DOMAIN_SIZE, false);
    let mut geo = LinkGeometry::new(200);
    let half = DOMAIN_SIZE / 2.0;

    for _ in 0..2000 {
        run_frame(&mut field, &mut geo, 200, 150.0);
    }

    // Reflection lets a particle overshoot a wall by at most one tick of
    // velocity (|v| <= 1 per axis) before it turns around
    for i in 0..field.active() {
        let pos = field.positions[i];
        assert!(pos.x.abs() <= half + 1.0);
        assert!(pos.y.abs() <= half + 1.0);
        assert!(pos.z.abs() <= half + 1.0);
    }
}

#[test]
fn counters_are_symmetric_across_a_frame() {
    let mut field = ParticleField::new(100, DOMAIN_SIZE, true);
    let mut geo = LinkGeometry::new(100);
    field.set_active(100);

    let links = build_links(&mut field, 150.0, false, 0, &mut geo);

    // Every link increments exactly two counters
    let total: u32 = field.connections[..field.active()].iter().sum();
    assert_eq!(total as usize, links * 2);
}

#[test]
fn regenerate_mid_run_restarts_the_ramp() {
    let mut field = ParticleField::new(MAX_PARTICLES, DOMAIN_SIZE, true);
    let mut geo = LinkGeometry::new(MAX_PARTICLES);

    for _ in 0..250 {
        run_frame(&mut field, &mut geo, 400, 150.0);
    }
    assert_eq!(field.active(), 250);

    // Structural change: switch out of flat mode
    field.regenerate(false);
    geo.clear();
    assert_eq!(field.active(), 0);
    assert_eq!(geo.draw_range(), 0);

    run_frame(&mut field, &mut geo, 400, 150.0);
    assert_eq!(field.active(), 1);

    // The regenerated distribution actually uses the z axis
    let any_depth = field.positions.iter().any(|p| p.z != 0.0);
    assert!(any_depth);
}

#[test]
fn edge_scalars_never_exceed_theoretical_bound() {
    let mut field = ParticleField::new(150, DOMAIN_SIZE, true);
    let mut geo = LinkGeometry::new(150);
    field.set_active(150);

    // Oversized threshold forces the complete graph
    let links = build_links(&mut field, 10_000.0, false, 0, &mut geo);

    let n = field.active();
    let max_pairs = n * (n - 1) / 2;
    assert_eq!(links, max_pairs);
    assert!(geo.draw_range() * 3 <= 2 * max_pairs * 3);
    assert!(geo.draw_range() * 3 <= geo.positions.len());
}

#[test]
fn alpha_can_exceed_one_only_by_falloff_formula() {
    // alpha = 1 - d/min_distance is not clamped; coincident particles give
    // exactly 1.0 and nothing above it
    let mut field = ParticleField::new(2, DOMAIN_SIZE, true);
    field.positions[0] = vec3(0.0, 0.0, 0.0);
    field.positions[1] = vec3(0.0, 0.0, 0.0);
    field.velocities[0] = Vec3::ZERO;
    field.velocities[1] = Vec3::ZERO;
    field.set_active(2);
    let mut geo = LinkGeometry::new(2);

    build_links(&mut field, 100.0, false, 0, &mut geo);

    assert_eq!(geo.colors[0], 1.0);
}
