/*
 * Particle Module
 *
 * This module defines the ParticleField struct that owns all particle state:
 * positions, velocities and per-particle connection counters, together with
 * the cubic domain bounds. The field is regenerated wholesale whenever a
 * structural parameter (flat mode, explicit reset) changes.
 */

use nannou::prelude::*;
use rand::Rng;

pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub connections: Vec<u32>,
    // Number of particles currently simulated and drawn; always <= capacity
    active: usize,
    pub half_extent: f32,
    pub flat: bool,
}

impl ParticleField {
    pub fn new(capacity: usize, domain_size: f32, flat: bool) -> Self {
        let mut field = Self {
            positions: vec![Vec3::ZERO; capacity],
            velocities: vec![Vec3::ZERO; capacity],
            connections: vec![0; capacity],
            active: 0,
            half_extent: domain_size / 2.0,
            flat,
        };
        field.regenerate(flat);
        field
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    // Set the active count directly, clamped to capacity
    pub fn set_active(&mut self, count: usize) {
        self.active = count.min(self.capacity());
    }

    // Replace every particle's position and velocity with fresh random values
    // and restart the ramp from zero. Storage is overwritten in place, so no
    // stale buffers survive a regenerate.
    pub fn regenerate(&mut self, flat: bool) {
        let mut rng = rand::thread_rng();
        let half = self.half_extent;

        self.flat = flat;

        for i in 0..self.capacity() {
            let z = if flat { 0.0 } else { rng.gen_range(-half..half) };
            self.positions[i] = vec3(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                z,
            );

            let vz = if flat { 0.0 } else { rng.gen_range(-1.0..1.0) };
            self.velocities[i] = vec3(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                vz,
            );

            self.connections[i] = 0;
        }

        self.active = 0;
    }

    // Zero the connection counters of the active slice. Called at the start
    // of every link-build pass.
    pub fn reset_connections(&mut self) {
        for count in &mut self.connections[..self.active] {
            *count = 0;
        }
    }
}
