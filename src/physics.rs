/*
 * Physics Module
 *
 * This module handles particle motion and the population ramp.
 * Motion is a fixed per-tick Euler step with elastic reflection at the
 * domain walls; there is no time-delta scaling because the simulation
 * advances exactly once per rendered frame.
 */

use crate::particle::ParticleField;

// Advance every active particle by one tick and reflect velocities at the
// domain walls. Each axis is checked independently: a coordinate outside
// [-half_extent, half_extent] flips that axis's velocity sign. The position
// itself is not clamped back inside, so a fast particle can overshoot the
// wall for one frame before its reversed velocity pulls it back in.
pub fn integrate_and_reflect(field: &mut ParticleField) {
    let half = field.half_extent;

    for i in 0..field.active() {
        let vel = field.velocities[i];
        let pos = &mut field.positions[i];
        *pos += vel;

        if pos.x < -half || pos.x > half {
            field.velocities[i].x = -field.velocities[i].x;
        }
        if pos.y < -half || pos.y > half {
            field.velocities[i].y = -field.velocities[i].y;
        }
        if pos.z < -half || pos.z > half {
            field.velocities[i].z = -field.velocities[i].z;
        }
    }
}

// Move the active count one step toward the target: grow by exactly one
// particle per frame (the visible fade-in), shrink instantly when the
// target is lowered from the panel.
pub fn ramp_tick(field: &mut ParticleField, target: usize) {
    let active = field.active();

    if active < target {
        field.set_active(active + 1);
    } else if active > target {
        field.set_active(target);
    }
}
