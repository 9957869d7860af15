/*
 * Links Module
 *
 * This module builds the proximity graph: every pair of active particles
 * closer than the minimum distance becomes a line segment, written into a
 * pair of flat vertex buffers that the renderer draws as line segments.
 *
 * The scan is a deliberate brute-force O(n^2) pass. The population is
 * capped at MAX_PARTICLES (1000), which keeps the pair count small enough
 * for interactive frame rates without a spatial index, and the fixed
 * row-major iteration order keeps the output deterministic for a given
 * field state.
 */

use std::cell::Cell;

use crate::particle::ParticleField;

// Preallocated line-segment geometry shared with the renderer. The buffers
// are sized for the worst case of a complete graph over the maximum
// population, so a build can never overflow them. Only the prefix up to
// draw_range (in vertices) is valid for the current frame.
pub struct LinkGeometry {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    draw_range: usize,
    pub positions_dirty: Cell<bool>,
    pub colors_dirty: Cell<bool>,
}

impl LinkGeometry {
    pub fn new(capacity: usize) -> Self {
        let scalars = capacity * capacity * 3;
        Self {
            positions: vec![0.0; scalars],
            colors: vec![0.0; scalars],
            draw_range: 0,
            positions_dirty: Cell::new(false),
            colors_dirty: Cell::new(false),
        }
    }

    // Number of vertices in the valid prefix (two per line segment)
    pub fn draw_range(&self) -> usize {
        self.draw_range
    }

    pub fn clear(&mut self) {
        self.draw_range = 0;
        self.positions_dirty.set(true);
        self.colors_dirty.set(true);
    }
}

// Rebuild the proximity graph from scratch for the current frame.
//
// Resets the active connection counters, then scans all pairs (i, j) with
// j > i. When the degree cap is enabled, particle i is skipped for the whole
// row once its counter has reached the cap (checked once, before the inner
// loop) and candidate j is skipped individually before the distance test.
// Counters incremented earlier in the same pass are visible to later pairs,
// so a particle can end the frame slightly over the cap; that overshoot is
// part of the observable behavior and is kept as-is.
//
// Each qualifying pair appends both endpoints' position triples and a
// greyscale alpha (1 - d/min_distance, repeated across all three channels
// of both vertices) to the buffers. Returns the number of links written.
pub fn build_links(
    field: &mut ParticleField,
    min_distance: f32,
    limit_connections: bool,
    max_connections: u32,
    geo: &mut LinkGeometry,
) -> usize {
    field.reset_connections();

    let mut vertex_cursor = 0;
    let mut color_cursor = 0;
    let mut num_links = 0;

    let active = field.active();

    for i in 0..active {
        if limit_connections && field.connections[i] >= max_connections {
            continue;
        }

        for j in (i + 1)..active {
            if limit_connections && field.connections[j] >= max_connections {
                continue;
            }

            let dist = field.positions[i].distance(field.positions[j]);

            if dist < min_distance {
                field.connections[i] += 1;
                field.connections[j] += 1;

                let alpha = 1.0 - dist / min_distance;

                for &p in &[field.positions[i], field.positions[j]] {
                    geo.positions[vertex_cursor] = p.x;
                    geo.positions[vertex_cursor + 1] = p.y;
                    geo.positions[vertex_cursor + 2] = p.z;
                    vertex_cursor += 3;

                    geo.colors[color_cursor] = alpha;
                    geo.colors[color_cursor + 1] = alpha;
                    geo.colors[color_cursor + 2] = alpha;
                    color_cursor += 3;
                }

                num_links += 1;
            }
        }
    }

    geo.draw_range = num_links * 2;
    geo.positions_dirty.set(true);
    geo.colors_dirty.set(true);

    num_links
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn field_at(positions: &[Vec3]) -> ParticleField {
        let mut field = ParticleField::new(positions.len(), 800.0, false);
        for (i, &p) in positions.iter().enumerate() {
            field.positions[i] = p;
        }
        field.set_active(positions.len());
        field
    }

    #[test]
    fn links_nearby_pair_with_linear_falloff() {
        let mut field = field_at(&[
            vec3(0.0, 0.0, 0.0),
            vec3(50.0, 0.0, 0.0),
            vec3(500.0, 0.0, 0.0),
        ]);
        let mut geo = LinkGeometry::new(field.capacity());

        let links = build_links(&mut field, 100.0, false, 0, &mut geo);

        assert_eq!(links, 1);
        assert_eq!(geo.draw_range(), 2);

        // Both endpoints written in order, alpha = 1 - 50/100 on every channel
        assert_eq!(&geo.positions[0..6], &[0.0, 0.0, 0.0, 50.0, 0.0, 0.0]);
        assert_eq!(&geo.colors[0..6], &[0.5; 6]);

        // Counters are symmetric; the far particle stays isolated
        assert_eq!(field.connections[0], 1);
        assert_eq!(field.connections[1], 1);
        assert_eq!(field.connections[2], 0);
    }

    #[test]
    fn zero_min_distance_yields_no_links() {
        let mut field = field_at(&[vec3(0.0, 0.0, 0.0), vec3(0.1, 0.0, 0.0)]);
        let mut geo = LinkGeometry::new(field.capacity());

        let links = build_links(&mut field, 0.0, false, 0, &mut geo);

        assert_eq!(links, 0);
        assert_eq!(geo.draw_range(), 0);
    }

    #[test]
    fn counters_reset_between_builds() {
        let mut field = field_at(&[vec3(0.0, 0.0, 0.0), vec3(10.0, 0.0, 0.0)]);
        let mut geo = LinkGeometry::new(field.capacity());

        build_links(&mut field, 100.0, false, 0, &mut geo);
        build_links(&mut field, 100.0, false, 0, &mut geo);

        // Counters reflect a single pass, not an accumulation
        assert_eq!(field.connections[0], 1);
        assert_eq!(field.connections[1], 1);
    }

    #[test]
    fn degree_cap_skips_saturated_candidates() {
        // Three mutually-near particles with a cap of 1. Row-major order:
        // (0,1) links and saturates both; (0,2) still links because the
        // outer check only runs once per row, leaving particle 0 one over
        // the cap; row 1 is then skipped entirely.
        let mut field = field_at(&[
            vec3(0.0, 0.0, 0.0),
            vec3(10.0, 0.0, 0.0),
            vec3(20.0, 0.0, 0.0),
        ]);
        let mut geo = LinkGeometry::new(field.capacity());

        let links = build_links(&mut field, 100.0, true, 1, &mut geo);

        assert_eq!(links, 2);
        assert_eq!(field.connections[0], 2);
        assert_eq!(field.connections[1], 1);
        assert_eq!(field.connections[2], 1);
    }

    #[test]
    fn cap_of_zero_suppresses_all_links() {
        let mut field = field_at(&[vec3(0.0, 0.0, 0.0), vec3(10.0, 0.0, 0.0)]);
        let mut geo = LinkGeometry::new(field.capacity());

        let links = build_links(&mut field, 100.0, true, 0, &mut geo);

        assert_eq!(links, 0);
    }

    #[test]
    fn scalar_writes_stay_within_pair_bound() {
        // Worst case: every pair links. Written scalars per buffer must not
        // exceed 2 * C(n, 2) * 3.
        let n = 20;
        let positions: Vec<Vec3> = (0..n).map(|i| vec3(i as f32 * 0.01, 0.0, 0.0)).collect();
        let mut field = field_at(&positions);
        let mut geo = LinkGeometry::new(field.capacity());

        let links = build_links(&mut field, 100.0, false, 0, &mut geo);

        let max_pairs = n * (n - 1) / 2;
        assert_eq!(links, max_pairs);
        assert!(geo.draw_range() * 3 <= 2 * max_pairs * 3);
    }

    #[test]
    fn build_marks_attributes_dirty() {
        let mut field = field_at(&[vec3(0.0, 0.0, 0.0)]);
        let mut geo = LinkGeometry::new(field.capacity());
        geo.positions_dirty.set(false);
        geo.colors_dirty.set(false);

        build_links(&mut field, 100.0, false, 0, &mut geo);

        assert!(geo.positions_dirty.get());
        assert!(geo.colors_dirty.get());
    }
}
