//! Proximity connections between particles.
//!
//! Each frame, every unordered particle pair closer than the threshold gets
//! an edge whose alpha rises from 0 at the threshold to 1 at zero distance.
//! The pass visits all pairs, so cost grows with the square of the pool
//! size; tens of particles are cheap, hundreds are not; nothing here uses
//! a spatial index.

use crate::entity::{ConnectionEdge, Particle};

/// Collect the connection edges for the current particle positions.
///
/// Edges are emitted with `a < b` and only for distances strictly below
/// `threshold`; a pair exactly at the threshold gets no edge rather than an
/// invisible one.
pub fn connection_edges(particles: &[Particle], threshold: f32) -> Vec<ConnectionEdge> {
    let mut edges = Vec::new();
    for a in 0..particles.len() {
        for b in (a + 1)..particles.len() {
            let dist = particles[a].position.distance(particles[b].position);
            if dist < threshold {
                edges.push(ConnectionEdge {
                    a,
                    b,
                    alpha: 1.0 - dist / threshold,
                });
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius: 5.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_alpha_scales_with_distance() {
        let particles = [particle_at(0.0, 0.0), particle_at(25.0, 0.0)];
        let edges = connection_edges(&particles, 100.0);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].a, 0);
        assert_eq!(edges[0].b, 1);
        assert!((edges[0].alpha - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_no_edge_at_or_beyond_threshold() {
        let particles = [particle_at(0.0, 0.0), particle_at(100.0, 0.0)];
        assert!(connection_edges(&particles, 100.0).is_empty());

        let particles = [particle_at(0.0, 0.0), particle_at(150.0, 0.0)];
        assert!(connection_edges(&particles, 100.0).is_empty());
    }

    #[test]
    fn test_alpha_vanishes_approaching_threshold() {
        let particles = [particle_at(0.0, 0.0), particle_at(99.9, 0.0)];
        let edges = connection_edges(&particles, 100.0);
        assert_eq!(edges.len(), 1);
        assert!(edges[0].alpha > 0.0);
        assert!(edges[0].alpha < 0.002);
    }

    #[test]
    fn test_alpha_symmetric_in_endpoints() {
        // Same pair, opposite storage order: the edge must not change.
        let forward = [particle_at(10.0, 20.0), particle_at(40.0, 60.0)];
        let backward = [particle_at(40.0, 60.0), particle_at(10.0, 20.0)];
        let edge_fwd = connection_edges(&forward, 100.0)[0];
        let edge_bwd = connection_edges(&backward, 100.0)[0];
        assert!((edge_fwd.alpha - edge_bwd.alpha).abs() < 1e-6);
    }

    #[test]
    fn test_every_close_pair_gets_one_edge() {
        let particles = [
            particle_at(0.0, 0.0),
            particle_at(30.0, 0.0),
            particle_at(0.0, 30.0),
        ];
        let edges = connection_edges(&particles, 100.0);
        assert_eq!(edges.len(), 3);
        for edge in &edges {
            assert!(edge.a < edge.b);
        }
    }

    #[test]
    fn test_degenerate_pools() {
        assert!(connection_edges(&[], 100.0).is_empty());
        assert!(connection_edges(&[particle_at(5.0, 5.0)], 100.0).is_empty());
    }
}
