//! Fixed topology for the network figure plus a seeded force-directed layout.
//!
//! The graph never changes: 8 named nodes, 11 weighted edges, drawn once.
//! Layout is Fruchterman–Reingold with seeded initial placement so repeated
//! runs produce the same picture.

use rand::Rng;

use crate::dist::seeded_rng;

pub const NODE_NAMES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// (from, to, weight) over indices into NODE_NAMES.
pub const EDGES: [(usize, usize, f64); 11] = [
    (0, 1, 0.8),
    (0, 2, 0.6),
    (1, 3, 0.9),
    (2, 4, 0.7),
    (3, 5, 0.5),
    (4, 6, 0.8),
    (5, 7, 0.6),
    (6, 7, 0.7),
    (0, 3, 0.4),
    (1, 4, 0.3),
    (2, 5, 0.5),
];

/// Spring-layout tuning used by the figure: ideal edge length, iteration
/// count, and seed. Matches the one drawing this module exists for.
pub const LAYOUT_K: f64 = 1.0;
pub const LAYOUT_ITERATIONS: usize = 50;
pub const LAYOUT_SEED: u64 = 42;

/// Fruchterman–Reingold layout, rescaled to fit [-1, 1] on both axes.
///
/// Repulsion k^2/d between every pair, attraction d^2/k along edges scaled by
/// edge weight, displacement capped by a linearly cooling temperature.
pub fn spring_layout(
    n_nodes: usize,
    edges: &[(usize, usize, f64)],
    k: f64,
    iterations: usize,
    seed: u64,
) -> Vec<(f64, f64)> {
    let mut rng = seeded_rng(seed);
    let mut pos: Vec<(f64, f64)> = (0..n_nodes)
        .map(|_| (rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    if n_nodes < 2 || iterations == 0 {
        return pos;
    }

    let t0 = 0.1f64;
    for iter in 0..iterations {
        let t = t0 * (1.0 - iter as f64 / iterations as f64);
        let mut disp = vec![(0.0f64, 0.0f64); n_nodes];

        for i in 0..n_nodes {
            for j in (i + 1)..n_nodes {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                let (ux, uy) = (dx / dist, dy / dist);
                disp[i].0 += ux * force;
                disp[i].1 += uy * force;
                disp[j].0 -= ux * force;
                disp[j].1 -= uy * force;
            }
        }

        for &(a, b, weight) in edges {
            let dx = pos[a].0 - pos[b].0;
            let dy = pos[a].1 - pos[b].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = weight * dist * dist / k;
            let (ux, uy) = (dx / dist, dy / dist);
            disp[a].0 -= ux * force;
            disp[a].1 -= uy * force;
            disp[b].0 += ux * force;
            disp[b].1 += uy * force;
        }

        for i in 0..n_nodes {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt().max(1e-9);
            let step = len.min(t);
            pos[i].0 += dx / len * step;
            pos[i].1 += dy / len * step;
        }
    }

    rescale_to_unit(&mut pos);
    pos
}

/// Center positions on the origin and scale the larger axis span to [-1, 1].
fn rescale_to_unit(pos: &mut [(f64, f64)]) {
    if pos.is_empty() {
        return;
    }
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;
    let mut span = 0.0f64;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        span = span.max(p.0.abs()).max(p.1.abs());
    }
    if span > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= span;
            p.1 /= span;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_is_fixed() {
        assert_eq!(NODE_NAMES.len(), 8);
        assert_eq!(EDGES.len(), 11);
        for &(a, b, w) in &EDGES {
            assert!(a < NODE_NAMES.len() && b < NODE_NAMES.len());
            assert!(a != b);
            assert!(w > 0.0 && w <= 1.0);
        }
    }

    #[test]
    fn layout_is_deterministic_for_a_seed() {
        let p1 = spring_layout(8, &EDGES, LAYOUT_K, LAYOUT_ITERATIONS, LAYOUT_SEED);
        let p2 = spring_layout(8, &EDGES, LAYOUT_K, LAYOUT_ITERATIONS, LAYOUT_SEED);
        assert_eq!(p1, p2);
        let p3 = spring_layout(8, &EDGES, LAYOUT_K, LAYOUT_ITERATIONS, LAYOUT_SEED + 1);
        assert_ne!(p1, p3);
    }

    #[test]
    fn layout_fits_unit_square() {
        let pos = spring_layout(8, &EDGES, LAYOUT_K, LAYOUT_ITERATIONS, LAYOUT_SEED);
        assert_eq!(pos.len(), 8);
        for &(x, y) in &pos {
            assert!(x.is_finite() && y.is_finite());
            assert!((-1.0..=1.0).contains(&x));
            assert!((-1.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn layout_separates_nodes() {
        let pos = spring_layout(8, &EDGES, LAYOUT_K, LAYOUT_ITERATIONS, LAYOUT_SEED);
        for i in 0..pos.len() {
            for j in (i + 1)..pos.len() {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                assert!(
                    (dx * dx + dy * dy).sqrt() > 1e-3,
                    "nodes {i} and {j} collapsed"
                );
            }
        }
    }
}
