// src/utils/geometry.rs

use crate::model::Point3;

/// Calculates distance between two points (Angstroms)
pub fn calculate_distance(p1: Point3, p2: Point3) -> f64 {
    len(sub(p1, p2))
}

/// Shortest distance between any two distinct sites, or None for fewer than two.
pub fn nearest_neighbour_distance(points: &[Point3]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = calculate_distance(points[i], points[j]);
            best = Some(best.map_or(d, |b| b.min(d)));
        }
    }
    best
}

// --- Internal Math Helpers for [f64; 3] ---

fn sub(a: Point3, b: Point3) -> Point3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: Point3, b: Point3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn len(a: Point3) -> f64 {
    dot(a, a).sqrt()
}
