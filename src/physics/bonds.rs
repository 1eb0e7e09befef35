// src/physics/bonds.rs

use crate::model::{BondSet, Point3, PointSet};
use crate::utils::geometry::calculate_distance;
use log::debug;

/// Relative slack on the cutoff so spacings built from sqrt(3)/2 are not lost to rounding.
pub const BOND_TOLERANCE: f64 = 1e-12;

/// All pairs `(i, j)`, `i < j`, no farther apart than `threshold`.
///
/// Brute-force O(n²); fine for the few hundred sites a handful of
/// repeats produce. A non-positive (or NaN) threshold bonds nothing.
pub fn resolve_bonds(points: &[Point3], threshold: f64) -> BondSet {
    if threshold.is_nan() || threshold <= 0.0 || points.len() < 2 {
        return BondSet::default();
    }

    let cutoff = threshold * (1.0 + BOND_TOLERANCE);
    let mut pairs = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if calculate_distance(points[i], points[j]) <= cutoff {
                pairs.push((i, j));
            }
        }
    }

    debug!("Resolved {} bonds at cutoff {:.3} Å", pairs.len(), threshold);
    BondSet::from_pairs(pairs)
}

/// Bonds over the flattened indices of a point set.
pub fn resolve(points: &PointSet, threshold: f64) -> BondSet {
    resolve_bonds(&points.flatten(), threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LatticeFamily, RepeatCount, UnitCell};
    use crate::physics::lattice::generate;

    #[test]
    fn test_cube_edges_only() {
        let cell = UnitCell::isometric(1.0);
        let set = generate(LatticeFamily::SimpleCubic3d, RepeatCount::new(2, 2, 2), &cell).unwrap();
        let points = set.flatten();
        let bonds = resolve(&set, 1.0);

        // A cube has 12 edges; 12 face diagonals and 4 body diagonals are excluded
        assert_eq!(bonds.len(), 12);
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let d = calculate_distance(points[i], points[j]);
                if (d - 1.0).abs() < 1e-12 {
                    assert!(bonds.contains(i, j), "edge {}-{} missing", i, j);
                } else {
                    assert!(!bonds.contains(i, j), "diagonal {}-{} bonded", i, j);
                }
            }
        }
    }

    #[test]
    fn test_zero_threshold_is_empty_for_every_family() {
        let cell = UnitCell::isometric(1.0);
        for family in LatticeFamily::ALL {
            let set = generate(family, RepeatCount::new(3, 3, 3), &cell).unwrap();
            assert!(resolve(&set, 0.0).is_empty(), "{} produced bonds", family);
        }
    }

    #[test]
    fn test_negative_and_nan_thresholds() {
        let points = vec![[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        assert!(resolve_bonds(&points, -1.0).is_empty());
        assert!(resolve_bonds(&points, f64::NAN).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_bonds(&[], 2.5).is_empty());
        assert!(resolve_bonds(&[[1.0, 2.0, 3.0]], 2.5).is_empty());
    }

    #[test]
    fn test_cutoff_is_inclusive_but_not_widened() {
        let touching = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        assert_eq!(resolve_bonds(&touching, 1.0).len(), 1);

        let just_past = vec![[0.0, 0.0, 0.0], [1.0 + 5e-10, 0.0, 0.0]];
        assert!(resolve_bonds(&just_past, 1.0).is_empty());

        // The slack scales with the threshold
        let tiny = vec![[0.0, 0.0, 0.0], [1e-3 + 1e-12, 0.0, 0.0]];
        assert!(resolve_bonds(&tiny, 1e-3).is_empty());
    }

    #[test]
    fn test_pairs_are_ordered() {
        let points = vec![[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [0.5, 0.0, 0.0], [5.5, 0.0, 0.0]];
        let bonds = resolve_bonds(&points, 0.6);
        assert_eq!(bonds.pairs(), &[(0, 2), (1, 3)]);
    }

    #[test]
    fn test_hexagonal_nearest_neighbours() {
        // Every interior site of a triangular net has six neighbours at distance a
        let cell = UnitCell::isometric(1.0);
        let set = generate(LatticeFamily::Hexagonal2d, RepeatCount::new(5, 5, 1), &cell).unwrap();
        let bonds = resolve(&set, 1.0);

        let centre = 2 * 5 + 2;
        let degree = bonds
            .pairs()
            .iter()
            .filter(|&&(i, j)| i == centre || j == centre)
            .count();
        assert_eq!(degree, 6);
    }
}
