// src/model/structure.rs

use super::cell::{Dimension, SublatticeRole};
use super::elements::ElementEntry;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Cartesian position in Å. Planar lattices keep z = 0.
pub type Point3 = [f64; 3];

/// Points sharing one generation role.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sublattice {
    pub role: SublatticeRole,
    pub points: Vec<Point3>,
}

impl Sublattice {
    pub fn new(role: SublatticeRole, points: Vec<Point3>) -> Self {
        Self { role, points }
    }

    pub fn name(&self) -> &'static str {
        self.role.name()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Generated coordinates, always grouped into sublattices.
///
/// The flattened index of a point is its position after concatenating
/// the sublattices in order; `AtomAssignment` and `BondSet` refer to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointSet {
    pub dimension: Dimension,
    pub sublattices: Vec<Sublattice>,
}

impl PointSet {
    pub fn new(dimension: Dimension, sublattices: Vec<Sublattice>) -> Self {
        Self { dimension, sublattices }
    }

    pub fn len(&self) -> usize {
        self.sublattices.iter().map(Sublattice::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sublattice(&self, role: SublatticeRole) -> Option<&Sublattice> {
        self.sublattices.iter().find(|s| s.role == role)
    }

    /// All points in flattened order.
    pub fn flatten(&self) -> Vec<Point3> {
        self.iter().map(|(_, p)| p).collect()
    }

    /// Iterates `(role, point)` in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = (SublatticeRole, Point3)> + '_ {
        self.sublattices
            .iter()
            .flat_map(|s| s.points.iter().map(move |&p| (s.role, p)))
    }

    /// Role of each flattened index.
    pub fn roles(&self) -> Vec<SublatticeRole> {
        self.iter().map(|(role, _)| role).collect()
    }

    /// Copy with every point passed through `f`, grouping unchanged.
    pub fn map_points<F>(&self, mut f: F) -> PointSet
    where
        F: FnMut(Point3) -> Point3,
    {
        let sublattices = self
            .sublattices
            .iter()
            .map(|s| Sublattice::new(s.role, s.points.iter().map(|&p| f(p)).collect()))
            .collect();
        PointSet::new(self.dimension, sublattices)
    }

    /// Copy keeping only the flattened indices where `keep[i]` is true.
    /// Sublattices left empty are still listed.
    pub fn retain_mask(&self, keep: &[bool]) -> PointSet {
        let mut index = 0;
        let sublattices = self
            .sublattices
            .iter()
            .map(|s| {
                let points = s
                    .points
                    .iter()
                    .filter(|_| {
                        let kept = keep.get(index).copied().unwrap_or(true);
                        index += 1;
                        kept
                    })
                    .copied()
                    .collect();
                Sublattice::new(s.role, points)
            })
            .collect();
        PointSet::new(self.dimension, sublattices)
    }

    pub fn centroid(&self) -> Point3 {
        let n = self.len();
        if n == 0 {
            return [0.0; 3];
        }
        let mut sum = [0.0; 3];
        for (_, p) in self.iter() {
            sum[0] += p[0];
            sum[1] += p[1];
            sum[2] += p[2];
        }
        let n = n as f64;
        [sum[0] / n, sum[1] / n, sum[2] / n]
    }
}

/// Element symbol for every flattened index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AtomAssignment {
    symbols: Vec<String>,
}

impl AtomAssignment {
    pub fn from_symbols(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// Host element everywhere; `decoration` (if any) on the non-corner sublattices.
    pub fn uniform(points: &PointSet, host: &str, decoration: Option<&str>) -> Self {
        let symbols = points
            .iter()
            .map(|(role, _)| match decoration {
                Some(sym) if !role.is_corner() => sym.to_string(),
                _ => host.to_string(),
            })
            .collect();
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub(crate) fn set(&mut self, index: usize, symbol: &str) {
        if let Some(slot) = self.symbols.get_mut(index) {
            *slot = symbol.to_string();
        }
    }

    pub(crate) fn retain_mask(&self, keep: &[bool]) -> AtomAssignment {
        let symbols = self
            .symbols
            .iter()
            .enumerate()
            .filter(|(i, _)| keep.get(*i).copied().unwrap_or(true))
            .map(|(_, s)| s.clone())
            .collect();
        Self { symbols }
    }

    /// Number of sites per element, sorted by symbol.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for symbol in &self.symbols {
            *counts.entry(symbol.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Bonded index pairs, each stored as `(i, j)` with `i < j`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BondSet {
    pairs: Vec<(usize, usize)>,
}

impl BondSet {
    pub(crate) fn from_pairs(mut pairs: Vec<(usize, usize)>) -> Self {
        pairs.sort_unstable();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Order-insensitive membership test.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        let key = if i < j { (i, j) } else { (j, i) };
        self.pairs.binary_search(&key).is_ok()
    }
}

/// Result of one generation cycle, handed to the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub points: PointSet,
    pub assignment: AtomAssignment,
    pub bonds: BondSet,
    /// Entries for every symbol in `assignment`, as read when the cycle started.
    pub palette: HashMap<String, ElementEntry>,
}

impl Snapshot {
    pub fn total_mass(&self) -> f64 {
        self.assignment
            .symbols()
            .iter()
            .filter_map(|s| self.palette.get(s))
            .map(|e| e.mass)
            .sum()
    }
}
