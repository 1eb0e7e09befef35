//src/model/mod.rs
pub mod cell;
pub mod elements;
pub mod structure;

// Re-exports for cleaner imports
pub use cell::{Dimension, LatticeFamily, RepeatCount, SublatticeRole, UnitCell, MAX_CELLS};
pub use elements::{ElementEntry, ElementTable, Rgb};
pub use structure::{AtomAssignment, BondSet, Point3, PointSet, Snapshot, Sublattice};
