// src/lib.rs

//! Idealized crystal lattice generation.
//!
//! Builds point sets for seven lattice families, rotates them, punches
//! vacancies, dopes the survivors and works out which sites are close
//! enough to draw a bond between. Rendering is left to the caller.

pub mod config;
pub mod error;
pub mod model;
pub mod physics;
pub mod state;
pub mod utils;

pub use config::GenerationConfig;
pub use error::{AuraeonError, Result};
pub use model::{
    AtomAssignment, BondSet, ElementEntry, ElementTable, LatticeFamily, PointSet, RepeatCount, Snapshot,
    Sublattice, SublatticeRole, UnitCell,
};
pub use state::{build_snapshot, Session};
