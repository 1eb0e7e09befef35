// src/physics/mod.rs
pub mod bonds;
pub mod lattice;
pub mod operations;
