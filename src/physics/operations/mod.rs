// src/physics/operations/mod.rs
pub mod defects;
pub mod rotation;

pub use defects::{inject, DefectSpec};
pub use rotation::{rotate, EulerAngles, RotationCenter};
