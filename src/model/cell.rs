// src/model/cell.rs

use crate::error::{AuraeonError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Two,
    Three,
}

/// The repeating cell. Edges in Å, angles in degrees.
///
/// Angles are carried for reporting (cell volume, density); the
/// axis-aligned generators only read the edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Default for UnitCell {
    fn default() -> Self {
        Self::isometric(1.0)
    }
}

impl UnitCell {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { a, b, c, alpha, beta, gamma }
    }

    /// Cubic cell: a = b = c, all angles 90°.
    pub fn isometric(a: f64) -> Self {
        Self::new(a, a, a, 90.0, 90.0, 90.0)
    }

    /// Re-derives b, c and the angles from `a`.
    pub fn make_isometric(&mut self) {
        *self = Self::isometric(self.a);
    }

    pub fn is_isometric(&self) -> bool {
        self.a == self.b
            && self.b == self.c
            && [self.alpha, self.beta, self.gamma].iter().all(|&x| x == 90.0)
    }

    /// Area of the a-b face.
    pub fn area(&self) -> f64 {
        self.a * self.b * self.gamma.to_radians().sin()
    }

    /// Volume from edges and angles (triclinic formula).
    pub fn volume(&self) -> f64 {
        let (ca, cb, cg) = (
            self.alpha.to_radians().cos(),
            self.beta.to_radians().cos(),
            self.gamma.to_radians().cos(),
        );
        let factor = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
        self.a * self.b * self.c * factor.max(0.0).sqrt()
    }

    pub(crate) fn validate(&self, dimension: Dimension) -> Result<()> {
        check_edge("a", self.a)?;
        check_edge("b", self.b)?;
        if dimension == Dimension::Three {
            check_edge("c", self.c)?;
        }
        Ok(())
    }
}

fn check_edge(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AuraeonError::invalid(
            parameter,
            format!("edge length must be a positive number, got {value}"),
        ))
    }
}

/// Number of cells tiled along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatCount {
    pub nx: i32,
    pub ny: i32,
    pub nz: i32,
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self { nx: 5, ny: 5, nz: 5 }
    }
}

/// Upper bound on `nx * ny * nz` (or `nx * ny` for planar lattices).
pub const MAX_CELLS: usize = 1_000_000;

impl RepeatCount {
    pub fn new(nx: i32, ny: i32, nz: i32) -> Self {
        Self { nx, ny, nz }
    }

    /// Checks the axes used by `dimension`; a planar lattice ignores `nz`.
    pub(crate) fn validate(&self, dimension: Dimension) -> Result<()> {
        check_count("nx", self.nx)?;
        check_count("ny", self.ny)?;
        if dimension == Dimension::Three {
            check_count("nz", self.nz)?;
        }
        match self.checked_cells(dimension) {
            Some(total) if total <= MAX_CELLS => Ok(()),
            _ => Err(AuraeonError::invalid(
                "repeats",
                format!(
                    "{} x {} x {} cells exceeds the limit of {}",
                    self.nx, self.ny, self.nz, MAX_CELLS
                ),
            )),
        }
    }

    fn checked_cells(&self, dimension: Dimension) -> Option<usize> {
        let planar = (self.nx.max(0) as usize).checked_mul(self.ny.max(0) as usize)?;
        match dimension {
            Dimension::Two => Some(planar),
            Dimension::Three => planar.checked_mul(self.nz.max(0) as usize),
        }
    }

    /// Number of cells for `dimension`; saturates instead of overflowing.
    pub fn cells(&self, dimension: Dimension) -> usize {
        self.checked_cells(dimension).unwrap_or(usize::MAX)
    }
}

fn check_count(parameter: &'static str, value: i32) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(AuraeonError::invalid(
            parameter,
            format!("repeat count must be at least 1, got {value}"),
        ))
    }
}

/// Generation role of a group of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SublatticeRole {
    Corner,
    Center,
    /// Offset (a/2, b/2, 0)
    Face1,
    /// Offset (a/2, 0, c/2)
    Face2,
    /// Offset (0, b/2, c/2)
    Face3,
}

impl SublatticeRole {
    pub fn name(&self) -> &'static str {
        match self {
            SublatticeRole::Corner => "corner",
            SublatticeRole::Center => "center",
            SublatticeRole::Face1 => "face-1",
            SublatticeRole::Face2 => "face-2",
            SublatticeRole::Face3 => "face-3",
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, SublatticeRole::Corner)
    }
}

impl fmt::Display for SublatticeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeFamily {
    #[serde(rename = "simple_cubic_2d")]
    SimpleCubic2d,
    #[serde(rename = "triangular_2d")]
    Triangular2d,
    #[serde(rename = "hexagonal_2d")]
    Hexagonal2d,
    #[serde(rename = "simple_cubic_3d")]
    SimpleCubic3d,
    #[serde(rename = "bcc")]
    Bcc,
    #[serde(rename = "fcc")]
    Fcc,
    #[serde(rename = "hexagonal_3d")]
    Hexagonal3d,
}

impl LatticeFamily {
    pub const ALL: [LatticeFamily; 7] = [
        LatticeFamily::SimpleCubic2d,
        LatticeFamily::Triangular2d,
        LatticeFamily::Hexagonal2d,
        LatticeFamily::SimpleCubic3d,
        LatticeFamily::Bcc,
        LatticeFamily::Fcc,
        LatticeFamily::Hexagonal3d,
    ];

    pub fn dimension(&self) -> Dimension {
        match self {
            LatticeFamily::SimpleCubic2d | LatticeFamily::Triangular2d | LatticeFamily::Hexagonal2d => {
                Dimension::Two
            }
            _ => Dimension::Three,
        }
    }

    /// Sublattices produced by the generator, in output order.
    pub fn roles(&self) -> &'static [SublatticeRole] {
        match self {
            LatticeFamily::Bcc => &[SublatticeRole::Corner, SublatticeRole::Center],
            LatticeFamily::Fcc => &[
                SublatticeRole::Corner,
                SublatticeRole::Face1,
                SublatticeRole::Face2,
                SublatticeRole::Face3,
            ],
            _ => &[SublatticeRole::Corner],
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            LatticeFamily::SimpleCubic2d => "simple_cubic_2d",
            LatticeFamily::Triangular2d => "triangular_2d",
            LatticeFamily::Hexagonal2d => "hexagonal_2d",
            LatticeFamily::SimpleCubic3d => "simple_cubic_3d",
            LatticeFamily::Bcc => "bcc",
            LatticeFamily::Fcc => "fcc",
            LatticeFamily::Hexagonal3d => "hexagonal_3d",
        }
    }

    /// Human-readable title for reports.
    pub fn label(&self) -> &'static str {
        match self {
            LatticeFamily::SimpleCubic2d => "2D Simple Cubic",
            LatticeFamily::Triangular2d => "2D Triangular",
            LatticeFamily::Hexagonal2d => "2D Hexagonal",
            LatticeFamily::SimpleCubic3d => "3D Simple Cubic",
            LatticeFamily::Bcc => "Body-Centered Cubic",
            LatticeFamily::Fcc => "Face-Centered Cubic",
            LatticeFamily::Hexagonal3d => "3D Hexagonal",
        }
    }
}

impl fmt::Display for LatticeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LatticeFamily {
    type Err = AuraeonError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        LatticeFamily::ALL
            .iter()
            .copied()
            .find(|family| family.key() == wanted)
            .ok_or_else(|| AuraeonError::invalid("family", format!("unknown lattice family '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isometric_cell() {
        let mut cell = UnitCell::new(2.0, 3.0, 4.0, 80.0, 90.0, 120.0);
        assert!(!cell.is_isometric());
        cell.make_isometric();
        assert_eq!(cell, UnitCell::isometric(2.0));
        assert!(cell.is_isometric());
    }

    #[test]
    fn test_volume_and_area() {
        let cubic = UnitCell::isometric(2.0);
        assert!((cubic.volume() - 8.0).abs() < 1e-10);
        assert!((cubic.area() - 4.0).abs() < 1e-10);

        // Hexagonal cell: V = a^2 c sin(120°)
        let hex = UnitCell::new(1.0, 1.0, 2.0, 90.0, 90.0, 120.0);
        let expected = 2.0 * 3.0_f64.sqrt() / 2.0;
        assert!((hex.volume() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_edge_validation() {
        let planar = UnitCell::new(1.0, 1.0, 0.0, 90.0, 90.0, 90.0);
        assert!(planar.validate(Dimension::Two).is_ok());
        assert!(planar.validate(Dimension::Three).is_err());

        let bad = UnitCell::new(-1.0, 1.0, 1.0, 90.0, 90.0, 90.0);
        assert!(bad.validate(Dimension::Two).is_err());

        let nan = UnitCell::new(1.0, f64::NAN, 1.0, 90.0, 90.0, 90.0);
        assert!(nan.validate(Dimension::Two).is_err());
    }

    #[test]
    fn test_repeat_validation() {
        let planar = RepeatCount::new(3, 2, 0);
        assert!(planar.validate(Dimension::Two).is_ok());
        assert_eq!(planar.cells(Dimension::Two), 6);
        match planar.validate(Dimension::Three) {
            Err(AuraeonError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "nz"),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        assert!(RepeatCount::new(-1, 2, 2).validate(Dimension::Two).is_err());
    }

    #[test]
    fn test_repeat_total_is_capped() {
        let huge = RepeatCount::new(3_000_000, 3_000_000, 3_000_000);
        match huge.validate(Dimension::Three) {
            Err(AuraeonError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "repeats"),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        assert!(RepeatCount::new(i32::MAX, i32::MAX, 1).validate(Dimension::Two).is_err());
        assert_eq!(huge.cells(Dimension::Three), usize::MAX);

        assert!(RepeatCount::new(100, 100, 100).validate(Dimension::Three).is_ok());
        assert!(RepeatCount::new(100, 100, 101).validate(Dimension::Three).is_err());
        // nz is not read for planar lattices
        assert!(RepeatCount::new(1000, 1000, i32::MAX).validate(Dimension::Two).is_ok());
    }

    #[test]
    fn test_family_parsing() {
        for family in LatticeFamily::ALL {
            assert_eq!(family.key().parse::<LatticeFamily>().unwrap(), family);
        }
        assert_eq!(" FCC ".parse::<LatticeFamily>().unwrap(), LatticeFamily::Fcc);
        assert!("diamond".parse::<LatticeFamily>().is_err());
    }

    #[test]
    fn test_family_serde_names() {
        let json = serde_json::to_string(&LatticeFamily::Hexagonal3d).unwrap();
        assert_eq!(json, "\"hexagonal_3d\"");
        let back: LatticeFamily = serde_json::from_str("\"simple_cubic_2d\"").unwrap();
        assert_eq!(back, LatticeFamily::SimpleCubic2d);
    }
}
