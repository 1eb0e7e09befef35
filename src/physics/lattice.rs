// src/physics/lattice.rs

use crate::error::Result;
use crate::model::{LatticeFamily, Point3, PointSet, RepeatCount, Sublattice, SublatticeRole, UnitCell};
use log::debug;

const HEX_ROW_SCALE: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

/// Builds the point set for `family`.
///
/// Points are ordered with x varying fastest, then y, then z. Planar
/// families ignore `nz` and `c` and emit z = 0.
pub fn generate(family: LatticeFamily, repeats: RepeatCount, cell: &UnitCell) -> Result<PointSet> {
    let dimension = family.dimension();
    repeats.validate(dimension)?;
    cell.validate(dimension)?;

    let sublattices = match family {
        LatticeFamily::SimpleCubic2d => vec![corner(grid_2d(repeats, cell))],
        LatticeFamily::Triangular2d => vec![corner(triangular_2d(repeats, cell))],
        LatticeFamily::Hexagonal2d => vec![corner(hexagonal_2d(repeats, cell))],
        LatticeFamily::SimpleCubic3d => vec![corner(grid_3d(repeats, cell))],
        LatticeFamily::Hexagonal3d => vec![corner(hexagonal_3d(repeats, cell))],
        LatticeFamily::Bcc => {
            let base = grid_3d(repeats, cell);
            let center = translate(&base, [cell.a / 2.0, cell.b / 2.0, cell.c / 2.0]);
            vec![corner(base), Sublattice::new(SublatticeRole::Center, center)]
        }
        LatticeFamily::Fcc => {
            let base = grid_3d(repeats, cell);
            let (ha, hb, hc) = (cell.a / 2.0, cell.b / 2.0, cell.c / 2.0);
            let face_1 = translate(&base, [ha, hb, 0.0]);
            let face_2 = translate(&base, [ha, 0.0, hc]);
            let face_3 = translate(&base, [0.0, hb, hc]);
            vec![
                corner(base),
                Sublattice::new(SublatticeRole::Face1, face_1),
                Sublattice::new(SublatticeRole::Face2, face_2),
                Sublattice::new(SublatticeRole::Face3, face_3),
            ]
        }
    };

    let set = PointSet::new(dimension, sublattices);
    debug!(
        "Generated {} lattice: {} points in {} sublattice(s)",
        family,
        set.len(),
        set.sublattices.len()
    );
    Ok(set)
}

fn corner(points: Vec<Point3>) -> Sublattice {
    Sublattice::new(SublatticeRole::Corner, points)
}

/// `[0, step, 2*step, ..., (n-1)*step]`
fn axis(n: i32, step: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * step).collect()
}

fn grid_2d(repeats: RepeatCount, cell: &UnitCell) -> Vec<Point3> {
    let xs = axis(repeats.nx, cell.a);
    let ys = axis(repeats.ny, cell.b);

    let mut points = Vec::with_capacity(xs.len() * ys.len());
    for &y in &ys {
        for &x in &xs {
            points.push([x, y, 0.0]);
        }
    }
    points
}

fn grid_3d(repeats: RepeatCount, cell: &UnitCell) -> Vec<Point3> {
    let xs = axis(repeats.nx, cell.a);
    let ys = axis(repeats.ny, cell.b);
    let zs = axis(repeats.nz, cell.c);

    let mut points = Vec::with_capacity(xs.len() * ys.len() * zs.len());
    for &z in &zs {
        for &y in &ys {
            for &x in &xs {
                points.push([x, y, z]);
            }
        }
    }
    points
}

/// Square grid with every odd row (y index 1, 3, ...) shifted by +a/2.
fn triangular_2d(repeats: RepeatCount, cell: &UnitCell) -> Vec<Point3> {
    let nx = repeats.nx.max(0) as usize;
    let mut points = grid_2d(repeats, cell);
    for (i, p) in points.iter_mut().enumerate() {
        let row = i / nx;
        if row % 2 == 1 {
            p[0] += cell.a / 2.0;
        }
    }
    points
}

fn hexagonal_2d(repeats: RepeatCount, cell: &UnitCell) -> Vec<Point3> {
    let mut points = triangular_2d(repeats, cell);
    for p in &mut points {
        p[1] *= HEX_ROW_SCALE;
    }
    points
}

/// Stand-alone primitive: the 3D grid with y scaled by sqrt(3)/2, no row shift.
fn hexagonal_3d(repeats: RepeatCount, cell: &UnitCell) -> Vec<Point3> {
    let mut points = grid_3d(repeats, cell);
    for p in &mut points {
        p[1] *= HEX_ROW_SCALE;
    }
    points
}

fn translate(points: &[Point3], offset: Point3) -> Vec<Point3> {
    points
        .iter()
        .map(|p| [p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]])
        .collect()
}

/// Expected number of points for `family`, without generating them.
pub fn expected_len(family: LatticeFamily, repeats: RepeatCount) -> usize {
    repeats.cells(family.dimension()).saturating_mul(family.roles().len())
}
