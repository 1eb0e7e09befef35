// src/utils/report.rs

use crate::config::GenerationConfig;
use crate::model::{Dimension, Snapshot};
use crate::utils::geometry;

/// g/cm³ per amu/Å³
const AMU_PER_A3_TO_G_PER_CM3: f64 = 1.660_539;

const MAX_LISTED_SITES: usize = 20;

/// Mass density of the generated block in g/cm³, 3D lattices only.
pub fn density(snapshot: &Snapshot, config: &GenerationConfig) -> Option<f64> {
    if snapshot.points.dimension != Dimension::Three {
        return None;
    }
    let cells = config.repeats().cells(Dimension::Three) as f64;
    let volume = config.unit_cell().volume() * cells;
    if volume <= 0.0 {
        return None;
    }
    Some(snapshot.total_mass() / volume * AMU_PER_A3_TO_G_PER_CM3)
}

/// Text summary of one regenerate cycle
pub fn structure_summary(snapshot: &Snapshot, config: &GenerationConfig) -> String {
    let formula_str: String = snapshot
        .assignment
        .counts()
        .iter()
        .map(|(el, count)| format!("{}{}", el, count))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&format!("Lattice: {} ({})\n", config.family.label(), config.family));
    out.push_str(&format!("Formula: {}\n", formula_str));
    out.push_str(&format!(
        "Cell: a={:.4} b={:.4} c={:.4}  alpha={:.2} beta={:.2} gamma={:.2}\n",
        config.a, config.b, config.c, config.alpha, config.beta, config.gamma
    ));

    for sub in &snapshot.points.sublattices {
        out.push_str(&format!("  {:<8} {} sites\n", sub.name(), sub.len()));
    }
    out.push_str(&format!(
        "Bonds: {} (cutoff {:.3} Å)\n",
        snapshot.bonds.len(),
        config.bond_threshold
    ));

    let points = snapshot.points.flatten();
    if let Some(d) = geometry::nearest_neighbour_distance(&points) {
        out.push_str(&format!("Nearest neighbour: {:.4} Å\n", d));
    }
    if let Some(rho) = density(snapshot, config) {
        out.push_str(&format!("Density: {:.4} g/cm³\n", rho));
    }

    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:<8} {:<10} {:<10} {:<10}\n",
        "Index", "Element", "X", "Y", "Z"
    ));
    out.push_str("--------------------------------------------------\n");

    for (i, (p, el)) in points
        .iter()
        .zip(snapshot.assignment.symbols())
        .take(MAX_LISTED_SITES)
        .enumerate()
    {
        out.push_str(&format!(
            "{:<8} {:<8} {:<10.4} {:<10.4} {:<10.4}\n",
            i, el, p[0], p[1], p[2]
        ));
    }

    if points.len() > MAX_LISTED_SITES {
        out.push_str(&format!("... and {} more atoms.\n", points.len() - MAX_LISTED_SITES));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LatticeFamily;
    use crate::state::Session;

    fn snapshot_for(cfg: &GenerationConfig) -> Snapshot {
        Session::new(cfg.clone()).unwrap().regenerate().unwrap()
    }

    #[test]
    fn test_copper_fcc_density() {
        // Copper: a = 3.615 Å, four atoms per conventional cell, ~8.93 g/cm³
        let mut cfg = GenerationConfig::default();
        cfg.family = LatticeFamily::Fcc;
        cfg.nx = 1;
        cfg.ny = 1;
        cfg.nz = 1;
        cfg.a = 3.615;
        cfg.b = 3.615;
        cfg.c = 3.615;
        cfg.bond_threshold = 0.0;

        let rho = density(&snapshot_for(&cfg), &cfg).unwrap();
        assert!((rho - 8.93).abs() < 0.02, "density {}", rho);
    }

    #[test]
    fn test_planar_has_no_density() {
        let mut cfg = GenerationConfig::default();
        cfg.family = LatticeFamily::Hexagonal2d;
        assert!(density(&snapshot_for(&cfg), &cfg).is_none());
    }

    #[test]
    fn test_summary_lists_sublattices() {
        let mut cfg = GenerationConfig::default();
        cfg.family = LatticeFamily::Bcc;
        cfg.nx = 3;
        cfg.ny = 3;
        cfg.nz = 3;
        cfg.element_1 = "Fe".to_string();

        let text = structure_summary(&snapshot_for(&cfg), &cfg);
        assert!(text.contains("Body-Centered Cubic (bcc)"));
        assert!(text.contains("Formula: Fe54"));
        assert!(text.contains("corner   27 sites"));
        assert!(text.contains("center   27 sites"));
        assert!(text.contains("... and 34 more atoms."));
    }
}
