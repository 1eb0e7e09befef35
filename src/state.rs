// src/state.rs

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::model::{AtomAssignment, ElementTable, Rgb, Snapshot};
use crate::physics::{bonds, lattice, operations};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Runs one full cycle: generate, rotate, inject defects, resolve bonds.
///
/// `elements` is read once up front into the snapshot palette; nothing
/// here writes to it. Any failure aborts the whole cycle.
pub fn build_snapshot<R: Rng + ?Sized>(
    config: &GenerationConfig,
    elements: &ElementTable,
    rng: &mut R,
) -> Result<Snapshot> {
    config.validate()?;

    // Resolve every symbol before touching geometry
    let mut palette = HashMap::new();
    let mut symbols = vec![config.element_1.as_str(), config.element_2.as_str()];
    if let Some(center) = &config.center_element {
        symbols.push(center.as_str());
    }
    for symbol in symbols {
        palette.insert(symbol.to_string(), elements.lookup(symbol)?);
    }

    let points = lattice::generate(config.family, config.repeats(), &config.unit_cell())?;
    let points = operations::rotate(&points, &config.rotation, config.rotation_center);

    let assignment = AtomAssignment::uniform(&points, &config.element_1, config.center_element.as_deref());
    let (points, assignment) =
        operations::inject(&points, &assignment, &config.defects(), &config.element_2, rng)?;

    let bonds = bonds::resolve(&points, config.bond_threshold);

    // Keep only the entries something actually uses
    let counts = assignment.counts();
    palette.retain(|symbol, _| counts.contains_key(symbol));

    Ok(Snapshot {
        points,
        assignment,
        bonds,
        palette,
    })
}

/// Parameters and element colors held between regenerate requests.
pub struct Session {
    pub config: GenerationConfig,
    pub elements: ElementTable,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let elements = ElementTable::with_overrides(&config.element_colors)?;
        Ok(Self { config, elements })
    }

    /// Replaces the parameters; the next `regenerate` uses them.
    pub fn set_config(&mut self, config: GenerationConfig) -> Result<()> {
        self.elements = ElementTable::with_overrides(&config.element_colors)?;
        self.config = config;
        Ok(())
    }

    /// Records a color override and keeps the config in sync for saving.
    pub fn override_color(&mut self, symbol: &str, color: Rgb) -> Result<()> {
        self.elements.override_color(symbol, color)?;
        self.config.element_colors.insert(symbol.to_string(), color);
        Ok(())
    }

    pub fn clear_override(&mut self, symbol: &str) -> bool {
        self.config.element_colors.remove(symbol);
        self.elements.clear_override(symbol)
    }

    /// Rebuilds the structure from scratch with the configured seed.
    pub fn regenerate(&self) -> Result<Snapshot> {
        let mut rng = StdRng::seed_from_u64(self.config.rng_seed);
        let snapshot = build_snapshot(&self.config, &self.elements, &mut rng)?;
        info!(
            "Regenerated {}: {} sites, {} bonds",
            self.config.family.label(),
            snapshot.points.len(),
            snapshot.bonds.len()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuraeonError;
    use crate::model::LatticeFamily;

    #[test]
    fn test_regenerate_is_idempotent() {
        let mut cfg = GenerationConfig::default();
        cfg.family = LatticeFamily::Fcc;
        cfg.nx = 2;
        cfg.ny = 2;
        cfg.nz = 2;
        cfg.vacancy_fraction = 0.1;
        cfg.doping_fraction = 0.2;
        cfg.rng_seed = 1234;

        let session = Session::new(cfg).unwrap();
        let first = session.regenerate().unwrap();
        let second = session.regenerate().unwrap();

        assert_eq!(first.points, second.points);
        assert_eq!(first.assignment, second.assignment);
        assert_eq!(first.bonds, second.bonds);
        assert_eq!(first.points.len(), 32 - 3);
    }

    #[test]
    fn test_unknown_element_aborts() {
        let mut cfg = GenerationConfig::default();
        cfg.element_2 = "Unobtainium".to_string();
        let session = Session::new(cfg).unwrap();
        assert!(matches!(session.regenerate(), Err(AuraeonError::UnknownElement(_))));
    }

    #[test]
    fn test_palette_is_a_snapshot() {
        let mut session = Session::new(GenerationConfig::default()).unwrap();
        session.override_color("Cu", (0.0, 1.0, 0.0)).unwrap();
        let snapshot = session.regenerate().unwrap();

        session.override_color("Cu", (1.0, 0.0, 0.0)).unwrap();
        assert_eq!(snapshot.palette["Cu"].color, (0.0, 1.0, 0.0));
        assert_eq!(session.config.element_colors["Cu"], (1.0, 0.0, 0.0));

        // No doping, so the dopant never appears in the palette
        assert!(!snapshot.palette.contains_key("Au"));
    }

    #[test]
    fn test_center_element_decorates_bcc() {
        let mut cfg = GenerationConfig::default();
        cfg.family = LatticeFamily::Bcc;
        cfg.nx = 2;
        cfg.ny = 2;
        cfg.nz = 2;
        cfg.element_1 = "Na".to_string();
        cfg.center_element = Some("F".to_string());

        let snapshot = Session::new(cfg).unwrap().regenerate().unwrap();
        let counts = snapshot.assignment.counts();
        assert_eq!(counts["Na"], 8);
        assert_eq!(counts["F"], 8);
        assert!(snapshot.total_mass() > 0.0);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut session = Session::new(GenerationConfig::default()).unwrap();
        assert!(session.override_color("Xx", (0.0, 0.0, 0.0)).is_err());
        assert!(session.config.element_colors.is_empty());
        assert!(!session.clear_override("Cu"));
    }
}
