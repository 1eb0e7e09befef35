// src/config.rs

use crate::error::{AuraeonError, Result};
use crate::model::{LatticeFamily, RepeatCount, Rgb, UnitCell};
use crate::physics::operations::{DefectSpec, EulerAngles, RotationCenter};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Everything one generation cycle needs.
///
/// Missing keys in a settings file fall back to the defaults below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
  pub family: LatticeFamily,

  // Repeat counts
  pub nx: i32,
  pub ny: i32,
  pub nz: i32,

  // Unit cell (Å, degrees)
  pub a: f64,
  pub b: f64,
  pub c: f64,
  pub alpha: f64,
  pub beta: f64,
  pub gamma: f64,

  /// Host element on every site.
  pub element_1: String,
  /// Dopant.
  pub element_2: String,
  /// Occupies center/face sites instead of `element_1` when set.
  pub center_element: Option<String>,

  pub vacancy_fraction: f64,
  pub doping_fraction: f64,
  pub bond_threshold: f64,
  pub rng_seed: u64,

  pub rotation: EulerAngles,
  pub rotation_center: RotationCenter,

  /// User color overrides, symbol -> RGB
  pub element_colors: HashMap<String, Rgb>,
}

impl Default for GenerationConfig {
  fn default() -> Self {
    Self {
      family: LatticeFamily::SimpleCubic3d,
      nx: 5,
      ny: 5,
      nz: 5,
      a: 1.0,
      b: 1.0,
      c: 1.0,
      alpha: 90.0,
      beta: 90.0,
      gamma: 90.0,
      element_1: "Cu".to_string(),
      element_2: "Au".to_string(),
      center_element: None,
      vacancy_fraction: 0.0,
      doping_fraction: 0.0,
      bond_threshold: 1.0,
      rng_seed: 0,
      rotation: EulerAngles::default(),
      rotation_center: RotationCenter::Origin,
      element_colors: HashMap::new(),
    }
  }
}

impl GenerationConfig {
  pub fn repeats(&self) -> RepeatCount {
    RepeatCount::new(self.nx, self.ny, self.nz)
  }

  pub fn unit_cell(&self) -> UnitCell {
    UnitCell::new(self.a, self.b, self.c, self.alpha, self.beta, self.gamma)
  }

  pub fn set_unit_cell(&mut self, cell: UnitCell) {
    self.a = cell.a;
    self.b = cell.b;
    self.c = cell.c;
    self.alpha = cell.alpha;
    self.beta = cell.beta;
    self.gamma = cell.gamma;
  }

  pub fn defects(&self) -> DefectSpec {
    DefectSpec::new(self.vacancy_fraction, self.doping_fraction)
  }

  /// Checks the numeric fields. Element symbols are checked against the
  /// element table when the lattice is generated.
  pub fn validate(&self) -> Result<()> {
    let dimension = self.family.dimension();
    self.repeats().validate(dimension)?;
    self.unit_cell().validate(dimension)?;
    self.defects().validate()?;
    if self.bond_threshold.is_nan() {
      return Err(AuraeonError::invalid("bond_threshold", "must be a number"));
    }
    let angles = [self.rotation.x, self.rotation.y, self.rotation.z];
    if angles.iter().any(|x| !x.is_finite()) {
      return Err(AuraeonError::invalid("rotation", "angles must be finite"));
    }
    Ok(())
  }

  /// Loads config from standard OS location (e.g., ~/.config/auraeon/settings.json)
  pub fn load() -> Self {
    let path = Self::get_path();
    if !path.exists() {
      info!("No config found. Using defaults.");
      return Self::default();
    }
    match Self::load_from(&path) {
      Ok(cfg) => {
        info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        warn!("Error reading config {:?}: {}. Using defaults.", path, e);
        Self::default()
      }
    }
  }

  pub fn load_from(path: &Path) -> Result<Self> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> Result<PathBuf> {
    let path = Self::get_path();
    self.save_to(&path)?;
    info!("Config saved to {:?}", path);
    Ok(path)
  }

  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "auraeon", "auraeon") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
