// src/model/elements.rs

use crate::error::{AuraeonError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Linear RGB, each channel in [0, 1].
pub type Rgb = (f64, f64, f64);

/// Display attributes for one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementEntry {
    pub name: &'static str,
    pub color: Rgb,
    pub radius: f64, // Å, used for plotting only
    pub mass: f64,   // amu
}

// Built once, read by every table in the process.
static BASE_TABLE: OnceLock<BTreeMap<&'static str, ElementEntry>> = OnceLock::new();

fn base_table() -> &'static BTreeMap<&'static str, ElementEntry> {
    BASE_TABLE.get_or_init(|| {
        let mut db = BTreeMap::new();

        macro_rules! add_element {
            ($sym:expr, $name:expr, $color:expr, $radius:expr, $mass:expr) => {
                db.insert(
                    $sym,
                    ElementEntry {
                        name: $name,
                        color: $color,
                        radius: $radius,
                        mass: $mass,
                    },
                );
            };
        }

        // --- Period 1 ---
        add_element!("H", "Hydrogen", (1.00, 1.00, 1.00), 0.25, 1.008);
        add_element!("He", "Helium", (1.00, 0.80, 0.851), 0.31, 4.0026);

        // --- Period 2 ---
        add_element!("Li", "Lithium", (0.80, 0.502, 1.00), 1.28, 6.94);
        add_element!("Be", "Beryllium", (0.761, 1.00, 0.00), 0.96, 9.0122);
        add_element!("C", "Carbon", (0.502, 0.502, 0.502), 0.70, 12.011);
        add_element!("N", "Nitrogen", (0.188, 0.314, 0.973), 0.65, 14.007);
        add_element!("O", "Oxygen", (1.00, 0.00, 0.00), 0.60, 15.999);
        add_element!("F", "Fluorine", (0.565, 0.878, 0.314), 0.50, 18.998);
        add_element!("Ne", "Neon", (0.702, 0.890, 0.961), 0.38, 20.180);

        // --- Period 3 ---
        add_element!("Na", "Sodium", (0.671, 0.361, 0.949), 1.66, 22.990);
        add_element!("Mg", "Magnesium", (0.541, 1.00, 0.00), 1.41, 24.305);
        add_element!("Al", "Aluminum", (0.749, 0.651, 0.651), 1.21, 26.982);
        add_element!("Si", "Silicon", (0.00, 0.502, 0.00), 1.17, 28.085);

        // --- Metals ---
        add_element!("Fe", "Iron", (0.878, 0.40, 0.20), 1.26, 55.845);
        add_element!("Cu", "Copper", (0.647, 0.165, 0.165), 1.28, 63.546);
        add_element!("Ag", "Silver", (0.753, 0.753, 0.753), 1.45, 107.8682);
        add_element!("Au", "Gold", (1.00, 0.843, 0.00), 1.36, 196.96657);
        add_element!("Pb", "Lead", (0.341, 0.349, 0.380), 1.55, 207.2);

        db
    })
}

/// Element lookup with a per-table color overlay.
///
/// The built-in records are shared and never change; `override_color`
/// only touches this value's overlay, so two tables never see each
/// other's colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementTable {
    overrides: HashMap<String, Rgb>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from persisted color overrides, rejecting unknown symbols.
    pub fn with_overrides(overrides: &HashMap<String, Rgb>) -> Result<Self> {
        let mut table = Self::new();
        for (symbol, &color) in overrides {
            table.override_color(symbol, color)?;
        }
        Ok(table)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        base_table().contains_key(symbol)
    }

    /// Returns the entry for `symbol` with any color override applied.
    pub fn lookup(&self, symbol: &str) -> Result<ElementEntry> {
        let base = base_table()
            .get(symbol)
            .ok_or_else(|| AuraeonError::UnknownElement(symbol.to_string()))?;

        let mut entry = *base;
        if let Some(&color) = self.overrides.get(symbol) {
            entry.color = color;
        }
        Ok(entry)
    }

    pub fn override_color(&mut self, symbol: &str, color: Rgb) -> Result<()> {
        if !self.contains(symbol) {
            return Err(AuraeonError::UnknownElement(symbol.to_string()));
        }
        let (r, g, b) = color;
        if [r, g, b].iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(AuraeonError::invalid(
                "color",
                format!("channels must lie in [0, 1], got ({r}, {g}, {b})"),
            ));
        }
        self.overrides.insert(symbol.to_string(), color);
        Ok(())
    }

    /// Drops the override, returning whether one was set.
    pub fn clear_override(&mut self, symbol: &str) -> bool {
        self.overrides.remove(symbol).is_some()
    }

    pub fn overrides(&self) -> &HashMap<String, Rgb> {
        &self.overrides
    }

    /// Known symbols in alphabetical order.
    pub fn symbols(&self) -> Vec<&'static str> {
        base_table().keys().copied().collect()
    }
}
