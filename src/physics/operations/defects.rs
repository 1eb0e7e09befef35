// src/physics/operations/defects.rs

use crate::error::{AuraeonError, Result};
use crate::model::{AtomAssignment, PointSet};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fractions of sites to empty and to substitute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DefectSpec {
    pub vacancy_fraction: f64,
    pub doping_fraction: f64,
}

impl DefectSpec {
    pub fn new(vacancy_fraction: f64, doping_fraction: f64) -> Self {
        Self {
            vacancy_fraction,
            doping_fraction,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_fraction("vacancy_fraction", self.vacancy_fraction)?;
        check_fraction("doping_fraction", self.doping_fraction)
    }
}

fn check_fraction(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AuraeonError::invalid(
            parameter,
            format!("fraction must lie in [0, 1], got {value}"),
        ))
    }
}

/// Number of sites a fraction selects out of `n` (half rounds away from zero).
pub fn site_count(n: usize, fraction: f64) -> usize {
    ((n as f64 * fraction).round() as usize).min(n)
}

/// Picks `amount` distinct indices from `0..n`, without replacement.
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, n: usize, amount: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..n).collect();
    let (chosen, _) = pool.partial_shuffle(rng, amount);
    chosen.to_vec()
}

/// Removes vacancies, then dopes the survivors.
///
/// Doping draws from the post-removal index space. The inputs are not
/// modified; on error nothing is returned.
pub fn inject<R: Rng + ?Sized>(
    points: &PointSet,
    assignment: &AtomAssignment,
    spec: &DefectSpec,
    dopant: &str,
    rng: &mut R,
) -> Result<(PointSet, AtomAssignment)> {
    spec.validate()?;
    if points.len() != assignment.len() {
        return Err(AuraeonError::invalid(
            "assignment",
            format!("{} symbols for {} points", assignment.len(), points.len()),
        ));
    }

    let (points, mut assignment) = remove_vacancies(points, assignment, spec.vacancy_fraction, rng);

    let remaining = assignment.len();
    let doped = sample_indices(rng, remaining, site_count(remaining, spec.doping_fraction));
    for &index in &doped {
        assignment.set(index, dopant);
    }

    debug!(
        "Defects: {} sites left after vacancies, {} doped with {}",
        remaining,
        doped.len(),
        dopant
    );
    Ok((points, assignment))
}

fn remove_vacancies<R: Rng + ?Sized>(
    points: &PointSet,
    assignment: &AtomAssignment,
    fraction: f64,
    rng: &mut R,
) -> (PointSet, AtomAssignment) {
    let n = points.len();
    let vacancies = sample_indices(rng, n, site_count(n, fraction));
    if vacancies.is_empty() {
        return (points.clone(), assignment.clone());
    }

    let mut keep = vec![true; n];
    for &index in &vacancies {
        keep[index] = false;
    }
    (points.retain_mask(&keep), assignment.retain_mask(&keep))
}
