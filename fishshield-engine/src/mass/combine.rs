//! Dempster's rule of combination.

use fishshield_core::errors::error_code::{self, FishShieldErrorCode};
use fishshield_core::FxHashMap;

use super::focal::FocalSet;
use super::function::MassFunction;

/// Tolerance for detecting total conflict. Exact-arithmetic K = 1 cases
/// (disjoint full-density evidence) hit 1.0 exactly; the epsilon only
/// absorbs float accumulation noise just below it.
const TOTAL_CONFLICT_EPS: f64 = 1e-12;

/// Errors raised while combining mass functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombinationError {
    /// Every pairwise intersection was empty: the evidence sources are in
    /// complete contradiction and renormalization would divide by zero.
    #[error("Total conflict between evidence sources (K = {conflict}); no shared hypothesis survives")]
    TotalConflict { conflict: f64 },
}

impl FishShieldErrorCode for CombinationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TotalConflict { .. } => error_code::ENGINE_TOTAL_CONFLICT,
        }
    }
}

/// Combine two mass functions under Dempster's rule.
///
/// Products over empty intersections accumulate into the conflict mass K;
/// the surviving entries are renormalized by (1 − K). K = 1 is a named
/// error, never a division by zero.
pub fn combine(m1: &MassFunction, m2: &MassFunction) -> Result<MassFunction, CombinationError> {
    let mut combined: FxHashMap<FocalSet, f64> = FxHashMap::default();
    let mut conflict = 0.0;

    for (a, v1) in m1.iter() {
        for (b, v2) in m2.iter() {
            match a.intersect(b) {
                Some(set) => *combined.entry(set).or_insert(0.0) += v1 * v2,
                None => conflict += v1 * v2,
            }
        }
    }

    if 1.0 - conflict <= TOTAL_CONFLICT_EPS {
        return Err(CombinationError::TotalConflict { conflict });
    }

    let norm = 1.0 - conflict;
    for mass in combined.values_mut() {
        *mass /= norm;
    }

    tracing::debug!(
        focal_sets = combined.len(),
        conflict,
        "combined mass functions"
    );
    Ok(MassFunction::from_entries(combined))
}

/// Fuse any number of mass functions.
///
/// Dempster's rule is associative and commutative in exact arithmetic; in
/// floating point the result depends slightly on evaluation order, so this
/// is a defined left fold in input order for reproducibility.
///
/// An empty input yields `Ok(None)`: "no inference possible", which is
/// distinct from a mass function assigning mass 1 to Θ.
pub fn combine_all(
    masses: impl IntoIterator<Item = MassFunction>,
) -> Result<Option<MassFunction>, CombinationError> {
    let mut masses = masses.into_iter();
    let Some(mut current) = masses.next() else {
        return Ok(None);
    };
    for next in masses {
        current = combine(&current, &next)?;
    }
    Ok(Some(current))
}
