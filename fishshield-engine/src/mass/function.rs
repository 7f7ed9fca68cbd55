//! Mass functions (basic probability assignments).

use fishshield_core::{FxHashMap, KnowledgeRule};

use super::focal::FocalSet;

/// A mass function: non-negative weight per focal set, summing to 1.
///
/// Focal sets are positive-mass by construction; a zero-mass entry is
/// never stored. Produced fresh per diagnosis run and owned by the
/// caller, never cached across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct MassFunction {
    entries: FxHashMap<FocalSet, f64>,
}

impl MassFunction {
    /// The elementary mass function for one knowledge rule:
    /// `{H: d, Θ: 1 − d}`. With density 1 the Θ entry would carry zero
    /// mass and is dropped, leaving a single point mass.
    pub fn from_rule(rule: &KnowledgeRule) -> Self {
        let mut entries = FxHashMap::default();
        let density = rule.density();
        entries.insert(FocalSet::subset(rule.diagnoses().iter().cloned()), density);
        if density < 1.0 {
            entries.insert(FocalSet::Universal, 1.0 - density);
        }
        Self { entries }
    }

    /// Wrap pre-accumulated entries, dropping any zero-mass residue.
    pub(crate) fn from_entries(entries: FxHashMap<FocalSet, f64>) -> Self {
        let entries = entries.into_iter().filter(|(_, m)| *m > 0.0).collect();
        Self { entries }
    }

    /// The mass assigned to a focal set (0 if absent).
    pub fn mass(&self, set: &FocalSet) -> f64 {
        self.entries.get(set).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FocalSet, f64)> {
        self.entries.iter().map(|(set, mass)| (set, *mass))
    }

    /// Number of focal sets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all masses; 1 (within float tolerance) for any function
    /// built by `from_rule` or a non-degenerate combination.
    pub fn total_mass(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Entries in a stable display order: subsets sorted by code sequence,
    /// Θ last.
    pub fn entries_sorted(&self) -> Vec<(FocalSet, f64)> {
        let mut entries: Vec<(FocalSet, f64)> = self
            .entries
            .iter()
            .map(|(set, mass)| (set.clone(), *mass))
            .collect();
        entries.sort_by(|(a, _), (b, _)| match (a, b) {
            (FocalSet::Universal, FocalSet::Universal) => std::cmp::Ordering::Equal,
            (FocalSet::Universal, _) => std::cmp::Ordering::Greater,
            (_, FocalSet::Universal) => std::cmp::Ordering::Less,
            (FocalSet::Subset(x), FocalSet::Subset(y)) => x.cmp(y),
        });
        entries
    }
}
