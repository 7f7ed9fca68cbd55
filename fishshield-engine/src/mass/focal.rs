//! Canonical focal sets over the frame of discernment.
//!
//! A focal set is either an explicit subset of the diagnosis frame or the
//! universal set Θ (total ignorance). Θ is a dedicated variant, never a
//! sentinel code, so it cannot collide with a real diagnosis identifier,
//! and it stays distinct from a subset that happens to list every
//! diagnosis in the frame.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use fishshield_core::DiagnosisCode;

/// Inline capacity matches the built-in frame size; larger frames spill
/// to the heap transparently.
type CodeVec = SmallVec<[DiagnosisCode; 4]>;

/// A focal set: an explicit, canonical subset of the frame, or Θ.
///
/// `Subset` payloads built through [`FocalSet::subset`] are sorted and
/// deduplicated, which makes equality and hashing order-insensitive.
/// Every constructor in this crate goes through that path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocalSet {
    Subset(CodeVec),
    Universal,
}

impl FocalSet {
    /// Build a canonical subset: sorted, deduplicated.
    pub fn subset(codes: impl IntoIterator<Item = DiagnosisCode>) -> Self {
        let mut codes: CodeVec = codes.into_iter().collect();
        codes.sort();
        codes.dedup();
        Self::Subset(codes)
    }

    /// A single-diagnosis subset, the usual query shape.
    pub fn singleton(code: DiagnosisCode) -> Self {
        Self::Subset(smallvec::smallvec![code])
    }

    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Universal)
    }

    /// The subset's codes; `None` for Θ.
    pub fn codes(&self) -> Option<&[DiagnosisCode]> {
        match self {
            Self::Subset(codes) => Some(codes),
            Self::Universal => None,
        }
    }

    /// Intersection under Dempster's rule: Θ is the identity element, and
    /// an empty subset-subset intersection is `None` (conflict).
    pub fn intersect(&self, other: &Self) -> Option<FocalSet> {
        match (self, other) {
            (Self::Universal, Self::Universal) => Some(Self::Universal),
            (Self::Universal, Self::Subset(_)) => Some(other.clone()),
            (Self::Subset(_), Self::Universal) => Some(self.clone()),
            (Self::Subset(a), Self::Subset(b)) => {
                let common = sorted_intersection(a, b);
                if common.is_empty() {
                    None
                } else {
                    Some(Self::Subset(common))
                }
            }
        }
    }

    /// Whether `self` ⊆ `other`. Θ is a subset only of Θ; everything is a
    /// subset of Θ.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        match (self, other) {
            (_, Self::Universal) => true,
            (Self::Universal, Self::Subset(_)) => false,
            (Self::Subset(a), Self::Subset(b)) => sorted_contains_all(b, a),
        }
    }

    /// Whether `self` shares at least one diagnosis with `other`. Θ
    /// intersects every non-empty set.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Universal, Self::Universal) => true,
            (Self::Universal, Self::Subset(b)) => !b.is_empty(),
            (Self::Subset(a), Self::Universal) => !a.is_empty(),
            (Self::Subset(a), Self::Subset(b)) => !sorted_intersection(a, b).is_empty(),
        }
    }
}

impl fmt::Display for FocalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universal => f.write_str("Θ"),
            Self::Subset(codes) => {
                f.write_str("{")?;
                for (i, code) in codes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{code}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Two-pointer intersection of two sorted code slices.
fn sorted_intersection(a: &[DiagnosisCode], b: &[DiagnosisCode]) -> CodeVec {
    let mut out = CodeVec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Whether sorted `haystack` contains every element of sorted `needles`.
fn sorted_contains_all(haystack: &[DiagnosisCode], needles: &[DiagnosisCode]) -> bool {
    let mut i = 0;
    for needle in needles {
        loop {
            if i >= haystack.len() {
                return false;
            }
            match haystack[i].cmp(needle) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Equal => {
                    i += 1;
                    break;
                }
                std::cmp::Ordering::Greater => return false,
            }
        }
    }
    true
}
