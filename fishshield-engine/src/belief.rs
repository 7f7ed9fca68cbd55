//! Belief, plausibility, and ignorance queries over a combined mass
//! function.
//!
//! Belief is the lower confidence bound (mass strictly committed to the
//! query), plausibility the upper bound (mass not contradicting it), and
//! ignorance the gap between them. All values carry full f64 precision;
//! rounding happens only at the presentation boundary.

use crate::mass::focal::FocalSet;
use crate::mass::function::MassFunction;

impl MassFunction {
    /// `bel(S) = Σ m(A) for focal A ⊆ S`.
    ///
    /// Θ is not contained in any proper subset, so it never contributes
    /// to the belief of a proper query.
    pub fn belief(&self, query: &FocalSet) -> f64 {
        self.iter()
            .filter(|(focal, _)| focal.is_subset_of(query))
            .map(|(_, mass)| mass)
            .sum()
    }

    /// `pl(S) = Σ m(A) for A ∩ S ≠ ∅ or A = Θ`.
    ///
    /// Θ is consistent with everything, so it counts toward the
    /// plausibility of every non-empty query.
    pub fn plausibility(&self, query: &FocalSet) -> f64 {
        self.iter()
            .filter(|(focal, _)| focal.intersects(query))
            .map(|(_, mass)| mass)
            .sum()
    }

    /// `pl(S) − bel(S)`: the mass uncommitted between the query and its
    /// complement. Non-negative for any valid mass function.
    pub fn ignorance(&self, query: &FocalSet) -> f64 {
        self.plausibility(query) - self.belief(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass::combine::combine_all;
    use fishshield_core::{builtin, DiagnosisCode, SymptomCode};

    fn fused(symptoms: &[&str]) -> MassFunction {
        let kb = builtin::knowledge_base();
        let masses = symptoms.iter().map(|s| {
            MassFunction::from_rule(kb.rule_for(&SymptomCode::from(*s)).unwrap())
        });
        combine_all(masses.collect::<Vec<_>>()).unwrap().unwrap()
    }

    fn singleton(code: &str) -> FocalSet {
        FocalSet::singleton(DiagnosisCode::from(code))
    }

    #[test]
    fn test_single_evidence_belief_equals_density() {
        // G01 supports {P01, P04} at 0.82.
        let m = fused(&["G01"]);
        let support = FocalSet::subset([DiagnosisCode::from("P01"), DiagnosisCode::from("P04")]);
        assert!((m.belief(&support) - 0.82).abs() < 1e-12);

        // The untouched remainder of the frame has zero belief.
        let complement = FocalSet::subset([DiagnosisCode::from("P02"), DiagnosisCode::from("P03")]);
        assert_eq!(m.belief(&complement), 0.0);
    }

    #[test]
    fn test_theta_never_contributes_to_proper_belief() {
        let m = fused(&["G01"]);
        // bel({P01}) excludes both {P01,P04} and Θ.
        assert_eq!(m.belief(&singleton("P01")), 0.0);
        // But both count toward plausibility.
        assert!((m.plausibility(&singleton("P01")) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_belief_of_universal_is_total_mass() {
        let m = fused(&["G03", "G07"]);
        assert!((m.belief(&FocalSet::Universal) - 1.0).abs() < 1e-12);
        assert!((m.plausibility(&FocalSet::Universal) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_scenario_values() {
        // G03 + G07 fused: m = {P02: 0.87, {P01,P02}: 0.1105, Θ: 0.0195}.
        let m = fused(&["G03", "G07"]);
        assert!((m.belief(&singleton("P02")) - 0.87).abs() < 1e-12);
        assert!((m.plausibility(&singleton("P02")) - 1.0).abs() < 1e-12);
        assert!((m.belief(&singleton("P01")) - 0.0).abs() < 1e-12);
        assert!((m.plausibility(&singleton("P01")) - 0.13).abs() < 1e-12);
        assert!((m.ignorance(&singleton("P02")) - 0.13).abs() < 1e-12);
    }

    #[test]
    fn test_monotonicity_over_builtin_pairs() {
        let kb = builtin::knowledge_base();
        let codes = kb.symptom_codes();
        for a in &codes {
            for b in &codes {
                let m = fused(&[a.as_str(), b.as_str()]);
                for diagnosis in kb.frame() {
                    let q = FocalSet::singleton(diagnosis.clone());
                    let bel = m.belief(&q);
                    let pl = m.plausibility(&q);
                    assert!(
                        bel <= pl + 1e-12,
                        "bel > pl for {diagnosis} after fusing {a}+{b}: {bel} > {pl}"
                    );
                    assert!(m.ignorance(&q) >= -1e-12);
                }
            }
        }
    }
}
