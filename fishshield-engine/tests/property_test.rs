//! Property-based tests.
//!
//! Tests invariants that must hold for ANY valid evidence selection, not
//! just hand-crafted cases: normalization, order independence, and the
//! belief ≤ plausibility bound.

use proptest::prelude::*;
use proptest::sample::subsequence;

use fishshield_core::{builtin, DiagnosisCode, KnowledgeBase, SymptomCode};
use fishshield_engine::{combine_all, DiagnosisEngine, FocalSet, MassFunction};

const SYMPTOMS: [&str; 10] = [
    "G01", "G02", "G03", "G04", "G05", "G06", "G07", "G08", "G09", "G10",
];

fn fuse(kb: &KnowledgeBase, symptoms: &[&str]) -> MassFunction {
    let masses: Vec<MassFunction> = symptoms
        .iter()
        .map(|s| MassFunction::from_rule(kb.rule_for(&SymptomCode::from(*s)).unwrap()))
        .collect();
    combine_all(masses)
        .expect("builtin densities are < 1, total conflict is impossible")
        .expect("at least one symptom")
}

fn assert_masses_close(a: &MassFunction, b: &MassFunction, context: &str) {
    assert_eq!(a.len(), b.len(), "focal set counts differ: {context}");
    for (focal, mass) in a.iter() {
        let other = b.mass(focal);
        assert!(
            (mass - other).abs() < 1e-9,
            "mass diverged at {focal} ({mass} vs {other}): {context}"
        );
    }
}

// ─── Exhaustive permutation sweep ──────────────────────────────────────────

/// All 6 orders of the three-symptom scenario yield the same function.
#[test]
fn permutation_sweep_three_symptoms() {
    let kb = builtin::knowledge_base();
    let baseline = fuse(&kb, &["G02", "G03", "G07"]);

    let permutations = [
        ["G02", "G03", "G07"],
        ["G02", "G07", "G03"],
        ["G03", "G02", "G07"],
        ["G03", "G07", "G02"],
        ["G07", "G02", "G03"],
        ["G07", "G03", "G02"],
    ];
    for perm in &permutations {
        let fused = fuse(&kb, perm);
        assert_masses_close(&fused, &baseline, &format!("{perm:?}"));
    }
}

/// Normalization across every pair of builtin symptoms.
#[test]
fn normalization_sweep_all_pairs() {
    let kb = builtin::knowledge_base();
    for a in &SYMPTOMS {
        for b in &SYMPTOMS {
            let m = fuse(&kb, &[a, b]);
            let total = m.total_mass();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "mass sum {total} != 1 for {a}+{b}"
            );
            for (focal, mass) in m.iter() {
                assert!(mass >= 0.0, "negative mass at {focal} for {a}+{b}");
            }
        }
    }
}

// ─── Randomized properties ─────────────────────────────────────────────────

proptest! {
    /// Any non-empty evidence selection fuses to a normalized function
    /// with belief ≤ plausibility for every diagnosis.
    #[test]
    fn prop_fusion_invariants(symptoms in subsequence(SYMPTOMS.to_vec(), 1..=10)) {
        let kb = builtin::knowledge_base();
        let m = fuse(&kb, &symptoms);

        prop_assert!((m.total_mass() - 1.0).abs() < 1e-9);

        for code in kb.frame() {
            let q = FocalSet::singleton(code.clone());
            let bel = m.belief(&q);
            let pl = m.plausibility(&q);
            prop_assert!(bel >= 0.0 && bel <= 1.0 + 1e-9);
            prop_assert!(pl >= 0.0 && pl <= 1.0 + 1e-9);
            prop_assert!(bel <= pl + 1e-9, "bel {bel} > pl {pl} for {code}");
            prop_assert!(m.ignorance(&q) >= -1e-9);
        }
    }

    /// Combining in any order yields the same result (within tolerance).
    #[test]
    fn prop_order_independence(
        symptoms in subsequence(SYMPTOMS.to_vec(), 1..=10).prop_shuffle()
    ) {
        let kb = builtin::knowledge_base();
        let shuffled = fuse(&kb, &symptoms);

        let mut sorted = symptoms.clone();
        sorted.sort();
        let baseline = fuse(&kb, &sorted);

        prop_assert_eq!(shuffled.len(), baseline.len());
        for (focal, mass) in shuffled.iter() {
            prop_assert!(
                (mass - baseline.mass(focal)).abs() < 1e-9,
                "mass diverged at {} under order {:?}", focal, symptoms
            );
        }
    }

    /// Diagnosing with extra unknown codes injected anywhere equals
    /// diagnosing with them stripped out.
    #[test]
    fn prop_unknown_evidence_neutrality(
        symptoms in subsequence(SYMPTOMS.to_vec(), 1..=10),
        position in 0usize..=10,
    ) {
        let kb = builtin::knowledge_base();
        let engine = DiagnosisEngine::new(&kb);

        let clean: Vec<SymptomCode> =
            symptoms.iter().map(|s| SymptomCode::from(*s)).collect();
        let mut noisy = clean.clone();
        noisy.insert(position.min(noisy.len()), SymptomCode::from("G99"));

        let clean_report = engine.diagnose(&clean).unwrap();
        let noisy_report = engine.diagnose(&noisy).unwrap();

        prop_assert_eq!(&clean_report.findings, &noisy_report.findings);
        for (focal, mass) in clean_report.combined.iter() {
            prop_assert!((mass - noisy_report.combined.mass(focal)).abs() < 1e-12);
        }
    }

    /// Belief is monotone under query widening: adding a diagnosis to the
    /// query can only grow belief and plausibility.
    #[test]
    fn prop_belief_monotone_in_query(symptoms in subsequence(SYMPTOMS.to_vec(), 1..=10)) {
        let kb = builtin::knowledge_base();
        let m = fuse(&kb, &symptoms);

        let frame: Vec<DiagnosisCode> = kb.frame().to_vec();
        for code in &frame {
            let narrow = FocalSet::singleton(code.clone());
            let wide = FocalSet::subset(frame.iter().cloned());
            prop_assert!(m.belief(&narrow) <= m.belief(&wide) + 1e-9);
            prop_assert!(m.plausibility(&narrow) <= m.plausibility(&wide) + 1e-9);
        }
    }
}
