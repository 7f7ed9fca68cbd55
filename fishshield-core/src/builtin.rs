//! Compiled-in catfish-disease knowledge base.
//!
//! Ten observable symptoms, four mutually exclusive diagnoses, densities
//! assigned by the domain experts who authored the rule set. Goes through
//! the same validation path as a file-loaded knowledge base.

use crate::config::{DiagnosisEntry, KnowledgeConfig, RuleEntry, SymptomEntry};
use crate::knowledge::KnowledgeBase;

/// The built-in knowledge base for catfish disease diagnosis.
pub fn knowledge_base() -> KnowledgeBase {
    // The built-in data is known-valid; a validation failure here is a
    // programming error, not a runtime condition.
    KnowledgeBase::from_config(config()).expect("built-in knowledge base must validate")
}

/// The raw built-in configuration, exposed so tests and tooling can
/// inspect or extend it before validation.
pub fn config() -> KnowledgeConfig {
    KnowledgeConfig {
        diagnoses: vec![
            diagnosis(
                "P01",
                "Pseudomonas hydrophila infection",
                "Bacterial infection causing ulcers, hemorrhage, and tissue decay; \
                 strikes under poor water quality and high stress.",
                "Antibiotic treatment for the bacterial infection.",
            ),
            diagnosis(
                "P02",
                "White spot (Ichthyophthirius)",
                "Protozoan parasite producing white spots on skin, fins, and gills; \
                 associated with low water temperature and poor pond sanitation.",
                "Salt baths to reduce infection and strengthen immunity.",
            ),
            diagnosis(
                "P03",
                "Trematode infestation",
                "Parasitic flatworms attacking skin, gills, or internal organs; \
                 causes irritation, lesions, and reduced appetite and growth.",
                "Anthelmintic dosing and improved water quality.",
            ),
            diagnosis(
                "P04",
                "Lernaea (anchor worm)",
                "Anchor-shaped parasite embedding in the body, leaving open wounds \
                 prone to secondary infection; spreads in unsterile, crowded ponds.",
                "External antiparasitic treatment.",
            ),
        ],
        symptoms: vec![
            symptom("G01", "Skin ulcers"),
            symptom("G02", "Skin hemorrhage"),
            symptom("G03", "Lethargy"),
            symptom("G04", "Emaciation"),
            symptom("G05", "Loss of appetite"),
            symptom("G06", "Darkened skin"),
            symptom("G07", "Rough skin"),
            symptom("G08", "Labored breathing"),
            symptom("G09", "Infection of head, back, gills, and fins"),
            symptom("G10", "Hemorrhage in the flesh"),
        ],
        rules: vec![
            rule("G01", &["P01", "P04"], 0.82),
            rule("G02", &["P01", "P02", "P04"], 0.73),
            rule("G03", &["P01", "P02"], 0.85),
            rule("G04", &["P01"], 0.78),
            rule("G05", &["P01", "P03"], 0.70),
            rule("G06", &["P02"], 0.82),
            rule("G07", &["P02"], 0.87),
            rule("G08", &["P02"], 0.76),
            rule("G09", &["P03"], 0.73),
            rule("G10", &["P04"], 0.88),
        ],
    }
}

fn diagnosis(code: &str, name: &str, description: &str, treatment: &str) -> DiagnosisEntry {
    DiagnosisEntry {
        code: code.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        treatment: Some(treatment.to_string()),
    }
}

fn symptom(code: &str, description: &str) -> SymptomEntry {
    SymptomEntry {
        code: code.to_string(),
        description: description.to_string(),
    }
}

fn rule(symptom: &str, diagnoses: &[&str], density: f64) -> RuleEntry {
    RuleEntry {
        symptom: symptom.to_string(),
        diagnoses: diagnoses.iter().map(|d| d.to_string()).collect(),
        density,
    }
}
