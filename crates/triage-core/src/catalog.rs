//! The static condition catalog and its keyword groups.
//!
//! The catalog is process-wide immutable data. Keyword groups are listed in
//! match priority order: the first group with a hit wins, and the
//! respiratory group doubles as the default when nothing matches.

use std::borrow::Cow;

use triage_contracts::{
    condition::{ConditionKey, ConditionRecord, SymptomWeight, TreatmentOption},
    urgency::Urgency,
};

/// Category applied when no keyword group matches.
pub const DEFAULT_CONDITION: ConditionKey = ConditionKey::Respiratory;

/// Keyword groups in priority order. Keywords are lowercase substrings.
pub const KEYWORD_GROUPS: [(ConditionKey, &[&str]); 4] = [
    (ConditionKey::Fever, &["fever", "temperature", "chills", "hot"]),
    (ConditionKey::Headache, &["headache", "migraine", "head pain"]),
    (ConditionKey::Gastrointestinal, &["nausea", "vomit", "stomach", "abdominal"]),
    (ConditionKey::Respiratory, &["cough", "breathing", "chest", "throat"]),
];

const fn symptom(name: &'static str, value: u8, severity: Urgency) -> SymptomWeight {
    SymptomWeight {
        name: Cow::Borrowed(name),
        value,
        severity,
    }
}

const fn treatment(name: &'static str, effectiveness: u8, priority: u8) -> TreatmentOption {
    TreatmentOption {
        name: Cow::Borrowed(name),
        effectiveness,
        priority,
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

static FEVER: ConditionRecord = ConditionRecord {
    key: ConditionKey::Fever,
    name: "Fever/Infection",
    symptom_profile: &[
        symptom("High Temperature", 40, Urgency::High),
        symptom("Body Aches", 30, Urgency::Moderate),
        symptom("Fatigue", 30, Urgency::Moderate),
    ],
    treatment_profile: &[
        treatment("Rest", 90, 1),
        treatment("Hydration", 85, 2),
        treatment("Fever Reducers", 75, 3),
        treatment("Cool Compress", 65, 4),
    ],
    urgency: Urgency::Moderate,
    description: "Elevated body temperature often indicating infection or immune response.",
    recommendations: &[
        "Monitor temperature regularly",
        "Stay well hydrated with fluids",
        "Get plenty of rest",
        "Seek medical attention if fever exceeds 103°F (39.4°C)",
    ],
};

static RESPIRATORY: ConditionRecord = ConditionRecord {
    key: ConditionKey::Respiratory,
    name: "Respiratory Issues",
    symptom_profile: &[
        symptom("Cough", 35, Urgency::Moderate),
        symptom("Shortness of Breath", 25, Urgency::High),
        symptom("Chest Tightness", 20, Urgency::Moderate),
        symptom("Runny Nose", 20, Urgency::Low),
    ],
    treatment_profile: &[
        treatment("Steam Inhalation", 80, 1),
        treatment("Rest", 85, 2),
        treatment("Warm Fluids", 70, 3),
        treatment("Humidifier", 65, 4),
    ],
    urgency: Urgency::Moderate,
    description: "Symptoms affecting the respiratory system including airways and lungs.",
    recommendations: &[
        "Avoid irritants and allergens",
        "Use a humidifier to ease breathing",
        "Stay hydrated with warm liquids",
        "Seek immediate care if breathing becomes severely difficult",
    ],
};

static HEADACHE: ConditionRecord = ConditionRecord {
    key: ConditionKey::Headache,
    name: "Headache/Migraine",
    symptom_profile: &[
        symptom("Head Pain", 45, Urgency::High),
        symptom("Light Sensitivity", 25, Urgency::Moderate),
        symptom("Nausea", 20, Urgency::Moderate),
        symptom("Neck Stiffness", 10, Urgency::Low),
    ],
    treatment_profile: &[
        treatment("Dark Quiet Room", 85, 1),
        treatment("Pain Relief", 80, 2),
        treatment("Hydration", 70, 3),
        treatment("Cold Compress", 65, 4),
    ],
    urgency: Urgency::Low,
    description: "Pain in the head or neck region, possibly accompanied by other symptoms.",
    recommendations: &[
        "Rest in a dark, quiet environment",
        "Apply cold or warm compress as preferred",
        "Stay hydrated",
        "Avoid known triggers like certain foods or stress",
    ],
};

static GASTROINTESTINAL: ConditionRecord = ConditionRecord {
    key: ConditionKey::Gastrointestinal,
    name: "Gastrointestinal Issues",
    symptom_profile: &[
        symptom("Nausea", 30, Urgency::Moderate),
        symptom("Abdominal Pain", 35, Urgency::High),
        symptom("Vomiting", 20, Urgency::Moderate),
        symptom("Diarrhea", 15, Urgency::Moderate),
    ],
    treatment_profile: &[
        treatment("Clear Fluids", 90, 1),
        treatment("BRAT Diet", 80, 2),
        treatment("Rest", 75, 3),
        treatment("Probiotics", 60, 4),
    ],
    urgency: Urgency::Moderate,
    description: "Digestive system symptoms affecting stomach and intestines.",
    recommendations: &[
        "Stay hydrated with clear fluids",
        "Follow BRAT diet (Bananas, Rice, Applesauce, Toast)",
        "Avoid dairy and fatty foods temporarily",
        "Seek medical attention if symptoms persist or worsen",
    ],
};

// ── Lookup ────────────────────────────────────────────────────────────────────

/// Return the record for `key`. Every key has exactly one record.
pub fn record(key: ConditionKey) -> &'static ConditionRecord {
    match key {
        ConditionKey::Fever => &FEVER,
        ConditionKey::Respiratory => &RESPIRATORY,
        ConditionKey::Headache => &HEADACHE,
        ConditionKey::Gastrointestinal => &GASTROINTESTINAL,
    }
}

/// All four records in keyword-priority order.
pub fn all_records() -> [&'static ConditionRecord; 4] {
    KEYWORD_GROUPS.map(|(key, _)| record(key))
}
