//! Advice bundles per risk tier, plus condition-specific tips.

use crate::models::RiskTier;

use super::remedies::condition_key;
use super::types::{AdviceBundle, ConditionTips};

struct TierAdvice {
    title: &'static str,
    narrative: &'static str,
    actions: &'static [&'static str],
    spoken: &'static str,
}

const HIGH: TierAdvice = TierAdvice {
    title: "EMERGENCY - Immediate Action Required",
    narrative: "This could be a medical emergency. Please seek immediate medical help.",
    actions: &[
        "Call emergency services (108) immediately",
        "Do not drive yourself to hospital",
        "If possible, have someone stay with you",
        "Follow emergency first aid if trained",
        "Notify family members immediately",
    ],
    spoken: "This appears to be a medical emergency. Please call 108 for an ambulance immediately. Do not delay seeking help.",
};

const MEDIUM: TierAdvice = TierAdvice {
    title: "Medical Attention Recommended",
    narrative: "You should see a doctor soon. This condition may need professional treatment.",
    actions: &[
        "Visit a doctor within 24 hours",
        "Monitor your symptoms closely",
        "Rest and stay hydrated",
        "Avoid strenuous activities",
        "Keep track of temperature if fever is present",
    ],
    spoken: "You should see a doctor soon for proper diagnosis and treatment. Please visit a nearby clinic or hospital within 24 hours.",
};

const LOW: TierAdvice = TierAdvice {
    title: "Home Care Recommended",
    narrative: "This condition can usually be managed at home with proper care.",
    actions: &[
        "Get plenty of rest",
        "Drink lots of water and fluids",
        "Take over-the-counter medication if needed",
        "Monitor your symptoms for 2-3 days",
        "See a doctor if symptoms worsen or persist beyond 3 days",
    ],
    spoken: "This condition can be managed at home with rest and care. Drink plenty of fluids, rest well, and monitor your symptoms. See a doctor if you don't feel better in 2 to 3 days.",
};

/// Tips keyed by condition label. Looked up by normalized key on both sides.
static CONDITION_TIPS: &[(&str, &[&str])] = &[
    (
        "Common Cold",
        &[
            "Rest for 7-10 days",
            "Drink warm liquids like tea or soup",
            "Gargle with warm salt water",
            "Use steam inhalation",
            "Take vitamin C supplements",
        ],
    ),
    (
        "Fever",
        &[
            "Take paracetamol/acetaminophen as directed",
            "Apply cool compress on forehead",
            "Wear light clothing",
            "Monitor temperature every 4 hours",
            "See doctor if fever exceeds 102°F (39°C)",
        ],
    ),
    (
        "Headache",
        &[
            "Rest in a quiet, dark room",
            "Apply cold or warm compress",
            "Drink plenty of water",
            "Take pain reliever if needed",
            "Avoid bright screens and loud noises",
        ],
    ),
    (
        "Cough",
        &[
            "Drink warm water with honey",
            "Use cough syrup as directed",
            "Avoid cold drinks and ice cream",
            "Steam inhalation 2-3 times daily",
            "Avoid dusty or polluted areas",
        ],
    ),
];

fn tier_advice(risk: RiskTier) -> &'static TierAdvice {
    match risk {
        RiskTier::High => &HIGH,
        RiskTier::Medium => &MEDIUM,
        RiskTier::Low => &LOW,
    }
}

/// Tips for one condition label, if it has a dedicated entry.
pub fn tips_for(condition: &str) -> Option<&'static [&'static str]> {
    let key = condition_key(condition);
    CONDITION_TIPS
        .iter()
        .find(|(label, _)| condition_key(label) == key)
        .map(|(_, tips)| *tips)
}

/// Advice bundle for `risk`, with a tips section per condition that has one.
///
/// A condition listed twice gets one section.
pub fn advice_for<S: AsRef<str>>(risk: RiskTier, conditions: &[S]) -> AdviceBundle {
    let base = tier_advice(risk);

    let mut tips: Vec<ConditionTips> = Vec::new();
    for condition in conditions {
        let condition = condition.as_ref();
        if tips.iter().any(|t| condition_key(&t.condition) == condition_key(condition)) {
            continue;
        }
        if let Some(list) = tips_for(condition) {
            tips.push(ConditionTips {
                condition: condition.to_string(),
                tips: list.iter().map(|s| s.to_string()).collect(),
            });
        }
    }

    AdviceBundle {
        title: base.title.to_string(),
        narrative: base.narrative.to_string(),
        actions: base.actions.iter().map(|s| s.to_string()).collect(),
        spoken_text: base.spoken.to_string(),
        tips,
    }
}
