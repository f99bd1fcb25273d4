//! Multiple-choice catalog: body parts, symptom options and synonyms.

use crate::models::{BodyPart, Language};

/// Localized body-part labels, in `BodyPart::ALL` order.
fn body_part_labels(language: Language) -> [&'static str; 8] {
    match language {
        Language::English => [
            "Head", "Chest", "Stomach", "Throat", "Body", "Skin", "Joints", "Other",
        ],
        Language::Hindi => ["सिर", "छाती", "पेट", "गला", "पूरा शरीर", "त्वचा", "जोड़", "अन्य"],
        Language::Marathi => ["डोके", "छाती", "पोट", "घसा", "संपूर्ण शरीर", "त्वचा", "सांधे", "इतर"],
        Language::Bengali => ["মাথা", "বুক", "পেট", "গলা", "সম্পূর্ণ শরীর", "ত্বক", "জোড়", "অন্যান্য"],
        Language::Punjabi => ["ਸਿਰ", "ਛਾਤੀ", "ਪੇਟ", "ਗਲਾ", "ਪੂਰਾ ਸਰੀਰ", "ਚਮੜੀ", "ਜੋੜ", "ਹੋਰ"],
        Language::Tamil => ["தலை", "மார்பு", "வயிறு", "தொண்டை", "முழு உடல்", "தோல்", "மூட்டுகள்", "மற்றவை"],
        Language::Telugu => ["తల", "ఛాతీ", "కడుపు", "గొంతు", "పూర్తి శరీరం", "చర్మం", "కీళ్ళు", "ఇతరత్రులు"],
        Language::Gujarati => ["માથું", "છાતી", "પેટ", "ગળું", "સંપૂર્ણ શરીર", "ચામડી", "સાંધા", "અન્ય"],
    }
}

struct PartSymptoms {
    part: BodyPart,
    en: &'static [&'static str],
    hi: &'static [&'static str],
    synonyms: &'static [&'static str],
}

static SYMPTOMS_BY_PART: &[PartSymptoms] = &[
    PartSymptoms {
        part: BodyPart::Head,
        en: &["Headache", "Dizziness", "Eye pain", "Ear pain", "Toothache"],
        hi: &["सिरदर्द", "चक्कर", "आंख में दर्द", "कान में दर्द", "दांत दर्द"],
        synonyms: &["migraine", "head pain", "vertigo", "spinning", "dental pain"],
    },
    PartSymptoms {
        part: BodyPart::Chest,
        en: &["Chest pain", "Breathing difficulty", "Cough", "Heart palpitations"],
        hi: &["सीने में दर्द", "सांस लेने में कठिनाई", "खांसी", "दिल की धड़कन"],
        synonyms: &["heart attack", "cant breathe", "shortness of breath", "cardiac", "asthma"],
    },
    PartSymptoms {
        part: BodyPart::Stomach,
        en: &["Stomach pain", "Nausea", "Vomiting", "Diarrhea", "Loss of appetite"],
        hi: &["पेट दर्द", "मतली", "उल्टी", "दस्त", "भूख न लगना"],
        synonyms: &[
            "abdominal pain",
            "belly ache",
            "indigestion",
            "loose motions",
            "food poisoning",
        ],
    },
    PartSymptoms {
        part: BodyPart::Throat,
        en: &["Sore throat", "Difficulty swallowing", "Voice change", "Swollen glands"],
        hi: &["गले में खराश", "निगलने में कठिनाई", "आवाज बदलना", "सूजी ग्रंथियां"],
        synonyms: &["throat pain", "cant swallow", "hoarse voice", "tonsillitis"],
    },
    PartSymptoms {
        part: BodyPart::Body,
        en: &["Fever", "Weakness", "Body ache", "Fatigue", "Chills"],
        hi: &["बुखार", "कमजोरी", "शरीर दर्द", "थकान", "ठंड लगना"],
        synonyms: &["temperature", "muscle pain", "tiredness", "exhaustion", "shivering"],
    },
    PartSymptoms {
        part: BodyPart::Skin,
        en: &["Rash", "Itching", "Swelling", "Redness", "Wound"],
        hi: &["दाने", "खुजली", "सूजन", "लाली", "घाव"],
        synonyms: &["skin problem", "allergy", "inflammation", "cut", "burn"],
    },
    PartSymptoms {
        part: BodyPart::Joints,
        en: &["Joint pain", "Stiffness", "Swelling", "Limited movement"],
        hi: &["जोड़ों में दर्द", "जकड़न", "सूजन", "सीमित गतिविधि"],
        synonyms: &["arthritis", "knee pain", "back pain", "shoulder pain", "ankle pain"],
    },
];

/// Offered when a body part has no dedicated symptom list.
const GENERIC_OPTIONS: &[&str] = &["Pain", "Discomfort", "Other"];

/// Body-part choices with their localized labels.
pub fn body_parts(language: Language) -> Vec<(BodyPart, &'static str)> {
    BodyPart::ALL
        .iter()
        .copied()
        .zip(body_part_labels(language))
        .collect()
}

/// Symptom options for a body part in `language`, English when not translated.
pub fn symptoms_for(part: BodyPart, language: Language) -> &'static [&'static str] {
    match SYMPTOMS_BY_PART.iter().find(|p| p.part == part) {
        Some(p) if language == Language::Hindi => p.hi,
        Some(p) => p.en,
        None => GENERIC_OPTIONS,
    }
}

/// Body part a free-text description most likely refers to.
///
/// Checks synonyms and English option names, first body part wins.
pub fn suggest_body_part(text: &str) -> Option<BodyPart> {
    let lower = text.to_lowercase();
    SYMPTOMS_BY_PART
        .iter()
        .find(|p| {
            p.synonyms.iter().any(|s| lower.contains(s))
                || p.en.iter().any(|s| lower.contains(&s.to_lowercase()))
        })
        .map(|p| p.part)
}
