//! Localized short phrases used when presenting and speaking a report.
//!
//! Phrases without a translation fall back to English.

use crate::models::{Language, RiskTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    LowRisk,
    MediumRisk,
    HighRisk,
    HomeCareSufficient,
    SeeDoctorSoon,
    SeekImmediateHelp,
    HomeRemedies,
    WhatToDo,
    Welcome,
    AnalysisComplete,
}

impl Phrase {
    pub fn risk_label(risk: RiskTier) -> Self {
        match risk {
            RiskTier::Low => Self::LowRisk,
            RiskTier::Medium => Self::MediumRisk,
            RiskTier::High => Self::HighRisk,
        }
    }

    pub fn advice(risk: RiskTier) -> Self {
        match risk {
            RiskTier::Low => Self::HomeCareSufficient,
            RiskTier::Medium => Self::SeeDoctorSoon,
            RiskTier::High => Self::SeekImmediateHelp,
        }
    }

    pub fn text(self, language: Language) -> &'static str {
        self.translated(language)
            .unwrap_or_else(|| self.english())
    }

    fn english(self) -> &'static str {
        match self {
            Self::LowRisk => "Low Risk",
            Self::MediumRisk => "Medium Risk",
            Self::HighRisk => "High Risk",
            Self::HomeCareSufficient => "Home care should be sufficient",
            Self::SeeDoctorSoon => "Please see a doctor soon",
            Self::SeekImmediateHelp => "Seek immediate medical help",
            Self::HomeRemedies => "Home remedies",
            Self::WhatToDo => "What you should do:",
            Self::Welcome => "Welcome to PRANSAKHI. Your health assistant is ready.",
            Self::AnalysisComplete => "Analysis complete. Here is your health advice.",
        }
    }

    fn translated(self, language: Language) -> Option<&'static str> {
        use Language::*;
        let text = match (self, language) {
            (_, English) => return None,

            (Self::LowRisk, Hindi) => "कम जोखिम",
            (Self::MediumRisk, Hindi) => "मध्यम जोखिम",
            (Self::HighRisk, Hindi) => "उच्च जोखिम",
            (Self::HomeCareSufficient, Hindi) => "घर पर देखभाल पर्याप्त है",
            (Self::SeeDoctorSoon, Hindi) => "कृपया जल्द ही डॉक्टर को दिखाएं",
            (Self::SeekImmediateHelp, Hindi) => "तुरंत चिकित्सा सहायता लें",
            (Self::HomeRemedies, Hindi) => "घरेलू उपचार",

            (Self::WhatToDo, Hindi) => "आपको क्या करना चाहिए:",
            (Self::WhatToDo, Marathi) => "तुम्ही काय करावे:",
            (Self::WhatToDo, Bengali) => "আপনার কী করা উচিত:",
            (Self::WhatToDo, Punjabi) => "ਤੁਹਾਨੂੰ ਕੀ ਕਰਨਾ ਚਾਹੀਦਾ ਹੈ:",
            (Self::WhatToDo, Tamil) => "நீங்கள் என்ன செய்ய வேண்டும்:",
            (Self::WhatToDo, Telugu) => "మీరు ఏమి చేయాలి:",
            (Self::WhatToDo, Gujarati) => "તમારે શું કરવું જોઈએ:",

            (Self::Welcome, Hindi) => "प्रणसखी में आपका स्वागत है। आपका स्वास्थ्य सहायक तैयार है।",
            (Self::Welcome, Marathi) => "प्रणसखीमध्ये आपले स्वागत आहे। तुमचा आरोग्य सहाय्यक तयार आहे।",
            (Self::Welcome, Bengali) => "প্রণসখীতে আপনাকে স্বাগতম। আপনার স্বাস্থ্য সহায়ক প্রস্তুত।",
            (Self::Welcome, Punjabi) => "ਪ੍ਰਣਸਖੀ ਵਿੱਚ ਤੁਹਾਡਾ ਸੁਆਗਤ ਹੈ। ਤੁਹਾਡਾ ਸਿਹਤ ਸਹਾਇਕ ਤਿਆਰ ਹੈ।",
            (Self::Welcome, Tamil) => "ப்ரணசகீக்கு வரவேற்கிறோம். உங்கள் சுகாதார உதவியாளர் தயாராக உள்ளது.",
            (Self::Welcome, Telugu) => "ప్రణసఖీకి స్వాగతం. మీ ఆరోగ్య సహాయకుడు సిద్ధంగా ఉన్నారు.",
            (Self::Welcome, Gujarati) => "પ્રણસખીમાં આપનું સ્વાગત છે. તમારો આરોગ્ય સહાયક તૈયાર છે.",

            (Self::AnalysisComplete, Hindi) => "विश्लेषण पूरा हुआ। यहाँ आपकी स्वास्थ्य सलाह है।",
            (Self::AnalysisComplete, Marathi) => "विश्लेषण पूर्ण झाले. येथे तुमचा आरोग्य सल्ला आहे।",
            (Self::AnalysisComplete, Bengali) => "বিশ্লেষণ সম্পূর্ণ। এখানে আপনার স্বাস্থ্য পরামর্শ।",
            (Self::AnalysisComplete, Punjabi) => "ਵਿਸ਼ਲੇਸ਼ਣ ਪੂਰਾ ਹੋਇਆ। ਇਹ ਤੁਹਾਡਾ ਸਿਹਤ ਸਲਾਹ ਹੈ।",
            (Self::AnalysisComplete, Tamil) => "பகுப்பாய்வு முடிந்தது. இதோ உங்கள் சுகாதார ஆலோசனை.",
            (Self::AnalysisComplete, Telugu) => "విశ్లేషణ పూర్తయింది. ఇదిగో మీ ఆరోగ్య సలహా.",
            (Self::AnalysisComplete, Gujarati) => "વિશ્લેષણ પૂર્ણ થયું. આ રહ્યો તમારો આરોગ્ય સલાહ.",

            _ => return None,
        };
        Some(text)
    }
}

/// Emergency steps shown with every high-risk report.
pub fn emergency_actions(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "Call emergency services (108) immediately",
            "Do not drive yourself",
            "Have someone stay with you",
            "Follow first aid if trained",
        ],
        Language::Hindi => &[
            "तुरंत आपातकालीन सेवाओं (108) को कॉल करें",
            "खुद गाड़ी न चलाएं",
            "किसी को अपने साथ रखें",
            "प्रशिक्षित हों तो प्राथमिक उपचार करें",
        ],
        Language::Marathi => &[
            "आपत्कालीन सेवा (108) ला लगेच कॉल करा",
            "स्वतः गाडी चालवू नका",
            "कोणीतरी तुमच्यासोबत राहू द्या",
            "प्रशिक्षित असल्यास प्राथमिक उपचार करा",
        ],
        Language::Bengali => &[
            "অবিলম্বে জরুরি সেবা (108) কল করুন",
            "নিজে গাড়ি চালাবেন না",
            "কেউ আপনার সাথে থাকুক",
            "প্রশিক্ষিত হলে প্রাথমিক চিকিৎসা করুন",
        ],
        Language::Punjabi => &[
            "ਤੁਰੰਤ ਐਮਰਜੈਂਸੀ ਸੇਵਾਵਾਂ (108) ਨੂੰ ਕਾਲ ਕਰੋ",
            "ਖੁਦ ਗੱਡੀ ਨਾ ਚਲਾਓ",
            "ਕੋਈ ਤੁਹਾਡੇ ਨਾਲ ਰਹੇ",
            "ਸਿਖਲਾਈ ਹੋਵੇ ਤਾਂ ਪਹਿਲੀ ਸਹਾਇਤਾ ਕਰੋ",
        ],
        Language::Tamil => &[
            "உடனடியாக அவசர சேவைகளை (108) அழைக்கவும்",
            "நீங்களே வாகனம் ஓட்ட வேண்டாம்",
            "யாராவது உங்களுடன் இருக்கட்டும்",
            "பயிற்சி பெற்றிருந்தால் முதலுதவி செய்யுங்கள்",
        ],
        Language::Telugu => &[
            "వెంటనే అత్యవసర సేవలను (108) కాల్ చేయండి",
            "మీరే వాహనం నడపకండి",
            "ఎవరైనా మీతో ఉండనివ్వండి",
            "శిక్షణ ఉంటే ప్రథమ చికిత్స చేయండి",
        ],
        Language::Gujarati => &[
            "તાત્કાલિક કટોકટી સેવાઓ (108) ને કૉલ કરો",
            "જાતે વાહન ચલાવશો નહીં",
            "કોઈ તમારી સાથે રહે",
            "તાલીમ હોય તો પ્રથમ સારવાર કરો",
        ],
    }
}

/// Spoken confirmation after a reminder is saved.
pub fn reminder_confirmation(language: Language, name: &str, time: &str) -> String {
    match language {
        Language::English => format!("Reminder set for {name} at {time}. You will be notified."),
        Language::Hindi => format!("{name} के लिए {time} बजे रिमाइंडर सेट किया गया। आपको सूचित किया जाएगा।"),
        Language::Marathi => format!("{name} साठी {time} वाजता रिमाइंडर सेट केला. तुम्हाला सूचित केले जाईल।"),
        Language::Bengali => format!("{name} এর জন্য {time} এ রিমাইন্ডার সেট করা হয়েছে। আপনাকে জানানো হবে।"),
        Language::Punjabi => format!("{name} ਲਈ {time} ਵਜੇ ਰਿਮਾਈਂਡਰ ਸੈੱਟ ਕੀਤਾ ਗਿਆ। ਤੁਹਾਨੂੰ ਸੂਚਿਤ ਕੀਤਾ ਜਾਵੇਗਾ।"),
        Language::Tamil => format!("{name} க்கு {time} மணிக்கு நினைவூட்டல் அமைக்கப்பட்டது. உங்களுக்கு அறிவிக்கப்படும்."),
        Language::Telugu => format!("{name} కోసం {time} కు రిమైండర్ సెట్ చేయబడింది. మీకు తెలియజేయబడుతుంది."),
        Language::Gujarati => format!("{name} માટે {time} વાગ્યે રિમાઇન્ડર સેટ કર્યું. તમને જાણ કરવામાં આવશે."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untranslated_phrase_falls_back_to_english() {
        assert_eq!(Phrase::LowRisk.text(Language::Tamil), "Low Risk");
        assert_eq!(Phrase::LowRisk.text(Language::Hindi), "कम जोखिम");
    }

    #[test]
    fn what_to_do_is_translated_everywhere() {
        for language in Language::ALL {
            assert!(!Phrase::WhatToDo.text(*language).is_empty());
        }
        assert_eq!(Phrase::WhatToDo.text(Language::Telugu), "మీరు ఏమి చేయాలి:");
    }

    #[test]
    fn emergency_actions_mention_108_in_every_language() {
        for language in Language::ALL {
            let actions = emergency_actions(*language);
            assert_eq!(actions.len(), 4);
            assert!(actions[0].contains("108"));
        }
    }

    #[test]
    fn reminder_confirmation_embeds_name_and_time() {
        let msg = reminder_confirmation(Language::English, "Paracetamol", "08:00");
        assert_eq!(msg, "Reminder set for Paracetamol at 08:00. You will be notified.");
        assert!(reminder_confirmation(Language::Gujarati, "Dolo", "21:30").contains("Dolo"));
    }

    #[test]
    fn tier_phrases_line_up() {
        assert_eq!(Phrase::risk_label(RiskTier::High), Phrase::HighRisk);
        assert_eq!(Phrase::advice(RiskTier::Medium), Phrase::SeeDoctorSoon);
    }
}
