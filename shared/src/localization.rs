//! Localized disease names and treatment advice
//!
//! Two immutable tables keyed by `(DiseaseLabel, Language)`. The name table is
//! an exhaustive match over every label; treatments only cover the diseases
//! agronomists have written advice for, everything else gets the generic
//! "consult an expert" text.

use std::borrow::Cow;

use crate::models::DiseaseLabel;
use crate::types::Language;

pub const GENERIC_TREATMENT_EN: &str = "Consult agricultural expert for treatment advice.";
pub const GENERIC_TREATMENT_TA: &str =
    "சிகிச்சை ஆலோசனைக்கு வேளாண் நிபுணரை அணுகவும்.";

/// Localized display name
pub fn disease_name(label: DiseaseLabel, language: Language) -> &'static str {
    use DiseaseLabel::*;
    use Language::*;

    match (label, language) {
        (AppleScab, En) => "Apple Scab",
        (AppleBlackRot, En) => "Apple Black Rot",
        (AppleCedarRust, En) => "Cedar Apple Rust",
        (AppleHealthy, En) => "Healthy Apple",
        (CornCercosporaLeafSpot, En) => "Corn Leaf Spot",
        (CornCommonRust, En) => "Corn Rust",
        (CornHealthy, En) => "Healthy Corn",
        (GrapeBlackRot, En) => "Grape Black Rot",
        (GrapeEsca, En) => "Grape Black Measles",
        (GrapeHealthy, En) => "Healthy Grape",
        (PotatoEarlyBlight, En) => "Potato Early Blight",
        (PotatoLateBlight, En) => "Potato Late Blight",
        (PotatoHealthy, En) => "Healthy Potato",
        (RiceBrownSpot, En) => "Rice Brown Spot",
        (RiceLeafBlast, En) => "Rice Leaf Blast",
        (RiceHealthy, En) => "Healthy Rice",
        (TomatoBacterialSpot, En) => "Tomato Bacterial Spot",
        (TomatoEarlyBlight, En) => "Tomato Early Blight",
        (TomatoLateBlight, En) => "Tomato Late Blight",
        (TomatoHealthy, En) => "Healthy Tomato",

        (AppleScab, Ta) => "ஆப்பிள் புண் நோய்",
        (AppleBlackRot, Ta) => "ஆப்பிள் கருப்பு அழுகல்",
        (AppleCedarRust, Ta) => "ஆப்பிள் துரு நோய்",
        (AppleHealthy, Ta) => "ஆரோக்கியமான ஆப்பிள்",
        (CornCercosporaLeafSpot, Ta) => "சோள இலை புள்ளி நோய்",
        (CornCommonRust, Ta) => "சோள துரு நோய்",
        (CornHealthy, Ta) => "ஆரோக்கியமான சோளம்",
        (GrapeBlackRot, Ta) => "திராட்சை கருப்பு அழுகல்",
        (GrapeEsca, Ta) => "திராட்சை கருப்பு அம்மை",
        (GrapeHealthy, Ta) => "ஆரோக்கியமான திராட்சை",
        (PotatoEarlyBlight, Ta) => "உருளைக்கிழங்கு முன்கூட்டிய வாடல்",
        (PotatoLateBlight, Ta) => "உருளைக்கிழங்கு தாமத வாடல்",
        (PotatoHealthy, Ta) => "ஆரோக்கியமான உருளைக்கிழங்கு",
        (RiceBrownSpot, Ta) => "அரிசி பழுப்பு புள்ளி நோய்",
        (RiceLeafBlast, Ta) => "அரிசி இலை வெடிப்பு நோய்",
        (RiceHealthy, Ta) => "ஆரோக்கியமான அரிசி",
        (TomatoBacterialSpot, Ta) => "தக்காளி பாக்டீரியா புள்ளி நோய்",
        (TomatoEarlyBlight, Ta) => "தக்காளி முன்கூட்டிய வாடல்",
        (TomatoLateBlight, Ta) => "தக்காளி தாமத வாடல்",
        (TomatoHealthy, Ta) => "ஆரோக்கியமான தக்காளி",
    }
}

fn treatment_entry(label: DiseaseLabel, language: Language) -> Option<&'static str> {
    use DiseaseLabel::*;
    use Language::*;

    match (label, language) {
        (AppleScab, En) => {
            Some("Apply fungicide spray. Remove fallen leaves. Improve air circulation.")
        }
        (AppleBlackRot, En) => Some(
            "Prune infected branches. Apply copper-based fungicide. Remove mummified fruits.",
        ),
        (CornCercosporaLeafSpot, En) => Some(
            "Use resistant varieties. Apply fungicide if severe. Crop rotation recommended.",
        ),
        (PotatoEarlyBlight, En) => {
            Some("Apply fungicide spray. Remove infected foliage. Ensure proper spacing.")
        }
        (RiceBrownSpot, En) => Some(
            "Apply potassium fertilizer. Improve drainage. Use disease-resistant varieties.",
        ),
        (TomatoBacterialSpot, En) => Some(
            "Use copper-based bactericide. Remove infected plants. Avoid overhead watering.",
        ),

        (AppleScab, Ta) => Some(
            "பூஞ்சை எதிர்ப்பு மருந்து தெளிக்கவும். விழுந்த இலைகளை அகற்றவும். காற்றோட்டம் மேம்படுத்தவும்.",
        ),
        (AppleBlackRot, Ta) => Some(
            "பாதிக்கப்பட்ட கிளைகளை வெட்டவும். தாமிர அடிப்படையிலான பூஞ்சை எதிர்ப்பு மருந்து பயன்படுத்தவும்.",
        ),
        (CornCercosporaLeafSpot, Ta) => Some(
            "எதிர்ப்பு சக்தி கொண்ட வகைகளைப் பயன்படுத்தவும். கடுமையானால் பூஞ்சை எதிர்ப்பு மருந்து தெளிக்கவும்.",
        ),
        (PotatoEarlyBlight, Ta) => Some(
            "பூஞ்சை எதிர்ப்பு மருந்து தெளிக்கவும். பாதிக்கப்பட்ட இலைகளை அகற்றவும்.",
        ),
        (RiceBrownSpot, Ta) => Some(
            "பொட்டாசியம் உரம் இடவும். வடிகால் மேம்படுத்தவும். நோய் எதிர்ப்பு வகைகள் பயன்படுத்தவும்.",
        ),
        (TomatoBacterialSpot, Ta) => Some(
            "தாமிர அடிப்படையிலான பாக்டீரியா எதிர்ப்பு மருந்து பயன்படுத்தவும். பாதிக்கப்பட்ட செடிகளை அகற்றவும்.",
        ),
        _ => None,
    }
}

/// Generic advice for diseases without a dedicated treatment entry
pub fn generic_treatment(language: Language) -> &'static str {
    match language {
        Language::En => GENERIC_TREATMENT_EN,
        Language::Ta => GENERIC_TREATMENT_TA,
    }
}

/// Localized treatment advice; falls back to the generic text
pub fn treatment(label: DiseaseLabel, language: Language) -> &'static str {
    treatment_entry(label, language).unwrap_or_else(|| generic_treatment(language))
}

/// Whether a dedicated (non-generic) treatment exists for the label
pub fn has_specific_treatment(label: DiseaseLabel, language: Language) -> bool {
    treatment_entry(label, language).is_some()
}

/// Name lookup by identifier string; unknown keys are returned unchanged
pub fn disease_name_for_key(key: &str, language: Language) -> Cow<'_, str> {
    match key.parse::<DiseaseLabel>() {
        Ok(label) => Cow::Borrowed(disease_name(label, language)),
        Err(_) => Cow::Borrowed(key),
    }
}

/// Treatment lookup by identifier string; unknown keys get the generic text
pub fn treatment_for_key(key: &str, language: Language) -> &'static str {
    key.parse::<DiseaseLabel>()
        .map(|label| treatment(label, language))
        .unwrap_or_else(|_| generic_treatment(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_has_names_in_every_language() {
        for language in Language::ALL {
            for label in DiseaseLabel::ALL {
                let name = disease_name(label, language);
                assert!(!name.is_empty(), "{label} / {language}");
                assert_ne!(name, label.as_str(), "{label} / {language}");
                assert!(!treatment(label, language).is_empty());
            }
        }
    }

    #[test]
    fn test_known_translations() {
        assert_eq!(
            disease_name(DiseaseLabel::TomatoEarlyBlight, Language::En),
            "Tomato Early Blight"
        );
        assert_eq!(
            disease_name(DiseaseLabel::TomatoEarlyBlight, Language::Ta),
            "தக்காளி முன்கூட்டிய வாடல்"
        );
    }

    #[test]
    fn test_treatment_fallback() {
        assert_eq!(
            treatment(DiseaseLabel::TomatoEarlyBlight, Language::En),
            GENERIC_TREATMENT_EN
        );
        assert_eq!(
            treatment(DiseaseLabel::PotatoLateBlight, Language::Ta),
            GENERIC_TREATMENT_TA
        );
        assert!(!has_specific_treatment(DiseaseLabel::GrapeHealthy, Language::En));
    }

    #[test]
    fn test_specific_treatments_exist_in_both_languages() {
        let documented = [
            DiseaseLabel::AppleScab,
            DiseaseLabel::AppleBlackRot,
            DiseaseLabel::CornCercosporaLeafSpot,
            DiseaseLabel::PotatoEarlyBlight,
            DiseaseLabel::RiceBrownSpot,
            DiseaseLabel::TomatoBacterialSpot,
        ];
        for label in documented {
            for language in Language::ALL {
                assert!(has_specific_treatment(label, language));
            }
        }
    }

    #[test]
    fn test_key_lookups() {
        assert_eq!(
            disease_name_for_key("Rice___Leaf_blast", Language::En),
            "Rice Leaf Blast"
        );
        assert_eq!(
            disease_name_for_key("Mango___Anthracnose", Language::Ta),
            "Mango___Anthracnose"
        );
        assert_eq!(
            treatment_for_key("Mango___Anthracnose", Language::En),
            GENERIC_TREATMENT_EN
        );
    }
}
