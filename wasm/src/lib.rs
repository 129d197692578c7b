//! WebAssembly module for the Farmer AI ML service
//!
//! Provides client-side helpers for the web frontend:
//! - Localized disease names and treatment advice
//! - Severity and irrigation advice from model outputs
//! - Soil reading encoding and offline validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::localization;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Unknown language codes fall back to English, matching the server default
fn language_or_default(code: &str) -> Language {
    match code.parse::<Language>() {
        Ok(language) => language,
        Err(e) => {
            warn(&format!("{}, using en", e));
            Language::default()
        }
    }
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Language codes the service can answer in
#[wasm_bindgen]
pub fn supported_languages() -> js_sys::Array {
    Language::ALL
        .iter()
        .map(|language| JsValue::from_str(language.code()))
        .collect()
}

/// Display name for a disease key such as `Tomato___Early_blight`
#[wasm_bindgen]
pub fn disease_display_name(key: &str, language: &str) -> String {
    localization::disease_name_for_key(key, language_or_default(language)).into_owned()
}

/// Treatment advice for a disease key, or generic advice when none is known
#[wasm_bindgen]
pub fn treatment_for(key: &str, language: &str) -> String {
    localization::treatment_for_key(key, language_or_default(language)).to_string()
}

/// Severity bucket (`low` / `medium`) for a classifier confidence
#[wasm_bindgen]
pub fn severity_for(confidence: f64) -> String {
    severity_for_confidence(confidence).to_string()
}

#[wasm_bindgen]
pub fn encode_crop(crop_type: &str) -> u8 {
    encode_crop_type(crop_type)
}

#[wasm_bindgen]
pub fn encode_season_name(season: &str) -> u8 {
    encode_season(season)
}

/// Build the full soil advice block for a raw moisture value, as JSON
#[wasm_bindgen]
pub fn irrigation_advice(moisture: f64, language: &str) -> Result<String, JsValue> {
    irrigation_advice_json(moisture, language_or_default(language))
        .map_err(|e| JsValue::from_str(&e))
}

fn irrigation_advice_json(moisture: f64, language: Language) -> Result<String, String> {
    validate_moisture_level(moisture).map_err(str::to_string)?;
    let result = SoilPredictionResult::from_moisture(moisture, language);
    serde_json::to_string(&result).map_err(|e| format!("Failed to serialize advice: {}", e))
}

/// Check a soil reading before it is queued for submission.
///
/// Returns the first problem found, or an empty string when the reading is
/// acceptable.
#[wasm_bindgen]
pub fn validate_soil_reading(temperature: f64, humidity: f64, rainfall: f64) -> String {
    check_soil_reading(temperature, humidity, rainfall)
        .err()
        .unwrap_or_default()
}

fn check_soil_reading(temperature: f64, humidity: f64, rainfall: f64) -> Result<(), String> {
    validate_finite(temperature).map_err(|e| format!("temperature: {}", e))?;
    validate_humidity(humidity).map_err(|e| format!("humidity: {}", e))?;
    validate_finite(rainfall).map_err(|e| format!("rainfall: {}", e))?;
    if rainfall < 0.0 {
        return Err("rainfall: must not be negative".to_string());
    }
    Ok(())
}

/// Validate an image path the same way the server does
#[wasm_bindgen]
pub fn is_valid_image_path(path: &str) -> bool {
    validate_image_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_display_name() {
        assert_eq!(
            disease_display_name("Tomato___Early_blight", "en"),
            "Tomato Early Blight"
        );
        assert_eq!(
            disease_display_name("Tomato___Early_blight", "ta"),
            localization::disease_name(DiseaseLabel::TomatoEarlyBlight, Language::Ta)
        );
        assert_eq!(disease_display_name("Wheat___Rust", "en"), "Wheat___Rust");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(
            treatment_for("Wheat___Rust", "fr"),
            localization::GENERIC_TREATMENT_EN
        );
    }

    #[test]
    fn test_severity_for() {
        assert_eq!(severity_for(0.82), "medium");
        assert_eq!(severity_for(0.6), "low");
    }

    #[test]
    fn test_encodings() {
        assert_eq!(encode_crop("cotton"), 4);
        assert_eq!(encode_crop("barley"), 0);
        assert_eq!(encode_season_name("winter"), 2);
    }

    #[test]
    fn test_irrigation_advice_json() {
        let json = irrigation_advice_json(72.0, Language::En).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["moisture_level"], 72);
        assert_eq!(value["irrigation_needed"], false);
        assert_eq!(value["next_check"], "48h");

        assert!(irrigation_advice_json(f64::NAN, Language::En).is_err());
    }

    #[test]
    fn test_validate_soil_reading() {
        assert_eq!(validate_soil_reading(28.0, 70.0, 5.0), "");
        assert!(validate_soil_reading(28.0, 130.0, 5.0).starts_with("humidity"));
        assert!(validate_soil_reading(f64::NAN, 70.0, 5.0).starts_with("temperature"));
        assert!(validate_soil_reading(28.0, 70.0, -1.0).starts_with("rainfall"));
    }

    #[test]
    fn test_image_path() {
        assert!(is_valid_image_path("/uploads/leaf.jpg"));
        assert!(is_valid_image_path("   "));
        assert!(!is_valid_image_path("leaf\0.jpg"));
    }
}
