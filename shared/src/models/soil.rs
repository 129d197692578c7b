//! Soil moisture prediction models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{Language, NextCheck};

/// Predicted moisture below this level means the field should be irrigated
pub const IRRIGATION_THRESHOLD: f64 = 45.0;

/// Environmental reading submitted for a moisture prediction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SoilPredictionRequest {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    pub crop_type: String,
    pub season: String,
    #[validate(length(max = 200, message = "location must be at most 200 characters"))]
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub language: Language,
}

/// Crop types known to the moisture model's categorical encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropType {
    Rice = 0,
    Wheat = 1,
    Corn = 2,
    Tomato = 3,
    Cotton = 4,
    Sugarcane = 5,
}

impl CropType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "rice" => Some(CropType::Rice),
            "wheat" => Some(CropType::Wheat),
            "corn" => Some(CropType::Corn),
            "tomato" => Some(CropType::Tomato),
            "cotton" => Some(CropType::Cotton),
            "sugarcane" => Some(CropType::Sugarcane),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Growing seasons known to the moisture model's categorical encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer = 0,
    Monsoon = 1,
    Winter = 2,
    Spring = 3,
}

impl Season {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "summer" => Some(Season::Summer),
            "monsoon" => Some(Season::Monsoon),
            "winter" => Some(Season::Winter),
            "spring" => Some(Season::Spring),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Encode a crop name; unknown crops share code 0 with rice
pub fn encode_crop_type(name: &str) -> u8 {
    CropType::from_name(name).map(|c| c.code()).unwrap_or(0)
}

/// Encode a season name; unknown seasons share code 0 with summer
pub fn encode_season(name: &str) -> u8 {
    Season::from_name(name).map(|s| s.code()).unwrap_or(0)
}

/// Feature vector consumed by a moisture predictor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilFeatures {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub crop_code: u8,
    pub season_code: u8,
}

impl SoilFeatures {
    pub const LEN: usize = 5;

    pub fn to_array(&self) -> [f64; Self::LEN] {
        [
            self.temperature,
            self.humidity,
            self.rainfall,
            f64::from(self.crop_code),
            f64::from(self.season_code),
        ]
    }
}

impl From<&SoilPredictionRequest> for SoilFeatures {
    fn from(req: &SoilPredictionRequest) -> Self {
        SoilFeatures {
            temperature: req.temperature,
            humidity: req.humidity,
            rainfall: req.rainfall,
            crop_code: encode_crop_type(&req.crop_type),
            season_code: encode_season(&req.season),
        }
    }
}

/// User-facing moisture prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilPredictionResult {
    /// Predicted moisture in percent, rounded
    pub moisture_level: u8,
    pub irrigation_needed: bool,
    pub recommendation: String,
    pub next_check: NextCheck,
    /// Localized form of `next_check`
    pub next_check_text: String,
}

impl SoilPredictionResult {
    /// Derive the response fields from a raw model output
    pub fn from_moisture(moisture: f64, language: Language) -> Self {
        let next_check = next_check_for(moisture);
        Self {
            moisture_level: round_moisture(moisture),
            irrigation_needed: irrigation_needed(moisture),
            recommendation: recommendation_for(moisture, language),
            next_check,
            next_check_text: next_check.display(language).to_string(),
        }
    }
}

pub fn irrigation_needed(moisture: f64) -> bool {
    moisture < IRRIGATION_THRESHOLD
}

pub fn next_check_for(moisture: f64) -> NextCheck {
    if moisture < 30.0 {
        NextCheck::In12Hours
    } else if moisture < 60.0 {
        NextCheck::In24Hours
    } else {
        NextCheck::In48Hours
    }
}

/// Clamp to 0-100 and round to the nearest whole percent
pub fn round_moisture(moisture: f64) -> u8 {
    if moisture.is_nan() {
        return 0;
    }
    moisture.clamp(0.0, 100.0).round() as u8
}

pub fn recommendation_for(moisture: f64, language: Language) -> String {
    let needs_water = irrigation_needed(moisture);
    match language {
        Language::En => {
            let advice = if needs_water {
                "Irrigation recommended immediately. Water deeply."
            } else {
                "Soil moisture is adequate. Monitor daily."
            };
            format!("Soil moisture predicted at {:.1}%. {}", moisture, advice)
        }
        Language::Ta => {
            let advice = if needs_water {
                "உடனடியாக நீர்ப்பாசனம் செய்யவும். ஆழமாக நீர் பாய்ச்சவும்."
            } else {
                "மண் ஈரப்பதம் போதுமானது. தினமும் கண்காணிக்கவும்."
            };
            format!("மண் ஈரப்பதம் {:.1}% என கணிக்கப்பட்டுள்ளது. {}", moisture, advice)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(crop: &str, season: &str) -> SoilPredictionRequest {
        SoilPredictionRequest {
            temperature: 28.0,
            humidity: 70.0,
            rainfall: 12.5,
            crop_type: crop.to_string(),
            season: season.to_string(),
            location: None,
            language: Language::En,
        }
    }

    #[test]
    fn test_crop_encoding() {
        assert_eq!(encode_crop_type("rice"), 0);
        assert_eq!(encode_crop_type("Wheat"), 1);
        assert_eq!(encode_crop_type("CORN"), 2);
        assert_eq!(encode_crop_type("tomato"), 3);
        assert_eq!(encode_crop_type("cotton"), 4);
        assert_eq!(encode_crop_type("sugarcane"), 5);
        assert_eq!(encode_crop_type("banana"), 0);
        assert_eq!(encode_crop_type(""), 0);
    }

    #[test]
    fn test_season_encoding() {
        assert_eq!(encode_season("summer"), 0);
        assert_eq!(encode_season("Monsoon"), 1);
        assert_eq!(encode_season("winter"), 2);
        assert_eq!(encode_season("SPRING"), 3);
        assert_eq!(encode_season("autumn"), 0);
    }

    #[test]
    fn test_features_from_request() {
        let features = SoilFeatures::from(&request("cotton", "winter"));
        assert_eq!(features.to_array(), [28.0, 70.0, 12.5, 4.0, 2.0]);
    }

    #[test]
    fn test_next_check_thresholds() {
        assert_eq!(next_check_for(0.0), NextCheck::In12Hours);
        assert_eq!(next_check_for(29.9), NextCheck::In12Hours);
        assert_eq!(next_check_for(30.0), NextCheck::In24Hours);
        assert_eq!(next_check_for(59.9), NextCheck::In24Hours);
        assert_eq!(next_check_for(60.0), NextCheck::In48Hours);
        assert_eq!(next_check_for(100.0), NextCheck::In48Hours);
    }

    #[test]
    fn test_irrigation_threshold() {
        assert!(irrigation_needed(44.9));
        assert!(!irrigation_needed(45.0));
        assert!(!irrigation_needed(80.0));
    }

    #[test]
    fn test_round_moisture() {
        assert_eq!(round_moisture(44.6), 45);
        assert_eq!(round_moisture(-3.0), 0);
        assert_eq!(round_moisture(120.0), 100);
        assert_eq!(round_moisture(f64::NAN), 0);
    }

    #[test]
    fn test_recommendation_text() {
        assert_eq!(
            recommendation_for(32.26, Language::En),
            "Soil moisture predicted at 32.3%. Irrigation recommended immediately. Water deeply."
        );
        assert_eq!(
            recommendation_for(70.0, Language::En),
            "Soil moisture predicted at 70.0%. Soil moisture is adequate. Monitor daily."
        );
        assert!(recommendation_for(70.0, Language::Ta).contains("70.0%"));
    }

    #[test]
    fn test_result_from_moisture() {
        let result = SoilPredictionResult::from_moisture(72.4, Language::En);
        assert_eq!(result.moisture_level, 72);
        assert!(!result.irrigation_needed);
        assert_eq!(result.next_check, NextCheck::In48Hours);
        assert_eq!(result.next_check_text, "In 48 hours");
    }

    #[test]
    fn test_request_location_is_optional() {
        let req: SoilPredictionRequest = serde_json::from_str(
            r#"{"temperature": 30, "humidity": 60, "rainfall": 0,
                "crop_type": "rice", "season": "summer"}"#,
        )
        .unwrap();
        assert!(req.location.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_missing_field_is_rejected() {
        let result: Result<SoilPredictionRequest, _> = serde_json::from_str(
            r#"{"temperature": 30, "humidity": 60, "crop_type": "rice", "season": "summer"}"#,
        );
        assert!(result.is_err());
    }
}
