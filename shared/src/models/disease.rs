//! Crop disease identifiers

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of crop/condition identifiers the classifier can emit.
///
/// Order matches the output layer of the image model, so index `i` of a
/// score vector corresponds to `DiseaseLabel::ALL[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiseaseLabel {
    #[serde(rename = "Apple___Apple_scab")]
    AppleScab,
    #[serde(rename = "Apple___Black_rot")]
    AppleBlackRot,
    #[serde(rename = "Apple___Cedar_apple_rust")]
    AppleCedarRust,
    #[serde(rename = "Apple___healthy")]
    AppleHealthy,
    #[serde(rename = "Corn_(maize)___Cercospora_leaf_spot")]
    CornCercosporaLeafSpot,
    #[serde(rename = "Corn_(maize)___Common_rust")]
    CornCommonRust,
    #[serde(rename = "Corn_(maize)___healthy")]
    CornHealthy,
    #[serde(rename = "Grape___Black_rot")]
    GrapeBlackRot,
    #[serde(rename = "Grape___Esca_(Black_Measles)")]
    GrapeEsca,
    #[serde(rename = "Grape___healthy")]
    GrapeHealthy,
    #[serde(rename = "Potato___Early_blight")]
    PotatoEarlyBlight,
    #[serde(rename = "Potato___Late_blight")]
    PotatoLateBlight,
    #[serde(rename = "Potato___healthy")]
    PotatoHealthy,
    #[serde(rename = "Rice___Brown_spot")]
    RiceBrownSpot,
    #[serde(rename = "Rice___Leaf_blast")]
    RiceLeafBlast,
    #[serde(rename = "Rice___healthy")]
    RiceHealthy,
    #[serde(rename = "Tomato___Bacterial_spot")]
    TomatoBacterialSpot,
    #[serde(rename = "Tomato___Early_blight")]
    TomatoEarlyBlight,
    #[serde(rename = "Tomato___Late_blight")]
    TomatoLateBlight,
    #[serde(rename = "Tomato___healthy")]
    TomatoHealthy,
}

impl DiseaseLabel {
    pub const COUNT: usize = 20;

    pub const ALL: [DiseaseLabel; Self::COUNT] = [
        DiseaseLabel::AppleScab,
        DiseaseLabel::AppleBlackRot,
        DiseaseLabel::AppleCedarRust,
        DiseaseLabel::AppleHealthy,
        DiseaseLabel::CornCercosporaLeafSpot,
        DiseaseLabel::CornCommonRust,
        DiseaseLabel::CornHealthy,
        DiseaseLabel::GrapeBlackRot,
        DiseaseLabel::GrapeEsca,
        DiseaseLabel::GrapeHealthy,
        DiseaseLabel::PotatoEarlyBlight,
        DiseaseLabel::PotatoLateBlight,
        DiseaseLabel::PotatoHealthy,
        DiseaseLabel::RiceBrownSpot,
        DiseaseLabel::RiceLeafBlast,
        DiseaseLabel::RiceHealthy,
        DiseaseLabel::TomatoBacterialSpot,
        DiseaseLabel::TomatoEarlyBlight,
        DiseaseLabel::TomatoLateBlight,
        DiseaseLabel::TomatoHealthy,
    ];

    /// Canonical identifier string, e.g. `Tomato___Early_blight`
    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseLabel::AppleScab => "Apple___Apple_scab",
            DiseaseLabel::AppleBlackRot => "Apple___Black_rot",
            DiseaseLabel::AppleCedarRust => "Apple___Cedar_apple_rust",
            DiseaseLabel::AppleHealthy => "Apple___healthy",
            DiseaseLabel::CornCercosporaLeafSpot => "Corn_(maize)___Cercospora_leaf_spot",
            DiseaseLabel::CornCommonRust => "Corn_(maize)___Common_rust",
            DiseaseLabel::CornHealthy => "Corn_(maize)___healthy",
            DiseaseLabel::GrapeBlackRot => "Grape___Black_rot",
            DiseaseLabel::GrapeEsca => "Grape___Esca_(Black_Measles)",
            DiseaseLabel::GrapeHealthy => "Grape___healthy",
            DiseaseLabel::PotatoEarlyBlight => "Potato___Early_blight",
            DiseaseLabel::PotatoLateBlight => "Potato___Late_blight",
            DiseaseLabel::PotatoHealthy => "Potato___healthy",
            DiseaseLabel::RiceBrownSpot => "Rice___Brown_spot",
            DiseaseLabel::RiceLeafBlast => "Rice___Leaf_blast",
            DiseaseLabel::RiceHealthy => "Rice___healthy",
            DiseaseLabel::TomatoBacterialSpot => "Tomato___Bacterial_spot",
            DiseaseLabel::TomatoEarlyBlight => "Tomato___Early_blight",
            DiseaseLabel::TomatoLateBlight => "Tomato___Late_blight",
            DiseaseLabel::TomatoHealthy => "Tomato___healthy",
        }
    }

    /// Crop half of the identifier (text before `___`)
    pub fn crop(&self) -> &'static str {
        let id = self.as_str();
        id.split("___").next().unwrap_or(id)
    }

    pub fn is_healthy(&self) -> bool {
        self.as_str().ends_with("___healthy")
    }

    /// Position of this label in [`DiseaseLabel::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for DiseaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known disease identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown disease identifier: {0}")]
pub struct UnknownDiseaseLabel(pub String);

impl FromStr for DiseaseLabel {
    type Err = UnknownDiseaseLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiseaseLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownDiseaseLabel(s.to_string()))
    }
}

/// Filename keywords checked in order; the first hit wins.
const CROP_KEYWORDS: &[(&[&str], DiseaseLabel)] = &[
    (&["tomato"], DiseaseLabel::TomatoEarlyBlight),
    (&["potato"], DiseaseLabel::PotatoLateBlight),
    (&["rice"], DiseaseLabel::RiceBrownSpot),
    (&["corn", "maize"], DiseaseLabel::CornCommonRust),
    (&["apple"], DiseaseLabel::AppleScab),
];

/// Map a filename to a fixed label when it mentions a known crop.
///
/// Matching is case-insensitive substring membership.
pub fn label_for_filename(file_name: &str) -> Option<DiseaseLabel> {
    let lowered = file_name.to_lowercase();
    CROP_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, label)| *label)
}
