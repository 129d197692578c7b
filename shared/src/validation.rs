//! Validation helpers shared by the server and the WASM bindings

// ============================================================================
// Request Validations
// ============================================================================

/// Validate an image path supplied by a client.
///
/// Empty or blank paths are allowed through; they simply do not exist.
pub fn validate_image_path(path: &str) -> Result<(), &'static str> {
    if path.contains('\0') {
        return Err("Image path must not contain NUL bytes");
    }
    Ok(())
}

/// Validate that a numeric reading is a finite number
pub fn validate_finite(value: f64) -> Result<(), &'static str> {
    if value.is_finite() {
        Ok(())
    } else {
        Err("Value must be a finite number")
    }
}

/// Validate relative humidity is a percentage
pub fn validate_humidity(humidity: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

// ============================================================================
// Model Output Validations
// ============================================================================

/// Validate a classifier confidence lies in [0, 1]
pub fn validate_confidence(confidence: f64) -> Result<(), &'static str> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err("Confidence must be between 0 and 1");
    }
    Ok(())
}

/// Validate a moisture level is a percentage
pub fn validate_moisture_level(moisture: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&moisture) {
        return Err("Moisture level must be between 0 and 100%");
    }
    Ok(())
}
