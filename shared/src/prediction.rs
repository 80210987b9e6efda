use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Multipart field name the inference service reads the image from.
pub const UPLOAD_FIELD: &str = "file";

/// Response body of a successful `POST /predict/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_class: String,
    pub confidence: f64,
    pub affected_area_percent: f64,
    pub stage: String,
    pub treatments: Vec<String>,
    pub segmentation_mask_base64: String,
    pub overlay_image_base64: String,
    /// Segmentation threshold picked by the service, null when the
    /// fallback segmenter ran.
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Malformed(String),
}

impl PredictionResult {
    pub fn from_json(body: &str) -> Result<Self, SubmissionError> {
        let result: PredictionResult =
            serde_json::from_str(body).map_err(|e| SubmissionError::Malformed(e.to_string()))?;
        result.validate()?;
        Ok(result)
    }

    fn validate(&self) -> Result<(), SubmissionError> {
        check_percent("confidence", self.confidence)?;
        check_percent("affected_area_percent", self.affected_area_percent)?;
        check_image("segmentation_mask_base64", &self.segmentation_mask_base64)?;
        check_image("overlay_image_base64", &self.overlay_image_base64)?;
        Ok(())
    }

    pub fn mask_src(&self) -> String {
        png_data_url(&self.segmentation_mask_base64)
    }

    pub fn overlay_src(&self) -> String {
        png_data_url(&self.overlay_image_base64)
    }
}

pub fn png_data_url(payload: &str) -> String {
    format!("data:image/png;base64,{}", payload)
}

fn check_percent(field: &str, value: f64) -> Result<(), SubmissionError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(SubmissionError::Malformed(format!(
            "{} out of range: {}",
            field, value
        )))
    }
}

fn check_image(field: &str, payload: &str) -> Result<(), SubmissionError> {
    match STANDARD.decode(payload) {
        Ok(bytes) if !bytes.is_empty() => Ok(()),
        Ok(_) => Err(SubmissionError::Malformed(format!("{} is empty", field))),
        Err(e) => Err(SubmissionError::Malformed(format!("{}: {}", field, e))),
    }
}

/// Turns a finished HTTP exchange into a result or a user-facing failure.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<PredictionResult, SubmissionError> {
    if (200..300).contains(&status) {
        return PredictionResult::from_json(body);
    }

    let message = detail_message(body).unwrap_or_else(|| {
        format!("Server error: {} {}", status, status_text)
            .trim_end()
            .to_string()
    });
    Err(SubmissionError::Server { status, message })
}

// FastAPI reports errors as {"detail": "..."} or {"detail": [{"msg": "..."}]}.
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_B64: &str = "iVBORw0KGgo=";

    fn body(confidence: f64) -> String {
        serde_json::json!({
            "predicted_class": "Eczema",
            "confidence": confidence,
            "threshold": null,
            "affected_area_percent": 12.4,
            "stage": "Stage 1",
            "treatments": ["Moisturize", "Avoid irritants"],
            "segmentation_mask_base64": PNG_B64,
            "overlay_image_base64": PNG_B64,
        })
        .to_string()
    }

    #[test]
    fn parses_success_body() {
        let result = interpret_response(200, "OK", &body(87.25)).unwrap();
        assert_eq!(result.predicted_class, "Eczema");
        assert_eq!(result.treatments, vec!["Moisturize", "Avoid irritants"]);
        assert_eq!(result.threshold, None);
        assert_eq!(result.mask_src(), format!("data:image/png;base64,{}", PNG_B64));
    }

    #[test]
    fn threshold_is_optional() {
        let mut value: serde_json::Value = serde_json::from_str(&body(50.0)).unwrap();
        value.as_object_mut().unwrap().remove("threshold");
        assert!(PredictionResult::from_json(&value.to_string()).is_ok());

        value["threshold"] = serde_json::json!(0.45);
        let result = PredictionResult::from_json(&value.to_string()).unwrap();
        assert_eq!(result.threshold, Some(0.45));
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = interpret_response(200, "OK", r#"{"predicted_class":"Eczema"}"#).unwrap_err();
        assert!(matches!(err, SubmissionError::Malformed(_)));
    }

    #[test]
    fn non_json_success_is_malformed() {
        let err = interpret_response(200, "OK", "<html>oops</html>").unwrap_err();
        assert!(matches!(err, SubmissionError::Malformed(_)));
    }

    #[test]
    fn bad_image_payload_is_malformed() {
        let mut value: serde_json::Value = serde_json::from_str(&body(50.0)).unwrap();
        value["overlay_image_base64"] = serde_json::json!("not base64!");
        let err = PredictionResult::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("overlay_image_base64"));
    }

    #[test]
    fn out_of_range_confidence_is_malformed() {
        let err = PredictionResult::from_json(&body(140.0)).unwrap_err();
        assert!(matches!(err, SubmissionError::Malformed(_)));
    }

    #[test]
    fn server_error_uses_detail() {
        let err = interpret_response(400, "Bad Request", r#"{"detail":"Invalid image"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Server {
                status: 400,
                message: "Invalid image".into()
            }
        );
    }

    #[test]
    fn server_error_joins_validation_messages() {
        let body = r#"{"detail":[{"loc":["body","file"],"msg":"field required"}]}"#;
        let err = interpret_response(422, "Unprocessable Entity", body).unwrap_err();
        assert_eq!(err.to_string(), "field required");
    }

    #[test]
    fn server_error_falls_back_to_status() {
        let err = interpret_response(500, "Internal Server Error", "boom").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500 Internal Server Error");

        let err = interpret_response(502, "", "").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 502");
    }
}
