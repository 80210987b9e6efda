use gloo_net::http::Request;
use shared::prediction::{UPLOAD_FIELD, interpret_response};
use shared::{PredictionResult, SubmissionError};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::pending_image::PendingImage;

/// Posts the image as a single-field multipart form and interprets the reply.
pub async fn submit_prediction(
    endpoint: &str,
    image: &PendingImage,
) -> Result<PredictionResult, SubmissionError> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, image.blob(), image.name())
        .map_err(js_error)?;

    log::info!("Submitting {} to {}", image.name(), endpoint);

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| SubmissionError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| SubmissionError::Malformed(e.to_string()))?;

    log::debug!("Prediction response: {} ({} bytes)", status, body.len());
    interpret_response(status, &status_text, &body)
}

fn js_error(value: JsValue) -> SubmissionError {
    gloo_console::error!(value.clone());
    SubmissionError::Network(format!("{:?}", value))
}
