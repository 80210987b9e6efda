//! Browser camera access.
//!
//! A `CameraSession` stops every track of its stream when dropped, so
//! whoever owns it decides how long the camera stays on.

use std::cell::Cell;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

const SNAPSHOT_TYPE: &str = "image/jpeg";

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("camera access is not supported in this browser")]
    Unsupported,
    #[error("{0}")]
    Browser(String),
    #[error("the camera has not produced a frame yet")]
    NoFrame,
    #[error("could not encode the photo: {0}")]
    Encode(String),
}

impl From<JsValue> for CameraError {
    fn from(value: JsValue) -> Self {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return CameraError::Browser(format!(
                "{}: {}",
                String::from(error.name()),
                String::from(error.message())
            ));
        }
        CameraError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub struct CameraSession {
    stream: MediaStream,
    attached: Cell<bool>,
}

impl CameraSession {
    /// Asks for video permission and opens a stream.
    pub async fn open() -> Result<Self, CameraError> {
        let window = web_sys::window().ok_or(CameraError::Unsupported)?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| CameraError::Unsupported)?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);

        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;

        log::info!(
            "Camera stream opened with {} track(s)",
            stream.get_tracks().length()
        );
        Ok(Self {
            stream,
            attached: Cell::new(false),
        })
    }

    /// Shows the live stream in `video`. Only the first call has an effect.
    pub fn attach(&self, video: &HtmlVideoElement) {
        if self.attached.replace(true) {
            return;
        }
        video.set_src_object(Some(&self.stream));
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Camera preview did not start: {}", CameraError::from(e));
                }
            }),
            Err(e) => log::warn!("Could not start camera preview: {}", CameraError::from(e)),
        }
    }

    fn stop(&self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stop();
        log::debug!("Camera stream released");
    }
}

/// Draws the current frame of `video` and encodes it as a JPEG blob.
pub fn snapshot(video: &HtmlVideoElement) -> Result<web_sys::Blob, CameraError> {
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return Err(CameraError::NoFrame);
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CameraError::Unsupported)?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| CameraError::Unsupported)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(CameraError::Unsupported)?
        .dyn_into()
        .map_err(|_| CameraError::Unsupported)?;
    context.draw_image_with_html_video_element_and_dw_and_dh(
        video,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )?;

    let data_url = canvas.to_data_url_with_type(SNAPSHOT_TYPE)?;
    let (_, encoded) = data_url
        .split_once(',')
        .ok_or_else(|| CameraError::Encode("unexpected data URL".into()))?;
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| CameraError::Encode(e.to_string()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(SNAPSHOT_TYPE);
    Ok(web_sys::Blob::new_with_u8_array_sequence_and_options(
        &parts, &options,
    )?)
}
