use actix_files::{Files, NamedFile};
use actix_multipart::Multipart;
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, guard, web};
use futures::TryStreamExt;
use log::{info, warn};
use reqwest::multipart::{Form, Part};
use serde_json::json;
use shared::prediction::UPLOAD_FIELD;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::RelayError;

/// Shared by every worker: the upstream client and where to send uploads.
pub struct RelayState {
    pub client: reqwest::Client,
    pub inference_url: String,
    pub max_upload_bytes: usize,
}

struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    let index = frontend_dir.join("index.html");
    cfg.service(web::resource("/health").route(web::get().to(health)))
        // Other methods on /predict/ fall through to the SPA.
        .service(
            web::resource("/predict/")
                .guard(guard::Post())
                .route(web::post().to(predict)),
        )
        .service(
            Files::new("/", frontend_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move { spa_fallback(req, &index).await }
                })),
        );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Client-side routes have no extension; anything else that is missing is a real 404.
async fn spa_fallback(
    req: ServiceRequest,
    index: &Path,
) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();
    if Path::new(req.path()).extension().is_some() {
        return Ok(ServiceResponse::new(req, HttpResponse::NotFound().finish()));
    }
    let file = NamedFile::open_async(index).await?;
    let res = file.into_response(&req);
    Ok(ServiceResponse::new(req, res))
}

async fn predict(
    state: web::Data<RelayState>,
    mut payload: Multipart,
) -> Result<HttpResponse, RelayError> {
    let request_id = Uuid::new_v4();
    let upload = read_upload(&mut payload, state.max_upload_bytes).await?;
    let format = image::guess_format(&upload.bytes).map_err(|_| RelayError::NotAnImage)?;

    info!(
        "[{}] relaying {} ({:?}, {} bytes) to {}",
        request_id,
        upload.file_name,
        format,
        upload.bytes.len(),
        state.inference_url
    );

    let part = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(format.to_mime_type())
        .map_err(|e| RelayError::Multipart(e.to_string()))?;
    let form = Form::new().part(UPLOAD_FIELD, part);

    let response = state
        .client
        .post(&state.inference_url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            warn!("[{}] inference service unreachable: {}", request_id, e);
            RelayError::Unreachable(e.to_string())
        })?;

    let status = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| RelayError::BadUpstream(e.to_string()))?;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let body = response
        .bytes()
        .await
        .map_err(|e| RelayError::BadUpstream(e.to_string()))?;

    info!("[{}] upstream answered {}", request_id, status);
    Ok(HttpResponse::build(status)
        .content_type(content_type)
        .body(body))
}

/// Collects the `file` field, skipping any others.
async fn read_upload(payload: &mut Multipart, limit: usize) -> Result<Upload, RelayError> {
    let mut upload = None;

    while let Some(mut field) = payload.try_next().await? {
        let wanted = upload.is_none() && field.name() == Some(UPLOAD_FIELD);
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if !wanted {
                continue;
            }
            if bytes.len() + chunk.len() > limit {
                return Err(RelayError::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        if wanted {
            upload = Some(Upload { file_name, bytes });
        }
    }

    let upload = upload.ok_or(RelayError::MissingFile(UPLOAD_FIELD))?;
    if upload.bytes.is_empty() {
        return Err(RelayError::EmptyFile);
    }
    Ok(upload)
}
