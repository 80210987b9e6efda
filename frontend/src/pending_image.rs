use gloo_file::ObjectUrl;

/// An image staged for submission, with an object URL for the preview.
/// The URL is revoked when the last clone is dropped.
#[derive(Clone)]
pub struct PendingImage {
    name: String,
    blob: web_sys::Blob,
    preview: ObjectUrl,
}

impl PendingImage {
    pub fn from_file(file: web_sys::File) -> Self {
        let name = file.name();
        Self::from_blob(name, file.into())
    }

    pub fn from_blob(name: String, blob: web_sys::Blob) -> Self {
        let preview = ObjectUrl::from(gloo_file::Blob::from(blob.clone()));
        Self {
            name,
            blob,
            preview,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blob(&self) -> &web_sys::Blob {
        &self.blob
    }

    pub fn preview_url(&self) -> String {
        self.preview.to_string()
    }
}

pub fn is_image(file: &web_sys::File) -> bool {
    file.type_().starts_with("image/")
}
