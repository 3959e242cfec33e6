//! File Uploads
//!
//! Browser `File` → bytes → multipart form with a single `file` field.

use reqwest::multipart::{Form, Part};
use wasm_bindgen_futures::JsFuture;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let mut part = Part::bytes(self.bytes).file_name(self.name);
        if !self.mime.is_empty() {
            part = part.mime_str(&self.mime)?;
        }
        Ok(Form::new().part("file", part))
    }
}

/// Extension check, case-insensitive
pub fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// Read a picked or dropped file fully into memory
pub async fn read_file(file: &web_sys::File) -> Result<FileUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileUpload {
        name: file.name(),
        mime: file.type_(),
        bytes,
    })
}
