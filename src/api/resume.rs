//! Resume Template Endpoints

use super::{segment, ApiClient, FileUpload};
use crate::error::ApiError;
use crate::models::{Ack, ResumeTemplate, TemplateCreated};

/// Which converter an uploaded template goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateUpload {
    Docx,
    AiPdf,
}

impl TemplateUpload {
    pub fn label(&self) -> &'static str {
        match self {
            TemplateUpload::Docx => "DOCX",
            TemplateUpload::AiPdf => "PDF",
        }
    }

    pub fn accept(&self) -> &'static str {
        match self {
            TemplateUpload::Docx => ".docx",
            TemplateUpload::AiPdf => ".pdf",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            TemplateUpload::Docx => "/resume/upload-docx",
            TemplateUpload::AiPdf => "/resume/upload-ai-pdf",
        }
    }
}

impl ApiClient {
    pub async fn upload_template(&self, kind: TemplateUpload, file: FileUpload) -> Result<TemplateCreated, ApiError> {
        self.post_file(kind.path(), file).await
    }

    pub async fn list_templates(&self) -> Result<Vec<ResumeTemplate>, ApiError> {
        self.get("/resume/list").await
    }

    pub async fn delete_template(&self, template_id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("/resume/{}", segment(template_id))).await
    }
}
