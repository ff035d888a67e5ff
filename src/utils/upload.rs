use crate::error::{Error, Result};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Copy)]
pub enum UploadKind {
    ProfilePicture,
    Resume,
    CompanyLogo,
    CompanyCover,
}

impl UploadKind {
    fn subdir(&self) -> &'static str {
        match self {
            Self::ProfilePicture => "profile_pictures",
            Self::Resume => "resumes",
            Self::CompanyLogo => "logos",
            Self::CompanyCover => "covers",
        }
    }

    fn allowed_exts(&self) -> &'static [&'static str] {
        match self {
            Self::Resume => &["pdf", "doc", "docx", "txt", "rtf"],
            _ => &["jpg", "jpeg", "png", "webp"],
        }
    }
}

/// Writes an uploaded file under the uploads dir with a UUID name so two
/// uploads with the same original filename can never clobber each other.
/// Returns the public URL path the row should store.
pub async fn save_upload(kind: UploadKind, filename: &str, data: &bytes::Bytes) -> Result<String> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    if !kind.allowed_exts().contains(&ext.as_str()) {
        return Err(Error::BadRequest(format!(
            "File type .{} is not allowed",
            ext
        )));
    }

    if ext == "pdf" && !data.starts_with(b"%PDF") {
        return Err(Error::BadRequest("Invalid PDF file content".into()));
    }
    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }

    let config = crate::config::get_config();
    let dir = format!("{}/{}", config.uploads_dir, kind.subdir());
    fs::create_dir_all(&dir)
        .await
        .map_err(|e| Error::Internal(format!("Failed to create upload dir: {}", e)))?;

    let safe_filename = format!("{}.{}", uuid::Uuid::new_v4(), ext);
    let file_path = format!("{}/{}", dir, safe_filename);
    fs::write(&file_path, data).await.map_err(|e| {
        tracing::error!("Failed to write upload {}: {}", file_path, e);
        Error::Internal(format!("Failed to save file: {}", e))
    })?;

    Ok(format!("/uploads/{}/{}", kind.subdir(), safe_filename))
}
