use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::core::persistence::storage_path::uploads_dir;

/// Upload rejected before touching disk. Surfaced as a 400 at the API
/// boundary.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UnsupportedUpload(pub String);

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Store one uploaded image under the data dir and return its public path.
/// The stored name is a fresh uuid; the client name only contributes the
/// extension.
pub async fn store_image(original_name: &str, bytes: &[u8]) -> Result<Value> {
    store_image_in(&uploads_dir(), original_name, bytes).await
}

async fn store_image_in(dir: &Path, original_name: &str, bytes: &[u8]) -> Result<Value> {
    if bytes.is_empty() {
        return Err(UnsupportedUpload("Uploaded file is empty".into()).into());
    }

    let ext = original_name
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(UnsupportedUpload(format!(
            "Unsupported file extension: {ext:?}"
        ))
        .into());
    }

    tokio::fs::create_dir_all(dir)
        .await
        .context("Failed to create uploads directory")?;

    let file_name = format!("{}.{ext}", Uuid::new_v4());
    let path = dir.join(&file_name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write upload {path:?}"))?;

    info!(file = %file_name, size = bytes.len(), "Stored uploaded image");

    Ok(serde_json::json!({
        "url": format!("/uploads/{file_name}"),
        "size": bytes.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_uploads_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("showroom-test-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn rejects_disallowed_extension() {
        let err = store_image_in(&temp_uploads_dir(), "payload.exe", b"MZ")
            .await
            .expect_err("exe must be rejected");
        assert!(err.downcast_ref::<UnsupportedUpload>().is_some());
    }

    #[tokio::test]
    async fn rejects_empty_body() {
        let err = store_image_in(&temp_uploads_dir(), "photo.jpg", b"")
            .await
            .expect_err("empty body must be rejected");
        assert!(err.downcast_ref::<UnsupportedUpload>().is_some());
    }

    #[tokio::test]
    async fn stores_image_and_returns_public_path() {
        let tmp = temp_uploads_dir();

        let response = store_image_in(&tmp, "car.PNG", b"not-really-a-png")
            .await
            .expect("upload should succeed");

        let url = response.get("url").and_then(|v| v.as_str()).unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        let stored = tmp.join(url.trim_start_matches("/uploads/"));
        assert_eq!(std::fs::read(stored).unwrap(), b"not-really-a-png");

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
