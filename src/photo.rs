//! アップロードする写真の読み込み
//!
//! Webのファイル選択（`accept="image/*"`）と同じく、画像形式の拡張子だけを受け付ける。

use crate::error::{CheckerError, Result};
use image::ImageFormat;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Photo {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Photo {
    pub fn load(path: &Path) -> Result<Self> {
        let mime_type = check_image_path(path)?;
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo".to_string());

        tracing::debug!(path = %path.display(), size = bytes.len(), mime_type, "loaded photo");

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// パスが存在する画像ファイルか確認し、MIMEタイプを返す
pub fn check_image_path(path: &Path) -> Result<&'static str> {
    if !path.is_file() {
        return Err(CheckerError::FileNotFound(path.display().to_string()));
    }

    image_mime_type(path).ok_or_else(|| CheckerError::NotAnImage(path.display().to_string()))
}

/// 拡張子から画像のMIMEタイプを判定（大文字小文字は区別しない）
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    let format = ImageFormat::from_path(path).ok()?;
    let mime = format.to_mime_type();
    mime.starts_with("image/").then_some(mime)
}
