use crate::services::InvalidInput;
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

pub const STATIC_ASSETS_FOLDER: &str = "static-assets";

/// The seam an object-storage client implements. Uploads are keyed by
/// (folder, file name); `url` must return the public address a stored
/// object is served under.
pub trait ObjectStore: Send + Sync {
    fn put(&self, folder: &str, file_name: &str, bytes: &[u8], content_type: &str) -> Result<()>;
    fn delete(&self, folder: &str, file_name: &str) -> Result<()>;
    fn url(&self, folder: &str, file_name: &str) -> String;
}

/// Filesystem-backed store serving objects from a configured public
/// base URL. Stands in for a bucket in development and tests.
pub struct FsStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl ObjectStore for FsStore {
    fn put(&self, folder: &str, file_name: &str, bytes: &[u8], _content_type: &str) -> Result<()> {
        let dir = self.root.join(folder);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join(file_name), bytes)?;
        Ok(())
    }

    fn delete(&self, folder: &str, file_name: &str) -> Result<()> {
        let path = self.root.join(folder).join(file_name);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    fn url(&self, folder: &str, file_name: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, folder, file_name)
    }
}

/// Splits a `data:<mime>;base64,<payload>` URI into its MIME type and
/// decoded bytes.
pub fn parse_data_uri(input: &str) -> Result<(String, Vec<u8>)> {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^data:([\w.+-]+/[\w.+-]+);base64,(.+)$").unwrap());

    let captures = RE
        .captures(input)
        .ok_or_else(|| InvalidInput("expected a base64 data URI".to_string()))?;

    let mime = captures[1].to_string();
    let bytes = STANDARD
        .decode(&captures[2])
        .map_err(|_| InvalidInput("invalid base64 payload".to_string()))?;
    Ok((mime, bytes))
}

/// Content-addressed object name: SHA-256 of the bytes plus a
/// MIME-derived extension. Re-uploading identical content maps to the
/// same object.
pub fn object_file_name(bytes: &[u8], mime: &str) -> String {
    let digest = Sha256::digest(bytes);
    format!("{}.{}", hex::encode(digest), extension_for_mime(mime))
}

pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        "application/pdf" => "pdf",
        "text/plain" => "txt",
        "application/json" => "json",
        "text/html" => "html",
        "text/css" => "css",
        "application/javascript" => "js",
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "audio/mpeg" => "mp3",
        "audio/wav" => "wav",
        other => mime_guess::get_mime_extensions_str(other)
            .and_then(|exts| exts.first())
            .copied()
            .unwrap_or("bin"),
    }
}
