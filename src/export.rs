use crate::error::{AssessorError, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Saved report plus enough provenance to tell which inputs produced it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope<'a, T: Serialize> {
    pub version: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_sha256: Option<String>,
    pub responses_sha256: String,
    pub report: &'a T,
}

impl<'a, T: Serialize> ExportEnvelope<'a, T> {
    pub fn new(document: Option<&[u8]>, responses: &[u8], report: &'a T) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            document_sha256: document.map(sha256_hex),
            responses_sha256: sha256_hex(responses),
            report,
        }
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

/// Writes `<dir>/<kind>-<UTC stamp>.json`, creating `dir` if needed.
pub fn write_export<T: Serialize>(
    dir: &Path,
    kind: &str,
    envelope: &ExportEnvelope<'_, T>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(AssessorError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let out_path = dir.join(format!("{kind}-{stamp}.json"));
    let json = serde_json::to_string_pretty(envelope)?;
    fs::write(&out_path, json).map_err(AssessorError::Io)?;
    Ok(out_path)
}
