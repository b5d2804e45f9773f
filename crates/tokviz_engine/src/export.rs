use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokviz_core::{ExportRequest, Token};
use tokviz_logging::{tokviz_debug, tokviz_info};

use crate::persist::{AtomicFileWriter, PersistError};

/// File name used by the Export action.
pub const DEFAULT_EXPORT_FILENAME: &str = "tokenizer-output.json";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

/// The exported JSON document. Field order and key names are part of the
/// file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub text: String,
    pub model: String,
    pub tokens: Vec<Token>,
    pub stats: ExportStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    pub token_count: usize,
    pub char_count: usize,
}

impl ExportDocument {
    pub fn from_request(request: &ExportRequest) -> Self {
        Self {
            text: request.text.clone(),
            model: request.model.clone(),
            tokens: request.tokens.as_slice().to_vec(),
            stats: ExportStats {
                token_count: request.tokens.len(),
                char_count: request.text.chars().count(),
            },
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub token_count: usize,
    pub bytes_written: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Writes the export document for `request` into `output_dir`.
pub fn write_export(
    output_dir: &Path,
    request: &ExportRequest,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let document = ExportDocument::from_request(request);
    let json = document.to_json_pretty()?;
    tokviz_debug!(
        "export document: {} tokens, {} bytes",
        document.stats.token_count,
        json.len()
    );

    let writer = AtomicFileWriter::new(output_dir);
    let output_path = writer.write(&options.filename, &json)?;
    tokviz_info!(
        "exported {} tokens to {}",
        document.stats.token_count,
        output_path.display()
    );

    Ok(ExportSummary {
        output_path,
        token_count: document.stats.token_count,
        bytes_written: json.len(),
    })
}
