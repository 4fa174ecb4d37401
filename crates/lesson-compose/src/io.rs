//! Template, document and record I/O

use crate::schedule::{ScheduleRecord, ScheduleResponse};
use crate::tree::Document;
use crate::types::*;
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};

/// Load a template document
pub async fn load_template(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    if !tokio::fs::try_exists(&path).await? {
        return Err(ComposeError::TemplateNotFound(path));
    }
    let bytes = tokio::fs::read(&path).await?;
    let doc =
        tokio::task::spawn_blocking(move || serde_json::from_slice::<Document>(&bytes)).await??;
    Ok(doc)
}

/// Save the assembled document
pub async fn save_document(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || serde_json::to_vec_pretty(&doc)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Load one schedule record, either a raw API response (with the group
/// name attached) or a bare record.
pub async fn load_record(path: impl AsRef<Path>) -> Result<ScheduleRecord> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ComposeError::Record(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        ComposeError::Record(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    if value.get("response").is_some() {
        ScheduleResponse::from_json(&bytes)
    } else {
        serde_json::from_value(value).map_err(|e| {
            ComposeError::Record(format!("Invalid record in {}: {}", path.display(), e))
        })
    }
}

/// Lazily load records from files, one at a time, in the given order.
/// Load failures name the group after the file stem (`<group>.json`).
pub fn record_stream(paths: Vec<PathBuf>) -> impl Stream<Item = Result<ScheduleRecord>> {
    futures::stream::iter(paths).then(|path| async move {
        load_record(&path).await.map_err(|e| ComposeError::RecordLoad {
            group: path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            reason: e.to_string(),
        })
    })
}
