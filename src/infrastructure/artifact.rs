use crate::domain::entities::image_record::{EmbeddedRecord, ImageRecord};
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of the dataset CSV. The embedding travels as a JSON float array;
/// an empty field marks a record whose embedding failed.
#[derive(Serialize, Deserialize)]
struct DatasetRow {
    id: String,
    room_type: String,
    filename: String,
    img_full_path: String,
    embedding_img: String,
}

pub fn write_dataset(path: &Path, records: &[EmbeddedRecord]) -> Result<(), DomainError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| DomainError::Artifact(format!("failed to create {}: {e}", path.display())))?;
    for record in records {
        let embedding_img = match &record.embedding {
            Some(vector) => serde_json::to_string(vector).map_err(|e| {
                DomainError::Artifact(format!(
                    "failed to serialize embedding for {}: {e}",
                    record.record.id
                ))
            })?,
            None => String::new(),
        };
        writer
            .serialize(DatasetRow {
                id: record.record.id.clone(),
                room_type: record.record.room_type.clone(),
                filename: record.record.filename.clone(),
                img_full_path: record.record.img_full_path.clone(),
                embedding_img,
            })
            .map_err(|e| {
                DomainError::Artifact(format!("failed to write row {}: {e}", record.record.id))
            })?;
    }
    writer
        .flush()
        .map_err(|e| DomainError::Artifact(format!("failed to flush {}: {e}", path.display())))
}

pub fn read_dataset(path: &Path) -> Result<Vec<EmbeddedRecord>, DomainError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DomainError::Artifact(format!("failed to open {}: {e}", path.display())))?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: DatasetRow = row
            .map_err(|e| DomainError::Artifact(format!("malformed row in {}: {e}", path.display())))?;
        let embedding = if row.embedding_img.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&row.embedding_img).map_err(|e| {
                DomainError::Artifact(format!("malformed embedding for {}: {e}", row.id))
            })?)
        };
        records.push(EmbeddedRecord::new(
            ImageRecord {
                id: row.id,
                room_type: row.room_type,
                filename: row.filename,
                img_full_path: row.img_full_path,
            },
            embedding,
        ));
    }
    Ok(records)
}
