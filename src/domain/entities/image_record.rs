use crate::domain::entities::vector_record::VectorRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One image of the labeled dataset, as discovered by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub room_type: String,
    pub filename: String,
    pub img_full_path: String,
}

/// An image record plus the result of its embedding pass. `None` marks a
/// record whose embedding failed; its position in the dataset is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedRecord {
    #[serde(flatten)]
    pub record: ImageRecord,
    pub embedding: Option<Vec<f32>>,
}

impl EmbeddedRecord {
    pub fn new(record: ImageRecord, embedding: Option<Vec<f32>>) -> Self {
        Self { record, embedding }
    }

    /// Upload form of this record, or `None` when the embedding is absent.
    pub fn vector_record(&self) -> Option<VectorRecord> {
        let vector = self.embedding.as_ref()?.clone();
        let mut metadata = HashMap::new();
        metadata.insert("room_type".to_string(), self.record.room_type.clone());
        metadata.insert("filename".to_string(), self.record.filename.clone());
        metadata.insert(
            "img_full_path".to_string(),
            self.record.img_full_path.clone(),
        );
        Some(VectorRecord {
            key: self.record.id.clone(),
            vector,
            metadata,
        })
    }
}
