pub mod embed_dataset;
pub mod ingest;
pub mod scan;
pub mod search;
