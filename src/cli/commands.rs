use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roomsearch",
    about = "Search room photos by description or example image"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a labeled image tree, embed every image, write the dataset CSV
    BuildDataset {
        /// Root directory holding one subdirectory per room category
        root: PathBuf,
        /// Output CSV path
        #[arg(long, default_value = "house_dataset.csv")]
        out: PathBuf,
        /// Category subdirectories to scan, in order (defaults to the house room set)
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Upload embedded records from a dataset CSV into the vector index
    Ingest {
        /// Dataset CSV produced by build-dataset
        #[arg(long, default_value = "house_dataset.csv")]
        dataset: PathBuf,
        /// Vectors per upload call (defaults to ROOMSEARCH_BATCH_SIZE)
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Search by natural-language description
    SearchText {
        /// Room description, e.g. "modern kitchen with an island"
        query: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Search by example image (local path, s3:// locator, or URL)
    SearchImage {
        /// Query image
        image: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}
