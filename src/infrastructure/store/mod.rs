pub mod s3vectors;
