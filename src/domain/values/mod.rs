pub mod embedding_input;
