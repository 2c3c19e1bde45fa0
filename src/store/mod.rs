pub mod lines;
pub mod text_file_store;
