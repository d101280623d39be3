pub mod extractor;
mod table_response;
