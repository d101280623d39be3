pub mod table;
pub mod table_response;
