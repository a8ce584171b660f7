mod error_mapper;

pub use error_mapper::map_document_load_error;
