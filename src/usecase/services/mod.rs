pub mod import_service;
pub mod reorder_service;
pub mod transform_service;
