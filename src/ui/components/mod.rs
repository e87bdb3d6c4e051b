pub mod dataset_table;
pub mod operation_palette;
