pub mod csv_file;
pub mod in_memory;
pub mod seed;
