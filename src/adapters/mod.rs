// Adapters layer: concrete readers and writers for external formats.

pub mod csv_writer;
pub mod json_reader;

pub use csv_writer::CsvBookWriter;
pub use json_reader::JsonBookReader;
