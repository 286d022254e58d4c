pub mod record_reader;

pub use record_reader::{ColumnMapping, ParsedFile, ParsedRow, RecordReader};
