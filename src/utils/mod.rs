pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{list_matching_files, FileFilter, Period};
pub use progress::ProgressReporter;
