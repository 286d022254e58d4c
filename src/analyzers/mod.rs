pub mod extrema_finder;

pub use extrema_finder::ExtremaFinder;
