pub mod folder_aggregator;

pub use folder_aggregator::FolderAggregator;
