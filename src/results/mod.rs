pub mod builder;
pub mod decoder;

// Re-export everything for easy access
pub use builder::group_raw_results;
pub use decoder::decode_grouped_results;
