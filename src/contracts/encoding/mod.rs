pub mod encoder;

// Re-export everything for easy access
pub use encoder::encode_call_groups;
