pub mod multicall3;
pub mod schema;

// Re-export everything for easy access
pub use schema::SchemaTable;
