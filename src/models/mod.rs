pub mod call;
pub mod result;

// Re-export everything for easy access
pub use call::*;
pub use result::*;
