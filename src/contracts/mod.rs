pub mod abi;
pub mod encoding;
pub mod execution;

// Re-export key types for convenience
pub use abi::*;
pub use encoding::*;
pub use execution::*;
