//! Batched EVM contract reads through the on-chain Multicall3 aggregator.
//!
//! Many independent read calls are encoded into one flat call list, dispatched
//! in a single `eth_call` round-trip against the aggregator contract, and the
//! combined return data is fanned back out into per-contract, per-method typed
//! results. Tolerant mode reports success per call without aborting the batch;
//! strict mode promises no partial results.
//!
//! ```no_run
//! use alloy::dyn_abi::DynSolValue;
//! use alloy::primitives::address;
//! use evm_multicall::{
//!     CallInvocation, CallOptions, ContractCallContext, FunctionDescriptor, Multicall,
//! };
//!
//! # async fn demo() -> Result<(), evm_multicall::MulticallError> {
//! let multicall = Multicall::builder()
//!     .endpoint("https://eth.llamarpc.com")
//!     .allow_failure(true)
//!     .build()?;
//!
//! let usdc = ContractCallContext {
//!     reference: "usdc".to_string(),
//!     contract_address: address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
//!     abi: vec![FunctionDescriptor::new("balanceOf", &["address"], &["uint256"])],
//!     calls: vec![CallInvocation::new(
//!         "treasury-balance",
//!         "balanceOf",
//!         vec![DynSolValue::Address(address!(
//!             "d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
//!         ))],
//!     )],
//! };
//!
//! let results = multicall.call(&[usdc], &CallOptions::default()).await?;
//! println!("block {}: {:?}", results.block_number, results.get("usdc"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod models;
pub mod multicall;
pub mod results;

// Re-export the public surface for convenience
pub use config::MulticallSettings;
pub use contracts::execution::{DispatchOptions, ExecutionBackend};
pub use error::MulticallError;
pub use models::*;
pub use multicall::{Multicall, MulticallBuilder};
