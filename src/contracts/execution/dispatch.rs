//! Aggregate-call plumbing shared by all execution backends.

use alloy::eips::BlockId;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy::sol_types::SolCall;
use tracing::info;

use crate::contracts::abi::multicall3;
use crate::contracts::execution::networks;
use crate::contracts::execution::traits::DispatchOptions;
use crate::error::{MulticallError, Result};
use crate::models::{AggregateContractResponse, EncodedCall, RawCallResult};

/// Explicit override wins; otherwise the fixed per-network table decides.
/// Fails before any aggregate dispatch when neither knows the chain.
pub(crate) fn resolve_aggregator(chain_id: u64, override_address: Option<Address>) -> Result<Address> {
    if let Some(address) = override_address {
        return Ok(address);
    }
    networks::aggregator_address(chain_id).ok_or(MulticallError::UnsupportedNetwork(chain_id))
}

/// Builds the calldata for the strict or tolerant aggregator entry point.
/// `requireSuccess` is always false on the tolerant path.
pub(crate) fn aggregate_calldata(calls: &[EncodedCall], options: DispatchOptions) -> Bytes {
    let calls: Vec<multicall3::Call> = calls
        .iter()
        .map(|call| multicall3::Call {
            target: call.target,
            callData: call.call_data.clone(),
        })
        .collect();

    if options.allow_failure {
        multicall3::tryBlockAndAggregateCall {
            requireSuccess: false,
            calls,
        }
        .abi_encode()
        .into()
    } else {
        multicall3::aggregateCall { calls }.abi_encode().into()
    }
}

/// Maps the aggregator's return data into the uniform backend response.
///
/// Strict entries are assumed successful (`success: None`): the call would
/// have aborted the batch otherwise. Tolerant entries carry their reported
/// flag plus the block hash.
pub(crate) fn decode_aggregate_response(
    data: &[u8],
    tolerant: bool,
) -> Result<AggregateContractResponse> {
    if tolerant {
        let ret = multicall3::tryBlockAndAggregateCall::abi_decode_returns(data).map_err(|e| {
            MulticallError::Decoding {
                method: "tryBlockAndAggregate".to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(AggregateContractResponse {
            block_number: ret.blockNumber,
            block_hash: Some(ret.blockHash),
            results: ret
                .returnData
                .into_iter()
                .map(|entry| RawCallResult {
                    success: Some(entry.success),
                    return_data: entry.returnData,
                })
                .collect(),
        })
    } else {
        let ret = multicall3::aggregateCall::abi_decode_returns(data).map_err(|e| {
            MulticallError::Decoding {
                method: "aggregate".to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(AggregateContractResponse {
            block_number: ret.blockNumber,
            block_hash: None,
            results: ret
                .returnData
                .into_iter()
                .map(|data| RawCallResult {
                    success: None,
                    return_data: data,
                })
                .collect(),
        })
    }
}

pub(crate) fn call_request(to: Address, data: Bytes) -> TransactionRequest {
    TransactionRequest::default()
        .to(to)
        .input(TransactionInput::from(data))
}

pub(crate) fn block_id(options: DispatchOptions) -> BlockId {
    options
        .block_number
        .map(BlockId::number)
        .unwrap_or_else(BlockId::latest)
}

/// Provider-based dispatch shared by the provider and endpoint strategies.
pub(crate) async fn aggregate_via_provider(
    provider: &DynProvider,
    override_address: Option<Address>,
    calls: &[EncodedCall],
    options: DispatchOptions,
) -> Result<AggregateContractResponse> {
    let chain_id = provider.get_chain_id().await?;
    let aggregator = resolve_aggregator(chain_id, override_address)?;

    info!(
        "🚀 Aggregating {} calls on chain {} via {} ({})",
        calls.len(),
        chain_id,
        aggregator,
        if options.allow_failure { "tolerant" } else { "strict" },
    );

    let raw = provider
        .call(call_request(aggregator, aggregate_calldata(calls, options)))
        .block(block_id(options))
        .await?;

    decode_aggregate_response(&raw, options.allow_failure)
}
