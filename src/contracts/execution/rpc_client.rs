use alloy::primitives::{Address, Bytes, U64};
use alloy::rpc::client::RpcClient;
use async_trait::async_trait;
use tracing::info;

use crate::contracts::execution::dispatch;
use crate::contracts::execution::traits::{DispatchOptions, ExecutionBackend};
use crate::error::Result;
use crate::models::{AggregateContractResponse, EncodedCall};

/// Issues raw JSON-RPC requests through a remote client handle supplied by
/// the caller, without wrapping it in a provider.
#[derive(Debug)]
pub struct RpcClientBackend {
    client: RpcClient,
    override_address: Option<Address>,
}

impl RpcClientBackend {
    pub fn new(client: RpcClient, override_address: Option<Address>) -> Self {
        Self {
            client,
            override_address,
        }
    }
}

#[async_trait]
impl ExecutionBackend for RpcClientBackend {
    async fn execute(
        &self,
        calls: &[EncodedCall],
        options: DispatchOptions,
    ) -> Result<AggregateContractResponse> {
        let chain_id: U64 = self.client.request_noparams("eth_chainId").await?;
        let chain_id = chain_id.to::<u64>();
        let aggregator = dispatch::resolve_aggregator(chain_id, self.override_address)?;

        info!(
            "🚀 Aggregating {} calls on chain {} via {} (raw rpc client)",
            calls.len(),
            chain_id,
            aggregator,
        );

        let request = dispatch::call_request(aggregator, dispatch::aggregate_calldata(calls, options));
        let raw: Bytes = self
            .client
            .request("eth_call", (request, dispatch::block_id(options)))
            .await?;

        dispatch::decode_aggregate_response(&raw, options.allow_failure)
    }

    fn description(&self) -> &str {
        "RpcClientBackend: aggregates through raw JSON-RPC requests on a remote client handle"
    }
}
