use alloy::primitives::Address;
use alloy::providers::DynProvider;
use async_trait::async_trait;

use crate::contracts::execution::dispatch;
use crate::contracts::execution::traits::{DispatchOptions, ExecutionBackend};
use crate::error::Result;
use crate::models::{AggregateContractResponse, EncodedCall};

/// Executes aggregate calls through a live, already-connected provider handle
/// supplied by the caller.
#[derive(Debug)]
pub struct ProviderBackend {
    provider: DynProvider,
    override_address: Option<Address>,
}

impl ProviderBackend {
    pub fn new(provider: DynProvider, override_address: Option<Address>) -> Self {
        Self {
            provider,
            override_address,
        }
    }
}

#[async_trait]
impl ExecutionBackend for ProviderBackend {
    async fn execute(
        &self,
        calls: &[EncodedCall],
        options: DispatchOptions,
    ) -> Result<AggregateContractResponse> {
        dispatch::aggregate_via_provider(&self.provider, self.override_address, calls, options)
            .await
    }

    fn description(&self) -> &str {
        "ProviderBackend: aggregates through a caller-supplied provider handle"
    }
}
