use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use async_trait::async_trait;
use tracing::info;

use crate::contracts::execution::dispatch;
use crate::contracts::execution::traits::{DispatchOptions, ExecutionBackend};
use crate::error::{MulticallError, Result};
use crate::models::{AggregateContractResponse, EncodedCall};

/// Builds its own HTTP provider from a bare endpoint URL at construction and
/// aggregates through it.
#[derive(Debug)]
pub struct EndpointBackend {
    provider: DynProvider,
    override_address: Option<Address>,
}

impl EndpointBackend {
    pub fn new(endpoint: &str, override_address: Option<Address>) -> Result<Self> {
        let url = endpoint.parse().map_err(|e| {
            MulticallError::Configuration(format!("invalid rpc endpoint `{endpoint}`: {e}"))
        })?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        info!("🔗 EndpointBackend connected to {endpoint}");

        Ok(Self {
            provider,
            override_address,
        })
    }
}

#[async_trait]
impl ExecutionBackend for EndpointBackend {
    async fn execute(
        &self,
        calls: &[EncodedCall],
        options: DispatchOptions,
    ) -> Result<AggregateContractResponse> {
        dispatch::aggregate_via_provider(&self.provider, self.override_address, calls, options)
            .await
    }

    fn description(&self) -> &str {
        "EndpointBackend: aggregates through a provider built from a bare endpoint URL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_endpoint() {
        let result = EndpointBackend::new("not a url", None);
        assert!(matches!(result, Err(MulticallError::Configuration(_))));
    }

    #[test]
    fn test_accepts_http_endpoint_without_connecting() {
        // Construction only parses the URL; no network traffic happens here
        let backend = EndpointBackend::new("http://localhost:8545", None).expect("valid URL");
        assert!(backend.description().contains("EndpointBackend"));
    }
}
