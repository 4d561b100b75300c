use std::sync::Arc;

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::rpc::client::RpcClient;
use tracing::info;

use crate::contracts::execution::endpoint::EndpointBackend;
use crate::contracts::execution::provider::ProviderBackend;
use crate::contracts::execution::rpc_client::RpcClientBackend;
use crate::contracts::execution::traits::ExecutionBackend;
use crate::error::{MulticallError, Result};

/// Mutually exclusive transport shapes for backend construction.
///
/// Exactly one of `provider`, `client` or `endpoint` selects the strategy;
/// supplying none or more than one is a configuration error. The optional
/// aggregator override always wins over the per-network address table.
#[derive(Default)]
pub struct BackendConfig {
    pub provider: Option<DynProvider>,
    pub client: Option<RpcClient>,
    pub endpoint: Option<String>,
    pub override_address: Option<Address>,
}

/// Resolves the configuration shape into its execution strategy, once.
pub fn create_backend(config: BackendConfig) -> Result<Arc<dyn ExecutionBackend>> {
    let supplied = config.provider.is_some() as u8
        + config.client.is_some() as u8
        + config.endpoint.is_some() as u8;

    match supplied {
        0 => {
            return Err(MulticallError::Configuration(
                "no transport supplied: set exactly one of provider, client or endpoint"
                    .to_string(),
            ))
        }
        1 => {}
        _ => {
            return Err(MulticallError::Configuration(
                "ambiguous transport: provider, client and endpoint are mutually exclusive"
                    .to_string(),
            ))
        }
    }

    let backend: Arc<dyn ExecutionBackend> = if let Some(provider) = config.provider {
        Arc::new(ProviderBackend::new(provider, config.override_address))
    } else if let Some(client) = config.client {
        Arc::new(RpcClientBackend::new(client, config.override_address))
    } else if let Some(endpoint) = config.endpoint {
        Arc::new(EndpointBackend::new(&endpoint, config.override_address)?)
    } else {
        unreachable!("shape count checked above")
    };

    info!("🏭 Selected execution backend: {}", backend.description());

    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::providers::{Provider, ProviderBuilder};

    fn local_provider() -> DynProvider {
        // Building a provider parses the URL only; nothing connects here
        ProviderBuilder::new()
            .connect_http("http://localhost:8545".parse().expect("valid URL"))
            .erased()
    }

    fn local_client() -> RpcClient {
        RpcClient::new_http("http://localhost:8545".parse().expect("valid URL"))
    }

    #[test]
    fn test_no_shape_is_a_configuration_error() {
        let err = create_backend(BackendConfig::default()).expect_err("nothing supplied");
        assert!(matches!(err, MulticallError::Configuration(_)));
    }

    #[test]
    fn test_two_shapes_are_a_configuration_error() {
        let config = BackendConfig {
            provider: Some(local_provider()),
            endpoint: Some("http://localhost:8545".to_string()),
            ..Default::default()
        };

        let err = create_backend(config).expect_err("ambiguous shapes");
        match err {
            MulticallError::Configuration(reason) => {
                assert!(reason.contains("mutually exclusive"), "got: {reason}")
            }
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_each_single_shape_selects_its_strategy() {
        let provider_backend = create_backend(BackendConfig {
            provider: Some(local_provider()),
            ..Default::default()
        })
        .expect("provider shape");
        assert!(provider_backend.description().contains("ProviderBackend"));

        let client_backend = create_backend(BackendConfig {
            client: Some(local_client()),
            ..Default::default()
        })
        .expect("client shape");
        assert!(client_backend.description().contains("RpcClientBackend"));

        let endpoint_backend = create_backend(BackendConfig {
            endpoint: Some("http://localhost:8545".to_string()),
            ..Default::default()
        })
        .expect("endpoint shape");
        assert!(endpoint_backend.description().contains("EndpointBackend"));
    }
}
