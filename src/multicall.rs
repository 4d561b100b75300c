use std::sync::Arc;

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::rpc::client::RpcClient;
use tracing::info;

use crate::contracts::abi::SchemaTable;
use crate::contracts::encoding::encode_call_groups;
use crate::contracts::execution::{create_backend, BackendConfig, DispatchOptions, ExecutionBackend};
use crate::error::Result;
use crate::models::{CallOptions, ContractCallContext, ContractCallResults};
use crate::results::{decode_grouped_results, group_raw_results};

/// Batches independent contract reads into one aggregator round-trip.
///
/// Construction resolves the transport strategy once; the instance is
/// immutable afterwards and safe to reuse across sequential or concurrent
/// invocations, since every invocation only reads configuration and
/// allocates fresh per-call state.
#[derive(Debug)]
pub struct Multicall {
    backend: Arc<dyn ExecutionBackend>,
    allow_failure: bool,
}

impl Multicall {
    pub fn builder() -> MulticallBuilder {
        MulticallBuilder::default()
    }

    /// Wires a custom transport strategy directly, bypassing shape selection.
    pub fn with_backend(backend: Arc<dyn ExecutionBackend>, allow_failure: bool) -> Self {
        info!("🏗️ Creating Multicall with injected backend: {}", backend.description());
        Self {
            backend,
            allow_failure,
        }
    }

    /// Runs the full pipeline: encode the groups into a flat call list, issue
    /// exactly one aggregate round-trip, regroup the raw results and decode
    /// them per each method's output schema.
    ///
    /// The returned mapping is keyed by group reference tag and echoes each
    /// group's input back alongside its per-method results.
    pub async fn call(
        &self,
        groups: &[ContractCallContext],
        options: &CallOptions,
    ) -> Result<ContractCallResults> {
        let tolerant = options.allow_failure.unwrap_or(self.allow_failure);

        // One schema table per group, built once and shared with the decoder
        let tables = groups
            .iter()
            .map(|group| SchemaTable::build(&group.reference, &group.abi))
            .collect::<Result<Vec<_>>>()?;

        let encoded = encode_call_groups(groups, &tables)?;

        let response = self
            .backend
            .execute(
                &encoded,
                DispatchOptions {
                    block_number: options.block_number,
                    allow_failure: tolerant,
                },
            )
            .await?;

        let grouped = group_raw_results(&response, &encoded)?;

        decode_grouped_results(groups, &tables, grouped, response.block_number, tolerant)
    }
}

/// Builder selecting the execution backend from mutually exclusive transport
/// shapes. Exactly one of `provider`, `client` or `endpoint` must be set.
#[derive(Debug, Default)]
pub struct MulticallBuilder {
    provider: Option<DynProvider>,
    client: Option<RpcClient>,
    endpoint: Option<String>,
    override_address: Option<Address>,
    allow_failure: bool,
}

impl MulticallBuilder {
    /// Use a live, already-connected provider handle.
    pub fn provider(mut self, provider: DynProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Use a remote JSON-RPC client handle.
    pub fn client(mut self, client: RpcClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Use a bare HTTP endpoint URL; the backend builds its own provider.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the aggregator contract address. Takes priority over the
    /// per-network lookup table.
    pub fn aggregator_address(mut self, address: Address) -> Self {
        self.override_address = Some(address);
        self
    }

    /// Default failure policy: tolerant per-call reporting when true, strict
    /// whole-batch abort when false. Overridable per invocation.
    pub fn allow_failure(mut self, allow_failure: bool) -> Self {
        self.allow_failure = allow_failure;
        self
    }

    pub fn build(self) -> Result<Multicall> {
        let backend = create_backend(BackendConfig {
            provider: self.provider,
            client: self.client,
            endpoint: self.endpoint,
            override_address: self.override_address,
        })?;

        Ok(Multicall {
            backend,
            allow_failure: self.allow_failure,
        })
    }
}
