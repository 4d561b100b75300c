use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AggregateContractResponse, EncodedCall};

/// Options resolved for one aggregate dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    /// Target block for the aggregate call; latest when unset.
    pub block_number: Option<u64>,
    /// Tolerant mode: per-call success reporting instead of batch abort.
    pub allow_failure: bool,
}

/// A transport strategy able to invoke the aggregator contract.
///
/// Implementations resolve the active chain, pick the aggregator address for
/// it and issue exactly one read call per `execute` invocation. They hold no
/// mutable state, so one backend is safely shared across concurrent
/// invocations.
#[async_trait]
pub trait ExecutionBackend: Send + Sync + std::fmt::Debug {
    /// Dispatches the flat call list through the aggregator.
    ///
    /// The response carries one raw result per encoded call, in input order.
    /// Transport failures propagate as-is and are not retried.
    async fn execute(
        &self,
        calls: &[EncodedCall],
        options: DispatchOptions,
    ) -> Result<AggregateContractResponse>;

    /// Human-readable description of this backend.
    fn description(&self) -> &str;
}
