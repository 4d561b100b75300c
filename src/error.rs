use alloy::transports::TransportError;
use thiserror::Error;

/// Errors surfaced by the multicall pipeline.
///
/// Configuration, encoding and network-resolution failures are raised before
/// the aggregate call is dispatched. Decoding failures abort the invocation
/// only in strict mode; tolerant mode recovers them per call. Transport
/// failures from the underlying backend propagate untouched and are never
/// retried here.
#[derive(Debug, Error)]
pub enum MulticallError {
    /// Backend construction received zero or more than one transport shape.
    #[error("invalid backend configuration: {0}")]
    Configuration(String),

    /// A method invocation could not be encoded against its contract ABI.
    #[error("failed to encode {contract}.{method}: {reason}")]
    Encoding {
        contract: String,
        method: String,
        reason: String,
    },

    /// No aggregator contract is known for the resolved chain and no override
    /// address was supplied.
    #[error("no multicall aggregator known for chain id {0} and no override address supplied")]
    UnsupportedNetwork(u64),

    /// Return data could not be decoded against the declared output schema.
    #[error("failed to decode return data of {method}: {reason}")]
    Decoding { method: String, reason: String },

    /// Transport-level failure from the execution backend, passed through as-is.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, MulticallError>;
