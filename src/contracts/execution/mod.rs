pub(crate) mod dispatch;
pub mod endpoint;
pub mod factory;
pub mod networks;
pub mod provider;
pub mod rpc_client;
pub mod traits;

// Re-export everything for easy access
pub use endpoint::EndpointBackend;
pub use factory::{create_backend, BackendConfig};
pub use networks::aggregator_address;
pub use provider::ProviderBackend;
pub use rpc_client::RpcClientBackend;
pub use traits::{DispatchOptions, ExecutionBackend};
