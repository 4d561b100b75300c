use serde::Deserialize;
use tracing::warn;

use crate::error::{MulticallError, Result};
use crate::multicall::{Multicall, MulticallBuilder};

/// Optional file/environment configuration for endpoint-based setups.
///
/// Layered from `config/multicall.*` (optional) and `MULTICALL_*` environment
/// variables; callers holding a live provider or client handle skip this and
/// use the builder directly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MulticallSettings {
    pub rpc_url: Option<String>,
    /// Overrides the per-network aggregator address table when set.
    pub aggregator_address: Option<String>,
    /// Default failure policy; overridable per invocation.
    #[serde(default)]
    pub allow_failure: bool,
}

impl MulticallSettings {
    pub fn load() -> Result<Self> {
        tracing::info!("Loading multicall configuration...");

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/multicall").required(false))
            .add_source(config::Environment::with_prefix("MULTICALL"))
            .build()
            .map_err(|e| MulticallError::Configuration(e.to_string()))?;

        let loaded: MulticallSettings = match settings.try_deserialize() {
            Ok(loaded) => loaded,
            Err(_) => {
                warn!("Could not load configuration from file/environment, using defaults");
                MulticallSettings::default()
            }
        };

        Ok(loaded)
    }

    /// Turns the settings into a builder pre-filled with the endpoint shape.
    pub fn into_builder(self) -> Result<MulticallBuilder> {
        let rpc_url = self.rpc_url.ok_or_else(|| {
            MulticallError::Configuration("settings carry no rpc_url".to_string())
        })?;

        let mut builder = Multicall::builder()
            .endpoint(rpc_url)
            .allow_failure(self.allow_failure);

        if let Some(raw) = self.aggregator_address {
            let address = raw.parse().map_err(|e| {
                MulticallError::Configuration(format!("invalid aggregator address `{raw}`: {e}"))
            })?;
            builder = builder.aggregator_address(address);
        }

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_file_or_env_falls_back_to_defaults() {
        let settings = MulticallSettings::load().expect("load never hard-fails on absence");
        assert!(settings.rpc_url.is_none());
        assert!(settings.aggregator_address.is_none());
        assert!(!settings.allow_failure);
    }

    #[test]
    fn test_settings_without_rpc_url_cannot_build() {
        let err = MulticallSettings::default()
            .into_builder()
            .expect_err("no rpc_url");
        assert!(matches!(err, MulticallError::Configuration(_)));
    }

    #[test]
    fn test_settings_feed_the_endpoint_shape() {
        let settings = MulticallSettings {
            rpc_url: Some("http://localhost:8545".to_string()),
            aggregator_address: Some("0xcA11bde05977b3631167028862bE2a173976CA11".to_string()),
            allow_failure: true,
        };

        let built = settings
            .into_builder()
            .expect("valid settings")
            .build();
        assert!(built.is_ok(), "endpoint shape should build: {:?}", built.err());
    }

    #[test]
    fn test_malformed_override_address_is_rejected() {
        let settings = MulticallSettings {
            rpc_url: Some("http://localhost:8545".to_string()),
            aggregator_address: Some("0xnothex".to_string()),
            allow_failure: false,
        };

        let err = settings.into_builder().expect_err("bad address");
        match err {
            MulticallError::Configuration(reason) => {
                assert!(reason.contains("invalid aggregator address"), "got: {reason}")
            }
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }
}
