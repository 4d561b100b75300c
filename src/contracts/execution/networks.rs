//! Fixed chain-id → deployed aggregator address table.

use alloy::primitives::{address, Address};

/// Canonical Multicall3 deployment shared by most EVM networks.
pub const MULTICALL3: Address = address!("cA11bde05977b3631167028862bE2a173976CA11");

/// zkSync Era carries its own deployment.
pub const MULTICALL3_ZKSYNC_ERA: Address = address!("F9cda624FBC7e059355ce98a31693d299FACd963");

/// Resolves the aggregator contract deployed on `chain_id`.
///
/// Returns `None` for networks without a known deployment; callers supply an
/// explicit override address for those.
pub fn aggregator_address(chain_id: u64) -> Option<Address> {
    match chain_id {
        // Ethereum mainnet, Goerli, Holesky, Sepolia
        1 | 5 | 17000 | 11155111
        // Optimism, Cronos, BNB Smart Chain (+ testnet), Gnosis
        | 10 | 25 | 56 | 97 | 100
        // Polygon PoS (+ Amoy), Fantom, Polygon zkEVM, Base (+ Sepolia)
        | 137 | 80002 | 250 | 1101 | 8453 | 84532
        // Moonbeam, Moonriver, Celo
        | 1284 | 1285 | 42220
        // Arbitrum One, Arbitrum Nova, Avalanche C-Chain
        | 42161 | 42170 | 43114
        // Linea, Scroll, Aurora
        | 59144 | 534352 | 1313161554 => Some(MULTICALL3),
        // zkSync Era
        324 => Some(MULTICALL3_ZKSYNC_ERA),
        _ => None,
    }
}
