//! Fixed ABI of the on-chain Multicall3 aggregator.

use alloy::sol;

sol! {
    /// A single aggregated call: target contract plus encoded calldata.
    #[derive(Debug)]
    struct Call {
        address target;
        bytes callData;
    }

    /// Per-call outcome reported by the tolerant entry point.
    #[derive(Debug)]
    struct MulticallResult {
        bool success;
        bytes returnData;
    }

    /// Strict aggregation: any single call revert aborts the whole batch.
    function aggregate(Call[] calldata calls) external payable returns (uint256 blockNumber, bytes[] returnData);

    /// Tolerant aggregation: per-call success reporting, failures do not abort.
    function tryBlockAndAggregate(bool requireSuccess, Call[] calldata calls) external payable returns (uint256 blockNumber, bytes32 blockHash, MulticallResult[] returnData);
}
