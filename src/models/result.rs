use std::collections::HashMap;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes, B256, U256};

use super::call::ContractCallContext;

/// One entry of the flat call list handed to the aggregator.
///
/// The `(contract_index, method_index)` pair is the only linkage back to the
/// originating invocation; it is stable and unique within one invocation and
/// threads the whole pipeline untouched.
#[derive(Debug, Clone)]
pub struct EncodedCall {
    pub target: Address,
    pub call_data: Bytes,
    /// Position of the originating group in the submitted list.
    pub contract_index: usize,
    /// Position of the originating invocation within its group.
    pub method_index: usize,
}

/// Raw bytes returned by the aggregator for one call.
///
/// `success` is reported per call in tolerant mode only. Strict aggregation
/// would have aborted the whole batch on any failure, so strict entries are
/// assumed successful and carry `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCallResult {
    pub success: Option<bool>,
    pub return_data: Bytes,
}

/// Uniform backend response: one raw result per encoded call, same order.
#[derive(Debug, Clone)]
pub struct AggregateContractResponse {
    pub block_number: U256,
    /// Reported by the tolerant entry point only.
    pub block_hash: Option<B256>,
    pub results: Vec<RawCallResult>,
}

/// Raw results regrouped under their originating contract group.
#[derive(Debug, Clone)]
pub struct GroupedRawResult {
    pub contract_index: usize,
    /// `(method_index, raw result)` in original method order.
    pub methods: Vec<(usize, RawCallResult)>,
}

/// Decoded (or passed-through) outcome of a single invocation. Terminal.
#[derive(Debug, Clone)]
pub struct CallReturnContext {
    pub reference: String,
    pub method_name: String,
    pub method_parameters: Vec<DynSolValue>,
    /// Always a sequence: a single declared output is unwrapped from its
    /// one-element container and re-wrapped unless it is itself a sequence.
    pub return_values: Vec<DynSolValue>,
    pub success: bool,
    pub decoded: bool,
}

/// All results for one submitted call group, with the input echoed back.
#[derive(Debug, Clone)]
pub struct ContractCallReturnContext {
    pub original_call_context: ContractCallContext,
    pub call_returns: Vec<CallReturnContext>,
}

/// Terminal output of one invocation, keyed by group reference tag.
#[derive(Debug, Clone)]
pub struct ContractCallResults {
    pub block_number: U256,
    pub results: HashMap<String, ContractCallReturnContext>,
}

impl ContractCallResults {
    /// Returns an independent copy of the results for `reference`, if present.
    ///
    /// The copy is detached from the stored results; mutating it never
    /// affects what later accessors observe.
    pub fn get(&self, reference: &str) -> Option<ContractCallReturnContext> {
        self.results.get(reference).cloned()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_results_accessor_returns_independent_copy() {
        let context = ContractCallContext::new(
            "token",
            address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            vec![],
            vec![],
        );

        let mut results = ContractCallResults {
            block_number: U256::from(100u64),
            results: HashMap::new(),
        };
        results.results.insert(
            "token".to_string(),
            ContractCallReturnContext {
                original_call_context: context,
                call_returns: vec![],
            },
        );

        let mut copy = results.get("token").expect("entry present");
        copy.call_returns.push(CallReturnContext {
            reference: "mutated".to_string(),
            method_name: "noop".to_string(),
            method_parameters: vec![],
            return_values: vec![],
            success: true,
            decoded: false,
        });

        // The stored entry is untouched by mutations of the returned copy
        let stored = results.get("token").expect("entry present");
        assert!(stored.call_returns.is_empty());
        assert!(results.get("missing").is_none());
    }
}
