use alloy::dyn_abi::JsonAbiExt;
use tracing::{debug, info};

use crate::contracts::abi::SchemaTable;
use crate::error::{MulticallError, Result};
use crate::models::{ContractCallContext, EncodedCall};

/// Encodes every method invocation of every group into the flat call list
/// handed to the aggregator.
///
/// Output preserves input order exactly. Each record carries the
/// `(contract_index, method_index)` pair that later regroups the raw results;
/// nothing downstream may reorder the list. `tables` holds one schema table
/// per group, in group order.
pub fn encode_call_groups(
    groups: &[ContractCallContext],
    tables: &[SchemaTable],
) -> Result<Vec<EncodedCall>> {
    let mut encoded = Vec::new();

    for (contract_index, group) in groups.iter().enumerate() {
        let table = &tables[contract_index];

        for (method_index, invocation) in group.calls.iter().enumerate() {
            let function = table.get(&invocation.method_name).ok_or_else(|| {
                MulticallError::Encoding {
                    contract: group.reference.clone(),
                    method: invocation.method_name.clone(),
                    reason: "method not present in the supplied ABI".to_string(),
                }
            })?;

            if function.inputs.len() != invocation.method_parameters.len() {
                return Err(MulticallError::Encoding {
                    contract: group.reference.clone(),
                    method: invocation.method_name.clone(),
                    reason: format!(
                        "expected {} parameters, got {}",
                        function.inputs.len(),
                        invocation.method_parameters.len()
                    ),
                });
            }

            let call_data = function
                .abi_encode_input(&invocation.method_parameters)
                .map_err(|e| MulticallError::Encoding {
                    contract: group.reference.clone(),
                    method: invocation.method_name.clone(),
                    reason: e.to_string(),
                })?;

            debug!(
                "  encoded {}.{} selector 0x{} ({} bytes)",
                group.reference,
                invocation.method_name,
                hex::encode(&call_data[..4]),
                call_data.len()
            );

            encoded.push(EncodedCall {
                target: group.contract_address,
                call_data: call_data.into(),
                contract_index,
                method_index,
            });
        }
    }

    info!(
        "🔧 Encoded {} calls across {} contracts",
        encoded.len(),
        groups.len()
    );

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::dyn_abi::DynSolValue;
    use alloy::primitives::{address, U256};
    use crate::models::{CallInvocation, FunctionDescriptor};

    fn erc20_abi() -> Vec<FunctionDescriptor> {
        vec![
            FunctionDescriptor::new("balanceOf", &["address"], &["uint256"]),
            FunctionDescriptor::new("totalSupply", &[], &["uint256"]),
        ]
    }

    fn build_tables(groups: &[ContractCallContext]) -> Vec<SchemaTable> {
        groups
            .iter()
            .map(|g| SchemaTable::build(&g.reference, &g.abi).expect("valid ABI"))
            .collect()
    }

    #[test]
    fn test_encoding_preserves_order_and_index_tags() {
        let holder = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let groups = vec![
            ContractCallContext::new(
                "token-a",
                address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
                erc20_abi(),
                vec![
                    CallInvocation::new("a-balance", "balanceOf", vec![DynSolValue::Address(holder)]),
                    CallInvocation::new("a-supply", "totalSupply", vec![]),
                ],
            ),
            ContractCallContext::new(
                "token-b",
                address!("dAC17F958D2ee523a2206206994597C13D831ec7"),
                erc20_abi(),
                vec![CallInvocation::new(
                    "b-balance",
                    "balanceOf",
                    vec![DynSolValue::Address(holder)],
                )],
            ),
        ];

        let encoded = encode_call_groups(&groups, &build_tables(&groups)).expect("encoding succeeds");

        // Count and order equal the flattened invocation list
        assert_eq!(encoded.len(), 3);
        let tags: Vec<(usize, usize)> = encoded
            .iter()
            .map(|c| (c.contract_index, c.method_index))
            .collect();
        assert_eq!(tags, vec![(0, 0), (0, 1), (1, 0)]);

        // Targets follow the originating group
        assert_eq!(encoded[0].target, groups[0].contract_address);
        assert_eq!(encoded[2].target, groups[1].contract_address);

        // balanceOf(address) selector
        assert_eq!(&encoded[0].call_data[..4], [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(encoded[0].call_data.len(), 4 + 32);
        // totalSupply() is selector-only
        assert_eq!(&encoded[1].call_data[..], [0x18, 0x16, 0x0d, 0xdd]);
    }

    #[test]
    fn test_unknown_method_fails_before_dispatch() {
        let groups = vec![ContractCallContext::new(
            "token",
            address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            erc20_abi(),
            vec![CallInvocation::new("bad", "allowance", vec![])],
        )];

        let err = encode_call_groups(&groups, &build_tables(&groups)).expect_err("unknown method");
        match err {
            MulticallError::Encoding { method, .. } => assert_eq!(method, "allowance"),
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_mismatch_fails_before_dispatch() {
        let groups = vec![ContractCallContext::new(
            "token",
            address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            erc20_abi(),
            vec![CallInvocation::new(
                "bad",
                "balanceOf",
                vec![
                    DynSolValue::Address(address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")),
                    DynSolValue::Uint(U256::from(1u64), 256),
                ],
            )],
        )];

        let err = encode_call_groups(&groups, &build_tables(&groups)).expect_err("arity mismatch");
        match err {
            MulticallError::Encoding { reason, .. } => {
                assert!(reason.contains("expected 1 parameters, got 2"), "got: {reason}")
            }
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_type_mismatch_fails_before_dispatch() {
        let groups = vec![ContractCallContext::new(
            "token",
            address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            erc20_abi(),
            vec![CallInvocation::new(
                "bad",
                "balanceOf",
                vec![DynSolValue::Bool(true)],
            )],
        )];

        let result = encode_call_groups(&groups, &build_tables(&groups));
        assert!(
            matches!(result, Err(MulticallError::Encoding { .. })),
            "bool is not coercible to address"
        );
    }
}
