use std::collections::HashMap;

use alloy::dyn_abi::{DynSolValue, FunctionExt};
use alloy::primitives::U256;
use tracing::warn;

use crate::contracts::abi::SchemaTable;
use crate::error::{MulticallError, Result};
use crate::models::{
    CallInvocation, CallReturnContext, ContractCallContext, ContractCallResults,
    ContractCallReturnContext, GroupedRawResult, RawCallResult,
};

/// Decodes every regrouped raw result back into typed values and assembles
/// the terminal per-group mapping, keyed by group reference tag.
///
/// Per-call failure policy: tolerant mode converts failed or undecodable
/// calls into `success=false` entries and keeps going; strict mode propagates
/// the first decode failure for the whole invocation, because strict
/// aggregation promises no partial results.
pub fn decode_grouped_results(
    groups: &[ContractCallContext],
    tables: &[SchemaTable],
    grouped: Vec<GroupedRawResult>,
    block_number: U256,
    tolerant: bool,
) -> Result<ContractCallResults> {
    let mut results = HashMap::with_capacity(grouped.len());

    for group_result in grouped {
        let context = &groups[group_result.contract_index];
        let table = &tables[group_result.contract_index];

        let mut call_returns = Vec::with_capacity(group_result.methods.len());
        for (method_index, raw) in group_result.methods {
            let invocation = &context.calls[method_index];
            call_returns.push(decode_single(context, table, invocation, raw, tolerant)?);
        }

        results.insert(
            context.reference.clone(),
            ContractCallReturnContext {
                original_call_context: context.clone(),
                call_returns,
            },
        );
    }

    Ok(ContractCallResults {
        block_number,
        results,
    })
}

fn decode_single(
    context: &ContractCallContext,
    table: &SchemaTable,
    invocation: &CallInvocation,
    raw: RawCallResult,
    tolerant: bool,
) -> Result<CallReturnContext> {
    // A reported per-call failure is terminal: never decode a failed call's bytes
    if tolerant && raw.success == Some(false) {
        warn!(
            "⚠️ Call {}.{} reverted, skipping decode",
            context.reference, invocation.method_name
        );
        return Ok(return_context(invocation, Vec::new(), false, false));
    }

    let function = match table.get(&invocation.method_name) {
        Some(function) if !function.outputs.is_empty() => function,
        // No output schema: the raw payload passes through opaque
        _ => {
            return Ok(return_context(
                invocation,
                vec![DynSolValue::Bytes(raw.return_data.to_vec())],
                true,
                false,
            ))
        }
    };

    match function.abi_decode_output(&raw.return_data) {
        Ok(values) => Ok(return_context(
            invocation,
            normalize_return_values(values),
            true,
            true,
        )),
        Err(e) if tolerant => {
            warn!(
                "⚠️ Failed to decode {}.{}: {} (recovered, tolerant mode)",
                context.reference, invocation.method_name, e
            );
            Ok(return_context(invocation, Vec::new(), false, false))
        }
        Err(e) => Err(MulticallError::Decoding {
            method: invocation.method_name.clone(),
            reason: e.to_string(),
        }),
    }
}

fn return_context(
    invocation: &CallInvocation,
    return_values: Vec<DynSolValue>,
    success: bool,
    decoded: bool,
) -> CallReturnContext {
    CallReturnContext {
        reference: invocation.reference.clone(),
        method_name: invocation.method_name.clone(),
        method_parameters: invocation.method_parameters.clone(),
        return_values,
        success,
        decoded,
    }
}

/// `return_values` is always a sequence: exactly one declared output is
/// unwrapped from its single-element container, then re-wrapped unless the
/// value is itself a sequence.
fn normalize_return_values(values: Vec<DynSolValue>) -> Vec<DynSolValue> {
    if values.len() != 1 {
        return values;
    }
    let mut values = values;
    match values.remove(0) {
        DynSolValue::Array(inner)
        | DynSolValue::FixedArray(inner)
        | DynSolValue::Tuple(inner) => inner,
        other => vec![other],
    }
}
