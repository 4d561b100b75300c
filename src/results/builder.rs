use std::collections::HashMap;

use crate::error::{MulticallError, Result};
use crate::models::{AggregateContractResponse, EncodedCall, GroupedRawResult};

/// Regroups the flat raw-result list under the originating contract groups.
///
/// Pure data transformation: no decoding, no I/O, deterministic for a given
/// input. First-seen contract order is preserved, and within each group the
/// original method order is preserved, so flattening the groups back in order
/// reproduces the original call-to-result pairing exactly.
pub fn group_raw_results(
    response: &AggregateContractResponse,
    encoded: &[EncodedCall],
) -> Result<Vec<GroupedRawResult>> {
    if response.results.len() != encoded.len() {
        return Err(MulticallError::Decoding {
            method: "aggregate".to_string(),
            reason: format!(
                "aggregator returned {} results for {} calls",
                response.results.len(),
                encoded.len()
            ),
        });
    }

    let mut groups: Vec<GroupedRawResult> = Vec::new();
    let mut positions: HashMap<usize, usize> = HashMap::new();

    for (call, raw) in encoded.iter().zip(&response.results) {
        let slot = *positions.entry(call.contract_index).or_insert_with(|| {
            groups.push(GroupedRawResult {
                contract_index: call.contract_index,
                methods: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].methods.push((call.method_index, raw.clone()));
    }

    Ok(groups)
}
