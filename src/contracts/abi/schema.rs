use std::collections::HashMap;

use alloy::json_abi::Function;

use crate::error::{MulticallError, Result};
use crate::models::FunctionDescriptor;

/// Parsed function schemas for one call group.
///
/// Built once per group and shared by the call encoder and the result
/// decoder, so no lookup ever re-parses a signature or scans the raw
/// descriptor list again. Keyed by exact function name.
#[derive(Debug, Clone)]
pub struct SchemaTable {
    functions: HashMap<String, Function>,
}

impl SchemaTable {
    /// Parses every descriptor of a group ABI into its function schema.
    pub fn build(contract: &str, abi: &[FunctionDescriptor]) -> Result<Self> {
        let mut functions = HashMap::with_capacity(abi.len());
        for descriptor in abi {
            let function =
                Function::parse(&descriptor.signature()).map_err(|e| MulticallError::Encoding {
                    contract: contract.to_string(),
                    method: descriptor.name.clone(),
                    reason: format!(
                        "unparsable ABI signature `{}`: {}",
                        descriptor.signature(),
                        e
                    ),
                })?;
            functions.insert(descriptor.name.clone(), function);
        }
        Ok(Self { functions })
    }

    pub fn get(&self, method_name: &str) -> Option<&Function> {
        self.functions.get(method_name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_parses_descriptors_once() {
        let abi = vec![
            FunctionDescriptor::new("balanceOf", &["address"], &["uint256"]),
            FunctionDescriptor::new("totalSupply", &[], &["uint256"]),
            FunctionDescriptor::new("ping", &[], &[]),
        ];

        let table = SchemaTable::build("erc20", &abi).expect("valid ABI");

        assert_eq!(table.len(), 3);
        let balance_of = table.get("balanceOf").expect("balanceOf present");
        assert_eq!(balance_of.inputs.len(), 1);
        assert_eq!(balance_of.outputs.len(), 1);
        assert!(table.get("ping").expect("ping present").outputs.is_empty());
        assert!(table.get("transfer").is_none());
    }

    #[test]
    fn test_build_rejects_malformed_type() {
        let abi = vec![FunctionDescriptor::new("broken", &["uint257x"], &["uint256"])];

        let err = SchemaTable::build("erc20", &abi).expect_err("must not parse");
        match err {
            MulticallError::Encoding { contract, method, .. } => {
                assert_eq!(contract, "erc20");
                assert_eq!(method, "broken");
            }
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }
}
