use alloy::dyn_abi::DynSolValue;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// One function of a contract ABI, described by its Solidity type strings.
///
/// `inputs` and `outputs` hold canonical Solidity types (`"address"`,
/// `"uint256"`, `"(uint256,address)"`, `"uint256[]"`, ...). Tuples are written
/// in parentheses, exactly as they appear in a function signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, inputs: &[&str], outputs: &[&str]) -> Self {
        Self {
            name: name.into(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Human-readable signature accepted by the ABI parser.
    pub fn signature(&self) -> String {
        if self.outputs.is_empty() {
            format!("{}({})", self.name, self.inputs.join(","))
        } else {
            format!(
                "{}({}) returns ({})",
                self.name,
                self.inputs.join(","),
                self.outputs.join(",")
            )
        }
    }
}

/// A single method invocation inside a call group.
///
/// Owned by the caller and immutable once submitted; the reference tag is
/// echoed back verbatim on the matching result.
#[derive(Debug, Clone)]
pub struct CallInvocation {
    pub reference: String,
    pub method_name: String,
    pub method_parameters: Vec<DynSolValue>,
}

impl CallInvocation {
    pub fn new(
        reference: impl Into<String>,
        method_name: impl Into<String>,
        method_parameters: Vec<DynSolValue>,
    ) -> Self {
        Self {
            reference: reference.into(),
            method_name: method_name.into(),
            method_parameters,
        }
    }
}

/// An ordered group of invocations against one contract.
///
/// The group reference tag keys this group in the final result mapping, so it
/// must be unique within one invocation.
#[derive(Debug, Clone)]
pub struct ContractCallContext {
    pub reference: String,
    pub contract_address: Address,
    pub abi: Vec<FunctionDescriptor>,
    pub calls: Vec<CallInvocation>,
}

impl ContractCallContext {
    pub fn new(
        reference: impl Into<String>,
        contract_address: Address,
        abi: Vec<FunctionDescriptor>,
        calls: Vec<CallInvocation>,
    ) -> Self {
        Self {
            reference: reference.into(),
            contract_address,
            abi,
            calls,
        }
    }
}

/// Per-invocation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOptions {
    /// Target block for the aggregate call; latest when unset.
    pub block_number: Option<u64>,
    /// Overrides the configured tolerant/strict default for this invocation.
    pub allow_failure: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_rendering() {
        let with_outputs = FunctionDescriptor::new("balanceOf", &["address"], &["uint256"]);
        assert_eq!(with_outputs.signature(), "balanceOf(address) returns (uint256)");

        let no_outputs = FunctionDescriptor::new("touch", &["uint256", "bool"], &[]);
        assert_eq!(no_outputs.signature(), "touch(uint256,bool)");

        let no_inputs = FunctionDescriptor::new("totalSupply", &[], &["uint256"]);
        assert_eq!(no_inputs.signature(), "totalSupply() returns (uint256)");
    }

    #[test]
    fn test_descriptor_from_json() {
        // ABI snippets are commonly shipped as JSON next to deployment artifacts
        let raw = r#"[
            {"name": "balanceOf", "inputs": ["address"], "outputs": ["uint256"]},
            {"name": "decimals", "outputs": ["uint8"]}
        ]"#;

        let abi: Vec<FunctionDescriptor> = serde_json::from_str(raw).expect("valid descriptor JSON");

        assert_eq!(abi.len(), 2);
        assert_eq!(abi[0].name, "balanceOf");
        assert_eq!(abi[1].inputs, Vec::<String>::new(), "missing inputs default to empty");
        assert_eq!(abi[1].outputs, vec!["uint8".to_string()]);
    }
}
