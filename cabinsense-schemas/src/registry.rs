//! Contract Registry for Version Management
//!
//! Keeps every known record contract by qualified name and tracks the latest
//! version of each, so a consumer can ask for "the current biometric record
//! contract" without hard-coding a version.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::schemas::{self, RecordContract};
use crate::SchemaError;

/// Registry entry metadata
#[derive(Debug, Clone)]
pub struct ContractMetadata {
    /// Contract name (e.g., "biometric_record")
    pub name: String,

    /// Contract version (e.g., "v1")
    pub version: String,

    /// Whether this contract is deprecated
    pub deprecated: bool,

    /// Replacement contract if deprecated
    pub replacement: Option<String>,
}

/// Thread-safe contract registry
pub struct SchemaRegistry {
    /// Contracts indexed by qualified name
    contracts: RwLock<HashMap<String, (RecordContract, ContractMetadata)>>,

    /// Latest version for each contract name
    latest: RwLock<HashMap<String, String>>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            contracts: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Register a contract under its qualified name
    pub fn register(&self, contract: RecordContract) -> Result<(), SchemaError> {
        let qualified_name = contract.qualified_name();
        let metadata = ContractMetadata {
            name: contract.name.clone(),
            version: contract.version.clone(),
            deprecated: false,
            replacement: None,
        };

        {
            let mut contracts = self.contracts.write().map_err(|_| poisoned())?;
            if contracts.contains_key(&qualified_name) {
                return Err(SchemaError::Registry(format!(
                    "Contract {} already registered",
                    qualified_name
                )));
            }
            contracts.insert(qualified_name, (contract, metadata.clone()));
        }

        let mut latest = self.latest.write().map_err(|_| poisoned())?;
        let newer = latest
            .get(&metadata.name)
            .map_or(true, |current| version_number(&metadata.version) > version_number(current));
        if newer {
            latest.insert(metadata.name, metadata.version);
        }

        Ok(())
    }

    /// Get a contract by qualified name
    pub fn get(&self, qualified_name: &str) -> Result<RecordContract, SchemaError> {
        let contracts = self.contracts.read().map_err(|_| poisoned())?;

        contracts
            .get(qualified_name)
            .map(|(contract, _)| contract.clone())
            .ok_or_else(|| SchemaError::NotFound(qualified_name.to_string()))
    }

    /// Get the latest version of a contract
    pub fn get_latest(&self, name: &str) -> Result<RecordContract, SchemaError> {
        let version = {
            let latest = self.latest.read().map_err(|_| poisoned())?;
            latest
                .get(name)
                .cloned()
                .ok_or_else(|| SchemaError::NotFound(format!("No versions of {}", name)))?
        };

        self.get(&format!("{}_{}", name, version))
    }

    /// Get all registered versions of a contract, oldest first
    pub fn get_versions(&self, name: &str) -> Result<Vec<String>, SchemaError> {
        let contracts = self.contracts.read().map_err(|_| poisoned())?;

        let mut versions: Vec<String> = contracts
            .values()
            .filter(|(_, metadata)| metadata.name == name)
            .map(|(_, metadata)| metadata.version.clone())
            .collect();
        versions.sort_by_key(|v| version_number(v));
        Ok(versions)
    }

    /// Get contract metadata
    pub fn get_metadata(&self, qualified_name: &str) -> Result<ContractMetadata, SchemaError> {
        let contracts = self.contracts.read().map_err(|_| poisoned())?;

        contracts
            .get(qualified_name)
            .map(|(_, metadata)| metadata.clone())
            .ok_or_else(|| SchemaError::NotFound(qualified_name.to_string()))
    }

    /// Mark a contract as deprecated
    pub fn deprecate(
        &self,
        qualified_name: &str,
        replacement: Option<String>,
    ) -> Result<(), SchemaError> {
        let mut contracts = self.contracts.write().map_err(|_| poisoned())?;

        let (_, metadata) = contracts
            .get_mut(qualified_name)
            .ok_or_else(|| SchemaError::NotFound(qualified_name.to_string()))?;

        metadata.deprecated = true;
        metadata.replacement = replacement;

        Ok(())
    }

    /// Load all default CabinSense contracts
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        self.register(schemas::biometric_record_v1()?)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> SchemaError {
    SchemaError::Registry("Lock poisoned".to_string())
}

// "v12" -> 12; anything unparsable sorts first
fn version_number(version: &str) -> u32 {
    version
        .trim_start_matches('v')
        .parse()
        .unwrap_or(0)
}

lazy_static::lazy_static! {
    /// Global registry with default contracts loaded
    pub static ref GLOBAL_REGISTRY: SchemaRegistry = {
        let registry = SchemaRegistry::new();
        // Default contracts are built from constants and cannot fail to register
        let _ = registry.load_defaults();
        registry
    };
}
