use crate::validation::ProductAbstractList;
use anyhow::Result;

/// JSON encoding capability for the localized item parameters payload.
pub trait ParameterEncoder {
    fn encode(&self, list: &ProductAbstractList) -> Result<String>;
}

/// serde_json-backed encoder used by the importer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParameterEncoder;

impl ParameterEncoder for JsonParameterEncoder {
    fn encode(&self, list: &ProductAbstractList) -> Result<String> {
        Ok(serde_json::to_string(list)?)
    }
}
