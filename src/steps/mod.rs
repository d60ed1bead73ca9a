pub mod add_locales;
pub mod prepare_localized_items;

pub use add_locales::AddLocalesStep;
pub use prepare_localized_items::PrepareLocalizedItemsStep;

use crate::data_set::DataSet;
use anyhow::Result;
use thiserror::Error;

/// Raised when a row's staged data fails domain validation. Carries the
/// fully interpolated message and aborts the batch at the offending row.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvalidDataError {
    message: String,
}

impl InvalidDataError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One step of the import pipeline. Steps enrich the data set in place and
/// run in the order they were registered.
pub trait ImportStep {
    fn execute(&self, data_set: &mut DataSet) -> Result<()>;
    fn description(&self) -> &str;
}
