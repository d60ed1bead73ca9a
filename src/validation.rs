use anyhow::{Context, Result};
use csv::Reader;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

const COLUMN_ID_PRODUCT_ABSTRACT: &str = "id_product_abstract";

/// Identifier payload validated for one locale of one row. Serialized
/// field-complete into the localized item parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductAbstractList {
    pub id_product_abstracts: Vec<i64>,
}

impl ProductAbstractList {
    pub fn new(id_product_abstracts: Vec<i64>) -> Self {
        Self {
            id_product_abstracts,
        }
    }
}

/// One failure message. `value` is a template with `{name}` placeholders;
/// `parameters` maps placeholder names to their substitution values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationMessage {
    pub value: String,
    pub parameters: HashMap<String, String>,
}

/// Messages grouped by the request parameter they refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMessages {
    pub parameter: String,
    pub messages: Vec<ValidationMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResponse {
    pub is_success: bool,
    pub parameter_messages: Vec<ParameterMessages>,
}

impl ValidationResponse {
    pub fn success() -> Self {
        Self {
            is_success: true,
            parameter_messages: Vec::new(),
        }
    }

    pub fn failure(parameter_messages: Vec<ParameterMessages>) -> Self {
        Self {
            is_success: false,
            parameter_messages,
        }
    }

    /// First message of the first parameter group, if any.
    pub fn first_message(&self) -> Option<&ValidationMessage> {
        self.parameter_messages
            .first()
            .and_then(|group| group.messages.first())
    }
}

/// Validation capability owned by the content-product domain. Called
/// synchronously, once per locale that carries identifier data.
pub trait ContentProductValidator {
    fn validate(&self, list: &ProductAbstractList) -> ValidationResponse;
}

/// Checks every referenced product abstract against a known identifier set.
pub struct ProductAbstractExistenceValidator {
    known_ids: HashSet<i64>,
}

impl ProductAbstractExistenceValidator {
    pub fn new(known_ids: HashSet<i64>) -> Self {
        Self { known_ids }
    }

    /// Loads the known identifier set from a CSV with an
    /// `id_product_abstract` column.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path).with_context(|| {
            format!(
                "Failed to open product abstract source {}",
                path.as_ref().display()
            )
        })?;
        let mut reader = Reader::from_reader(file);

        let headers = reader.headers()?.clone();
        let id_idx = headers
            .iter()
            .position(|h| h == COLUMN_ID_PRODUCT_ABSTRACT)
            .with_context(|| {
                format!(
                    "Column '{}' not found in product abstract source",
                    COLUMN_ID_PRODUCT_ABSTRACT
                )
            })?;

        let mut known_ids = HashSet::with_capacity(1024);
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let cell = record.get(id_idx).unwrap_or("").trim();
            if cell.is_empty() {
                continue;
            }
            let id: i64 = cell.parse().with_context(|| {
                format!(
                    "Invalid product abstract id '{}' at row {}",
                    cell,
                    row_idx + 1
                )
            })?;
            known_ids.insert(id);
        }

        Ok(Self::new(known_ids))
    }
}

impl ContentProductValidator for ProductAbstractExistenceValidator {
    fn validate(&self, list: &ProductAbstractList) -> ValidationResponse {
        let messages: Vec<ValidationMessage> = list
            .id_product_abstracts
            .iter()
            .filter(|id| !self.known_ids.contains(id))
            .map(|id| ValidationMessage {
                value: "Product abstract with id {id} does not exist.".to_string(),
                parameters: HashMap::from([("id".to_string(), id.to_string())]),
            })
            .collect();

        if messages.is_empty() {
            return ValidationResponse::success();
        }

        ValidationResponse::failure(vec![ParameterMessages {
            parameter: "id_product_abstracts".to_string(),
            messages,
        }])
    }
}

/// Accepts any identifier list. Stands in when no product source is
/// configured.
pub struct AcceptAllValidator;

impl ContentProductValidator for AcceptAllValidator {
    fn validate(&self, _list: &ProductAbstractList) -> ValidationResponse {
        ValidationResponse::success()
    }
}
