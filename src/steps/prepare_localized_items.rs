use crate::data_set::{DataSet, LocalizedItem};
use crate::encoding::ParameterEncoder;
use crate::steps::{ImportStep, InvalidDataError};
use crate::validation::{ContentProductValidator, ProductAbstractList, ValidationResponse};
use anyhow::Result;
use std::collections::HashMap;

const ERROR_MESSAGE_SUFFIX: &str = "Check please row with key: {key}, column: {column}";
const ERROR_PARAMETER_COLUMN: &str = "column";
const ERROR_PARAMETER_KEY: &str = "key";

/// User-facing column prefix used in error messages. The staged sheets
/// declare the per-locale lists under SKU columns.
const COLUMN_SKUS_PREFIX: &str = "skus.";

/// Literal `{token}` substitution; every occurrence of each token is
/// replaced, nothing else is interpreted.
fn interpolate(template: &str, parameters: &HashMap<String, String>) -> String {
    let mut message = template.to_string();
    for (name, value) in parameters {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}

/// Validates the per-locale product abstract lists of one row and prepares
/// the localized content items. Locales without identifier data are skipped
/// silently; the first validation failure aborts the row.
pub struct PrepareLocalizedItemsStep<V, E> {
    validator: V,
    encoder: E,
}

impl<V, E> PrepareLocalizedItemsStep<V, E> {
    pub fn new(validator: V, encoder: E) -> Self {
        Self { validator, encoder }
    }

    fn invalid_data_error(
        &self,
        data_set: &DataSet,
        locale_name: &str,
        response: &ValidationResponse,
    ) -> InvalidDataError {
        let message = response.first_message().cloned().unwrap_or_default();

        let mut parameters = message.parameters;
        parameters.insert(
            ERROR_PARAMETER_COLUMN.to_string(),
            format!("{}{}", COLUMN_SKUS_PREFIX, locale_name),
        );
        parameters.insert(ERROR_PARAMETER_KEY.to_string(), data_set.row_key.clone());

        let template = format!("{} {}", message.value, ERROR_MESSAGE_SUFFIX);
        InvalidDataError::new(interpolate(&template, &parameters))
    }
}

impl<V, E> ImportStep for PrepareLocalizedItemsStep<V, E>
where
    V: ContentProductValidator,
    E: ParameterEncoder,
{
    fn execute(&self, data_set: &mut DataSet) -> Result<()> {
        let mut localized_items = Vec::new();

        for locale in data_set.locales() {
            let ids = match data_set.abstract_ids(&locale.name) {
                Some(ids) if !ids.is_empty() => ids,
                _ => continue,
            };

            let list = ProductAbstractList::new(ids.to_vec());
            let response = self.validator.validate(&list);

            if !response.is_success {
                return Err(self
                    .invalid_data_error(data_set, &locale.name, &response)
                    .into());
            }

            localized_items.push(LocalizedItem {
                fk_locale: locale.id_locale,
                fk_content: data_set.id_content,
                parameters: self.encoder.encode(&list)?,
            });
        }

        data_set.set_localized_items(localized_items);
        Ok(())
    }

    fn description(&self) -> &str {
        "Validates per-locale product abstract lists and prepares localized content items"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_replaces_every_occurrence() {
        let parameters = HashMap::from([("id".to_string(), "42".to_string())]);
        assert_eq!(
            interpolate("{id} and again {id}", &parameters),
            "42 and again 42"
        );
    }

    #[test]
    fn interpolate_leaves_unknown_tokens() {
        let parameters = HashMap::from([("id".to_string(), "42".to_string())]);
        assert_eq!(interpolate("{id} {other}", &parameters), "42 {other}");
    }
}
