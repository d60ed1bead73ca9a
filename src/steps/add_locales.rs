use crate::data_set::{DataSet, Locale};
use crate::steps::ImportStep;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML_STR: &str = include_str!("../locales.toml");

#[derive(Debug, Deserialize)]
struct LocaleConfig {
    #[serde(default)]
    locales: Vec<LocaleEntry>,
}

#[derive(Debug, Deserialize)]
struct LocaleEntry {
    name: String,
    id_locale: i64,
}

/// Adds the configured locale map to every staged row, in declared order.
pub struct AddLocalesStep {
    locales: Vec<Locale>,
}

impl AddLocalesStep {
    pub fn new(locales: Vec<Locale>) -> Self {
        Self { locales }
    }

    pub fn from_default_config() -> Result<Self> {
        Self::from_toml_str(DEFAULT_TOML_STR)
    }

    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        use std::fs;
        let contents = fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read locale configuration from {}",
                path.as_ref().display()
            )
        })?;
        Self::from_toml_str(&contents)
    }

    fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LocaleConfig =
            toml::from_str(toml_str).context("Failed to parse locale configuration")?;

        let locales = config
            .locales
            .into_iter()
            .map(|entry| Locale::new(entry.name, entry.id_locale))
            .collect();

        Ok(Self::new(locales))
    }
}

impl ImportStep for AddLocalesStep {
    fn execute(&self, data_set: &mut DataSet) -> Result<()> {
        data_set.set_locales(self.locales.clone());
        Ok(())
    }

    fn description(&self) -> &str {
        "Adds the configured locale map to the staged row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_locales() {
        let step = AddLocalesStep::from_default_config().unwrap();
        let mut data_set = DataSet::new("row-1", 1);
        step.execute(&mut data_set).unwrap();

        assert_eq!(data_set.locales()[0], Locale::new("en_US", 66));
        assert_eq!(data_set.locales()[1], Locale::new("de_DE", 46));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let toml_str = r#"
[[locales]]
name = "de_DE"
id_locale = 46

[[locales]]
name = "en_US"
id_locale = 66

[[locales]]
name = "fr_FR"
id_locale = 70
"#;
        let step = AddLocalesStep::from_toml_str(toml_str).unwrap();
        let mut data_set = DataSet::new("row-1", 1);
        step.execute(&mut data_set).unwrap();

        let names: Vec<&str> = data_set
            .locales()
            .iter()
            .map(|locale| locale.name.as_str())
            .collect();
        assert_eq!(names, vec!["de_DE", "en_US", "fr_FR"]);
    }

    #[test]
    fn empty_config_yields_no_locales() {
        let step = AddLocalesStep::from_toml_str("").unwrap();
        let mut data_set = DataSet::new("row-1", 1);
        step.execute(&mut data_set).unwrap();

        assert!(data_set.locales().is_empty());
    }

    #[test]
    fn replaces_locales_on_every_row() {
        let step = AddLocalesStep::new(vec![Locale::new("en_US", 66)]);
        let mut data_set = DataSet::new("row-1", 1);
        data_set.set_locales(vec![Locale::new("stale", 1), Locale::new("older", 2)]);
        step.execute(&mut data_set).unwrap();

        assert_eq!(data_set.locales().len(), 1);
    }
}
