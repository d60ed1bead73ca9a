use std::collections::HashMap;

/// One locale known to the import, paired with its storage identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub name: String,
    pub id_locale: i64,
}

impl Locale {
    pub fn new(name: impl Into<String>, id_locale: i64) -> Self {
        Self {
            name: name.into(),
            id_locale,
        }
    }
}

/// Localized record prepared for one locale of one row, destined for the
/// content-localization table. Not mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedItem {
    pub fk_locale: i64,
    pub fk_content: i64,
    pub parameters: String,
}

/// One staged import row, enriched in place as it passes through the
/// pipeline steps. Locales keep their declared order; per-locale identifier
/// lists are optional, and an absent or empty list means the locale is
/// skipped for this row.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub row_key: String,
    pub id_content: i64,
    locales: Vec<Locale>,
    abstract_ids: HashMap<String, Vec<i64>>,
    localized_items: Vec<LocalizedItem>,
}

impl DataSet {
    pub fn new(row_key: impl Into<String>, id_content: i64) -> Self {
        Self {
            row_key: row_key.into(),
            id_content,
            ..Self::default()
        }
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn set_locales(&mut self, locales: Vec<Locale>) {
        self.locales = locales;
    }

    pub fn abstract_ids(&self, locale_name: &str) -> Option<&[i64]> {
        self.abstract_ids.get(locale_name).map(|ids| ids.as_slice())
    }

    pub fn set_abstract_ids(&mut self, locale_name: impl Into<String>, ids: Vec<i64>) {
        self.abstract_ids.insert(locale_name.into(), ids);
    }

    pub fn localized_items(&self) -> &[LocalizedItem] {
        &self.localized_items
    }

    /// Replaces the prepared items for this row. The output is written
    /// whole per row, never appended across repeated calls.
    pub fn set_localized_items(&mut self, items: Vec<LocalizedItem>) {
        self.localized_items = items;
    }
}
