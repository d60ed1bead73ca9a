use std::path::{Path, PathBuf};

pub const IMPORT_FILE_NAME: &str = "content_product_abstract_list.csv";
pub const IMPORT_TYPE_CONTENT_PRODUCT_ABSTRACT_LIST: &str = "content-product-abstract-list";

/// Importer routing entry: where the staged file lives and which import
/// type label the orchestrator routes through this importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterConfiguration {
    pub file_path: PathBuf,
    pub import_type: String,
}

/// Module-level import configuration. The module root is injected rather
/// than derived from the crate's on-disk location.
#[derive(Debug, Clone)]
pub struct DataImportConfig {
    module_root: PathBuf,
}

impl DataImportConfig {
    pub fn new(module_root: impl Into<PathBuf>) -> Self {
        Self {
            module_root: module_root.into(),
        }
    }

    pub fn module_root(&self) -> &Path {
        &self.module_root
    }

    pub fn content_product_abstract_list_configuration(&self) -> ImporterConfiguration {
        ImporterConfiguration {
            file_path: self
                .module_root
                .join("data")
                .join("import")
                .join(IMPORT_FILE_NAME),
            import_type: IMPORT_TYPE_CONTENT_PRODUCT_ABSTRACT_LIST.to_string(),
        }
    }
}
