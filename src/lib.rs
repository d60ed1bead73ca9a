pub mod cli;
pub mod config;
pub mod data_set;
pub mod encoding;
pub mod importer;
pub mod steps;
pub mod validation;

pub use cli::Cli;
pub use config::{
    DataImportConfig, ImporterConfiguration, IMPORT_FILE_NAME,
    IMPORT_TYPE_CONTENT_PRODUCT_ABSTRACT_LIST,
};
pub use data_set::{DataSet, Locale, LocalizedItem};
pub use encoding::{JsonParameterEncoder, ParameterEncoder};
pub use importer::{ContentProductImporter, ImportStats};
pub use steps::{AddLocalesStep, ImportStep, InvalidDataError, PrepareLocalizedItemsStep};
pub use validation::{
    AcceptAllValidator, ContentProductValidator, ParameterMessages,
    ProductAbstractExistenceValidator, ProductAbstractList, ValidationMessage, ValidationResponse,
};
