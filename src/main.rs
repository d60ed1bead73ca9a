use anyhow::Result;
use clap::Parser;
use content_import::{
    AcceptAllValidator, AddLocalesStep, Cli, ContentProductImporter, ContentProductValidator,
    DataImportConfig, ImportStats, JsonParameterEncoder, PrepareLocalizedItemsStep,
    ProductAbstractExistenceValidator,
};
use env_logger::Env;
use log::warn;
use std::path::{Path, PathBuf};

fn generate_output_filename(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let file_name = format!("{}-localized.csv", stem);

    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = DataImportConfig::new(&cli.module_root);
    let importer_configuration = config.content_product_abstract_list_configuration();

    let input_path = cli
        .input
        .clone()
        .unwrap_or_else(|| importer_configuration.file_path.clone());
    if !input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", input_path.display());
    }
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| generate_output_filename(&input_path));

    println!("Import type: {}", importer_configuration.import_type);
    println!("Processing file: {}", input_path.display());

    let add_locales = match &cli.locales {
        Some(path) => AddLocalesStep::from_toml_path(path)?,
        None => AddLocalesStep::from_default_config()?,
    };

    let stats = match &cli.products {
        Some(path) => {
            let validator = ProductAbstractExistenceValidator::from_csv_path(path)?;
            run_import(validator, add_locales, &input_path, &output_path)?
        }
        None => {
            warn!("No product abstract source configured; identifier lists are not checked for existence");
            run_import(AcceptAllValidator, add_locales, &input_path, &output_path)?
        }
    };

    println!("Processing complete!");
    println!("Processed {} rows", stats.total_rows);
    println!("Prepared {} localized items", stats.localized_items);
    println!("Output written to: {}", output_path.display());

    if cli.stats {
        print_detailed_stats(&stats);
    }

    Ok(())
}

fn run_import<V>(
    validator: V,
    add_locales: AddLocalesStep,
    input_path: &Path,
    output_path: &Path,
) -> Result<ImportStats>
where
    V: ContentProductValidator + 'static,
{
    let importer = ContentProductImporter::new()
        .add_step(add_locales)
        .add_step(PrepareLocalizedItemsStep::new(validator, JsonParameterEncoder));

    importer.process_file(input_path, output_path)
}

fn init_logging() {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .format_target(false)
        .try_init();
}

fn print_detailed_stats(stats: &ImportStats) {
    println!("\nDetailed Statistics:");
    println!("- Total rows processed: {}", stats.total_rows);
    println!("- Localized items prepared: {}", stats.localized_items);
    println!("- Rows without localized items: {}", stats.rows_without_items);
}
