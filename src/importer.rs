use crate::data_set::DataSet;
use crate::steps::ImportStep;
use anyhow::{Context, Result};
use csv::{Reader, Writer};
use log::warn;
use std::fs::File;
use std::path::Path;

const COLUMN_KEY: &str = "content_product_abstract_list_key";
const COLUMN_ID_CONTENT: &str = "id_content";
const COLUMN_IDS_PREFIX: &str = "ids.";

const OUTPUT_HEADERS: [&str; 3] = ["fk_content", "fk_locale", "parameters"];

fn parse_id_list(cell: &str, column: &str, row_number: usize) -> Result<Vec<i64>> {
    cell.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().with_context(|| {
                format!(
                    "Invalid product abstract id '{}' in column '{}' at row {}",
                    token, column, row_number
                )
            })
        })
        .collect()
}

/// Runs the registered steps over every staged row of the import file and
/// writes the prepared localized items out. The first step failure aborts
/// the whole file at that row.
pub struct ContentProductImporter {
    steps: Vec<Box<dyn ImportStep>>,
}

impl Default for ContentProductImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProductImporter {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step<S>(mut self, step: S) -> Self
    where
        S: ImportStep + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Process the staged import file and write prepared items to
    /// `output_path`.
    pub fn process_file(&self, input_path: &Path, output_path: &Path) -> Result<ImportStats> {
        let file = File::open(input_path).context("Failed to open input file")?;
        let mut reader = Reader::from_reader(file);
        self.process_csv_reader(&mut reader, output_path)
    }

    pub(crate) fn process_csv_reader<R: std::io::Read>(
        &self,
        reader: &mut Reader<R>,
        output_path: &Path,
    ) -> Result<ImportStats> {
        let headers = reader.headers()?.clone();
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let key_idx = headers
            .iter()
            .position(|h| h == COLUMN_KEY)
            .with_context(|| format!("Column '{}' not found in import file", COLUMN_KEY))?;
        let id_content_idx = headers
            .iter()
            .position(|h| h == COLUMN_ID_CONTENT)
            .with_context(|| format!("Column '{}' not found in import file", COLUMN_ID_CONTENT))?;

        // Every `ids.<locale>` column carries one locale's identifier list.
        let ids_columns: Vec<(String, usize)> = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, header)| {
                header
                    .strip_prefix(COLUMN_IDS_PREFIX)
                    .map(|locale_name| (locale_name.to_string(), idx))
            })
            .collect();

        if ids_columns.is_empty() {
            warn!(
                "No '{}<locale>' columns found in import file; no localized items will be prepared",
                COLUMN_IDS_PREFIX
            );
        }

        let output_file = File::create(output_path).context("Failed to create output file")?;
        let mut writer = Writer::from_writer(output_file);
        writer.write_record(OUTPUT_HEADERS)?;

        let mut stats = ImportStats::new();

        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_number = row_idx + 1;

            let row_key = record.get(key_idx).unwrap_or("").trim().to_string();
            let id_content_cell = record.get(id_content_idx).unwrap_or("").trim();
            let id_content: i64 = id_content_cell.parse().with_context(|| {
                format!(
                    "Invalid {} '{}' at row {}",
                    COLUMN_ID_CONTENT, id_content_cell, row_number
                )
            })?;

            let mut data_set = DataSet::new(row_key, id_content);

            for (locale_name, idx) in &ids_columns {
                let cell = record.get(*idx).unwrap_or("").trim();
                if cell.is_empty() {
                    continue;
                }
                let column = format!("{}{}", COLUMN_IDS_PREFIX, locale_name);
                data_set.set_abstract_ids(
                    locale_name.clone(),
                    parse_id_list(cell, &column, row_number)?,
                );
            }

            for step in &self.steps {
                step.execute(&mut data_set)?;
            }

            if data_set.localized_items().is_empty() {
                stats.rows_without_items += 1;
            }

            for item in data_set.localized_items() {
                writer.write_record([
                    item.fk_content.to_string().as_str(),
                    item.fk_locale.to_string().as_str(),
                    item.parameters.as_str(),
                ])?;
                stats.localized_items += 1;
            }

            stats.total_rows += 1;
        }

        writer.flush()?;
        Ok(stats)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub total_rows: usize,
    pub localized_items: usize,
    pub rows_without_items: usize,
}

impl ImportStats {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_id_lists() {
        let ids = parse_id_list("10, 11 ,12", "ids.en_US", 1).unwrap();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let result = parse_id_list("10,abc", "ids.en_US", 3);
        assert!(result.is_err());
    }

    #[test]
    fn trailing_separators_are_ignored() {
        let ids = parse_id_list("10,11,", "ids.en_US", 1).unwrap();
        assert_eq!(ids, vec![10, 11]);
    }
}
