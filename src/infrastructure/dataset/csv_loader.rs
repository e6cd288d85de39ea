//! CSV dataset loading

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use ndarray::Array2;
use tracing::debug;

use crate::domain::dataset::{Dataset, DatasetLoader, LABEL_COLUMN};
use crate::domain::DomainError;

/// Reads a labeled dataset from a CSV file.
///
/// The header row is required. The `label` column may appear at any position;
/// every other column is parsed as an `f32` feature.
#[derive(Debug, Default)]
pub struct CsvDatasetLoader;

impl CsvDatasetLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn load(&self, path: &Path) -> Result<Dataset, DomainError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                DomainError::not_found(format!("Dataset file '{}' not found", path.display()))
            }
            _ => DomainError::dataset(format!("failed to open '{}': {}", path.display(), e)),
        })?;

        let mut reader = csv::Reader::from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| DomainError::dataset(format!("invalid CSV header: {}", e)))?
            .clone();

        let label_idx = headers
            .iter()
            .position(|h| h == LABEL_COLUMN)
            .ok_or_else(|| {
                DomainError::dataset(format!(
                    "missing '{}' column in '{}'",
                    LABEL_COLUMN,
                    path.display()
                ))
            })?;

        let feature_names: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != label_idx)
            .map(|(_, name)| name.to_string())
            .collect();

        let mut flat = Vec::new();
        let mut labels = Vec::new();

        for (row, record) in reader.records().enumerate() {
            // The csv reader rejects ragged rows unless flexible mode is on
            let record = record
                .map_err(|e| DomainError::dataset(format!("invalid CSV row {}: {}", row + 1, e)))?;

            for (idx, field) in record.iter().enumerate() {
                let value: f32 = field.trim().parse().map_err(|_| {
                    DomainError::dataset(format!(
                        "non-numeric value '{}' in column '{}' at row {}",
                        field,
                        &headers[idx],
                        row + 1
                    ))
                })?;

                if idx == label_idx {
                    labels.push(value);
                } else {
                    flat.push(value);
                }
            }
        }

        debug!(
            rows = labels.len(),
            features = feature_names.len(),
            path = %path.display(),
            "Dataset loaded"
        );

        let features = Array2::from_shape_vec((labels.len(), feature_names.len()), flat)
            .map_err(|e| DomainError::dataset(format!("inconsistent row shape: {}", e)))?;

        Dataset::new(feature_names, features, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("eval-csv-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_csv() {
        let path = write_temp_csv("valid.csv", "x1,x2,label\n1.0,2.0,0\n3.0,4.0,1\n");

        let dataset = CsvDatasetLoader::new().load(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.feature_names(), &["x1", "x2"]);
        assert_eq!(dataset.labels(), &[0.0, 1.0]);
        assert_eq!(dataset.features()[[1, 0]], 3.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_label_column_in_any_position() {
        let path = write_temp_csv("label-first.csv", "label,x1\n1,5.0\n0,6.0\n");

        let dataset = CsvDatasetLoader::new().load(&path).unwrap();
        assert_eq!(dataset.labels(), &[1.0, 0.0]);
        assert_eq!(dataset.features()[[0, 0]], 5.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_label_column() {
        let path = write_temp_csv("no-label.csv", "x1,x2\n1.0,2.0\n");

        let result = CsvDatasetLoader::new().load(&path);
        assert!(matches!(result, Err(DomainError::Dataset { .. })));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_non_numeric_value() {
        let path = write_temp_csv("bad-value.csv", "x1,label\noops,1\n");

        let result = CsvDatasetLoader::new().load(&path);
        match result {
            Err(DomainError::Dataset { message }) => {
                assert!(message.contains("non-numeric value 'oops'"));
            }
            other => panic!("expected dataset error, got {:?}", other),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_ragged_row() {
        let path = write_temp_csv("ragged.csv", "x1,x2,label\n1.0,2.0,0\n3.0,1\n");

        let result = CsvDatasetLoader::new().load(&path);
        assert!(matches!(result, Err(DomainError::Dataset { .. })));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let result = CsvDatasetLoader::new().load(Path::new("/nonexistent/data.csv"));
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_empty_csv_loads_as_empty_dataset() {
        let path = write_temp_csv("empty.csv", "x1,label\n");

        let dataset = CsvDatasetLoader::new().load(&path).unwrap();
        assert!(dataset.is_empty());

        std::fs::remove_file(&path).ok();
    }
}
