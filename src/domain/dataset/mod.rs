//! Labeled tabular dataset

use std::path::Path;

use ndarray::{Array2, ArrayView2};

use crate::domain::DomainError;

/// Name of the required ground-truth column
pub const LABEL_COLUMN: &str = "label";

/// A labeled tabular dataset.
///
/// The `label` column holds ground truth; every other column is a feature fed
/// to the model. Rows in the feature matrix and the label vector correspond
/// one-to-one.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    feature_names: Vec<String>,
    features: Array2<f32>,
    labels: Vec<f32>,
}

impl Dataset {
    /// Build a dataset from a feature matrix and a matching label vector
    pub fn new(
        feature_names: Vec<String>,
        features: Array2<f32>,
        labels: Vec<f32>,
    ) -> Result<Self, DomainError> {
        if features.nrows() != labels.len() {
            return Err(DomainError::dataset(format!(
                "feature matrix has {} rows but {} labels were provided",
                features.nrows(),
                labels.len()
            )));
        }
        if feature_names.len() != features.ncols() {
            return Err(DomainError::dataset(format!(
                "feature matrix has {} columns but {} feature names were provided",
                features.ncols(),
                feature_names.len()
            )));
        }

        Ok(Self {
            feature_names,
            features,
            labels,
        })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature column names, in dataset order (excluding the label column)
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Feature matrix view, one row per data row
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Ground-truth labels
    pub fn labels(&self) -> &[f32] {
        &self.labels
    }
}

/// Loads a dataset from a filesystem path
pub trait DatasetLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Dataset, DomainError>;
}
