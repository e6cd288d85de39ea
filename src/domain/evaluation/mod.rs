//! Exact-match accuracy scoring

use crate::domain::DomainError;

/// Result of scoring a model against a labeled dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub correct: usize,
    pub total: usize,
}

impl EvaluationOutcome {
    /// Fraction of predictions exactly equal to their labels
    pub fn accuracy(&self) -> f64 {
        self.correct as f64 / self.total as f64
    }
}

/// Score predictions against ground-truth labels.
///
/// A prediction is counted correct iff it is exactly equal to its label.
/// Exact `f32` equality is the specified metric; it is meaningful for
/// integer-coded class labels and degenerate for continuous model outputs.
pub fn score(predictions: &[f32], labels: &[f32]) -> Result<EvaluationOutcome, DomainError> {
    if labels.is_empty() {
        return Err(DomainError::validation("dataset contains no rows"));
    }
    if predictions.len() != labels.len() {
        return Err(DomainError::prediction(format!(
            "model produced {} predictions for {} labels",
            predictions.len(),
            labels.len()
        )));
    }

    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(pred, truth)| pred == truth)
        .count();

    Ok(EvaluationOutcome {
        correct,
        total: labels.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_predictions_match() {
        let outcome = score(&[1.0, 0.0, 2.0], &[1.0, 0.0, 2.0]).unwrap();
        assert_eq!(outcome.correct, 3);
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.accuracy(), 1.0);
    }

    #[test]
    fn test_no_predictions_match() {
        let outcome = score(&[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(outcome.correct, 0);
        assert_eq!(outcome.accuracy(), 0.0);
    }

    #[test]
    fn test_partial_match() {
        let outcome = score(&[1.0, 0.0, 1.0, 1.0], &[1.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(outcome.correct, 2);
        assert_eq!(outcome.total, 4);
        assert_eq!(outcome.accuracy(), 0.5);
    }

    #[test]
    fn test_empty_labels_is_validation_error() {
        let result = score(&[], &[]);
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_length_mismatch_is_prediction_error() {
        let result = score(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(DomainError::Prediction { .. })));
    }

    #[test]
    fn test_float_predictions_rarely_match_integer_labels() {
        // Continuous outputs compared with exact equality score near zero
        let outcome = score(&[0.9999, 1.0001], &[1.0, 1.0]).unwrap();
        assert_eq!(outcome.correct, 0);
    }
}
