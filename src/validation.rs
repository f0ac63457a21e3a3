//! Structural input validation.
//!
//! Advisory integrity checks on a plan request, run before scheduling by
//! callers that want early diagnostics. Detects:
//! - Duplicate worker IDs
//! - Inverted hour budgets (max below min)
//! - An inverted planning window
//! - Duplicate enabled station rows
//!
//! The planner itself enforces only the fatal window check; everything
//! else here is a data-quality signal, since the engine tolerates odd
//! input by skipping it.

use std::collections::HashSet;

use crate::engine::PlanRequest;
use crate::models::normalize_token;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers share the same ID.
    DuplicateWorkerId,
    /// A worker's maximum hours are below their minimum.
    InvertedHourBudget,
    /// The planning window ends before it starts.
    InvertedWindow,
    /// Two enabled rows configure the same station.
    DuplicateStation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a plan request.
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` with every
/// detected issue otherwise.
pub fn validate_input(request: &PlanRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.window.end < request.window.start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedWindow,
            format!(
                "planning window ends {} before it starts {}",
                request.window.end, request.window.start
            ),
        ));
    }

    let mut worker_ids = HashSet::new();
    for worker in &request.workers {
        if !worker_ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWorkerId,
                format!("duplicate worker ID: {}", worker.id),
            ));
        }
        if worker.max_hours < worker.min_hours {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedHourBudget,
                format!(
                    "worker '{}' has max hours {} below min hours {}",
                    worker.id, worker.max_hours, worker.min_hours
                ),
            ));
        }
    }

    let mut stations = HashSet::new();
    for row in request.demand_config.iter().filter(|r| r.enabled) {
        if !stations.insert(normalize_token(&row.station)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStation,
                format!("duplicate enabled station row: {}", row.station),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
