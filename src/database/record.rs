use serde::Deserialize;
use std::collections::HashMap;

/// Declared field bounds for incoming movie data
const TITLE_MIN: usize = 5;
const TITLE_MAX: usize = 150;
const OVERVIEW_MIN: usize = 15;
const OVERVIEW_MAX: usize = 100;
const RATING_MIN: f64 = 1.0;
const RATING_MAX: f64 = 10.0;
const CATEGORY_MIN: usize = 5;
const CATEGORY_MAX: usize = 20;

/// Incoming movie payload. The id is accepted for wire compatibility but
/// ignored; the store assigns ids on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDraft {
    #[serde(default)]
    pub id: Option<i32>,
    pub title: String,
    pub overview: String,
    pub year: i32,
    pub rating: f64,
    pub category: String,
}

/// A single structural constraint violation, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field '{field}' {message}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl MovieDraft {
    /// Validate against the declared field bounds. Validation is purely
    /// structural; id uniqueness is the store's concern. The year ceiling is
    /// the caller-supplied current year so the bound tracks wall-clock time
    /// instead of freezing at process start.
    pub fn validate(&self, current_year: i32) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        check_length(&mut violations, "title", &self.title, TITLE_MIN, TITLE_MAX);
        check_length(&mut violations, "overview", &self.overview, OVERVIEW_MIN, OVERVIEW_MAX);

        if self.year > current_year {
            violations.push(FieldViolation::new(
                "year",
                format!("must be less than or equal to {}", current_year),
            ));
        }

        if !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            violations.push(FieldViolation::new(
                "rating",
                format!("must be between {} and {}", RATING_MIN, RATING_MAX),
            ));
        }

        check_length(&mut violations, "category", &self.category, CATEGORY_MIN, CATEGORY_MAX);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn check_length(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min || len > max {
        violations.push(FieldViolation::new(
            field,
            format!("length must be between {} and {}", min, max),
        ));
    }
}

/// Collapse violations into a field -> message map for 422 response bodies
pub fn field_errors(violations: &[FieldViolation]) -> HashMap<String, String> {
    violations
        .iter()
        .map(|v| (v.field.to_string(), v.message.clone()))
        .collect()
}
