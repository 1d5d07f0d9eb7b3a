//! Request types for the shared crate
//!
//! Raw query parameters are parsed into typed requests at the HTTP boundary,
//! before any datastore work starts.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Raw `?survey_id=` query parameters as they arrive on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaReportQuery {
    pub survey_id: Option<String>,
}

/// Validated area utilization report request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaReportRequest {
    pub survey_id: i64,
}

impl AreaReportRequest {
    /// Parse a survey id from its textual form.
    ///
    /// Surrounding whitespace is ignored; the id must be a positive integer.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::required("survey_id"));
        }
        let survey_id: i64 = trimmed.parse().map_err(|_| {
            AppError::validation("survey_id must be an integer")
                .with_detail("field", "survey_id")
                .with_detail("value", trimmed)
        })?;
        Self::new(survey_id)
    }

    /// Validate an already numeric survey id
    pub fn new(survey_id: i64) -> Result<Self, AppError> {
        if survey_id <= 0 {
            return Err(AppError::validation("survey_id must be positive")
                .with_detail("field", "survey_id")
                .with_detail("value", survey_id));
        }
        Ok(Self { survey_id })
    }
}

impl TryFrom<AreaReportQuery> for AreaReportRequest {
    type Error = AppError;

    fn try_from(query: AreaReportQuery) -> Result<Self, Self::Error> {
        match query.survey_id {
            Some(raw) => Self::parse(&raw),
            None => Err(AppError::required("survey_id")),
        }
    }
}
