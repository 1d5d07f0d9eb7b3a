//! Database access layer

pub mod survey_queries;
