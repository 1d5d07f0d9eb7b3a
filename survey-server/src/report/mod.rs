//! Area utilization reporter
//!
//! Resolves a survey's layout, walks the layout's areas and computes
//! occupied seats against seat capacity for each one.
//!
//! The reporter reads through a [`SurveyStore`]; the Postgres implementation
//! lives in [`crate::db::survey_queries`] and borrows a single connection for
//! the whole report.

use async_trait::async_trait;
use shared::models::{Area, AreaUsage, AreaUtilization, AreaUtilizationReport, SurveyRecord};
use thiserror::Error;

/// Read access to the survey tables
#[async_trait]
pub trait SurveyStore: Send {
    /// Survey record by id, `None` when no row matches
    async fn find_survey(&mut self, survey_id: i64) -> Result<Option<SurveyRecord>, sqlx::Error>;

    /// Areas bound to a layout, ordered by area id
    async fn areas_in_layout(&mut self, layout_id: i64) -> Result<Vec<Area>, sqlx::Error>;

    /// Occupied seats on furniture recorded for `survey_id` in `area_id`
    async fn occupied_seats(&mut self, survey_id: i64, area_id: i64) -> Result<i64, sqlx::Error>;

    /// Sum of furniture-type seat counts for furniture of `layout_id` in `area_id`
    async fn seat_capacity(&mut self, layout_id: i64, area_id: i64) -> Result<i64, sqlx::Error>;
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("survey {0} not found")]
    SurveyNotFound(i64),

    #[error("survey {0} has no layout")]
    LayoutUnresolved(i64),

    #[error("datastore error: {0}")]
    Store(#[from] sqlx::Error),
}

pub struct AreaUtilizationReporter<S> {
    store: S,
}

impl<S: SurveyStore> AreaUtilizationReporter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Build the report for one survey.
    ///
    /// Fails before touching any area when the survey or its layout cannot
    /// be resolved.
    #[tracing::instrument(skip(self))]
    pub async fn report(&mut self, survey_id: i64) -> Result<AreaUtilizationReport, ReportError> {
        let record = self
            .store
            .find_survey(survey_id)
            .await?
            .ok_or(ReportError::SurveyNotFound(survey_id))?;
        let layout_id = record
            .layout_id
            .ok_or(ReportError::LayoutUnresolved(survey_id))?;

        let areas = self.store.areas_in_layout(layout_id).await?;
        if areas.is_empty() {
            tracing::warn!(layout_id, "Layout has no areas");
        }

        let mut rows = Vec::with_capacity(areas.len());
        for area in areas {
            let occupied = self.store.occupied_seats(survey_id, area.area_id).await?;
            let total = self.store.seat_capacity(layout_id, area.area_id).await?;
            let usage = AreaUsage::from_counts(occupied, total);

            tracing::debug!(
                area_id = area.area_id,
                occupied,
                total,
                room = usage.is_room(),
                "Area usage computed"
            );

            rows.push(AreaUtilization {
                area_id: area.area_id,
                name: area.name,
                usage,
            });
        }

        Ok(AreaUtilizationReport {
            survey_id,
            layout_id,
            areas: rows,
        })
    }
}
