//! Survey report queries
//!
//! All queries run on one borrowed connection; the caller owns the
//! connection and returns it to the pool when the report is done.

use async_trait::async_trait;
use shared::models::{Area, SurveyRecord};
use sqlx::PgConnection;

use crate::report::SurveyStore;

/// [`SurveyStore`] backed by a checked-out Postgres connection
pub struct PgSurveyStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgSurveyStore<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SurveyStore for PgSurveyStore<'_> {
    async fn find_survey(&mut self, survey_id: i64) -> Result<Option<SurveyRecord>, sqlx::Error> {
        sqlx::query_as("SELECT survey_id, layout_id FROM survey_record WHERE survey_id = $1")
            .bind(survey_id)
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn areas_in_layout(&mut self, layout_id: i64) -> Result<Vec<Area>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT area_id, name
            FROM area
            WHERE area_id IN (SELECT area_id FROM area_in_layout WHERE layout_id = $1)
            ORDER BY area_id
            "#,
        )
        .bind(layout_id)
        .fetch_all(&mut *self.conn)
        .await
    }

    async fn occupied_seats(&mut self, survey_id: i64, area_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM seat
            WHERE furniture_id IN (
                SELECT furniture_id FROM furniture WHERE survey_id = $1 AND in_area = $2
            )
            AND occupied = TRUE
            "#,
        )
        .bind(survey_id)
        .bind(area_id)
        .fetch_one(&mut *self.conn)
        .await
    }

    async fn seat_capacity(&mut self, layout_id: i64, area_id: i64) -> Result<i64, sqlx::Error> {
        // SUM over no rows is NULL
        sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(furniture_type.number_of_seats), 0)::BIGINT
            FROM furniture_type
            JOIN furniture ON furniture.furniture_type = furniture_type.furniture_type_id
            WHERE furniture.layout_id = $1 AND furniture.in_area = $2
            "#,
        )
        .bind(layout_id)
        .bind(area_id)
        .fetch_one(&mut *self.conn)
        .await
    }
}
