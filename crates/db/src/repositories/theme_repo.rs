//! Repository for the `theme_periods` table.

use sqlx::PgPool;

use barplan_core::theme::PeriodKey;
use barplan_core::types::DbId;

use crate::models::theme::{CreateThemePeriod, ThemePeriod, UpdateThemePeriod};

/// Column list for `theme_periods` queries.
const THEME_COLUMNS: &str = "\
    id, name, description, month, year, primary_color, accent_color, \
    is_active, created_at, updated_at";

/// Provides data access for monthly theme periods.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Create a new theme period.
    pub async fn create(pool: &PgPool, dto: &CreateThemePeriod) -> Result<ThemePeriod, sqlx::Error> {
        let query = format!(
            "INSERT INTO theme_periods \
                 (name, description, month, year, primary_color, accent_color) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {THEME_COLUMNS}"
        );
        sqlx::query_as::<_, ThemePeriod>(&query)
            .bind(&dto.name)
            .bind(dto.description.as_deref().unwrap_or(""))
            .bind(dto.month)
            .bind(dto.year)
            .bind(dto.primary_color.as_deref().unwrap_or("#d946ef"))
            .bind(dto.accent_color.as_deref().unwrap_or("#22d3ee"))
            .fetch_one(pool)
            .await
    }

    /// Find a theme period by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ThemePeriod>, sqlx::Error> {
        let query = format!("SELECT {THEME_COLUMNS} FROM theme_periods WHERE id = $1");
        sqlx::query_as::<_, ThemePeriod>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the active theme for a (month, year) period.
    ///
    /// This is the explicit-parameter lookup behind "current theme": the
    /// caller decides which date's period to resolve.
    pub async fn find_for_period(
        pool: &PgPool,
        period: PeriodKey,
    ) -> Result<Option<ThemePeriod>, sqlx::Error> {
        let query = format!(
            "SELECT {THEME_COLUMNS} FROM theme_periods \
             WHERE month = $1 AND year = $2 AND is_active"
        );
        sqlx::query_as::<_, ThemePeriod>(&query)
            .bind(period.month)
            .bind(period.year)
            .fetch_optional(pool)
            .await
    }

    /// List all theme periods, newest period first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ThemePeriod>, sqlx::Error> {
        let query = format!("SELECT {THEME_COLUMNS} FROM theme_periods ORDER BY year DESC, month DESC");
        sqlx::query_as::<_, ThemePeriod>(&query).fetch_all(pool).await
    }

    /// Partially update a theme period.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateThemePeriod,
    ) -> Result<Option<ThemePeriod>, sqlx::Error> {
        let query = format!(
            "UPDATE theme_periods SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 primary_color = COALESCE($4, primary_color), \
                 accent_color = COALESCE($5, accent_color), \
                 is_active = COALESCE($6, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {THEME_COLUMNS}"
        );
        sqlx::query_as::<_, ThemePeriod>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.primary_color)
            .bind(&dto.accent_color)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a theme period by ID.
    ///
    /// Returns `true` if a row was deleted. Events referencing the theme
    /// keep existing with `theme_id` nulled by the FK.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM theme_periods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
