//! Repository for the `users` table.

use sqlx::PgPool;

use barplan_core::roles::ROLE_MEMBER;
use barplan_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list for `users` queries.
const USER_COLUMNS: &str =
    "id, username, display_name, role, phone, is_active, created_at, updated_at";

/// Provides data access for users (assignees and creators).
pub struct UserRepo;

impl UserRepo {
    /// Create a new user.
    pub async fn create(pool: &PgPool, dto: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, display_name, role, phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&dto.username)
            .bind(dto.display_name.as_deref().unwrap_or(""))
            .bind(dto.role.as_deref().unwrap_or(ROLE_MEMBER))
            .bind(dto.phone.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by username.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY username");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Partially update a user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                 display_name = COALESCE($2, display_name), \
                 role = COALESCE($3, role), \
                 phone = COALESCE($4, phone), \
                 is_active = COALESCE($5, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&dto.display_name)
            .bind(&dto.role)
            .bind(&dto.phone)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }
}
