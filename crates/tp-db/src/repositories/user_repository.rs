//! User repository - owns the on-disk representation of an identity.
//!
//! Email uniqueness is enforced by the storage layer (unique index), so
//! concurrent creates for the same new address race and the loser surfaces
//! `DuplicateEmail`. Updates go through an optimistic version check so a
//! read-modify-write span (role accumulation) cannot silently lose writes.

use crate::{DbError, Result as DbErrorResult};

use tp_core::{BasicInfo, Identity, RegistrationStats, RoleSet};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a brand-new identity.
    ///
    /// A unique-constraint violation on the email column comes back as
    /// `DuplicateEmail` so callers can fall back to the update path.
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let roles = serde_json::to_string(&identity.roles).map_err(|e| DbError::Decode {
            message: format!("Failed to encode roles: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, roles, name, surname,
                    is_active, is_email_confirmed, version, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(roles)
        .bind(&identity.name)
        .bind(&identity.surname)
        .bind(identity.is_active)
        .bind(identity.is_email_confirmed)
        .bind(identity.version)
        .bind(identity.created_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DbError::DuplicateEmail {
                    email: identity.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up an identity by its exact email (no case normalization).
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, roles, name, surname,
                    is_active, is_email_confirmed, version, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| identity_from_row(&r)).transpose()
    }

    /// Persist a modified identity with an optimistic version check.
    ///
    /// The update only applies when the stored version still matches the one
    /// this identity was loaded at; otherwise `VersionConflict` tells the
    /// caller to re-read and retry. Bumps the in-memory version on success.
    pub async fn save(&self, identity: &mut Identity) -> DbErrorResult<()> {
        let roles = serde_json::to_string(&identity.roles).map_err(|e| DbError::Decode {
            message: format!("Failed to encode roles: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET email = ?, password_hash = ?, roles = ?, name = ?, surname = ?,
                    is_active = ?, is_email_confirmed = ?, version = version + 1
                WHERE id = ? AND version = ?
            "#,
        )
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(roles)
        .bind(&identity.name)
        .bind(&identity.surname)
        .bind(identity.is_active)
        .bind(identity.is_email_confirmed)
        .bind(identity.id.to_string())
        .bind(identity.version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::VersionConflict {
                id: identity.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        identity.version += 1;
        Ok(())
    }

    /// Fetch the lightweight projection for an identity.
    ///
    /// The id is format-validated before touching the database; a
    /// syntactically invalid identifier is treated as absent.
    pub async fn get_basic_info(&self, id: &str) -> DbErrorResult<Option<BasicInfo>> {
        let Ok(user_id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query(
            r#"
                SELECT id, name, surname, roles, is_email_confirmed
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<BasicInfo> {
            Ok(BasicInfo {
                id: parse_uuid(&r, "id")?,
                name: r.try_get("name")?,
                surname: r.try_get("surname")?,
                roles: parse_roles(&r)?,
                is_email_confirmed: r.try_get("is_email_confirmed")?,
            })
        })
        .transpose()
    }

    /// Tally registrations created inside the window (bounds inclusive).
    ///
    /// Roles are stored as a JSON array of tags, so the per-role counts
    /// match on the quoted tag inside that text.
    pub async fn registration_stats(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DbErrorResult<RegistrationStats> {
        let row = sqlx::query(
            r#"
                SELECT
                    COALESCE(SUM(CASE WHEN instr(roles, '"student"') > 0 THEN 1 ELSE 0 END), 0)
                        AS new_students,
                    COALESCE(SUM(CASE WHEN instr(roles, '"teacher"') > 0 THEN 1 ELSE 0 END), 0)
                        AS new_teachers,
                    COALESCE(SUM(CASE WHEN is_email_confirmed = 1 THEN 1 ELSE 0 END), 0)
                        AS confirmed_emails
                FROM users
                WHERE created_at BETWEEN ? AND ?
            "#,
        )
        .bind(start.timestamp())
        .bind(end.timestamp())
        .fetch_one(&self.pool)
        .await?;

        Ok(RegistrationStats {
            new_students: row.try_get("new_students")?,
            new_teachers: row.try_get("new_teachers")?,
            confirmed_emails: row.try_get("confirmed_emails")?,
        })
    }
}

fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Identity {
        id: parse_uuid(row, "id")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        roles: parse_roles(row)?,
        name: row.try_get("name")?,
        surname: row.try_get("surname")?,
        is_active: row.try_get("is_active")?,
        is_email_confirmed: row.try_get("is_email_confirmed")?,
        version: row.try_get("version")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}

#[track_caller]
fn parse_uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value).map_err(|e| DbError::Decode {
        message: format!("Invalid UUID in users.{}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_roles(row: &SqliteRow) -> DbErrorResult<RoleSet> {
    let value: String = row.try_get("roles")?;
    serde_json::from_str(&value).map_err(|e| DbError::Decode {
        message: format!("Invalid role set in users.roles: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
