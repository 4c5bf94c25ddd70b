use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::User;

pub fn insert_user(conn: &Connection, user: &User) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO users (id, name, email, password_hash, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user.id.to_string(),
            user.name,
            user.email,
            user.password_hash,
            user.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn find_user_by_email(
    conn: &Connection,
    email: &str,
) -> Result<Option<User>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, name, email, password_hash, created_at
             FROM users WHERE email = ?1",
            params![email],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .optional()?;

    row.map(|(id, name, email, password_hash, created_at)| {
        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            name,
            email,
            password_hash,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?
                .with_timezone(&Utc),
        })
    })
    .transpose()
}
