use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::PredictionRecord;

pub fn insert_prediction(
    conn: &Connection,
    record: &PredictionRecord,
) -> Result<(), DatabaseError> {
    let symptoms = serde_json::to_string(&record.symptoms)
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;
    conn.execute(
        "INSERT INTO predictions (id, age, gender, symptoms, disease, user_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            record.id.to_string(),
            record.age,
            record.gender,
            symptoms,
            record.disease,
            record.user_id,
            record.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// History for one user, in chronological order.
pub fn predictions_for_user(
    conn: &Connection,
    user_id: &str,
) -> Result<Vec<PredictionRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, age, gender, symptoms, disease, user_id, created_at
         FROM predictions WHERE user_id = ?1 ORDER BY created_at ASC",
    )?;

    let rows = stmt.query_map(params![user_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, f64>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, Option<String>>(5)?,
            row.get::<_, String>(6)?,
        ))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let (id, age, gender, symptoms, disease, user_id, created_at) = row?;
        records.push(PredictionRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            age,
            gender,
            symptoms: serde_json::from_str(&symptoms)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            disease,
            user_id,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?
                .with_timezone(&Utc),
        });
    }
    Ok(records)
}
