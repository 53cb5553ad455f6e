// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! SQLite storage for training plans. Each plan is one row; the workout
//! list and the weekday set are stored as JSON columns, dates as ISO-8601
//! text and timestamps as RFC 3339.

use crate::models::{PlannedWorkout, TrainingPlan, Weekday};
use crate::services::store::PlanStore;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite, SqlitePool};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Plan store backed by a SQLite pool
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection
    pub async fn new(database_url: &str) -> Result<Self> {
        // Create the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !database_url.contains('?') {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .with_context(|| format!("Failed to connect to {database_url}"))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS training_plans (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                goal TEXT NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                fitness_level TEXT NOT NULL,
                workout_days TEXT NOT NULL,
                preferred_time TEXT NOT NULL,
                workouts TEXT NOT NULL,
                current_5k_time REAL,
                target_race_distance REAL,
                target_race_time REAL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_training_plans_user ON training_plans(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    fn row_to_plan(row: &SqliteRow) -> Result<TrainingPlan> {
        let id_str: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id_str)?;

        let start_date: String = row.try_get("start_date")?;
        let end_date: String = row.try_get("end_date")?;

        let workout_days: String = row.try_get("workout_days")?;
        let workout_days: BTreeSet<Weekday> =
            serde_json::from_str(&workout_days).context("Corrupt workout_days column")?;

        let workouts: String = row.try_get("workouts")?;
        let workouts: Vec<PlannedWorkout> =
            serde_json::from_str(&workouts).context("Corrupt workouts column")?;

        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(TrainingPlan {
            id,
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            goal: enum_from_text(&row.try_get::<String, _>("goal")?)?,
            start_date: NaiveDate::parse_from_str(&start_date, "%Y-%m-%d")?,
            end_date: NaiveDate::parse_from_str(&end_date, "%Y-%m-%d")?,
            fitness_level: enum_from_text(&row.try_get::<String, _>("fitness_level")?)?,
            workout_days,
            preferred_time: enum_from_text(&row.try_get::<String, _>("preferred_time")?)?,
            workouts,
            current_5k_time: row.try_get("current_5k_time")?,
            target_race_distance: row.try_get("target_race_distance")?,
            target_race_time: row.try_get("target_race_time")?,
            created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&updated_at)?.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl PlanStore for Database {
    async fn save_plan(&self, plan: &TrainingPlan) -> Result<()> {
        let started = Instant::now();
        let result = sqlx::query(
            r#"
            INSERT INTO training_plans (
                id, user_id, name, goal, start_date, end_date, fitness_level, workout_days,
                preferred_time, workouts, current_5k_time, target_race_distance, target_race_time,
                created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                workouts = excluded.workouts,
                updated_at = excluded.updated_at
            WHERE training_plans.user_id = excluded.user_id
            "#,
        )
        .bind(plan.id.to_string())
        .bind(&plan.user_id)
        .bind(&plan.name)
        .bind(enum_to_text(&plan.goal)?)
        .bind(plan.start_date.format("%Y-%m-%d").to_string())
        .bind(plan.end_date.format("%Y-%m-%d").to_string())
        .bind(enum_to_text(&plan.fitness_level)?)
        .bind(serde_json::to_string(&plan.workout_days)?)
        .bind(enum_to_text(&plan.preferred_time)?)
        .bind(serde_json::to_string(&plan.workouts)?)
        .bind(plan.current_5k_time)
        .bind(plan.target_race_distance)
        .bind(plan.target_race_time)
        .bind(plan.created_at.to_rfc3339())
        .bind(plan.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            bail!("plan {} belongs to another user", plan.id);
        }

        debug!(
            db.operation = "insert",
            db.table = "training_plans",
            db.duration_ms = %started.elapsed().as_millis(),
            "Database operation"
        );
        Ok(())
    }

    async fn get_plan(&self, plan_id: Uuid, user_id: &str) -> Result<Option<TrainingPlan>> {
        let row = sqlx::query("SELECT * FROM training_plans WHERE id = ?1 AND user_id = ?2")
            .bind(plan_id.to_string())
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_plan(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_plans(&self, user_id: &str) -> Result<Vec<TrainingPlan>> {
        let rows = sqlx::query(
            "SELECT * FROM training_plans WHERE user_id = ?1 ORDER BY start_date, created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_plan).collect()
    }

    async fn replace_plan(&self, plan: &TrainingPlan) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE training_plans
            SET name = ?1, workouts = ?2, updated_at = ?3
            WHERE id = ?4 AND user_id = ?5
            "#,
        )
        .bind(&plan.name)
        .bind(serde_json::to_string(&plan.workouts)?)
        .bind(plan.updated_at.to_rfc3339())
        .bind(plan.id.to_string())
        .bind(&plan.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_plan(&self, plan_id: Uuid, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM training_plans WHERE id = ?1 AND user_id = ?2")
            .bind(plan_id.to_string())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Unit enums are stored as their serde string form
fn enum_to_text<T: Serialize>(value: &T) -> Result<String> {
    match serde_json::to_value(value)? {
        serde_json::Value::String(text) => Ok(text),
        other => Err(anyhow::anyhow!("Expected a string variant, got {other}")),
    }
}

fn enum_from_text<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(text.to_string()))
        .with_context(|| format!("Unknown stored value '{text}'"))
}
