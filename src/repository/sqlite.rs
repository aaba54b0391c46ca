//! SQLite-backed car store using sqlx.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Car, NewCar};
use crate::repository::CarStore;

const CREATE_TABLE_QUERY: &str = "CREATE TABLE IF NOT EXISTS cars (
    id TEXT PRIMARY KEY NOT NULL,
    brand TEXT NOT NULL,
    model TEXT NOT NULL,
    color TEXT NOT NULL,
    cost INTEGER NOT NULL CHECK (cost >= 0)
)";
const GET_ALL_CARS_QUERY: &str = "SELECT id, brand, model, color, cost FROM cars";
const GET_CAR_QUERY: &str = "SELECT id, brand, model, color, cost FROM cars WHERE id = ?";
const ADD_CAR_QUERY: &str = "INSERT INTO cars (id, brand, model, color, cost) VALUES (?, ?, ?, ?, ?) \
     RETURNING id, brand, model, color, cost";
const DELETE_CAR_QUERY: &str = "DELETE FROM cars WHERE id = ?";
const UPDATE_CAR_QUERY: &str = "UPDATE cars SET brand = ?, model = ?, color = ?, cost = ? WHERE id = ?";

/// Car store over a `cars` table.
#[derive(Debug, Clone)]
pub struct SqliteCarStore {
    pool: SqlitePool,
}

impl SqliteCarStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `cars` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE_QUERY).execute(&self.pool).await?;
        debug!("cars table ready");
        Ok(())
    }
}

fn row_to_car(row: &SqliteRow) -> Result<Car> {
    let id: String = row.try_get("id")?;
    let cost: i64 = row.try_get("cost")?;

    Ok(Car {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::Store(format!("malformed id {:?} in cars table: {}", id, e)))?,
        brand: row.try_get("brand")?,
        model: row.try_get("model")?,
        color: row.try_get("color")?,
        cost: u64::try_from(cost)
            .map_err(|_| AppError::Store(format!("negative cost {} in cars table", cost)))?,
    })
}

fn cost_to_db(cost: u64) -> Result<i64> {
    i64::try_from(cost).map_err(|_| AppError::Store(format!("cost {} is out of range", cost)))
}

#[async_trait]
impl CarStore for SqliteCarStore {
    async fn list_all(&self) -> Result<Vec<Car>> {
        let rows = sqlx::query(GET_ALL_CARS_QUERY)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_car).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Car> {
        let row = sqlx::query(GET_CAR_QUERY)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("car {}", id)))?;

        row_to_car(&row)
    }

    async fn add(&self, car: NewCar) -> Result<Car> {
        let id = Uuid::new_v4();
        let row = sqlx::query(ADD_CAR_QUERY)
            .bind(id.to_string())
            .bind(&car.brand)
            .bind(&car.model)
            .bind(&car.color)
            .bind(cost_to_db(car.cost)?)
            .fetch_one(&self.pool)
            .await?;

        row_to_car(&row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(DELETE_CAR_QUERY)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        debug!("deleted {} row(s) for car {}", result.rows_affected(), id);
        Ok(())
    }

    async fn update(&self, car: Car) -> Result<Car> {
        self.get_by_id(car.id).await?;

        sqlx::query(UPDATE_CAR_QUERY)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(&car.color)
            .bind(cost_to_db(car.cost)?)
            .bind(car.id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(car)
    }
}
