//! `SQLite` implementation of [`CarRepository`].

use std::future::Future;

use sqlx::SqlitePool;

use carservice_app::ports::CarRepository;
use carservice_domain::car::Car;
use carservice_domain::error::CarServiceError;
use carservice_domain::id::CarId;

use crate::error::{StorageError, map_car_constraint};

const INSERT: &str = "INSERT INTO cars (id, model, owner) VALUES (?, ?, ?)";
const EXISTS_BY_ID: &str = "SELECT EXISTS (SELECT 1 FROM cars WHERE id = ?)";

/// `SQLite`-backed car repository.
#[derive(Clone)]
pub struct SqliteCarRepository {
    pool: SqlitePool,
}

impl SqliteCarRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CarRepository for SqliteCarRepository {
    fn create(&self, car: Car) -> impl Future<Output = Result<Car, CarServiceError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(car.id.get())
                .bind(&car.model)
                .bind(&car.owner)
                .execute(&pool)
                .await
                .map_err(|err| map_car_constraint(err, car.id))?;

            Ok(car)
        }
    }

    fn exists(&self, id: CarId) -> impl Future<Output = Result<bool, CarServiceError>> + Send {
        let pool = self.pool.clone();
        async move {
            let found: i64 = sqlx::query_scalar(EXISTS_BY_ID)
                .bind(id.get())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }
}
