//! Storage-specific error type wrapping sqlx errors.

use carservice_domain::error::{CarServiceError, IntegrityError};
use carservice_domain::id::CarId;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CarServiceError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map a failed insert that references `car_id`, turning constraint
/// violations into [`IntegrityError`]s.
pub(crate) fn map_car_constraint(err: sqlx::Error, car_id: CarId) -> CarServiceError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return IntegrityError::DuplicateCar(car_id).into();
        }
        if db_err.is_foreign_key_violation() {
            return IntegrityError::UnknownCar(car_id).into();
        }
    }
    StorageError::from(err).into()
}
