//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CarServiceError`] via `#[from]`. Expected "nothing matched" outcomes of
//! point lookups are modelled as `Option`, not as errors.

use crate::id::CarId;
use crate::time::Timestamp;

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CarServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// Any other failure reported by the store.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant or input format check failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("car model must not be empty")]
    EmptyModel,

    #[error("car owner must not be empty")]
    EmptyOwner,

    #[error("service type must not be empty")]
    EmptyServiceType,

    #[error("cannot schedule a service in the past ({scheduled_at})")]
    ScheduledInPast { scheduled_at: Timestamp },

    #[error("invalid date and time {input:?}, expected YYYY-MM-DD HH:MM")]
    InvalidDateTime { input: String },
}

/// A record referenced by an operation does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The store rejected a write because of a constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("a car with id {0} already exists")]
    DuplicateCar(CarId),

    #[error("car {0} is not registered")]
    UnknownCar(CarId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Car",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Car with id 42 not found");
    }

    #[test]
    fn should_forward_display_of_wrapped_integrity_error() {
        let err: CarServiceError = IntegrityError::DuplicateCar(CarId::new(7)).into();
        assert_eq!(err.to_string(), "a car with id 7 already exists");
    }

    #[test]
    fn should_include_source_message_for_storage_errors() {
        let source = std::io::Error::other("disk on fire");
        let err = CarServiceError::Storage(Box::new(source));
        assert_eq!(err.to_string(), "storage error: disk on fire");
    }
}
