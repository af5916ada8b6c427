//! Service records — maintenance appointments booked for a [`Car`](crate::car::Car).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{CarId, ServiceId};
use crate::time::{self, Timestamp};

/// A stored appointment. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub car_id: CarId,
    pub service_type: String,
    pub scheduled_at: Timestamp,
}

/// An appointment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServiceRecord {
    pub car_id: CarId,
    pub service_type: String,
    pub scheduled_at: Timestamp,
}

impl NewServiceRecord {
    /// Build a pending record, checking presence of the service type.
    ///
    /// The past-date rule is not checked here: it depends on the clock at the
    /// moment of scheduling and belongs to the scheduling use-case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyServiceType`] when `service_type` is blank.
    pub fn new(
        car_id: CarId,
        service_type: impl Into<String>,
        scheduled_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            car_id,
            service_type: service_type.into(),
            scheduled_at,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyServiceType`] when `service_type` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.service_type.trim().is_empty() {
            return Err(ValidationError::EmptyServiceType);
        }
        Ok(())
    }

    /// Attach the id the store assigned.
    #[must_use]
    pub fn into_record(self, id: ServiceId) -> ServiceRecord {
        ServiceRecord {
            id,
            car_id: self.car_id,
            service_type: self.service_type,
            scheduled_at: self.scheduled_at,
        }
    }
}

/// A service record joined with the model and owner of its car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub id: ServiceId,
    pub car_model: String,
    pub car_owner: String,
    pub service_type: String,
    pub scheduled_at: Timestamp,
}

impl fmt::Display for ServiceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service ID: {}, Car: {} ({}), Service Type: {}, Date & Time: {}",
            self.id,
            self.car_model,
            self.car_owner,
            self.service_type,
            time::format_display(&self.scheduled_at),
        )
    }
}
