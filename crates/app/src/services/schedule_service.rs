//! Schedule service — use-cases for booking and reading service appointments.

use carservice_domain::error::{CarServiceError, NotFoundError};
use carservice_domain::id::ServiceId;
use carservice_domain::service_record::{NewServiceRecord, ServiceDetails, ServiceRecord};
use carservice_domain::time::{self, Timestamp};

use crate::ports::{CarRepository, ServiceRecordRepository};

/// Application service for scheduling and querying appointments.
///
/// Needs the car repository to check that the referenced car exists before
/// anything is written.
pub struct ScheduleService<CR, SR> {
    cars: CR,
    records: SR,
}

impl<CR, SR> ScheduleService<CR, SR>
where
    CR: CarRepository,
    SR: ServiceRecordRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(cars: CR, records: SR) -> Self {
        Self { cars, records }
    }

    /// Schedule an appointment, checking it against the current local time.
    ///
    /// # Errors
    ///
    /// See [`ScheduleService::schedule_service_at`].
    pub async fn schedule_service(
        &self,
        record: NewServiceRecord,
    ) -> Result<ServiceRecord, CarServiceError> {
        self.schedule_service_at(record, time::now()).await
    }

    /// Schedule an appointment, treating `now` as the current time.
    ///
    /// Checks run in order and the first failure aborts without writing:
    /// the service type must be present, the car must exist, and
    /// `scheduled_at` must not lie before `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CarServiceError::Validation`] for a blank service type or a
    /// past date, [`CarServiceError::NotFound`] when the car does not exist,
    /// or a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, record, now), fields(car_id = %record.car_id))]
    pub async fn schedule_service_at(
        &self,
        record: NewServiceRecord,
        now: Timestamp,
    ) -> Result<ServiceRecord, CarServiceError> {
        record.validate()?;

        if !self.cars.exists(record.car_id).await? {
            tracing::debug!("rejected: car not registered");
            return Err(NotFoundError {
                entity: "Car",
                id: record.car_id.to_string(),
            }
            .into());
        }

        if let Err(err) = time::ensure_not_in_past(record.scheduled_at, now) {
            tracing::debug!(scheduled_at = %record.scheduled_at, "rejected: date in the past");
            return Err(err.into());
        }

        let stored = self.records.create(record).await?;
        tracing::info!(service_id = %stored.id, "service scheduled");
        Ok(stored)
    }

    /// List every appointment joined with its car, by ascending id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<ServiceDetails>, CarServiceError> {
        self.records.list_details().await
    }

    /// Look up one appointment joined with its car.
    ///
    /// An unknown id is an expected outcome and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_service_details(
        &self,
        id: ServiceId,
    ) -> Result<Option<ServiceDetails>, CarServiceError> {
        self.records.get_details(id).await
    }
}
