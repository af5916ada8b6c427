//! Storage port — repository traits for persistence.

use std::future::Future;

use carservice_domain::car::Car;
use carservice_domain::error::CarServiceError;
use carservice_domain::id::{CarId, ServiceId};
use carservice_domain::service_record::{NewServiceRecord, ServiceDetails, ServiceRecord};

/// Repository for registered [`Car`]s.
pub trait CarRepository {
    /// Insert a new car.
    ///
    /// Implementations report an already used id as
    /// [`IntegrityError::DuplicateCar`](carservice_domain::error::IntegrityError::DuplicateCar).
    fn create(&self, car: Car) -> impl Future<Output = Result<Car, CarServiceError>> + Send;

    /// Whether a car with `id` is registered.
    fn exists(&self, id: CarId) -> impl Future<Output = Result<bool, CarServiceError>> + Send;
}

/// Repository for [`ServiceRecord`]s and their joined [`ServiceDetails`] view.
pub trait ServiceRecordRepository {
    /// Insert a new appointment and return it with its store-assigned id.
    fn create(
        &self,
        record: NewServiceRecord,
    ) -> impl Future<Output = Result<ServiceRecord, CarServiceError>> + Send;

    /// Point lookup of one appointment joined with its car.
    fn get_details(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<ServiceDetails>, CarServiceError>> + Send;

    /// Every appointment joined with its car, ordered by ascending service id.
    fn list_details(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceDetails>, CarServiceError>> + Send;
}
