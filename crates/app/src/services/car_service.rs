//! Car service — use-cases for the car registry.

use carservice_domain::car::Car;
use carservice_domain::error::CarServiceError;

use crate::ports::CarRepository;

/// Application service for registering cars.
pub struct CarService<R> {
    repo: R,
}

impl<R: CarRepository> CarService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new car after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CarServiceError::Validation`] if invariants fail,
    /// [`CarServiceError::Integrity`] when the id is already taken, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, car), fields(car_id = %car.id))]
    pub async fn add_car(&self, car: Car) -> Result<Car, CarServiceError> {
        car.validate()?;
        let car = self.repo.create(car).await?;
        tracing::info!("car registered");
        Ok(car)
    }
}
