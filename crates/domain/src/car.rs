//! Car — a registered vehicle that service appointments are booked against.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::CarId;

/// A registered car. The id is supplied by whoever registers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub model: String,
    pub owner: String,
}

impl Car {
    /// Create a builder for constructing a [`Car`].
    #[must_use]
    pub fn builder() -> CarBuilder {
        CarBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyModel`] or [`ValidationError::EmptyOwner`]
    /// when the corresponding field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if self.owner.trim().is_empty() {
            return Err(ValidationError::EmptyOwner);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Car`].
#[derive(Debug, Default)]
pub struct CarBuilder {
    id: Option<CarId>,
    model: Option<String>,
    owner: Option<String>,
}

impl CarBuilder {
    #[must_use]
    pub fn id(mut self, id: CarId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Consume the builder, validate, and return a [`Car`].
    ///
    /// A missing id defaults to `0`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `model` or `owner` is missing or blank.
    pub fn build(self) -> Result<Car, ValidationError> {
        let car = Car {
            id: self.id.unwrap_or(CarId::new(0)),
            model: self.model.unwrap_or_default(),
            owner: self.owner.unwrap_or_default(),
        };
        car.validate()?;
        Ok(car)
    }
}
