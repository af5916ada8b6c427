//! # carservice-domain
//!
//! Pure domain model for the car service schedule.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Cars** (registered vehicles with a caller-supplied id)
//! - Define **Service records** (maintenance appointments booked for a car)
//! - Define **Service details** (a service record joined with its car)
//! - Contain all invariant enforcement (presence checks, past-date rule)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod car;
pub mod service_record;
