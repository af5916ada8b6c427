//! # carservice-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CarRepository` — insert cars and point lookups by id
//!   - `ServiceRecordRepository` — insert appointments, joined reads
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CarService` — register a car
//!   - `ScheduleService` — schedule, list, and view appointments
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `carservice-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
