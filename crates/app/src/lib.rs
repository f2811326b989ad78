//! # drivehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound port):
//!   - `DriverRepository` — insert, find by id, list, update, delete, count
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `DriverService` — the seven resource actions, each returning an
//!     explicit outcome the caller has to branch on
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `drivehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
