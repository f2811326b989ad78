//! # drivehub-domain
//!
//! Pure domain model for the drivehub driver registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Driver** record and its **VIN** value object
//! - Define the **parameter allow-list** (`DriverParams`) that every
//!   mutating operation goes through
//! - Contain all invariant enforcement (required name, well-formed VIN)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod driver;
