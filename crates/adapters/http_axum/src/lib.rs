//! # drivehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **driver resource** as server-side-rendered HTML
//!   (`/drivers`, `/drivers/new`, `/drivers/{id}`, `/drivers/{id}/edit`)
//!   that works with **zero JavaScript** — pure HTML forms and redirects
//! - Serve a **JSON API** for the same resource under `/api/drivers`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map service outcomes into HTTP responses (HTML, JSON, redirects, bare statuses)
//!
//! ## No-JS form approach
//! - Every page is rendered server-side as complete HTML.
//! - Forms POST back to the server and redirect on success (PRG pattern).
//! - Browsers can only send GET and POST from a form, so update and destroy
//!   forms carry a hidden `_method` field honoured by `POST /drivers/{id}`.
//!
//! ## Dependency rule
//! Depends on `drivehub-app` (for port traits and services) and `drivehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
