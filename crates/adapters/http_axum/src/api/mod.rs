//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod drivers;

use axum::Router;
use axum::routing::get;

use drivehub_app::ports::DriverRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR>() -> Router<AppState<DR>>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/drivers",
            get(drivers::list::<DR>).post(drivers::create::<DR>),
        )
        .route(
            "/drivers/{id}",
            get(drivers::get::<DR>)
                .patch(drivers::update::<DR>)
                .put(drivers::update::<DR>)
                .delete(drivers::delete::<DR>),
        )
}
