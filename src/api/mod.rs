//! HTTP surface.
//!
//! Every order and employee is rendered as a HAL-style [`EntityModel`] whose
//! `_links` come from the [`LinkPolicy`]; failures become an [`ApiError`].
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/orders` | 200 collection |
//! | GET | `/orders/{id}` | 200 |
//! | POST | `/orders` | 201 + `Location` |
//! | PUT | `/orders/{id}/complete` | 200 |
//! | DELETE | `/orders/{id}/cancel` | 200 |
//! | GET | `/employees` | 200 collection |
//! | GET | `/employees/{id}` | 200 |
//! | POST | `/employees` | 201 + `Location` |
//! | PUT | `/employees/{id}` | 200 |
//! | DELETE | `/employees/{id}` | 204 |
//!
//! [`EntityModel`]: crate::hypermedia::EntityModel

pub mod employees;
pub mod error;
pub mod extract;
pub mod orders;

pub use error::{ApiError, ErrorResponse};
pub use extract::{ApiJson, ApiPath};

use crate::clients::{EmployeeClient, OrderClient};
use crate::config::Config;
use crate::hypermedia::LinkPolicy;
use crate::runtime::ServiceSystem;
use axum::{
    routing::{delete, get, put},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared handler state. Cloning is cheap: clients are channel senders.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub employees: EmployeeClient,
    pub links: LinkPolicy,
}

impl AppState {
    pub fn from_system(system: &ServiceSystem) -> Self {
        Self {
            orders: system.order_client.clone(),
            employees: system.employee_client.clone(),
            links: system.link_policy,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(orders::all).post(orders::create))
        .route("/orders/{id}", get(orders::one))
        .route("/orders/{id}/complete", put(orders::complete))
        .route("/orders/{id}/cancel", delete(orders::cancel))
        .route("/employees", get(employees::all).post(employees::create))
        .route(
            "/employees/{id}",
            get(employees::one)
                .put(employees::replace)
                .delete(employees::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(config: &Config, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Order service listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
