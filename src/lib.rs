//! # Order Service
//!
//! > **Order lifecycle and hypermedia links over actor-backed stores.**
//!
//! Orders move through a small state machine:
//!
//! ```text
//! IN_PROGRESS --complete--> COMPLETED
//! IN_PROGRESS --cancel----> CANCELLED
//! ```
//!
//! Every order the service returns carries `_links` for exactly the actions
//! its current status permits, so a client never has to know the table above.
//! Employees are plain CRUD records alongside the orders.
//!
//! ## Architecture Notes
//!
//! ### 1. One table, two consumers
//! [`OrderLifecycle`](lifecycle::OrderLifecycle) owns the transition table.
//! The order store validates transitions with it and the
//! [`LinkPolicy`](hypermedia::LinkPolicy) advertises links with it, so an
//! advertised link is always an accepted transition.
//!
//! ### 2. Concurrency Model
//! Each store is a [`ResourceActor`](framework::ResourceActor) in its own Tokio
//! task. Requests for a store are processed one at a time, which makes a
//! transition's read-check-write atomic: of two concurrent `cancel` requests on
//! the same order, exactly one succeeds.
//!
//! ### 3. Type-Safe Error Handling
//! Each store defines its own error enum
//! ([`OrderError`](order_actor::OrderError), [`EmployeeError`](employee_actor::EmployeeError)).
//! A rejected transition keeps its [`TransitionError`](lifecycle::TransitionError)
//! all the way to the HTTP layer, where it becomes `405 Method Not Allowed`.
//!
//! ### 4. Observability
//! `tracing` everywhere, with a `tower-http` trace layer on the router.
//! See [`runtime::tracing`].
//!
//! ## Module Tour
//!
//! - [`lifecycle`] - the state machine (pure)
//! - [`hypermedia`] - link policy and HAL-style response models (pure)
//! - [`model`] - `Order`, `Employee` and their ids
//! - [`framework`] - the generic store actor, its client, and a mock
//! - [`order_actor`], [`employee_actor`] - the two stores
//! - [`clients`] - domain clients over the stores
//! - [`runtime`] - wiring, seed data, tracing setup
//! - [`api`] - the axum router
//! - [`config`] - CLI / environment configuration
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080
//! curl -s localhost:8080/orders/2
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod employee_actor;
pub mod framework;
pub mod hypermedia;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod runtime;
