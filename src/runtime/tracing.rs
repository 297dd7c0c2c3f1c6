//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter.
//!
//! - `RUST_LOG` wins when set, otherwise the configured level applies.
//! - Module paths are hidden (`with_target(false)`); store logs carry an
//!   `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run                  # request and store summaries
//! RUST_LOG=debug cargo run                 # full payloads
//! RUST_LOG=order_service::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, cancelling an already cancelled order looks like:
//!
//! ```text
//! INFO  Store started entity_type="Order"
//! INFO  Created entity_type="Order" id=1 size=1
//! INFO  Action ok entity_type="Order" id=1
//! WARN  Action rejected entity_type="Order" id=1 error=cannot cancel order 1 in status CANCELLED
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
