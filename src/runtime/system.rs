use crate::clients::{EmployeeClient, OrderClient};
use crate::config::Config;
use crate::hypermedia::LinkPolicy;
use crate::lifecycle::OrderLifecycle;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the running stores and the stateless services built around them.
///
/// # Wiring
///
/// - The order store runs with the [`OrderLifecycle`] as its context, so
///   transitions are validated inside the store.
/// - The same lifecycle value is given to the [`LinkPolicy`], so advertised
///   links and accepted transitions come from one table.
/// - The employee store has no dependencies.
///
/// ```ignore
/// let system = ServiceSystem::new(&Config::default());
/// let order = system.order_client.create_order(OrderCreate::new("iPhone")).await?;
/// let links = system.link_policy.links_for(&order);
/// system.shutdown().await?;
/// ```
pub struct ServiceSystem {
    pub order_client: OrderClient,
    pub employee_client: EmployeeClient,
    pub lifecycle: OrderLifecycle,
    pub link_policy: LinkPolicy,
    handles: Vec<JoinHandle<()>>,
}

impl ServiceSystem {
    /// Spawns both stores. Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let lifecycle = OrderLifecycle::new();
        let link_policy = LinkPolicy::new(lifecycle);

        let (order_actor, order_store) = crate::order_actor::new(config.buffer_size);
        let (employee_actor, employee_store) = crate::employee_actor::new(config.buffer_size);

        let order_handle = tokio::spawn(order_actor.run(lifecycle));
        let employee_handle = tokio::spawn(employee_actor.run(()));

        Self {
            order_client: OrderClient::new(order_store),
            employee_client: EmployeeClient::new(employee_store),
            lifecycle,
            link_policy,
            handles: vec![order_handle, employee_handle],
        }
    }

    /// Drops the clients held here and waits for both stores to stop.
    ///
    /// Stores stop once *every* clone of their client is gone, so callers
    /// must drop any clones they handed out (e.g. the HTTP state) first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down stores...");
        drop(self.order_client);
        drop(self.employee_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
