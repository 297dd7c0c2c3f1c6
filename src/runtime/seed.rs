use crate::model::{EmployeeInput, OrderCreate};
use crate::runtime::ServiceSystem;
use tracing::info;

/// Preloads the sample data: two employees, one completed and one open order.
///
/// The completed order is created in progress and then completed, since the
/// lifecycle is the only way a status changes.
pub async fn seed(system: &ServiceSystem) -> Result<(), String> {
    for (name, role) in [("Bilbo Baggins", "burglar"), ("Frodo Baggins", "thief")] {
        let employee = system
            .employee_client
            .create_employee(EmployeeInput::new(name, role))
            .await
            .map_err(|e| e.to_string())?;
        info!(id = %employee.id, name = %employee.name(), "Preloaded employee");
    }

    let macbook = system
        .order_client
        .create_order(OrderCreate::new("MacBook Pro"))
        .await
        .map_err(|e| e.to_string())?;
    let macbook = system
        .order_client
        .complete(macbook.id)
        .await
        .map_err(|e| e.to_string())?;
    let iphone = system
        .order_client
        .create_order(OrderCreate::new("iPhone"))
        .await
        .map_err(|e| e.to_string())?;

    for order in [macbook, iphone] {
        info!(id = %order.id, status = %order.status, "Preloaded order");
    }
    Ok(())
}
