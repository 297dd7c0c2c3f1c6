//! Entity trait implementation for [`Employee`].

use crate::employee_actor::EmployeeError;
use crate::framework::Entity;
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeInput, EmployeeUpdate};
use async_trait::async_trait;

fn resolve(input: &EmployeeInput) -> Result<(String, String, String), EmployeeError> {
    let (first_name, last_name) = input
        .split_name()
        .ok_or_else(|| EmployeeError::Validation("name must not be blank".to_string()))?;
    Ok((first_name, last_name, input.role.trim().to_string()))
}

#[async_trait]
impl Entity for Employee {
    type Id = EmployeeId;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = EmployeeError;

    fn from_create_params(id: EmployeeId, params: EmployeeCreate) -> Result<Self, EmployeeError> {
        let (first_name, last_name, role) = resolve(&params)?;
        Ok(Employee::new(id, first_name, last_name, role))
    }

    /// Replaces name and role; the id is kept.
    async fn on_update(&mut self, update: EmployeeUpdate, _: &()) -> Result<(), EmployeeError> {
        let (first_name, last_name, role) = resolve(&update)?;
        self.first_name = first_name;
        self.last_name = last_name;
        self.role = role;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _: &()) -> Result<(), EmployeeError> {
        Ok(())
    }
}
