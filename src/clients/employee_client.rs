use crate::employee_actor::EmployeeError;
use crate::framework::{ResourceClient, ResourceHandle, StoreError};
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the employee store.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_employee(&self, params: EmployeeCreate) -> Result<Employee, EmployeeError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.find(id).await
    }

    pub async fn find(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        self.get(id).await?.ok_or(EmployeeError::NotFound(id))
    }

    /// Replaces name and role of an existing employee.
    #[instrument(skip(self))]
    pub async fn replace_employee(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, EmployeeError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ResourceHandle<Employee> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: StoreError) -> EmployeeError {
        match e.entity_error::<EmployeeError>() {
            Ok(entity_error) => entity_error,
            Err(StoreError::NotFound(id)) => match id.parse() {
                Ok(id) => EmployeeError::NotFound(id),
                Err(_) => EmployeeError::Store(format!("Item not found: {}", id)),
            },
            Err(other) => EmployeeError::Store(other.to_string()),
        }
    }
}
