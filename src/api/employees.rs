//! `/employees` handlers.

use crate::api::extract::{ApiJson, ApiPath};
use crate::api::{ApiError, AppState};
use crate::framework::ResourceHandle;
use crate::hypermedia::{CollectionModel, EntityModel, EMPLOYEES};
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

fn to_model(state: &AppState, employee: Employee) -> EntityModel<Employee> {
    let links = state.links.employee_links(&employee);
    EntityModel::new(employee, links)
}

/// GET /employees
pub async fn all(
    State(state): State<AppState>,
) -> Result<Json<CollectionModel<Employee>>, ApiError> {
    let employees = state.employees.list().await?;
    let items = employees.into_iter().map(|e| to_model(&state, e)).collect();
    Ok(Json(CollectionModel::new(
        EMPLOYEES,
        items,
        vec![state.links.collection_link(EMPLOYEES)],
    )))
}

/// GET /employees/{id}
pub async fn one(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EmployeeId>,
) -> Result<Json<EntityModel<Employee>>, ApiError> {
    let employee = state.employees.find(id).await?;
    Ok(Json(to_model(&state, employee)))
}

/// POST /employees
pub async fn create(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<EmployeeCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = state.employees.create_employee(params).await?;
    let model = to_model(&state, employee);
    let location = model.self_href().unwrap_or_default();
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(model)))
}

/// PUT /employees/{id}
pub async fn replace(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EmployeeId>,
    ApiJson(update): ApiJson<EmployeeUpdate>,
) -> Result<Json<EntityModel<Employee>>, ApiError> {
    let employee = state.employees.replace_employee(id, update).await?;
    Ok(Json(to_model(&state, employee)))
}

/// DELETE /employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EmployeeId>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
