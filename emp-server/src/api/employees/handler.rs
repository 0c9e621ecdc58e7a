//! Employee API Handlers
//!
//! Request/response translation for the employee collection: validate input,
//! perform at most one repository operation, map the outcome to a status
//! code and body.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeFilter, EmployeeUpdate};
use crate::db::repository::{EmployeeRepository, RepoError};
use crate::utils::validation::sanitize_text;
use crate::utils::{AppError, AppResult};

/// Optional equality filters shared by list and search
#[derive(Debug, Deserialize)]
pub struct EmployeeQuery {
    pub department: Option<String>,
    pub position: Option<String>,
}

impl EmployeeQuery {
    /// Trim and escape the filters; blank values count as absent.
    fn into_filter(self) -> EmployeeFilter {
        let clean = |value: Option<String>| {
            value
                .as_deref()
                .map(sanitize_text)
                .filter(|s| !s.is_empty())
        };
        EmployeeFilter {
            department: clean(self.department),
            position: clean(self.position),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EmployeeCreated {
    pub message: String,
    pub employee_id: String,
}

/// GET /api/v1/emp/employees - list, optionally filtered by department/position
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EmployeeQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let filter = query.into_filter();
    let filtered = !filter.is_empty();

    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find(&filter).await?;

    if employees.is_empty() {
        let message = if filtered {
            "No employees found matching the criteria."
        } else {
            "No employees found."
        };
        return Err(AppError::not_found(message));
    }

    Ok(Json(employees))
}

/// GET /api/v1/emp/employees/search - like list, but requires a filter
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<EmployeeQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let filter = query.into_filter();
    if filter.is_empty() {
        return Err(AppError::bad_request(
            "Please provide department or position to search.",
        ));
    }

    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find(&filter).await?;

    if employees.is_empty() {
        return Err(AppError::not_found(
            "No employees found matching the criteria.",
        ));
    }

    Ok(Json(employees))
}

/// POST /api/v1/emp/employees - create after validation and duplicate check
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EmployeeCreated>)> {
    let Json(payload) = payload?;
    let data = payload.validate().map_err(AppError::validation)?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(data).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::bad_request("Employee already exists."),
        e => AppError::from(e),
    })?;

    tracing::info!(employee_id = %employee.id_string(), actor = %user.username, "Employee created");

    Ok((
        StatusCode::CREATED,
        Json(EmployeeCreated {
            message: "Employee created successfully.".to_string(),
            employee_id: employee.id_string(),
        }),
    ))
}

/// GET /api/v1/emp/employees/{eid} - fetch one record
///
/// A malformed id is answered exactly like a missing one.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(eid): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&eid)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found."))?;
    Ok(Json(employee))
}

/// PUT /api/v1/emp/employees/{eid} - partial merge, stamps updated_at
pub async fn update(
    State(state): State<ServerState>,
    Path(eid): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let merge = payload.validate().map_err(AppError::validation)?;

    let repo = EmployeeRepository::new(state.get_db());
    repo.update(&eid, merge)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::bad_request("Employee already exists."),
            e => AppError::from(e),
        })?
        .ok_or_else(|| AppError::not_found("Employee not found."))?;

    Ok(Json(MessageResponse {
        message: "Employee details updated successfully.".to_string(),
    }))
}

/// DELETE /api/v1/emp/employees/{eid}
///
/// 204 with a confirmation body, kept for compatibility with the previous
/// API even though a body on 204 is non-standard.
pub async fn delete(
    State(state): State<ServerState>,
    Path(eid): Path<String>,
    user: CurrentUser,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let repo = EmployeeRepository::new(state.get_db());
    let deleted = repo.delete(&eid).await?;

    if !deleted {
        return Err(AppError::not_found("Employee not found."));
    }

    tracing::info!(employee_id = %eid, actor = %user.username, "Employee deleted");

    Ok((
        StatusCode::NO_CONTENT,
        Json(MessageResponse {
            message: "Employee deleted successfully.".to_string(),
        }),
    ))
}
